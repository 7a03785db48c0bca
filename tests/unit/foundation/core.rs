use super::*;

#[test]
fn frame_range_contains_boundaries() {
    let r = FrameRange::new(FrameIndex(2), FrameIndex(5)).unwrap();
    assert!(!r.contains(FrameIndex(1)));
    assert!(r.contains(FrameIndex(2)));
    assert!(r.contains(FrameIndex(4)));
    assert!(!r.contains(FrameIndex(5)));
    assert_eq!(r.iter().count() as u64, r.len_frames());
}

#[test]
fn frame_range_rejects_inverted_bounds() {
    assert!(FrameRange::new(FrameIndex(3), FrameIndex(1)).is_err());
}

#[test]
fn fps_frames_to_secs_uses_rational_rate() {
    let fps = Fps::new(30000, 1001).unwrap();
    assert!((fps.frames_to_secs(30000) - 1001.0).abs() < 1e-9);
    assert!((Fps::default().frame_duration_secs() - 1.0 / 30.0).abs() < 1e-15);
    assert!(Fps::new(0, 1).is_err());
    assert!(Fps::new(30, 0).is_err());
}

#[test]
fn point_complex_conversion_keeps_axes() {
    let p = Point::new(1.5, -2.0);
    let c = to_complex(p);
    assert_eq!(c, Complex64::new(1.5, -2.0));
    assert_eq!(to_point(c), p);
}
