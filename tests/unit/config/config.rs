use super::*;

#[test]
fn minimal_job_gets_defaults() {
    let cfg = JobConfig::from_json_str(r#"{ "source": { "svg_path_d": "M0 0 L1 0 L1 1 Z" } }"#)
        .unwrap();
    assert_eq!(cfg.samples, 512);
    assert_eq!(cfg.vectors, 101);
    assert_eq!(cfg.selection, SelectionPolicy::Band);
    assert!(!cfg.recenter);
    assert!(!cfg.center);
    assert_eq!(cfg.playback, Playback::default());
}

#[test]
fn full_job_parses() {
    let cfg = JobConfig::from_json_str(
        r#"{
  "source": { "points": [[1, 0], [0, 1], [-1, 0], [0, -1]] },
  "samples": 8,
  "vectors": 3,
  "selection": "largest",
  "recenter": true,
  "playback": { "fps": { "num": 24, "den": 1 }, "duration_frames": 48, "time_scale": 3.0 }
}"#,
    )
    .unwrap();
    assert_eq!(cfg.selection, SelectionPolicy::Largest);
    assert_eq!(cfg.playback.duration_frames, 48);
    assert_eq!(cfg.playback.fps.num, 24);

    let s = cfg.load_sample(Path::new(".")).unwrap();
    assert_eq!(s.len(), 4);
    let dc = Complex64::new(0.5, 0.5);
    assert_eq!(cfg.outline_origin(dc), dc);
}

#[test]
fn path_data_source_uses_sample_count() {
    let cfg = JobConfig::from_json_str(
        r#"{ "source": { "svg_path_d": "M0 0 L4 0 L4 4 L0 4 Z" }, "samples": 16 }"#,
    )
    .unwrap();
    let s = cfg.load_sample(Path::new(".")).unwrap();
    assert_eq!(s.len(), 16);
    assert_eq!(cfg.outline_origin(Complex64::new(1.0, 1.0)), Complex64::new(0.0, 0.0));
}

#[test]
fn center_flag_moves_outline_to_origin() {
    let job = |center: bool| {
        JobConfig::from_json_str(&format!(
            r#"{{ "source": {{ "svg_path_d": "M100 100 L140 100 L140 140 L100 140 Z" }}, "samples": 64, "center": {center} }}"#
        ))
        .unwrap()
    };

    let raw = job(false).load_sample(Path::new(".")).unwrap();
    let raw_dc = crate::fourier::decompose::FourierSeries::decompose(&raw).dc();
    assert!((raw_dc - Complex64::new(120.0, 120.0)).norm() < 1e-6);

    let centered = job(true).load_sample(Path::new(".")).unwrap();
    let dc = crate::fourier::decompose::FourierSeries::decompose(&centered).dc();
    assert!(dc.norm() < 1e-6, "dc = {dc}");
}

#[test]
fn invalid_jobs_are_rejected() {
    let bad_json = JobConfig::from_json_str("{").unwrap_err();
    assert!(matches!(bad_json, EpicycleError::Serde(_)));

    let no_points = JobConfig::from_json_str(r#"{ "source": { "points": [] } }"#).unwrap_err();
    assert!(matches!(no_points, EpicycleError::Validation(_)));

    let zero_samples =
        JobConfig::from_json_str(r#"{ "source": { "svg_file": "a.svg" }, "samples": 0 }"#);
    assert!(zero_samples.is_err());

    let bad_playback = JobConfig::from_json_str(
        r#"{ "source": { "svg_file": "a.svg" }, "playback": { "duration_frames": 0 } }"#,
    );
    assert!(bad_playback.is_err());
}

#[test]
fn missing_svg_file_is_an_io_error() {
    let cfg = JobConfig::from_json_str(r#"{ "source": { "svg_file": "does-not-exist.svg" } }"#)
        .unwrap();
    let err = cfg.load_sample(Path::new("/nonexistent-dir")).unwrap_err();
    assert!(matches!(err, EpicycleError::Other(_)));
    assert!(err.to_string().contains("does-not-exist.svg"));
}
