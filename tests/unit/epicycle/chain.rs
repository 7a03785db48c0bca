use super::*;
use crate::{
    fourier::decompose::FourierSeries,
    fourier::select::{SelectionPolicy, select_vectors},
    sample::path_sample::PathSample,
};

fn sample(n: usize) -> PathSample {
    let pts: Vec<Complex64> = (0..n)
        .map(|i| {
            let a = TAU * i as f64 / n as f64;
            Complex64::new(3.0 + a.cos() * 2.0 + (2.0 * a).sin() * 0.3, -1.0 + a.sin())
        })
        .collect();
    PathSample::from_complex(pts).unwrap()
}

#[test]
fn joints_accumulate_vectors_in_order() {
    let v = vec![
        RotatingVector::new(Complex64::new(1.0, 0.0), 1),
        RotatingVector::new(Complex64::new(0.0, 1.0), -1),
    ];
    let joints = chain_joints(&v, 0.0, Complex64::new(5.0, 5.0));
    assert_eq!(
        joints,
        vec![
            Point::new(5.0, 5.0),
            Point::new(6.0, 5.0),
            Point::new(6.0, 6.0)
        ]
    );
    let tip = pen_tip(&v, 0.0, Complex64::new(5.0, 5.0));
    assert_eq!(to_point(tip), joints[2]);
}

#[test]
fn full_band_with_dc_origin_hits_every_sample() {
    let n = 24;
    let s = sample(n);
    let f = FourierSeries::decompose(&s);
    let v = select_vectors(&f, n, SelectionPolicy::Band);
    assert_eq!(v.len(), n - 1);
    for (t, expected) in s.as_slice().iter().enumerate() {
        let theta = TAU * t as f64 / n as f64;
        let tip = pen_tip(&v, theta, f.dc());
        assert!((tip - expected).norm() < 1e-9, "t={t}");
    }
}

#[test]
fn default_origin_keeps_the_dc_offset() {
    let n = 16;
    let s = sample(n);
    let f = FourierSeries::decompose(&s);
    let v = select_vectors(&f, n, SelectionPolicy::Band);
    let tip = pen_tip(&v, 0.0, Complex64::new(0.0, 0.0));
    assert!((tip + f.dc() - s.as_slice()[0]).norm() < 1e-9);
}

#[test]
fn outline_is_closed_with_requested_points() {
    let v = vec![RotatingVector::new(Complex64::new(2.0, 0.0), 1)];
    let path = reconstruct_outline(&v, 8, Complex64::new(0.0, 0.0)).unwrap();
    let els = path.elements();
    assert_eq!(els.len(), 9);
    assert!(matches!(els[8], kurbo::PathEl::ClosePath));
    let area = kurbo::Shape::area(&path);
    // Regular octagon inscribed in a radius-2 circle.
    assert!((area.abs() - 8.0 * 2.0f64.sqrt()).abs() < 1e-9);

    assert!(reconstruct_outline(&v, 0, Complex64::new(0.0, 0.0)).is_err());
}
