use super::*;
use crate::foundation::math::max_abs_error;

fn sample(points: &[(f64, f64)]) -> PathSample {
    PathSample::from_complex(points.iter().map(|&(x, y)| Complex64::new(x, y)).collect()).unwrap()
}

fn wobbly(n: usize) -> PathSample {
    let pts: Vec<Complex64> = (0..n)
        .map(|i| {
            let t = i as f64;
            Complex64::new(
                (t * 0.37).sin() * 3.0 + (t * 1.9).cos() + 0.25,
                (t * 0.11).cos() * 2.0 - (t * 2.3).sin() * 0.5 - 1.5,
            )
        })
        .collect();
    PathSample::from_complex(pts).unwrap()
}

#[test]
fn unit_square_has_single_unit_harmonic() {
    let s = sample(&[(1.0, 0.0), (0.0, 1.0), (-1.0, 0.0), (0.0, -1.0)]);
    let f = FourierSeries::decompose(&s);
    assert_eq!(f.len(), 4);
    assert!(f.dc().norm() < 1e-12);
    assert!((f.coefficient(1) - Complex64::new(1.0, 0.0)).norm() < 1e-12);
    assert!(f.coefficient(-1).norm() < 1e-12);
    assert!(f.coefficient(2).norm() < 1e-12);
}

#[test]
fn clockwise_square_lands_in_negative_frequency() {
    let s = sample(&[(1.0, 0.0), (0.0, -1.0), (-1.0, 0.0), (0.0, 1.0)]);
    let f = FourierSeries::decompose(&s);
    assert!((f.coefficient(-1) - Complex64::new(1.0, 0.0)).norm() < 1e-12);
    assert_eq!(f.bin_of_frequency(-1), 3);
    assert_eq!(f.frequency_of_bin(3), -1);
}

#[test]
fn dc_is_the_centroid() {
    let s = wobbly(37);
    let f = FourierSeries::decompose(&s);
    assert!((f.dc() - s.centroid()).norm() < 1e-12);
}

#[test]
fn full_series_reproduces_samples_pointwise() {
    for n in [1usize, 2, 3, 7, 64, 1024] {
        let s = wobbly(n);
        let f = FourierSeries::decompose(&s);
        let rebuilt: Vec<Complex64> = (0..n).map(|t| f.reconstruct_sample(t as f64)).collect();
        let err = max_abs_error(&rebuilt, s.as_slice());
        assert!(err < 1e-9, "n={n} err={err}");
    }
}

#[test]
fn inverse_transform_reproduces_samples() {
    for n in [1usize, 5, 128, 1000] {
        let s = wobbly(n);
        let f = FourierSeries::decompose(&s);
        let err = max_abs_error(&f.reconstruct_samples(), s.as_slice());
        assert!(err < 1e-9, "n={n} err={err}");
    }
}

#[test]
fn coefficient_lookup_wraps_by_period() {
    let f = FourierSeries::decompose(&wobbly(6));
    for k in -20i64..20 {
        assert_eq!(f.coefficient(k), f.coefficient(k + 6));
        assert_eq!(f.coefficient(k), f.coefficients()[k.rem_euclid(6) as usize]);
    }
}

#[test]
fn from_coefficients_rejects_empty() {
    let err = FourierSeries::from_coefficients(Vec::new()).unwrap_err();
    assert!(matches!(err, EpicycleError::Decomposition(_)));
    let f = FourierSeries::from_coefficients(vec![Complex64::new(1.0, 2.0)]).unwrap();
    assert_eq!(f.reconstruct_samples(), vec![Complex64::new(1.0, 2.0)]);
}
