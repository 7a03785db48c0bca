use crate::{
    foundation::core::{Complex64, Point, to_point},
    fourier::decompose::FourierSeries,
};

/// A vector of fixed length rotating at a constant integer angular rate.
///
/// At parameter `theta` it points along `amplitude * exp(i * frequency * theta)`; its
/// initial phase is `arg(amplitude)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RotatingVector {
    /// Complex amplitude (length and initial phase).
    pub amplitude: Complex64,
    /// Signed angular rate in radians per unit parameter.
    pub frequency: i64,
}

impl RotatingVector {
    /// Build a rotating vector.
    pub fn new(amplitude: Complex64, frequency: i64) -> Self {
        Self {
            amplitude,
            frequency,
        }
    }

    /// Vector length `|amplitude|`.
    pub fn radius(&self) -> f64 {
        self.amplitude.norm()
    }

    /// Initial phase `arg(amplitude)` in radians.
    pub fn phase(&self) -> f64 {
        self.amplitude.arg()
    }

    /// The vector at parameter `theta`, as a complex offset.
    pub fn at(&self, theta: f64) -> Complex64 {
        self.amplitude * Complex64::cis(self.frequency as f64 * theta)
    }

    /// The vector at parameter `theta`, as a plane offset from the origin.
    pub fn tip_at(&self, theta: f64) -> Point {
        to_point(self.at(theta))
    }
}

/// Rule deciding which frequencies become rotating vectors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionPolicy {
    /// Contiguous band `[-floor(M/2), ceil(M/2))` without the DC term, ascending frequency.
    #[default]
    Band,
    /// The `M - 1` strongest non-DC bins, strongest first.
    Largest,
}

/// Pick rotating vectors from `series` for a target count `count` (`M`).
///
/// The DC term is never returned. With [`SelectionPolicy::Band`] the result holds `M - 1`
/// vectors (none for `M == 0`); when `M` exceeds the sample count the frequencies alias and
/// coefficients repeat. [`SelectionPolicy::Largest`] never returns more than `N - 1` vectors.
#[tracing::instrument(skip(series), fields(n = series.len()))]
pub fn select_vectors(
    series: &FourierSeries,
    count: usize,
    policy: SelectionPolicy,
) -> Vec<RotatingVector> {
    let out = match policy {
        SelectionPolicy::Band => select_band(series, count),
        SelectionPolicy::Largest => select_largest(series, count),
    };
    if policy == SelectionPolicy::Band && count > series.len() {
        tracing::debug!(
            count,
            n = series.len(),
            "requested more vectors than samples, coefficients alias"
        );
    }
    tracing::debug!(selected = out.len(), "selected rotating vectors");
    out
}

fn select_band(series: &FourierSeries, count: usize) -> Vec<RotatingVector> {
    let count = count as i64;
    let lo = -(count / 2);
    let hi = count - count / 2; // ceil(M/2)
    (lo..hi)
        .filter(|&k| k != 0)
        .map(|k| RotatingVector::new(series.coefficient(k), k))
        .collect()
}

fn select_largest(series: &FourierSeries, count: usize) -> Vec<RotatingVector> {
    let keep = count.saturating_sub(1);
    let mut bins: Vec<usize> = (1..series.len()).collect();
    let coeffs = series.coefficients();
    // Stable sort keeps lower bins first on ties.
    bins.sort_by(|&a, &b| coeffs[b].norm().total_cmp(&coeffs[a].norm()));
    bins.truncate(keep);
    bins.into_iter()
        .map(|bin| RotatingVector::new(coeffs[bin], series.frequency_of_bin(bin)))
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/fourier/select.rs"]
mod tests;
