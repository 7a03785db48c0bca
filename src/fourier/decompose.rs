use rustfft::FftPlanner;

use crate::{
    foundation::core::Complex64,
    foundation::error::{EpicycleError, EpicycleResult},
    foundation::math::{bin_of_frequency, frequency_of_bin},
    sample::path_sample::PathSample,
};

/// Normalized discrete Fourier coefficients of one path period.
///
/// `coeffs[k]` is `(1/N) * sum_t x[t] * exp(-i*2*pi*k*t/N)`, so that
/// `x[t] = sum_k coeffs[k] * exp(i*2*pi*k*t/N)`. Bin `k` stands for frequency `k` below
/// `N/2` and `k - N` from `N/2` on.
#[derive(Clone, Debug, PartialEq)]
pub struct FourierSeries {
    coeffs: Vec<Complex64>,
}

impl FourierSeries {
    /// Forward DFT of `sample`, each coefficient divided by `N`.
    #[tracing::instrument(skip(sample), fields(n = sample.len()))]
    pub fn decompose(sample: &PathSample) -> Self {
        let n = sample.len();
        let mut buf = sample.as_slice().to_vec();

        let mut planner = FftPlanner::<f64>::new();
        let fft = planner.plan_fft_forward(n);
        fft.process(&mut buf);

        let scale = 1.0 / n as f64;
        for c in &mut buf {
            *c *= scale;
        }

        tracing::debug!(n, dc_norm = buf[0].norm(), "decomposed path sample");
        Self { coeffs: buf }
    }

    /// Wrap precomputed normalized coefficients.
    pub fn from_coefficients(coeffs: Vec<Complex64>) -> EpicycleResult<Self> {
        if coeffs.is_empty() {
            return Err(EpicycleError::decomposition(
                "fourier series needs at least one coefficient",
            ));
        }
        Ok(Self { coeffs })
    }

    /// Number of bins `N`, equal to the sample count.
    pub fn len(&self) -> usize {
        self.coeffs.len()
    }

    /// Always false; a series holds at least one bin.
    pub fn is_empty(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Coefficients in bin order `0..N`.
    pub fn coefficients(&self) -> &[Complex64] {
        &self.coeffs
    }

    /// Coefficient for any integer frequency, wrapping with `k mod N`.
    pub fn coefficient(&self, k: i64) -> Complex64 {
        self.coeffs[bin_of_frequency(k, self.coeffs.len())]
    }

    /// Zero-frequency term, the mean of the samples.
    pub fn dc(&self) -> Complex64 {
        self.coeffs[0]
    }

    /// Signed frequency carried by `bin`.
    pub fn frequency_of_bin(&self, bin: usize) -> i64 {
        frequency_of_bin(bin, self.coeffs.len())
    }

    /// Bin holding frequency `k`.
    pub fn bin_of_frequency(&self, k: i64) -> usize {
        bin_of_frequency(k, self.coeffs.len())
    }

    /// Evaluate `sum_k coeffs[k] * exp(i*2*pi*k*t/N)` over all bins.
    ///
    /// At integer `t` in `0..N` this returns the original sample.
    pub fn reconstruct_sample(&self, t: f64) -> Complex64 {
        let n = self.coeffs.len() as f64;
        self.coeffs
            .iter()
            .enumerate()
            .map(|(k, c)| c * Complex64::cis(std::f64::consts::TAU * k as f64 * t / n))
            .sum()
    }

    /// Full inverse transform: all `N` samples at once.
    pub fn reconstruct_samples(&self) -> Vec<Complex64> {
        let n = self.coeffs.len();
        let mut buf = self.coeffs.clone();

        let mut planner = FftPlanner::<f64>::new();
        let ifft = planner.plan_fft_inverse(n);
        ifft.process(&mut buf);

        buf
    }
}

#[cfg(test)]
#[path = "../../tests/unit/fourier/decompose.rs"]
mod tests;
