use crate::foundation::core::Complex64;

/// DFT bin holding integer frequency `k` for a period of `n` samples (`k mod n`, never negative).
pub(crate) fn bin_of_frequency(k: i64, n: usize) -> usize {
    debug_assert!(n > 0);
    k.rem_euclid(n as i64) as usize
}

/// Signed frequency of DFT bin `bin`: `bin` below `n / 2`, `bin - n` from `n / 2` on.
pub(crate) fn frequency_of_bin(bin: usize, n: usize) -> i64 {
    let (bin, n) = (bin as i64, n as i64);
    if bin < n / 2 { bin } else { bin - n }
}

/// Largest absolute difference between two equally long complex sequences.
pub fn max_abs_error(a: &[Complex64], b: &[Complex64]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y).norm())
        .fold(0.0, f64::max)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
