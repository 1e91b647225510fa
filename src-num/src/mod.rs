//! Log₂-space combinatorics for attack-cost estimation
//!
//! Attack cost formulas mix factorials, binomial coefficients and
//! polynomial correction terms whose magnitudes overflow any machine
//! integer long before the problem instances get cryptographically
//! interesting. The helpers in this crate therefore work on base-2
//! logarithms wherever a quantity can get large, and only fall back to
//! magnitudes where the calling formulas genuinely need them (small list
//! sizes, Gaussian binomials).
//!
//! Domain conventions:
//! - out-of-range binomial/multinomial arguments yield `0.0` rather than an
//!   error; callers express infeasibility through their own predicates
//! - `+∞` is a legal value everywhere and is absorbed by [`log2_add`]
//! - negative counts are programmer errors and panic

/// Returns `log₂(n!)`, with `log2_factorial(0) == log2_factorial(1) == 0`.
pub fn log2_factorial(n: u64) -> f64 {
    (2..=n).map(|i| (i as f64).log2()).sum()
}

/// Returns `log₂ C(n, k)`, or `0.0` when `k < 0` or `k > n`.
pub fn log2_binomial(n: i64, k: i64) -> f64 {
    if k < 0 || n < 0 || k > n {
        return 0.0;
    }
    log2_factorial(n as u64) - log2_factorial(k as u64) - log2_factorial((n - k) as u64)
}

/// Returns `C(n, k)` as an `f64` magnitude, or `0.0` when out of range.
///
/// Exact as long as the result stays below 2⁵³; beyond that the relative
/// error is the usual `f64` rounding and the value eventually saturates to
/// `+∞`, which downstream log₂ conversions handle.
pub fn binomial(n: i64, k: i64) -> f64 {
    if k < 0 || n < 0 || k > n {
        return 0.0;
    }
    let kk = k.min(n - k);
    let mut acc = 1.0;
    for i in 1..=kk {
        acc = acc * ((n - kk + i) as f64) / (i as f64);
    }
    acc
}

/// Returns `log₂ (n! / (k₁! ⋯ kₘ! (n − Σkᵢ)!))`, or `0.0` when `Σkᵢ > n`.
///
/// The remainder `n − Σkᵢ` is treated as an implicit final part, so
/// `log2_multinomial(n, &[k])` equals `log2_binomial(n, k)`.
pub fn log2_multinomial(n: u64, parts: &[u64]) -> f64 {
    let used: u64 = parts.iter().sum();
    if used > n {
        return 0.0;
    }
    let mut acc = log2_factorial(n) - log2_factorial(n - used);
    for &k in parts {
        acc -= log2_factorial(k);
    }
    acc
}

/// Binary entropy `−x·log₂x − (1−x)·log₂(1−x)` for `x ∈ [0, 1]`.
///
/// The endpoints return `0.0`; arguments outside `[0, 1]` panic.
pub fn binary_entropy(x: f64) -> f64 {
    assert!(
        (0.0..=1.0).contains(&x),
        "binary_entropy argument {x} outside [0, 1]"
    );
    if x == 0.0 || x == 1.0 {
        return 0.0;
    }
    -x * x.log2() - (1.0 - x) * (1.0 - x).log2()
}

/// log₂ of `q^e − 1`, stable for exponents far beyond `f64` magnitudes.
fn log2_qpow_minus_one(q: u64, e: u64) -> f64 {
    let t = e as f64 * (q as f64).log2();
    if t > 53.0 {
        // q^e − 1 and q^e agree to full f64 precision here
        t
    } else {
        ((q as f64).powi(e as i32) - 1.0).log2()
    }
}

/// Gaussian binomial `[m choose r]_q`, in magnitude form.
///
/// Computed as `Π_{i=0}^{r−1} (q^{m−i} − 1)/(q^{i+1} − 1)` with the ratios
/// accumulated in log space, so only the final magnitude can overflow (to
/// `+∞`, which is the honest answer at that point).
pub fn gaussian_binomial(m: u64, r: u64, q: u64) -> f64 {
    assert!(q >= 2, "gaussian_binomial needs q >= 2, got {q}");
    if r > m {
        return 0.0;
    }
    let mut acc = 0.0;
    for i in 0..r {
        acc += log2_qpow_minus_one(q, m - i) - log2_qpow_minus_one(q, i + 1);
    }
    acc.exp2()
}

/// Returns `log₂(2ᵃ + 2ᵇ)`.
///
/// `+∞` absorbs everything; two `−∞` inputs stay `−∞`.
pub fn log2_add(a: f64, b: f64) -> f64 {
    if a == f64::INFINITY || b == f64::INFINITY {
        return f64::INFINITY;
    }
    let hi = a.max(b);
    let lo = a.min(b);
    if hi == f64::NEG_INFINITY {
        return f64::NEG_INFINITY;
    }
    hi + (1.0 + (lo - hi).exp2()).log2()
}

/// Rounds (or truncates) `x` to `digits` fractional decimal digits.
///
/// Non-finite inputs pass through unchanged; rendering layers map them to
/// their own sentinel.
pub fn round_or_truncate(x: f64, digits: u32, truncate: bool) -> f64 {
    if !x.is_finite() {
        return x;
    }
    let factor = 10f64.powi(digits as i32);
    if truncate {
        (x * factor).trunc() / factor
    } else {
        (x * factor).round() / factor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factorial_base_cases() {
        assert_eq!(log2_factorial(0), 0.0);
        assert_eq!(log2_factorial(1), 0.0);
        assert!((log2_factorial(5) - 120f64.log2()).abs() < 1e-12);
    }

    #[test]
    fn binomial_log_and_magnitude_agree() {
        assert!((log2_binomial(100, 10) - 43.9767).abs() < 1e-3);
        assert_eq!(binomial(50, 4), 230_300.0);
        assert_eq!(binomial(25, 3), 2_300.0);
        assert!((binomial(100, 10).log2() - log2_binomial(100, 10)).abs() < 1e-9);
    }

    #[test]
    fn binomial_out_of_range_is_zero() {
        assert_eq!(log2_binomial(10, 11), 0.0);
        assert_eq!(log2_binomial(10, -1), 0.0);
        assert_eq!(binomial(10, 11), 0.0);
        assert_eq!(binomial(-3, 1), 0.0);
    }

    #[test]
    fn multinomial_with_implicit_remainder() {
        // 4! / (2! 2! 0!) = 6
        assert!((log2_multinomial(4, &[2, 2]) - 6f64.log2()).abs() < 1e-12);
        // matches the binomial when a single part is given
        assert!((log2_multinomial(10, &[4]) - log2_binomial(10, 4)).abs() < 1e-12);
        assert_eq!(log2_multinomial(4, &[3, 2]), 0.0);
    }

    #[test]
    fn entropy_values() {
        assert_eq!(binary_entropy(0.0), 0.0);
        assert_eq!(binary_entropy(1.0), 0.0);
        assert!((binary_entropy(0.5) - 1.0).abs() < 1e-12);
        assert!((binary_entropy(0.11) - binary_entropy(0.89)).abs() < 1e-12);
    }

    #[test]
    #[should_panic]
    fn entropy_rejects_out_of_domain() {
        binary_entropy(1.5);
    }

    #[test]
    fn gaussian_binomial_small_cases() {
        // [4 choose 2]_2 = 15 * 7 / 3 = 35
        assert!((gaussian_binomial(4, 2, 2) - 35.0).abs() < 1e-9);
        assert!((gaussian_binomial(3, 1, 3) - 13.0).abs() < 1e-9);
        assert_eq!(gaussian_binomial(2, 3, 2), 0.0);
        assert!((gaussian_binomial(5, 0, 2) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn log2_add_behaviour() {
        assert!((log2_add(3.0, 3.0) - 4.0).abs() < 1e-12);
        assert_eq!(log2_add(10.0, f64::NEG_INFINITY), 10.0);
        assert_eq!(log2_add(f64::INFINITY, 3.0), f64::INFINITY);
        assert_eq!(
            log2_add(f64::NEG_INFINITY, f64::NEG_INFINITY),
            f64::NEG_INFINITY
        );
        // commutes
        assert_eq!(log2_add(1.25, 7.5), log2_add(7.5, 1.25));
    }

    #[test]
    fn rounding_and_truncation() {
        assert!((round_or_truncate(2.46, 1, false) - 2.5).abs() < 1e-12);
        assert!((round_or_truncate(2.46, 1, true) - 2.4).abs() < 1e-12);
        assert!((round_or_truncate(28.839, 2, false) - 28.84).abs() < 1e-12);
        assert_eq!(round_or_truncate(f64::INFINITY, 1, false), f64::INFINITY);
    }
}
