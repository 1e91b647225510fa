//! Hilbert-series helpers for semi-regular quadratic systems
//!
//! Degrees of regularity and witness degrees come from the first
//! non-positive coefficient of the series
//!
//! ```text
//!   (1 − z²)^m / (1 − z)^n
//! ```
//!
//! refined, over small fields, by the field equations `x^q = x`:
//!
//! ```text
//!   ((1 − z^q)/(1 − z))^n · ((1 − z²)/(1 − z^{2q}))^m
//! ```
//!
//! Series are plain coefficient vectors truncated at a cap; multiplying by
//! `(1 − z^t)` is a backward difference with stride `t` and dividing by it
//! a forward prefix sum, so everything stays a couple of passes over a
//! short vector.

use bitsec_num::binomial;

/// Fields up to this order get the field-equation refinement; beyond it
/// the degrees in play never reach `q`.
const SMALL_FIELD_LIMIT: u64 = 32;

fn mul_one_minus(c: &mut [f64], t: usize) {
    if t == 0 || t >= c.len() {
        return;
    }
    for i in (t..c.len()).rev() {
        c[i] -= c[i - t];
    }
}

fn div_one_minus(c: &mut [f64], t: usize) {
    if t == 0 || t >= c.len() {
        return;
    }
    for i in t..c.len() {
        c[i] += c[i - t];
    }
}

fn semi_regular_series(n: u64, m: u64, q: u64, extra_divisions: usize) -> Vec<f64> {
    let truncated = q <= SMALL_FIELD_LIMIT;
    let cap = if truncated {
        n as usize * (q as usize - 1) + 2
    } else {
        2 * m as usize + 2
    };
    let mut c = vec![0.0; cap + 1];
    c[0] = 1.0;
    for _ in 0..n {
        if truncated {
            mul_one_minus(&mut c, q as usize);
        }
        div_one_minus(&mut c, 1);
    }
    for _ in 0..m {
        mul_one_minus(&mut c, 2);
        if truncated {
            div_one_minus(&mut c, 2 * q as usize);
        }
    }
    for _ in 0..extra_divisions {
        div_one_minus(&mut c, 1);
    }
    c
}

fn first_nonpositive(c: &[f64]) -> Option<u64> {
    c.iter().position(|&x| x <= 0.0).map(|i| i as u64)
}

/// Degree of regularity of `m` semi-regular quadrics in `n` variables over
/// F_q. `None` when the series stays positive up to its cap, as happens
/// for under-determined systems over large fields.
pub fn degree_of_regularity(n: u64, m: u64, q: u64) -> Option<u64> {
    first_nonpositive(&semi_regular_series(n, m, q, 0))
}

/// Witness degree: the degree at which a Macaulay matrix of the system
/// certifies inconsistency, one extra `(1 − z)` division deep.
pub fn witness_degree(n: u64, m: u64, q: u64) -> Option<u64> {
    first_nonpositive(&semi_regular_series(n, m, q, 1))
}

/// Number of monomials of degree at most `d` in `n` variables; with
/// `q = Some(q)` exponents are reduced by the field equations.
pub fn nmonomials_up_to(n: u64, d: u64, q: Option<u64>) -> f64 {
    match q {
        None => binomial((n + d) as i64, d as i64),
        Some(q) => {
            let max_degree = n as usize * (q as usize - 1);
            let cap = (d as usize).min(max_degree);
            let mut c = vec![0.0; cap + 1];
            c[0] = 1.0;
            for _ in 0..n {
                mul_one_minus(&mut c, q as usize);
                div_one_minus(&mut c, 1);
            }
            c.iter().sum()
        }
    }
}
