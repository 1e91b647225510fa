//! Shared building blocks of the information-set decoders
//!
//! These follow the usual concrete-cost accounting: magnitudes are plain
//! `f64` (the quantities stay far below `f64` range for any instance whose
//! cost is worth reporting) and the callers take logs at the end.

use bitsec_num::log2_binomial;

/// Largest `r` the four-russians table is allowed to use; beyond this the
/// 2ʳ table dwarfs every other memory in sight.
pub const M4RI_MAX_R: u64 = 30;

/// Cost in vector operations of a partial Gaussian elimination on the
/// parity-check matrix, using the method of the four russians with table
/// parameter `r` (`r = 0` is plain elimination).
pub fn gaussian_elimination_complexity(n: u64, k: u64, r: u64) -> f64 {
    let rows = (n - k) as f64;
    if r == 0 {
        return rows * rows;
    }
    let passes = ((n + r - 1) / r) as f64;
    ((r * r) as f64 + (r as f64).exp2() + (n - k).saturating_sub(r) as f64) * passes
}

/// Memory of the parity-check matrix plus the four-russians table, in
/// vector-space elements.
pub fn matrix_memory(n: u64, k: u64, r: u64) -> f64 {
    (n - k) as f64 + (r as f64).exp2()
}

/// Cost of merging two lists of `list` elements on `l` parity bits with a
/// hash map: build both lists, then visit the expected collisions.
pub fn merge_cost(list: f64, l: i64) -> f64 {
    if list <= 1.0 {
        return 1.0;
    }
    2.0 * list + (list * list / (l as f64).exp2()).floor()
}

/// Analytic choice of the four-russians parameter: minimise the
/// elimination cost subject to the table fitting the memory bound.
/// Ties go to the smaller `r`.
pub fn optimize_m4ri(n: u64, k: u64, memory_bound: f64) -> u64 {
    let mut best = 0u64;
    let mut best_cost = f64::INFINITY;
    for r in 0..=(n - k).min(M4RI_MAX_R) {
        if matrix_memory(n, k, r).log2() > memory_bound {
            continue;
        }
        let cost = gaussian_elimination_complexity(n, k, r);
        if cost < best_cost {
            best_cost = cost;
            best = r;
        }
    }
    best
}

/// Upper bound of the `r` range in every decoder schema.
pub fn r_range_max(n: u64, k: u64) -> i64 {
    (n - k).min(M4RI_MAX_R) as i64
}

/// Expected number of fresh `l`-bit windows (Indyk–Motwani reprojections)
/// until one is disjoint from the `weight` outside errors, among `cols`
/// redundant positions. Small counts are floored like the reference
/// accounting; astronomically large ones stay in floating point.
pub fn reprojections(cols: i64, weight: i64, l: i64) -> f64 {
    let ratio = log2_binomial(cols, weight) - log2_binomial(cols - l, weight);
    if ratio < 50.0 {
        ratio.exp2().floor().max(1.0)
    } else {
        ratio.exp2()
    }
}
