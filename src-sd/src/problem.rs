//! The syndrome-decoding problem instance

use bitsec_num::log2_binomial;
use bitsec_opt::Problem;

/// A binary syndrome-decoding instance: code length `n`, dimension `k`,
/// error weight `w`.
#[derive(Debug, Clone)]
pub struct SDProblem {
    n: u64,
    k: u64,
    w: u64,
    memory_bound: f64,
    nsolutions: f64,
}

impl SDProblem {
    /// Builds an instance with an unbounded memory and the expected number
    /// of solutions of a random code, `max(log₂ C(n, w) − (n − k), 0)`.
    pub fn new(n: u64, k: u64, w: u64) -> Self {
        assert!(n > 0, "code length must be positive");
        assert!(k > 0 && k < n, "code dimension must satisfy 0 < k < n");
        assert!(
            w > 0 && w <= n - k,
            "error weight must satisfy 0 < w <= n - k"
        );
        let nsolutions = (log2_binomial(n as i64, w as i64) - (n - k) as f64).max(0.0);
        Self {
            n,
            k,
            w,
            memory_bound: f64::INFINITY,
            nsolutions,
        }
    }

    /// Caps the transformed memory complexity (log₂ units).
    pub fn with_memory_bound(mut self, bound: f64) -> Self {
        self.memory_bound = bound;
        self
    }

    /// Overrides the expected number of solutions (log₂).
    pub fn with_nsolutions(mut self, nsolutions: f64) -> Self {
        self.nsolutions = nsolutions;
        self
    }

    pub fn parameters(&self) -> (u64, u64, u64) {
        (self.n, self.k, self.w)
    }

    pub fn n(&self) -> u64 {
        self.n
    }

    pub fn k(&self) -> u64 {
        self.k
    }

    pub fn w(&self) -> u64 {
        self.w
    }
}

impl Problem for SDProblem {
    // one basic operation touches a length-n vector
    fn to_bitcomplexity_time(&self, basic_ops: f64) -> f64 {
        basic_ops + (self.n as f64).log2()
    }

    fn to_bitcomplexity_memory(&self, elements: f64) -> f64 {
        elements + (self.n as f64).log2()
    }

    fn memory_bound(&self) -> f64 {
        self.memory_bound
    }

    fn nsolutions(&self) -> f64 {
        self.nsolutions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solution_count_default() {
        // C(100, 10) ≈ 2^43.98 < 2^50: a random instance has a single
        // expected solution
        let p = SDProblem::new(100, 50, 10);
        assert_eq!(p.nsolutions(), 0.0);
        // heavily under-determined instance
        let p = SDProblem::new(100, 80, 20);
        assert!(p.nsolutions() > 0.0);
    }

    #[test]
    fn conversions_add_log_n() {
        let p = SDProblem::new(128, 64, 12);
        assert_eq!(p.to_bitcomplexity_time(10.0), 17.0);
        assert_eq!(p.to_bitcomplexity_memory(0.0), 7.0);
        assert_eq!(p.to_bitcomplexity_time(f64::INFINITY), f64::INFINITY);
    }

    #[test]
    #[should_panic]
    fn rejects_overweight_instances() {
        SDProblem::new(100, 50, 60);
    }
}
