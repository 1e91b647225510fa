//! The multivariate-quadratic problem instance

use bitsec_opt::Problem;

/// An MQ instance: `m` random quadratic equations in `n` variables over
/// the field with `q` elements.
#[derive(Debug, Clone)]
pub struct MQProblem {
    n: u64,
    m: u64,
    q: u64,
    theta: u32,
    memory_bound: f64,
    nsolutions: f64,
}

impl MQProblem {
    /// Builds an instance with an unbounded memory, the expected
    /// `max((n − m)·log₂ q, 0)` solutions of a random system, and the
    /// quadratic field-arithmetic exponent `θ = 2`.
    pub fn new(n: u64, m: u64, q: u64) -> Self {
        assert!(n > 0 && m > 0, "system dimensions must be positive");
        assert!(q >= 2, "field order must be at least 2");
        let logq = (q as f64).log2();
        let nsolutions = ((n as f64 - m as f64) * logq).max(0.0);
        Self {
            n,
            m,
            q,
            theta: 2,
            memory_bound: f64::INFINITY,
            nsolutions,
        }
    }

    /// Exponent of the per-multiplication gate count `⌈log₂ q⌉^θ`.
    pub fn with_theta(mut self, theta: u32) -> Self {
        self.theta = theta;
        self
    }

    pub fn with_memory_bound(mut self, bound: f64) -> Self {
        self.memory_bound = bound;
        self
    }

    pub fn with_nsolutions(mut self, nsolutions: f64) -> Self {
        self.nsolutions = nsolutions;
        self
    }

    pub fn parameters(&self) -> (u64, u64, u64) {
        (self.n, self.m, self.q)
    }

    pub fn n(&self) -> u64 {
        self.n
    }

    pub fn m(&self) -> u64 {
        self.m
    }

    pub fn order_of_the_field(&self) -> u64 {
        self.q
    }

    /// Bits needed to store one field element.
    pub fn bits_per_element(&self) -> u32 {
        u64::BITS - (self.q - 1).leading_zeros()
    }
}

impl Problem for MQProblem {
    // one basic operation is a field multiplication
    fn to_bitcomplexity_time(&self, basic_ops: f64) -> f64 {
        basic_ops + self.theta as f64 * (self.bits_per_element() as f64).log2()
    }

    fn to_bitcomplexity_memory(&self, elements: f64) -> f64 {
        elements + (self.bits_per_element() as f64).log2()
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
    fn element_sizes() {
        assert_eq!(MQProblem::new(10, 10, 2).bits_per_element(), 1);
        assert_eq!(MQProblem::new(10, 10, 3).bits_per_element(), 2);
        assert_eq!(MQProblem::new(10, 10, 4).bits_per_element(), 2);
        assert_eq!(MQProblem::new(10, 10, 5).bits_per_element(), 3);
        assert_eq!(MQProblem::new(10, 10, 256).bits_per_element(), 8);
    }

    #[test]
    fn gate_count_conversions() {
        // q = 3, θ = 2: two gates squared per multiplication
        let p = MQProblem::new(15, 17, 3);
        assert_eq!(p.to_bitcomplexity_time(10.0), 12.0);
        assert_eq!(p.to_bitcomplexity_memory(10.0), 11.0);
        // over F2 a multiplication is one gate
        let p = MQProblem::new(15, 17, 2);
        assert_eq!(p.to_bitcomplexity_time(10.0), 10.0);
    }

    #[test]
    fn solution_count_default() {
        assert_eq!(MQProblem::new(15, 17, 3).nsolutions(), 0.0);
        let under = MQProblem::new(20, 17, 3);
        assert!((under.nsolutions() - 3.0 * 3f64.log2()).abs() < 1e-12);
    }
}
