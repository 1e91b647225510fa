//! The problem side of an estimation session
//!
//! A problem family implements this trait once: it owns the instance
//! parameters and knows how to convert the family's natural cost units
//! (field multiplications, vector operations, stored elements) into bit
//! operations and stored bits. The conversions are pure maps on base-2
//! logarithms and must absorb `+∞`.

/// A concrete problem instance an estimator works on.
pub trait Problem: Send + Sync {
    /// Converts a log₂ count of basic operations into log₂ bit operations.
    fn to_bitcomplexity_time(&self, basic_ops: f64) -> f64;

    /// Converts a log₂ count of basic elements into log₂ stored bits.
    fn to_bitcomplexity_memory(&self, elements: f64) -> f64;

    /// Ceiling on the transformed memory complexity (log₂). Samples above
    /// it are discarded by the search.
    fn memory_bound(&self) -> f64 {
        f64::INFINITY
    }

    /// log₂ of the expected number of solutions of the instance.
    fn nsolutions(&self) -> f64;
}
