//! Cost-model configuration
//!
//! Two layers of configuration exist: [`AlgorithmConfig`] is what the cost
//! transforms need (complexity type, unit conversion on/off, memory-access
//! penalty) and lives on every algorithm; [`EstimatorConfig`] adds the
//! rendering knobs and lives on the estimator, which propagates the cost
//! part to its algorithms on every write.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Which notion of cost the estimates use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ComplexityType {
    /// Concrete operation counts, including polynomial factors.
    #[default]
    Estimate,
    /// Asymptotic Õ costs with polylogarithmic factors stripped.
    TildeO,
}

impl FromStr for ComplexityType {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "estimate" => Ok(ComplexityType::Estimate),
            "tilde-o" | "tilde_o" | "tildeo" => Ok(ComplexityType::TildeO),
            _ => Err(format!("unknown complexity type: {}", s)),
        }
    }
}

/// Additive time penalty (in log₂) charged for accessing a memory of
/// `m` log₂ bits.
#[derive(Clone, Default)]
pub enum MemoryAccess {
    /// Memory is free.
    #[default]
    Constant,
    /// `log₂(m)`, a log-log scale penalty.
    Logarithmic,
    /// `m / 2`.
    SquareRoot,
    /// `m / 3`.
    CubeRoot,
    /// User-supplied penalty on the log₂ memory.
    Custom(Arc<dyn Fn(f64) -> f64 + Send + Sync>),
}

impl MemoryAccess {
    /// The penalty added to the log₂ time for a memory of `memory` log₂
    /// units. Infinite memory keeps the sample infeasible.
    pub fn penalty(&self, memory: f64) -> f64 {
        if memory == f64::INFINITY {
            return f64::INFINITY;
        }
        match self {
            MemoryAccess::Constant => 0.0,
            MemoryAccess::Logarithmic => {
                if memory <= 1.0 {
                    0.0
                } else {
                    memory.log2()
                }
            }
            MemoryAccess::SquareRoot => memory / 2.0,
            MemoryAccess::CubeRoot => memory / 3.0,
            MemoryAccess::Custom(f) => f(memory),
        }
    }
}

impl fmt::Debug for MemoryAccess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MemoryAccess::Constant => "Constant",
            MemoryAccess::Logarithmic => "Logarithmic",
            MemoryAccess::SquareRoot => "SquareRoot",
            MemoryAccess::CubeRoot => "CubeRoot",
            MemoryAccess::Custom(_) => "Custom(..)",
        };
        f.write_str(name)
    }
}

impl FromStr for MemoryAccess {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "const" | "constant" => Ok(MemoryAccess::Constant),
            "log" | "logarithmic" => Ok(MemoryAccess::Logarithmic),
            "sqrt" | "square-root" | "square_root" => Ok(MemoryAccess::SquareRoot),
            "cbrt" | "cube-root" | "cube_root" => Ok(MemoryAccess::CubeRoot),
            _ => Err(format!("unknown memory access model: {}", s)),
        }
    }
}

/// Per-algorithm cost-model settings.
#[derive(Debug, Clone)]
pub struct AlgorithmConfig {
    pub complexity_type: ComplexityType,
    /// Route costs through the problem's unit conversions into bits.
    pub bit_complexities: bool,
    pub memory_access: MemoryAccess,
}

impl Default for AlgorithmConfig {
    fn default() -> Self {
        Self {
            complexity_type: ComplexityType::default(),
            bit_complexities: true,
            memory_access: MemoryAccess::default(),
        }
    }
}

/// Estimator-wide settings: the cost model plus the rendering knobs.
#[derive(Debug, Clone)]
pub struct EstimatorConfig {
    pub cost: AlgorithmConfig,
    /// Fractional decimal digits in rendered output.
    pub precision: u32,
    /// Truncate instead of round when rendering.
    pub truncate: bool,
    pub show_all_parameters: bool,
    pub show_tilde_o_time: bool,
    pub show_quantum_complexity: bool,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            cost: AlgorithmConfig::default(),
            precision: 1,
            truncate: false,
            show_all_parameters: false,
            show_tilde_o_time: false,
            show_quantum_complexity: false,
        }
    }
}

impl EstimatorConfig {
    pub fn with_complexity_type(mut self, t: ComplexityType) -> Self {
        self.cost.complexity_type = t;
        self
    }
    pub fn with_bit_complexities(mut self, on: bool) -> Self {
        self.cost.bit_complexities = on;
        self
    }
    pub fn with_memory_access(mut self, m: MemoryAccess) -> Self {
        self.cost.memory_access = m;
        self
    }
    pub fn with_precision(mut self, digits: u32) -> Self {
        self.precision = digits;
        self
    }
    pub fn with_truncate(mut self, on: bool) -> Self {
        self.truncate = on;
        self
    }
    pub fn with_all_parameters(mut self, on: bool) -> Self {
        self.show_all_parameters = on;
        self
    }
    pub fn with_tilde_o_time(mut self, on: bool) -> Self {
        self.show_tilde_o_time = on;
        self
    }
    pub fn with_quantum_complexity(mut self, on: bool) -> Self {
        self.show_quantum_complexity = on;
        self
    }
}
