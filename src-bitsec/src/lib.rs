#![doc = include_str!("../README.md")]

// Re-export the member crates
pub use bitsec_mq as mq;
pub use bitsec_num as num;
pub use bitsec_opt as opt;
pub use bitsec_sd as sd;

/// Common CLI argument definitions for the binary
pub mod cli;
/// Family-specific estimator constructors
pub mod estimators;
/// Plain-text table rendering and CSV export of reports
pub mod table;

// Re-export commonly used items
pub use bitsec_opt::{
    Algorithm, AttackModel, ComplexityType, CostSample, Estimator, EstimatorConfig,
    MemoryAccess, ParameterError, Report,
};
pub use estimators::{MQEstimator, SDEstimator};
pub use table::{render_table, write_csv};
