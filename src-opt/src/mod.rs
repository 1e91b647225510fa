//! Grid-search optimisation framework for attack-cost estimation
//!
//! This crate hosts the machinery shared by every problem family: integer
//! tuning parameters with per-parameter boxes, a deterministic Cartesian
//! search over the admissible tuples, cost-model transforms (unit
//! conversion, memory-access penalties, asymptotic and quantum modes), a
//! per-algorithm optimum cache, and an estimator façade that fans out over
//! all applicable algorithms and packages the results into a serialisable
//! report.
//!
//! The division of labour with the problem-family crates:
//! - a family supplies a [`Problem`] (instance parameters plus the unit
//!   conversions into bit counts) and a set of [`AttackModel`] plug-ins
//!   (tuning schema, applicability, pure cost formulas)
//! - this crate owns everything else; a cost function never loops over its
//!   own tuning parameters and never sees the memory bound
//!
//! All times and memories are base-2 logarithms, with `+∞` as the uniform
//! "infeasible / not implemented" sentinel. The search itself is
//! single-threaded and deterministic; only the per-algorithm fan-out in
//! [`Estimator::estimate`] is parallel.

pub mod algorithm;
pub mod config;
pub mod error;
pub mod estimator;
pub mod params;
pub mod problem;
pub mod report;
pub mod search;

pub use algorithm::{Algorithm, AttackModel, AuxMap, CostSample, Optimum, OptimumState};
pub use config::{AlgorithmConfig, ComplexityType, EstimatorConfig, MemoryAccess};
pub use error::ParameterError;
pub use estimator::Estimator;
pub use params::{Assignment, ParamKind, ParamRange, ParamSet};
pub use problem::Problem;
pub use report::{AlgorithmReport, Report};
