//! Errors raised by the declarative layer
//!
//! Only parameter declaration, range narrowing and configuration writes can
//! fail; cost evaluation and the search loop report trouble through `+∞`
//! samples instead (a tight memory bound or an empty search space is not an
//! error, it is an answer).

use thiserror::Error;

/// Error type for parameter and configuration mistakes.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParameterError {
    #[error("parameter `{0}` is already declared")]
    AlreadyDeclared(String),

    #[error("unknown parameter `{0}`")]
    UnknownParameter(String),

    #[error("parameter `{0}` has no value and the algorithm has no analytic rule for it")]
    MissingParameter(String),

    #[error("empty range [{min}, {max}] for parameter `{name}`")]
    EmptyRange { name: String, min: i64, max: i64 },

    #[error(
        "value {value} for parameter `{name}` lies outside the declared range [{min}, {max}]"
    )]
    ValueOutOfRange {
        name: String,
        value: i64,
        min: i64,
        max: i64,
    },

    #[error("unknown algorithm `{0}`")]
    UnknownAlgorithm(String),
}
