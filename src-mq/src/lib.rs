//! Multivariate quadratic systems: problem family and attack registry
//!
//! The problem asks for a common zero of `m` quadratic polynomials in `n`
//! variables over F_q. Costs are counted in field multiplications and
//! stored field elements; the unit conversions charge `⌈log₂ q⌉^θ` gates
//! per multiplication and `⌈log₂ q⌉` bits per element.
//!
//! The Gröbner-style attacks price their Macaulay matrices through the
//! Hilbert series of a semi-regular system (see [`series`]), which is the
//! standard heuristic for random instances.

pub mod booleansolve_fxl;
pub mod crossbred;
pub mod dinur_first;
pub mod exhaustive_search;
pub mod f5;
pub mod hybrid_f5;
pub mod lokshtanov;
pub mod problem;
pub mod series;

pub use booleansolve_fxl::BooleanSolveFXL;
pub use crossbred::Crossbred;
pub use dinur_first::DinurFirst;
pub use exhaustive_search::ExhaustiveSearch;
pub use f5::F5;
pub use hybrid_f5::HybridF5;
pub use lokshtanov::Lokshtanov;
pub use problem::MQProblem;

use bitsec_opt::AttackModel;

/// Exponent of dense linear algebra in the Gröbner-style cost formulas.
pub const LINEAR_ALGEBRA_EXPONENT: f64 = 2.81;

/// The family registry, in report order.
pub fn attacks() -> Vec<Box<dyn AttackModel<MQProblem>>> {
    vec![
        Box::new(BooleanSolveFXL),
        Box::new(Crossbred),
        Box::new(DinurFirst),
        Box::new(ExhaustiveSearch),
        Box::new(F5),
        Box::new(HybridF5),
        Box::new(Lokshtanov),
    ]
}
