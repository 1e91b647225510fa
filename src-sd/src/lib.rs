//! Binary syndrome decoding: problem family and attack registry
//!
//! The problem asks for an error vector of weight `w` consistent with a
//! random parity-check matrix of a length-`n`, dimension-`k` binary code.
//! All attacks here are information-set decoders sharing the same building
//! blocks: a permutation loop whose success probability fixes the iteration
//! count, partial Gaussian elimination priced with the method of the four
//! russians, and (beyond Prange) a birthday-style list merge on `l` parity
//! bits.
//!
//! Costs are counted in vector operations of length `n` and stored vectors
//! of length `n`; the problem's unit conversions turn both into bits by
//! adding `log₂ n`.

pub mod ball_collision;
pub mod dumer;
pub mod helpers;
pub mod prange;
pub mod problem;
pub mod stern;

pub use ball_collision::BallCollision;
pub use dumer::Dumer;
pub use prange::Prange;
pub use problem::SDProblem;
pub use stern::Stern;

use bitsec_opt::AttackModel;

/// The family registry, in report order.
pub fn attacks() -> Vec<Box<dyn AttackModel<SDProblem>>> {
    vec![
        Box::new(BallCollision),
        Box::new(Dumer),
        Box::new(Prange),
        Box::new(Stern),
    ]
}
