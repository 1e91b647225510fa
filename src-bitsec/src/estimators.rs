//! bitsec - bit-security estimation for hard cryptographic problems
//! Family-specific estimator façades
//!
//! Copyright (C) 2025 the bitsec developers
//!
//! This program is free software: you can redistribute it and/or modify
//! it under the terms of the GNU General Public License as published by
//! the Free Software Foundation, either version 3 of the License, or
//! (at your option) any later version.
//!
//! This program is distributed in the hope that it will be useful,
//! but WITHOUT ANY WARRANTY; without even the implied warranty of
//! MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
//! GNU General Public License for more details.
//!
//! You should have received a copy of the GNU General Public License
//! along with this program.  If not, see <https://www.gnu.org/licenses/>.

use std::ops::{Deref, DerefMut};

use bitsec_mq::MQProblem;
use bitsec_opt::{Estimator, EstimatorConfig};
use bitsec_sd::SDProblem;

/// Estimator over all applicable syndrome-decoding attacks. Dereferences
/// to the generic [`Estimator`] for configuration, per-algorithm access
/// and reports.
pub struct SDEstimator(Estimator<SDProblem>);

impl SDEstimator {
    /// Builds the estimator for an `(n, k, w)` instance.
    ///
    /// # Arguments
    /// * `n`, `k`, `w` - code length, dimension and error weight
    /// * `excluded` - attack names to drop at construction
    pub fn new(n: u64, k: u64, w: u64, excluded: &[&str]) -> Self {
        Self::for_problem(SDProblem::new(n, k, w), excluded)
    }

    /// Same, for a problem carrying a memory bound or a solution-count
    /// override.
    pub fn for_problem(problem: SDProblem, excluded: &[&str]) -> Self {
        Self(Estimator::new(problem, bitsec_sd::attacks(), excluded))
    }

    pub fn with_config(mut self, config: EstimatorConfig) -> Self {
        self.0.set_config(config);
        self
    }
}

impl Deref for SDEstimator {
    type Target = Estimator<SDProblem>;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for SDEstimator {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

/// Estimator over all applicable multivariate-quadratic attacks.
/// Dereferences to the generic [`Estimator`].
pub struct MQEstimator(Estimator<MQProblem>);

impl MQEstimator {
    /// Builds the estimator for an `(n, m, q)` instance.
    ///
    /// # Arguments
    /// * `n`, `m`, `q` - variables, equations and field order
    /// * `excluded` - attack names to drop at construction
    pub fn new(n: u64, m: u64, q: u64, excluded: &[&str]) -> Self {
        Self::for_problem(MQProblem::new(n, m, q), excluded)
    }

    /// Same, for a problem carrying a memory bound or a solution-count
    /// override.
    pub fn for_problem(problem: MQProblem, excluded: &[&str]) -> Self {
        Self(Estimator::new(problem, bitsec_mq::attacks(), excluded))
    }

    pub fn with_config(mut self, config: EstimatorConfig) -> Self {
        self.0.set_config(config);
        self
    }
}

impl Deref for MQEstimator {
    type Target = Estimator<MQProblem>;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for MQEstimator {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}
