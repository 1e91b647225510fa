//! Dinur's first polynomial-method algorithm, binary fields only
//!
//! Solves boolean MQ in Õ(2^{0.6943 n}) time and Õ(2^{0.63 n}) memory; the
//! polynomial factors are quadratic in n. Mostly here as the family's
//! applicability example: the estimator drops it for every q ≠ 2.

use bitsec_opt::{Assignment, AttackModel, AuxMap, CostSample, ParamSet};

use crate::problem::MQProblem;

const TIME_EXPONENT: f64 = 0.6943;
const MEMORY_EXPONENT: f64 = 0.63;

pub struct DinurFirst;

impl AttackModel<MQProblem> for DinurFirst {
    fn name(&self) -> &'static str {
        "DinurFirst"
    }

    fn applies_to(&self, problem: &MQProblem) -> bool {
        problem.order_of_the_field() == 2
    }

    fn declare_schema(&self, _problem: &MQProblem, _params: &mut ParamSet) {}

    fn cost(
        &self,
        problem: &MQProblem,
        _assignment: &Assignment,
        _aux: Option<&mut AuxMap>,
    ) -> CostSample {
        let n = problem.n() as f64;
        CostSample::new(
            TIME_EXPONENT * n + 2.0 * n.log2(),
            MEMORY_EXPONENT * n + n.log2(),
        )
    }

    fn tilde_o_cost(&self, problem: &MQProblem, _assignment: &Assignment) -> Option<CostSample> {
        let n = problem.n() as f64;
        Some(CostSample::new(TIME_EXPONENT * n, MEMORY_EXPONENT * n))
    }
}
