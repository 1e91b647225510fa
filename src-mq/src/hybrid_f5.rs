//! Hybrid F5
//!
//! Guess `k` variables, run F5 on the remaining `n − k`: the q^k guessing
//! factor buys a smaller degree of regularity. `k = 0` recovers plain F5.

use bitsec_num::log2_binomial;
use bitsec_opt::{Assignment, AttackModel, AuxMap, CostSample, ParamKind, ParamSet};

use crate::problem::MQProblem;
use crate::series::degree_of_regularity;
use crate::LINEAR_ALGEBRA_EXPONENT;

pub struct HybridF5;

impl AttackModel<MQProblem> for HybridF5 {
    fn name(&self) -> &'static str {
        "HybridF5"
    }

    fn declare_schema(&self, problem: &MQProblem, params: &mut ParamSet) {
        let (n, _, _) = problem.parameters();
        params
            .declare("k", 0, n as i64 - 1, ParamKind::Joint)
            .expect("fresh schema");
    }

    fn cost(
        &self,
        problem: &MQProblem,
        assignment: &Assignment,
        aux: Option<&mut AuxMap>,
    ) -> CostSample {
        let (n, m, q) = problem.parameters();
        let k = assignment.expect("k") as u64;
        let remaining = n - k;
        let Some(dreg) = degree_of_regularity(remaining, m, q) else {
            return CostSample::INFEASIBLE;
        };
        let ncols = log2_binomial((remaining + dreg) as i64, dreg as i64);
        let time = k as f64 * (q as f64).log2()
            + (m as f64).log2()
            + LINEAR_ALGEBRA_EXPONENT * ncols;
        let memory = (2.0 * ncols).max(((m * n * n) as f64).log2());
        if let Some(aux) = aux {
            aux.insert("dreg".into(), serde_json::json!(dreg));
        }
        CostSample::new(time, memory)
    }
}
