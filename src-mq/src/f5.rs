//! F5 Gröbner-basis computation
//!
//! Semi-regular cost: dense linear algebra on the Macaulay matrix at the
//! degree of regularity, `O(m · C(n + d_reg, d_reg)^ω)`. Under-determined
//! systems over large fields have no finite degree of regularity and are
//! reported infeasible.

use bitsec_num::log2_binomial;
use bitsec_opt::{Assignment, AttackModel, AuxMap, CostSample, ParamSet};

use crate::problem::MQProblem;
use crate::series::degree_of_regularity;
use crate::LINEAR_ALGEBRA_EXPONENT;

pub struct F5;

impl AttackModel<MQProblem> for F5 {
    fn name(&self) -> &'static str {
        "F5"
    }

    fn declare_schema(&self, _problem: &MQProblem, _params: &mut ParamSet) {}

    fn cost(
        &self,
        problem: &MQProblem,
        _assignment: &Assignment,
        aux: Option<&mut AuxMap>,
    ) -> CostSample {
        let (n, m, q) = problem.parameters();
        let Some(dreg) = degree_of_regularity(n, m, q) else {
            return CostSample::INFEASIBLE;
        };
        let ncols = log2_binomial((n + dreg) as i64, dreg as i64);
        let time = (m as f64).log2() + LINEAR_ALGEBRA_EXPONENT * ncols;
        let memory = (2.0 * ncols).max(((m * n * n) as f64).log2());
        if let Some(aux) = aux {
            aux.insert("dreg".into(), serde_json::json!(dreg));
        }
        CostSample::new(time, memory)
    }
}
