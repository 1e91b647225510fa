//! BooleanSolve / FXL
//!
//! Guess `k` variables and decide consistency of the remaining system at
//! its witness degree. The Las-Vegas variant tests random sparse
//! combinations, the deterministic one runs full-rank linear algebra; the
//! cheaper of the two is taken and the choice reported in the aux map.

use bitsec_num::{binomial, log2_binomial};
use bitsec_opt::{Assignment, AttackModel, AuxMap, CostSample, ParamKind, ParamSet};

use crate::problem::MQProblem;
use crate::series::witness_degree;
use crate::LINEAR_ALGEBRA_EXPONENT;

pub struct BooleanSolveFXL;

impl AttackModel<MQProblem> for BooleanSolveFXL {
    fn name(&self) -> &'static str {
        "BooleanSolveFXL"
    }

    fn applies_to(&self, problem: &MQProblem) -> bool {
        problem.n() >= 2
    }

    fn declare_schema(&self, problem: &MQProblem, params: &mut ParamSet) {
        let (n, _, _) = problem.parameters();
        params
            .declare("k", 1, n as i64 - 1, ParamKind::Joint)
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
        let Some(dwit) = witness_degree(remaining, m, q) else {
            return CostSample::INFEASIBLE;
        };
        let guesses = k as f64 * (q as f64).log2();
        let ncols = log2_binomial((remaining + dwit) as i64, dwit as i64);

        let las_vegas =
            guesses + (3.0 * binomial(remaining as i64 + 2, 2)).log2() + 2.0 * ncols;
        let deterministic =
            guesses + (m as f64).log2() + LINEAR_ALGEBRA_EXPONENT * ncols;
        let (time, variant) = if las_vegas <= deterministic {
            (las_vegas, "las_vegas")
        } else {
            (deterministic, "deterministic")
        };

        let memory = (2.0 * ncols).max(((m * n * n) as f64).log2());
        if let Some(aux) = aux {
            aux.insert("variant".into(), serde_json::json!(variant));
            aux.insert("dwit".into(), serde_json::json!(dwit));
        }
        CostSample::new(time, memory)
    }
}
