//! Prange's information-set decoding
//!
//! The plain permutation loop: permute, eliminate, hope the information
//! set is error free. Its single tuning parameter is the four-russians
//! table size, which has an analytic optimum and is therefore not searched.

use bitsec_num::log2_binomial;
use bitsec_opt::{Assignment, AttackModel, AuxMap, CostSample, ParamKind, ParamSet, Problem};

use crate::helpers::{
    gaussian_elimination_complexity, matrix_memory, optimize_m4ri, r_range_max,
};
use crate::problem::SDProblem;

pub struct Prange;

impl Prange {
    fn iterations(problem: &SDProblem) -> f64 {
        let (n, k, w) = problem.parameters();
        (log2_binomial(n as i64, w as i64)
            - log2_binomial((n - k) as i64, w as i64)
            - problem.nsolutions())
        .max(0.0)
    }
}

impl AttackModel<SDProblem> for Prange {
    fn name(&self) -> &'static str {
        "Prange"
    }

    fn declare_schema(&self, problem: &SDProblem, params: &mut ParamSet) {
        let (n, k, _) = problem.parameters();
        params
            .declare("r", 0, r_range_max(n, k), ParamKind::Independent)
            .expect("fresh schema");
    }

    fn optimal_independent(
        &self,
        problem: &SDProblem,
        name: &str,
        _fixed: &Assignment,
    ) -> Option<i64> {
        let (n, k, _) = problem.parameters();
        (name == "r").then(|| optimize_m4ri(n, k, problem.memory_bound()) as i64)
    }

    fn cost(
        &self,
        problem: &SDProblem,
        assignment: &Assignment,
        aux: Option<&mut AuxMap>,
    ) -> CostSample {
        let (n, k, _) = problem.parameters();
        let r = assignment.expect("r") as u64;
        let permutations = Self::iterations(problem);
        let gauss = gaussian_elimination_complexity(n, k, r).log2();
        if let Some(aux) = aux {
            aux.insert("permutations".into(), serde_json::json!(permutations));
            aux.insert("gauss".into(), serde_json::json!(gauss));
        }
        CostSample::new(permutations + gauss, matrix_memory(n, k, r).log2())
    }

    fn tilde_o_cost(&self, problem: &SDProblem, _assignment: &Assignment) -> Option<CostSample> {
        Some(CostSample::new(Self::iterations(problem), 0.0))
    }

    fn quantum_time(&self, problem: &SDProblem, assignment: &Assignment) -> Option<f64> {
        let (n, k, _) = problem.parameters();
        let r = assignment.expect("r") as u64;
        // Grover over the permutation space
        Some(Self::iterations(problem) / 2.0 + gaussian_elimination_complexity(n, k, r).log2())
    }
}
