//! Dumer's algorithm
//!
//! Like Stern, but the `l` merge window is folded into the split itself:
//! both halves draw from `(k + l)/2` columns, and the window must be error
//! free outside the `2p` chosen positions.

use bitsec_num::{binomial, log2_binomial};
use bitsec_opt::{Assignment, AttackModel, AuxMap, CostSample, ParamKind, ParamSet, Problem};

use crate::helpers::{
    gaussian_elimination_complexity, matrix_memory, merge_cost, optimize_m4ri, r_range_max,
};
use crate::problem::SDProblem;

pub struct Dumer;

impl AttackModel<SDProblem> for Dumer {
    fn name(&self) -> &'static str {
        "Dumer"
    }

    fn declare_schema(&self, problem: &SDProblem, params: &mut ParamSet) {
        let (n, k, w) = problem.parameters();
        params
            .declare("r", 0, r_range_max(n, k), ParamKind::Independent)
            .expect("fresh schema");
        params
            .declare("p", 0, (w / 2) as i64, ParamKind::Joint)
            .expect("fresh schema");
        params
            .declare("l", 0, (n - k) as i64, ParamKind::Joint)
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

    fn are_parameters_invalid(&self, problem: &SDProblem, assignment: &Assignment) -> bool {
        let (n, k, w) = problem.parameters();
        let p = assignment.expect("p");
        let l = assignment.expect("l");
        let k2 = (k as i64 + l) / 2;
        p > k2 || 2 * p > w as i64 || w as i64 - 2 * p > (n - k) as i64 - l
    }

    fn cost(
        &self,
        problem: &SDProblem,
        assignment: &Assignment,
        aux: Option<&mut AuxMap>,
    ) -> CostSample {
        let (n, k, w) = problem.parameters();
        let p = assignment.expect("p");
        let l = assignment.expect("l");
        let r = assignment.expect("r") as u64;
        let k2 = (k as i64 + l) / 2;

        let list = binomial(k2, p);
        let memory = (2.0 * list + matrix_memory(n, k, r)).log2();

        let permutations = (log2_binomial(n as i64, w as i64)
            - log2_binomial((n - k) as i64 - l, w as i64 - 2 * p)
            - 2.0 * log2_binomial(k2, p)
            - problem.nsolutions())
        .max(0.0);
        let gauss = gaussian_elimination_complexity(n, k, r);
        let time = permutations + (gauss + merge_cost(list, l)).log2();

        if let Some(aux) = aux {
            aux.insert("permutations".into(), serde_json::json!(permutations));
            aux.insert("gauss".into(), serde_json::json!(gauss.log2()));
            aux.insert("lists".into(), serde_json::json!([list.log2()]));
        }
        CostSample::new(time, memory)
    }
}
