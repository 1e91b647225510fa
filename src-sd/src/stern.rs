//! Stern's algorithm
//!
//! Splits the information set in two halves of `k/2` columns carrying `p`
//! errors each and merges the two candidate lists on `l` parity bits. The
//! `l`-bit window is re-projected (Indyk–Motwani) instead of re-permuting
//! the whole matrix, so the window only has to be disjoint from the
//! remaining `w − 2p` errors often enough, not always.

use bitsec_num::{binomial, log2_binomial};
use bitsec_opt::{Assignment, AttackModel, AuxMap, CostSample, ParamKind, ParamSet, Problem};

use crate::helpers::{
    gaussian_elimination_complexity, matrix_memory, merge_cost, optimize_m4ri, r_range_max,
    reprojections,
};
use crate::problem::SDProblem;

pub struct Stern;

impl AttackModel<SDProblem> for Stern {
    fn name(&self) -> &'static str {
        "Stern"
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
        let k1 = (k / 2) as i64;
        p > k1 || 2 * p > w as i64 || w as i64 - 2 * p > (n - k) as i64 - l
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
        let k1 = (k / 2) as i64;

        let list = binomial(k1, p);
        let memory = (2.0 * list + matrix_memory(n, k, r)).log2();

        let permutations = (log2_binomial(n as i64, w as i64)
            - log2_binomial((n - k) as i64, w as i64 - 2 * p)
            - 2.0 * log2_binomial(k1, p)
            - problem.nsolutions())
        .max(0.0);
        let projections = reprojections((n - k) as i64, w as i64 - 2 * p, l);
        let gauss = gaussian_elimination_complexity(n, k, r);
        let time = permutations + (gauss + projections * merge_cost(list, l)).log2();

        if let Some(aux) = aux {
            aux.insert("permutations".into(), serde_json::json!(permutations));
            aux.insert("gauss".into(), serde_json::json!(gauss.log2()));
            aux.insert("projections".into(), serde_json::json!(projections.log2()));
            aux.insert("lists".into(), serde_json::json!([list.log2()]));
        }
        CostSample::new(time, memory)
    }
}
