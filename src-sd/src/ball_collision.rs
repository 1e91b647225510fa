//! Ball-collision decoding
//!
//! Extends Stern by allowing `pl` errors inside each half of the `l`-bit
//! window, which relaxes the demand on the window at the price of larger
//! lists. With `pl = 0` it degenerates to a fixed-window Stern.

use bitsec_num::{binomial, log2_binomial};
use bitsec_opt::{Assignment, AttackModel, AuxMap, CostSample, ParamKind, ParamSet, Problem};

use crate::helpers::{
    gaussian_elimination_complexity, matrix_memory, merge_cost, optimize_m4ri, r_range_max,
};
use crate::problem::SDProblem;

pub struct BallCollision;

impl AttackModel<SDProblem> for BallCollision {
    fn name(&self) -> &'static str {
        "BallCollision"
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
            .declare("pl", 0, (w / 2) as i64, ParamKind::Joint)
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
        let pl = assignment.expect("pl");
        let l = assignment.expect("l");
        p > (k / 2) as i64
            || pl > l / 2
            || 2 * (p + pl) > w as i64
            || w as i64 - 2 * p - 2 * pl > (n - k) as i64 - l
    }

    fn cost(
        &self,
        problem: &SDProblem,
        assignment: &Assignment,
        aux: Option<&mut AuxMap>,
    ) -> CostSample {
        let (n, k, w) = problem.parameters();
        let p = assignment.expect("p");
        let pl = assignment.expect("pl");
        let l = assignment.expect("l");
        let r = assignment.expect("r") as u64;
        let k1 = (k / 2) as i64;
        let half_l = l / 2;

        let list = binomial(k1, p) * binomial(half_l, pl);
        let memory = (2.0 * list + matrix_memory(n, k, r)).log2();

        let permutations = (log2_binomial(n as i64, w as i64)
            - log2_binomial((n - k) as i64 - l, w as i64 - 2 * p - 2 * pl)
            - 2.0 * log2_binomial(k1, p)
            - 2.0 * log2_binomial(half_l, pl)
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
