//! Crossbred
//!
//! Preprocess the degree-`D` Macaulay matrix so that every surviving
//! equation has degree at most `d` in `k` kept variables, then brute-force
//! the other `n − k` variables and finish each guess by linearisation.
//! The admissibility predicate demands enough Macaulay rows to eliminate
//! all monomials outside the kept set; it is a counting bound, so slightly
//! conservative tuples are rejected rather than priced optimistically.

use bitsec_num::{binomial, log2_add};
use bitsec_opt::{Assignment, AttackModel, AuxMap, CostSample, ParamKind, ParamSet};

use crate::problem::MQProblem;

/// Box cap for the Macaulay degree; higher degrees are priced out well
/// before this on any instance worth estimating.
const MAX_DEGREE: i64 = 12;

pub struct Crossbred;

impl AttackModel<MQProblem> for Crossbred {
    fn name(&self) -> &'static str {
        "Crossbred"
    }

    fn applies_to(&self, problem: &MQProblem) -> bool {
        problem.n() >= 2
    }

    fn declare_schema(&self, problem: &MQProblem, params: &mut ParamSet) {
        let (n, _, _) = problem.parameters();
        let d_cap = MAX_DEGREE.min(n as i64);
        params
            .declare("big_d", 2, d_cap, ParamKind::Joint)
            .expect("fresh schema");
        params
            .declare("d", 1, d_cap - 1, ParamKind::Joint)
            .expect("fresh schema");
        params
            .declare("k", 1, n as i64 - 1, ParamKind::Joint)
            .expect("fresh schema");
    }

    fn are_parameters_invalid(&self, _problem: &MQProblem, assignment: &Assignment) -> bool {
        let big_d = assignment.expect("big_d");
        let d = assignment.expect("d");
        let k = assignment.expect("k");
        d >= big_d || d > k
    }

    fn cost(
        &self,
        problem: &MQProblem,
        assignment: &Assignment,
        aux: Option<&mut AuxMap>,
    ) -> CostSample {
        let (n, m, q) = problem.parameters();
        let big_d = assignment.expect("big_d");
        let d = assignment.expect("d");
        let k = assignment.expect("k");

        let rows = m as f64 * binomial(n as i64 + big_d - 2, big_d - 2);
        let cols = binomial(n as i64 + big_d, big_d);
        let kept = binomial(k + d, d);
        if rows < cols - kept {
            return CostSample::INFEASIBLE;
        }

        // sparse elimination on the Macaulay matrix, then one linearised
        // solve per guess of the n - k dropped variables
        let preprocessing = 2.0 * cols.log2();
        let exhaustive =
            (n as i64 - k) as f64 * (q as f64).log2() + 2.0 * kept.log2();
        let time = log2_add(preprocessing, exhaustive);
        let memory = cols.log2().max(((m * n * n) as f64).log2());
        if let Some(aux) = aux {
            aux.insert("preprocessing".into(), serde_json::json!(preprocessing));
            aux.insert("exhaustive".into(), serde_json::json!(exhaustive));
        }
        CostSample::new(time, memory)
    }
}
