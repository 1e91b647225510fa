//! Lokshtanov et al.'s polynomial method
//!
//! Beats brute force asymptotically by tabulating a high-degree
//! characteristic polynomial of the system over a split of the variables;
//! concretely the degree `2(q−1)(n₁+2)` monomial counts are so large that
//! the attack only pays off far beyond the instance sizes anyone tabulates.
//! The split size `n₁` is the tuning parameter.

use bitsec_num::{log2_add, log2_binomial};
use bitsec_opt::{Assignment, AttackModel, AuxMap, CostSample, ParamKind, ParamSet};

use crate::problem::MQProblem;

pub struct Lokshtanov;

impl AttackModel<MQProblem> for Lokshtanov {
    fn name(&self) -> &'static str {
        "Lokshtanov"
    }

    fn applies_to(&self, problem: &MQProblem) -> bool {
        problem.n() >= 4
    }

    fn declare_schema(&self, problem: &MQProblem, params: &mut ParamSet) {
        let (n, _, _) = problem.parameters();
        params
            .declare("n1", 1, n as i64 - 2, ParamKind::Joint)
            .expect("fresh schema");
    }

    fn cost(
        &self,
        problem: &MQProblem,
        assignment: &Assignment,
        aux: Option<&mut AuxMap>,
    ) -> CostSample {
        let (n, _, q) = problem.parameters();
        let n1 = assignment.expect("n1") as u64;
        let logq = (q as f64).log2();

        // characteristic polynomial degree after the (q-1)-th powers
        let degree = 2 * (q - 1) * (n1 + 2);
        let monomials = log2_binomial((n + degree) as i64, degree as i64);

        // brute-force tabulation over the majority split, then
        // interpolation and evaluation on the q^{n1} minority points
        let evaluation = (n - n1) as f64 * logq + monomials;
        let interpolation = n1 as f64 * logq + 2.0 * monomials + (n as f64).log2();
        let overhead = (100.0 * logq * (q - 1) as f64).log2();
        let time = overhead + log2_add(evaluation, interpolation);
        let memory = monomials + (n as f64).log2();
        if let Some(aux) = aux {
            aux.insert("degree".into(), serde_json::json!(degree));
            aux.insert("monomials".into(), serde_json::json!(monomials));
        }
        CostSample::new(time, memory)
    }
}
