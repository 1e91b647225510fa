//! Fast exhaustive search
//!
//! Gray-code enumeration of all q^n assignments with amortised constant
//! work per candidate (Bouillaguet et al.); over F₂ the constant is the
//! classic 4·log₂ n, elsewhere a single log₂ q factor. No tuning
//! parameters: the schema is empty and the search degenerates to pricing
//! the one possible assignment.

use bitsec_opt::{Assignment, AttackModel, AuxMap, CostSample, ParamSet, Problem};

use crate::problem::MQProblem;

pub struct ExhaustiveSearch;

impl AttackModel<MQProblem> for ExhaustiveSearch {
    fn name(&self) -> &'static str {
        "ExhaustiveSearch"
    }

    fn declare_schema(&self, _problem: &MQProblem, _params: &mut ParamSet) {}

    fn cost(
        &self,
        problem: &MQProblem,
        _assignment: &Assignment,
        aux: Option<&mut AuxMap>,
    ) -> CostSample {
        let (n, m, q) = problem.parameters();
        let logq = (q as f64).log2();
        // stopping after the first of the expected solutions
        let solutions = problem.nsolutions().exp2();
        let mut time = n as f64 * logq - (solutions + 1.0).log2();
        time += if q == 2 {
            (4.0 * (n as f64).log2()).log2()
        } else {
            logq.log2()
        };
        let memory = ((m * n * n) as f64).log2();
        if let Some(aux) = aux {
            aux.insert("candidates".into(), serde_json::json!(n as f64 * logq));
        }
        CostSample::new(time, memory)
    }

    fn tilde_o_cost(&self, problem: &MQProblem, _assignment: &Assignment) -> Option<CostSample> {
        let (n, _, q) = problem.parameters();
        let time = (n as f64 * (q as f64).log2() - problem.nsolutions()).max(0.0);
        Some(CostSample::new(time, 0.0))
    }

    fn quantum_time(&self, problem: &MQProblem, _assignment: &Assignment) -> Option<f64> {
        let (n, _, q) = problem.parameters();
        let logq = (q as f64).log2();
        // Grover over the assignment space
        Some(n as f64 * logq / 2.0 + logq.log2().max(0.0))
    }
}
