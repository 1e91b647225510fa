//! The search loop
//!
//! Finds the tuning assignment minimising the transformed time cost under
//! the problem's memory bound. Independent parameters are resolved first
//! through the attack's analytic rules (user-frozen values win); the joint
//! parameters are then enumerated as the Cartesian product of their current
//! ranges, row-major in declaration order, with the first minimum winning
//! ties. The whole loop is sequential and deterministic: re-running it with
//! the same inputs reproduces the same optimum bit for bit.

use crate::algorithm::{evaluate_sample, AttackModel, AuxMap, Optimum};
use crate::config::AlgorithmConfig;
use crate::params::{Assignment, ParamKind, ParamSet};
use crate::problem::Problem;

/// Runs the full search for one algorithm. `None` means the space was
/// empty or no sample passed the validity predicate and the memory bound.
pub(crate) fn find_optimum<P: Problem>(
    model: &dyn AttackModel<P>,
    problem: &P,
    params: &ParamSet,
    config: &AlgorithmConfig,
) -> Option<Optimum> {
    // Re-materialise the range table with independents pinned to their
    // analytic values. User-frozen parameters are visible to the analytic
    // rules regardless of declaration order.
    let mut search_params = params.clone();
    let mut resolved = Assignment::new();
    for entry in params.iter() {
        if let Some(v) = entry.fixed() {
            resolved.set(entry.name(), v);
        }
    }
    for entry in params.iter() {
        if entry.kind() != ParamKind::Independent || entry.fixed().is_some() {
            continue;
        }
        match model.optimal_independent(problem, entry.name(), &resolved) {
            Some(v) => {
                if v < entry.min() || v > entry.max() {
                    log::debug!(
                        "{}: analytic value {} for `{}` contradicts range [{}, {}]",
                        model.name(),
                        v,
                        entry.name(),
                        entry.min(),
                        entry.max()
                    );
                    return None;
                }
                resolved.set(entry.name(), v);
                search_params
                    .set_value(entry.name(), v)
                    .expect("analytic value checked against the range");
            }
            // no analytic rule: promoted to joint for this search
            None => {}
        }
    }

    let mut best: Option<(Assignment, crate::algorithm::CostSample)> = None;
    let mut tuples = 0usize;
    let mut admissible = 0usize;

    let mut consider = |assignment: &Assignment| {
        tuples += 1;
        if model.are_parameters_invalid(problem, assignment) {
            return;
        }
        let sample = evaluate_sample(model, problem, config, assignment, None);
        if !sample.is_feasible() {
            return;
        }
        if sample.memory > problem.memory_bound() {
            return;
        }
        admissible += 1;
        let better = match &best {
            Some((_, incumbent)) => sample.time < incumbent.time,
            None => true,
        };
        if better {
            best = Some((assignment.clone(), sample));
        }
    };

    match model.choices(problem, &search_params) {
        Some(generator) => {
            for assignment in generator {
                consider(&assignment);
            }
        }
        None => enumerate(&search_params, &mut consider),
    }

    log::debug!(
        "{}: {} tuples enumerated, {} admissible",
        model.name(),
        tuples,
        admissible
    );

    let (assignment, sample) = best?;
    // Re-price the winner once with the verbose sink attached so the cached
    // aux map describes exactly the minimising sample.
    let mut aux = AuxMap::new();
    evaluate_sample(model, problem, config, &assignment, Some(&mut aux));
    Some(Optimum {
        assignment,
        sample,
        aux,
    })
}

/// Row-major Cartesian product over the current ranges, reusing a single
/// assignment buffer. The first declared parameter varies slowest. An
/// empty parameter set yields exactly one empty assignment.
fn enumerate(params: &ParamSet, consider: &mut impl FnMut(&Assignment)) {
    let entries: Vec<_> = params.iter().collect();
    let mut values: Vec<i64> = entries.iter().map(|e| e.min()).collect();
    let mut assignment = Assignment::new();
    for (entry, v) in entries.iter().zip(&values) {
        assignment.set(entry.name(), *v);
    }
    loop {
        consider(&assignment);
        // odometer step, last position fastest
        let mut pos = entries.len();
        loop {
            if pos == 0 {
                return;
            }
            pos -= 1;
            if values[pos] < entries[pos].max() {
                values[pos] += 1;
                assignment.set(entries[pos].name(), values[pos]);
                for trailing in pos + 1..entries.len() {
                    values[trailing] = entries[trailing].min();
                    assignment.set(entries[trailing].name(), values[trailing]);
                }
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::{Algorithm, CostSample, OptimumState};
    use crate::problem::Problem;
    use std::sync::Arc;

    struct ToyProblem {
        bound: f64,
    }

    impl ToyProblem {
        fn unbounded() -> Self {
            Self {
                bound: f64::INFINITY,
            }
        }
    }

    impl Problem for ToyProblem {
        fn to_bitcomplexity_time(&self, basic_ops: f64) -> f64 {
            basic_ops + 1.0
        }
        fn to_bitcomplexity_memory(&self, elements: f64) -> f64 {
            elements + 1.0
        }
        fn memory_bound(&self) -> f64 {
            self.bound
        }
        fn nsolutions(&self) -> f64 {
            0.0
        }
    }

    /// Bowl-shaped cost with minimum at (a, b) = (3, 5).
    struct Bowl;

    impl AttackModel<ToyProblem> for Bowl {
        fn name(&self) -> &'static str {
            "Bowl"
        }
        fn declare_schema(&self, _problem: &ToyProblem, params: &mut ParamSet) {
            params.declare("a", 0, 10, ParamKind::Joint).unwrap();
            params.declare("b", 0, 10, ParamKind::Joint).unwrap();
        }
        fn cost(
            &self,
            _problem: &ToyProblem,
            assignment: &Assignment,
            aux: Option<&mut AuxMap>,
        ) -> CostSample {
            let a = assignment.expect("a");
            let b = assignment.expect("b");
            if let Some(aux) = aux {
                aux.insert("sum".into(), serde_json::json!(a + b));
            }
            CostSample::new(
                ((a - 3).pow(2) + (b - 5).pow(2)) as f64,
                (a + b) as f64,
            )
        }
    }

    #[test]
    fn finds_the_free_minimum() {
        let mut alg = Algorithm::new(Box::new(Bowl), Arc::new(ToyProblem::unbounded()));
        assert_eq!(alg.state(), OptimumState::Unevaluated);
        // transformed: raw 0 + unit conversion 1
        assert_eq!(alg.time_complexity(), 1.0);
        assert_eq!(alg.memory_complexity(), 9.0);
        assert_eq!(alg.state(), OptimumState::Optimal);
        let opt = alg.optimal_parameters().unwrap();
        assert_eq!((opt.get("a"), opt.get("b")), (Some(3), Some(5)));
        // aux map of the best sample was preserved
        assert_eq!(
            alg.verbose_information().unwrap().get("sum"),
            Some(&serde_json::json!(8))
        );
    }

    #[test]
    fn memory_bound_redirects_the_minimum() {
        // transformed memory is a + b + 1; bound 5 admits a + b <= 4,
        // where (1, 3) is the unique best remaining tuple
        let mut alg = Algorithm::new(Box::new(Bowl), Arc::new(ToyProblem { bound: 5.0 }));
        assert_eq!(alg.time_complexity(), 9.0);
        let opt = alg.optimal_parameters().unwrap();
        assert_eq!((opt.get("a"), opt.get("b")), (Some(1), Some(3)));
        assert!(alg.memory_complexity() <= 5.0);
    }

    #[test]
    fn impossible_bound_means_no_feasible_sample() {
        let mut alg = Algorithm::new(
            Box::new(Bowl),
            Arc::new(ToyProblem {
                bound: f64::NEG_INFINITY,
            }),
        );
        assert_eq!(alg.time_complexity(), f64::INFINITY);
        assert_eq!(alg.state(), OptimumState::NoFeasibleSample);
        assert!(alg.optimal_parameters().is_none());
        assert!(alg.optimal_parameters_dict().is_empty());
    }

    #[test]
    fn frozen_parameters_constrain_the_search() {
        let mut alg = Algorithm::new(Box::new(Bowl), Arc::new(ToyProblem::unbounded()));
        alg.set_parameters(&[("a", 0)]).unwrap();
        assert_eq!(alg.time_complexity(), 10.0);
        let opt = alg.optimal_parameters().unwrap();
        assert_eq!((opt.get("a"), opt.get("b")), (Some(0), Some(5)));
        // freezing to the free optimum reproduces the free result
        alg.reset_parameters();
        alg.set_parameters(&[("a", 3), ("b", 5)]).unwrap();
        assert_eq!(alg.time_complexity(), 1.0);
    }

    #[test]
    fn narrowed_range_is_honoured() {
        let mut alg = Algorithm::new(Box::new(Bowl), Arc::new(ToyProblem::unbounded()));
        alg.set_parameter_range("b", 0, 2).unwrap();
        let _ = alg.time_complexity();
        let opt = alg.optimal_parameters().unwrap();
        assert_eq!((opt.get("a"), opt.get("b")), (Some(3), Some(2)));
    }

    /// Flat cost surface: every tuple prices the same.
    struct Plateau;

    impl AttackModel<ToyProblem> for Plateau {
        fn name(&self) -> &'static str {
            "Plateau"
        }
        fn declare_schema(&self, _problem: &ToyProblem, params: &mut ParamSet) {
            params.declare("a", 2, 4, ParamKind::Joint).unwrap();
            params.declare("b", 7, 9, ParamKind::Joint).unwrap();
        }
        fn cost(
            &self,
            _problem: &ToyProblem,
            _assignment: &Assignment,
            _aux: Option<&mut AuxMap>,
        ) -> CostSample {
            CostSample::new(42.0, 0.0)
        }
    }

    #[test]
    fn ties_go_to_the_first_tuple_in_declaration_order() {
        let mut alg = Algorithm::new(Box::new(Plateau), Arc::new(ToyProblem::unbounded()));
        let _ = alg.time_complexity();
        let opt = alg.optimal_parameters().unwrap();
        assert_eq!((opt.get("a"), opt.get("b")), (Some(2), Some(7)));
    }

    /// Independent parameter with an analytic rule.
    struct WithAnalytic;

    impl AttackModel<ToyProblem> for WithAnalytic {
        fn name(&self) -> &'static str {
            "WithAnalytic"
        }
        fn declare_schema(&self, _problem: &ToyProblem, params: &mut ParamSet) {
            params.declare("c", 0, 10, ParamKind::Independent).unwrap();
            params.declare("a", 0, 10, ParamKind::Joint).unwrap();
        }
        fn optimal_independent(
            &self,
            _problem: &ToyProblem,
            name: &str,
            _fixed: &Assignment,
        ) -> Option<i64> {
            (name == "c").then_some(7)
        }
        fn cost(
            &self,
            _problem: &ToyProblem,
            assignment: &Assignment,
            _aux: Option<&mut AuxMap>,
        ) -> CostSample {
            let c = assignment.expect("c");
            let a = assignment.expect("a");
            CostSample::new((a - c).abs() as f64, 0.0)
        }
    }

    #[test]
    fn analytic_independents_are_filled_not_searched() {
        let mut alg = Algorithm::new(Box::new(WithAnalytic), Arc::new(ToyProblem::unbounded()));
        let _ = alg.time_complexity();
        let opt = alg.optimal_parameters().unwrap();
        assert_eq!((opt.get("c"), opt.get("a")), (Some(7), Some(7)));
        // a user freeze overrides the analytic rule
        alg.set_parameters(&[("c", 2)]).unwrap();
        let _ = alg.time_complexity();
        let opt = alg.optimal_parameters().unwrap();
        assert_eq!((opt.get("c"), opt.get("a")), (Some(2), Some(2)));
    }

    #[test]
    fn analytic_value_outside_the_range_empties_the_space() {
        let mut alg = Algorithm::new(Box::new(WithAnalytic), Arc::new(ToyProblem::unbounded()));
        alg.set_parameter_range("c", 0, 5).unwrap();
        assert_eq!(alg.time_complexity(), f64::INFINITY);
        assert_eq!(alg.state(), OptimumState::NoFeasibleSample);
    }

    /// Declared independent but no analytic rule: promoted to joint.
    struct Promoted;

    impl AttackModel<ToyProblem> for Promoted {
        fn name(&self) -> &'static str {
            "Promoted"
        }
        fn declare_schema(&self, _problem: &ToyProblem, params: &mut ParamSet) {
            params.declare("c", 0, 10, ParamKind::Independent).unwrap();
        }
        fn cost(
            &self,
            _problem: &ToyProblem,
            assignment: &Assignment,
            _aux: Option<&mut AuxMap>,
        ) -> CostSample {
            let c = assignment.expect("c");
            CostSample::new((c - 6).abs() as f64, 0.0)
        }
    }

    #[test]
    fn independents_without_a_rule_are_searched() {
        let mut alg = Algorithm::new(Box::new(Promoted), Arc::new(ToyProblem::unbounded()));
        assert_eq!(alg.time_complexity(), 1.0);
        assert_eq!(alg.optimal_parameters().unwrap().get("c"), Some(6));
    }

    /// Custom generator: only even `a` are ever priced.
    struct Evens;

    impl AttackModel<ToyProblem> for Evens {
        fn name(&self) -> &'static str {
            "Evens"
        }
        fn declare_schema(&self, _problem: &ToyProblem, params: &mut ParamSet) {
            params.declare("a", 0, 10, ParamKind::Joint).unwrap();
        }
        fn choices(
            &self,
            _problem: &ToyProblem,
            params: &ParamSet,
        ) -> Option<Box<dyn Iterator<Item = Assignment> + Send>> {
            let range = params.get("a").unwrap();
            let (lo, hi) = (range.min(), range.max());
            Some(Box::new((lo..=hi).filter(|a| a % 2 == 0).map(|a| {
                let mut assignment = Assignment::new();
                assignment.set("a", a);
                assignment
            })))
        }
        fn cost(
            &self,
            _problem: &ToyProblem,
            assignment: &Assignment,
            _aux: Option<&mut AuxMap>,
        ) -> CostSample {
            let a = assignment.expect("a");
            CostSample::new((a - 5).abs() as f64, 0.0)
        }
    }

    #[test]
    fn custom_generators_replace_the_product() {
        let mut alg = Algorithm::new(Box::new(Evens), Arc::new(ToyProblem::unbounded()));
        // nearest even value to the raw minimum at 5, first one wins
        assert_eq!(alg.time_complexity(), 2.0);
        assert_eq!(alg.optimal_parameters().unwrap().get("a"), Some(4));
    }

    #[test]
    fn rerun_after_reset_is_identical() {
        let mut alg = Algorithm::new(Box::new(Bowl), Arc::new(ToyProblem::unbounded()));
        let first = alg.time_complexity();
        let params = alg.optimal_parameters_dict();
        alg.reset();
        assert_eq!(alg.state(), OptimumState::Unevaluated);
        assert_eq!(alg.time_complexity(), first);
        assert_eq!(alg.optimal_parameters_dict(), params);
    }

    #[test]
    fn explicit_assignment_does_not_touch_the_cache() {
        let alg = Algorithm::new(Box::new(Bowl), Arc::new(ToyProblem::unbounded()));
        let sample = alg.complexity_with_parameters(&[("a", 0), ("b", 0)]).unwrap();
        assert_eq!(sample.time, 35.0);
        assert_eq!(alg.state(), OptimumState::Unevaluated);
        // unknown and missing names are rejected at the call-site
        assert!(alg.complexity_with_parameters(&[("z", 1)]).is_err());
        assert!(alg.complexity_with_parameters(&[("a", 1)]).is_err());
    }
}
