//! Estimator façade
//!
//! Aggregates every applicable attack for one problem instance, propagates
//! configuration to the owned algorithms, runs their searches and packages
//! the results. Algorithms are kept in registration order, which is also
//! the order of the report.

use rayon::prelude::*;
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::algorithm::{Algorithm, AttackModel};
use crate::config::{ComplexityType, EstimatorConfig, MemoryAccess};
use crate::error::ParameterError;
use crate::problem::Problem;
use crate::report::{AlgorithmReport, Report};

/// All applicable attacks for one problem, plus the shared configuration.
pub struct Estimator<P: Problem> {
    problem: Arc<P>,
    algorithms: Vec<Algorithm<P>>,
    config: EstimatorConfig,
}

impl<P: Problem> Estimator<P> {
    /// Builds the estimator from a plug-in registry, dropping attacks that
    /// are excluded by name or that do not apply to the instance.
    pub fn new(problem: P, models: Vec<Box<dyn AttackModel<P>>>, excluded: &[&str]) -> Self {
        let problem = Arc::new(problem);
        let algorithms = models
            .into_iter()
            .filter(|m| !excluded.contains(&m.name()))
            .filter(|m| m.applies_to(&problem))
            .map(|m| Algorithm::new(m, Arc::clone(&problem)))
            .collect();
        Self {
            problem,
            algorithms,
            config: EstimatorConfig::default(),
        }
    }

    pub fn with_config(mut self, config: EstimatorConfig) -> Self {
        self.set_config(config);
        self
    }

    /// Replaces the whole configuration and propagates the cost-model part
    /// to every owned algorithm (which invalidates their caches).
    pub fn set_config(&mut self, config: EstimatorConfig) {
        for alg in &mut self.algorithms {
            alg.set_config(config.cost.clone());
        }
        self.config = config;
    }

    pub fn config(&self) -> &EstimatorConfig {
        &self.config
    }

    pub fn problem(&self) -> &P {
        &self.problem
    }

    /// Names of the attacks that survived exclusion and applicability.
    pub fn algorithm_names(&self) -> Vec<&'static str> {
        self.algorithms.iter().map(|a| a.name()).collect()
    }

    pub fn algorithms(&self) -> &[Algorithm<P>] {
        &self.algorithms
    }

    pub fn algorithms_mut(&mut self) -> &mut [Algorithm<P>] {
        &mut self.algorithms
    }

    /// Mutable access to one algorithm, for per-algorithm overrides.
    pub fn algorithm_mut(&mut self, name: &str) -> Result<&mut Algorithm<P>, ParameterError> {
        self.algorithms
            .iter_mut()
            .find(|a| a.name() == name)
            .ok_or_else(|| ParameterError::UnknownAlgorithm(name.to_string()))
    }

    pub fn set_complexity_type(&mut self, t: ComplexityType) {
        self.config.cost.complexity_type = t;
        for alg in &mut self.algorithms {
            alg.set_complexity_type(t);
        }
    }

    pub fn set_bit_complexities(&mut self, on: bool) {
        self.config.cost.bit_complexities = on;
        for alg in &mut self.algorithms {
            alg.set_bit_complexities(on);
        }
    }

    pub fn set_memory_access(&mut self, access: MemoryAccess) {
        self.config.cost.memory_access = access.clone();
        for alg in &mut self.algorithms {
            alg.set_memory_access(access.clone());
        }
    }

    /// Runs every algorithm's search and returns the structured report.
    ///
    /// The per-algorithm searches are independent, so they run on the rayon
    /// pool; report order stays the registration order.
    pub fn estimate(&mut self) -> Report {
        let show_quantum = self.config.show_quantum_complexity;
        let show_tilde_o = self.config.show_tilde_o_time;
        let entries = self
            .algorithms
            .par_iter_mut()
            .map(|alg| {
                let time = alg.time_complexity();
                let memory = alg.memory_complexity();
                let quantum_time = if show_quantum {
                    Some(alg.quantum_time_complexity())
                } else {
                    None
                };
                let (tilde_o_time, tilde_o_memory) = if show_tilde_o {
                    let s = alg.tilde_o_complexity();
                    (Some(s.time), Some(s.memory))
                } else {
                    (None, None)
                };
                let parameters: BTreeMap<String, i64> = alg
                    .optimal_parameters_dict()
                    .iter()
                    .map(|(n, v)| (n.to_string(), v))
                    .collect();
                let additional_information =
                    alg.verbose_information().cloned().unwrap_or_default();
                AlgorithmReport {
                    algorithm: alg.name().to_string(),
                    time,
                    memory,
                    quantum_time,
                    tilde_o_time,
                    tilde_o_memory,
                    parameters,
                    additional_information,
                }
            })
            .collect();
        Report { entries }
    }

    /// The algorithm with the smallest minimised time, computing optima as
    /// needed. `None` when no algorithm is applicable or none is feasible.
    pub fn fastest_algorithm(&mut self) -> Option<&Algorithm<P>> {
        let mut best: Option<(usize, f64)> = None;
        for (i, alg) in self.algorithms.iter_mut().enumerate() {
            let t = alg.time_complexity();
            if t.is_finite() && best.is_none_or(|(_, bt)| t < bt) {
                best = Some((i, t));
            }
        }
        best.map(|(i, _)| &self.algorithms[i])
    }

    /// Resets every owned algorithm's cache (ranges and frozen values are
    /// kept).
    pub fn reset(&mut self) {
        for alg in &mut self.algorithms {
            alg.reset();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::{AuxMap, CostSample, OptimumState};
    use crate::params::{Assignment, ParamSet};

    struct FlatProblem;

    impl Problem for FlatProblem {
        fn to_bitcomplexity_time(&self, basic_ops: f64) -> f64 {
            basic_ops + 4.0
        }
        fn to_bitcomplexity_memory(&self, elements: f64) -> f64 {
            elements + 4.0
        }
        fn nsolutions(&self) -> f64 {
            0.0
        }
    }

    struct Fixed {
        name: &'static str,
        time: f64,
        applicable: bool,
    }

    impl AttackModel<FlatProblem> for Fixed {
        fn name(&self) -> &'static str {
            self.name
        }
        fn applies_to(&self, _problem: &FlatProblem) -> bool {
            self.applicable
        }
        fn declare_schema(&self, _problem: &FlatProblem, _params: &mut ParamSet) {}
        fn cost(
            &self,
            _problem: &FlatProblem,
            _assignment: &Assignment,
            _aux: Option<&mut AuxMap>,
        ) -> CostSample {
            CostSample::new(self.time, 1.0)
        }
    }

    fn registry() -> Vec<Box<dyn AttackModel<FlatProblem>>> {
        vec![
            Box::new(Fixed {
                name: "Slow",
                time: 10.0,
                applicable: true,
            }),
            Box::new(Fixed {
                name: "Fast",
                time: 5.0,
                applicable: true,
            }),
            Box::new(Fixed {
                name: "Elsewhere",
                time: 1.0,
                applicable: false,
            }),
        ]
    }

    #[test]
    fn applicability_and_exclusion_filter_the_registry() {
        let est = Estimator::new(FlatProblem, registry(), &[]);
        assert_eq!(est.algorithm_names(), vec!["Slow", "Fast"]);
        let est = Estimator::new(FlatProblem, registry(), &["Slow"]);
        assert_eq!(est.algorithm_names(), vec!["Fast"]);
    }

    #[test]
    fn report_keeps_registration_order_and_fastest_wins() {
        let mut est = Estimator::new(FlatProblem, registry(), &[]);
        let report = est.estimate();
        let names: Vec<&str> = report.entries.iter().map(|e| e.algorithm.as_str()).collect();
        assert_eq!(names, vec!["Slow", "Fast"]);
        assert_eq!(report.entries[0].time, 14.0);
        assert_eq!(report.entries[1].time, 9.0);
        assert_eq!(est.fastest_algorithm().unwrap().name(), "Fast");
    }

    #[test]
    fn excluding_one_algorithm_leaves_the_others_untouched() {
        let mut all = Estimator::new(FlatProblem, registry(), &[]);
        let mut some = Estimator::new(FlatProblem, registry(), &["Fast"]);
        let all_report = all.estimate();
        let some_report = some.estimate();
        assert_eq!(
            all_report.get("Slow").unwrap().time,
            some_report.get("Slow").unwrap().time
        );
    }

    #[test]
    fn config_writes_propagate_and_invalidate() {
        let mut est = Estimator::new(FlatProblem, registry(), &[]);
        let _ = est.estimate();
        for alg in est.algorithms() {
            assert_eq!(alg.state(), OptimumState::Optimal);
        }
        est.set_bit_complexities(false);
        for alg in est.algorithms() {
            assert_eq!(alg.state(), OptimumState::Unevaluated);
            assert!(!alg.config().bit_complexities);
        }
        let report = est.estimate();
        // without unit conversion the raw costs come through
        assert_eq!(report.get("Fast").unwrap().time, 5.0);
    }

    #[test]
    fn per_algorithm_override_stays_local() {
        let mut est = Estimator::new(FlatProblem, registry(), &[]);
        est.algorithm_mut("Fast")
            .unwrap()
            .set_bit_complexities(false);
        assert!(est.algorithm_mut("Nope").is_err());
        let report = est.estimate();
        assert_eq!(report.get("Fast").unwrap().time, 5.0);
        assert_eq!(report.get("Slow").unwrap().time, 14.0);
    }

    #[test]
    fn no_applicable_algorithms_means_no_fastest() {
        let mut est = Estimator::new(FlatProblem, registry(), &["Slow", "Fast"]);
        assert!(est.algorithm_names().is_empty());
        assert!(est.fastest_algorithm().is_none());
        assert!(est.estimate().entries.is_empty());
    }
}
