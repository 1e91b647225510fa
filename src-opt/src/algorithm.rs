//! Hosting one attack algorithm over one problem
//!
//! An [`AttackModel`] is the plug-in surface a concrete attack implements:
//! its tuning schema, an applicability check, and pure cost formulas. The
//! [`Algorithm`] wrapper owns everything stateful around it: the current
//! parameter ranges, the cost-model configuration, and the cached optimum,
//! and applies the cost transforms. Cost functions stay oblivious to unit
//! conversion, memory bounds and search order.

use std::sync::Arc;

use crate::config::{AlgorithmConfig, ComplexityType, MemoryAccess};
use crate::error::ParameterError;
use crate::params::{Assignment, ParamKind, ParamSet};
use crate::problem::Problem;
use crate::search;

/// Open dictionary for verbose per-sample information (list sizes,
/// sub-costs). Written by cost functions under string keys.
pub type AuxMap = serde_json::Map<String, serde_json::Value>;

/// The `(time, memory)` pair returned by a cost function for one tuning
/// assignment, both as base-2 logarithms. `time = +∞` marks an infeasible
/// assignment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostSample {
    pub time: f64,
    pub memory: f64,
}

impl CostSample {
    pub const INFEASIBLE: CostSample = CostSample {
        time: f64::INFINITY,
        memory: f64::INFINITY,
    };

    pub fn new(time: f64, memory: f64) -> Self {
        Self { time, memory }
    }

    pub fn is_feasible(&self) -> bool {
        self.time.is_finite()
    }
}

/// Capability set one concrete attack implements.
///
/// `cost` must be pure, work in log₂ space throughout, and never iterate
/// over tuning parameters; searching is the host's job. The optional
/// capabilities default to "absent", which the host reports as `+∞`.
pub trait AttackModel<P: Problem>: Send + Sync {
    /// Display name; also the identifier used in exclusion lists.
    fn name(&self) -> &'static str;

    /// Declares the tuning schema, independents first, joints last.
    fn declare_schema(&self, problem: &P, params: &mut ParamSet);

    /// Whether the attack is defined for this problem instance.
    fn applies_to(&self, _problem: &P) -> bool {
        true
    }

    /// Cost of one full tuning assignment, in the attack's native units.
    fn cost(&self, problem: &P, assignment: &Assignment, aux: Option<&mut AuxMap>) -> CostSample;

    /// Cheap rejection predicate; skipped tuples do not count as samples.
    fn are_parameters_invalid(&self, _problem: &P, _assignment: &Assignment) -> bool {
        false
    }

    /// Analytic value of an independent parameter, given the problem and
    /// the parameters fixed so far. `None` promotes the parameter to joint
    /// for the running search.
    fn optimal_independent(
        &self,
        _problem: &P,
        _name: &str,
        _fixed: &Assignment,
    ) -> Option<i64> {
        None
    }

    /// Replaces the built-in Cartesian enumerator, e.g. to enforce parity
    /// constraints without pricing the skipped tuples. The generator must
    /// honour the frozen values in `params`.
    fn choices(
        &self,
        _problem: &P,
        _params: &ParamSet,
    ) -> Option<Box<dyn Iterator<Item = Assignment> + Send>> {
        None
    }

    /// Asymptotic Õ cost with polylogarithmic factors stripped.
    fn tilde_o_cost(&self, _problem: &P, _assignment: &Assignment) -> Option<CostSample> {
        None
    }

    /// Quantum (Grover-accelerated) time, in the attack's native units.
    fn quantum_time(&self, _problem: &P, _assignment: &Assignment) -> Option<f64> {
        None
    }
}

/// Lifecycle of an algorithm's optimum cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptimumState {
    /// Nothing computed yet (also the state after any mutation).
    Unevaluated,
    /// A search is in flight; transient, never observed by callers.
    Optimising,
    /// The cache holds the minimising assignment and its cost.
    Optimal,
    /// The search exhausted the space without one admissible sample.
    NoFeasibleSample,
}

/// Cached result of a completed search.
#[derive(Debug, Clone)]
pub struct Optimum {
    pub assignment: Assignment,
    pub sample: CostSample,
    pub aux: AuxMap,
}

/// One attack algorithm bound to one problem instance.
pub struct Algorithm<P: Problem> {
    model: Box<dyn AttackModel<P>>,
    problem: Arc<P>,
    params: ParamSet,
    config: AlgorithmConfig,
    state: OptimumState,
    optimum: Option<Optimum>,
}

impl<P: Problem> Algorithm<P> {
    pub fn new(model: Box<dyn AttackModel<P>>, problem: Arc<P>) -> Self {
        let mut params = ParamSet::new();
        model.declare_schema(&problem, &mut params);
        let mut seen_joint = false;
        for entry in params.iter() {
            match entry.kind() {
                ParamKind::Joint => seen_joint = true,
                ParamKind::Independent => assert!(
                    !seen_joint,
                    "schema of `{}` declares independent `{}` after a joint parameter",
                    model.name(),
                    entry.name()
                ),
            }
        }
        Self {
            model,
            problem,
            params,
            config: AlgorithmConfig::default(),
            state: OptimumState::Unevaluated,
            optimum: None,
        }
    }

    pub fn name(&self) -> &'static str {
        self.model.name()
    }

    pub fn problem(&self) -> &P {
        &self.problem
    }

    pub fn params(&self) -> &ParamSet {
        &self.params
    }

    pub fn config(&self) -> &AlgorithmConfig {
        &self.config
    }

    pub fn state(&self) -> OptimumState {
        self.state
    }

    pub fn set_complexity_type(&mut self, t: ComplexityType) {
        self.config.complexity_type = t;
        self.invalidate();
    }

    pub fn set_bit_complexities(&mut self, on: bool) {
        self.config.bit_complexities = on;
        self.invalidate();
    }

    pub fn set_memory_access(&mut self, access: MemoryAccess) {
        self.config.memory_access = access;
        self.invalidate();
    }

    pub fn set_config(&mut self, config: AlgorithmConfig) {
        self.config = config;
        self.invalidate();
    }

    /// Freezes several parameters at once; all-or-nothing on error.
    pub fn set_parameters(&mut self, values: &[(&str, i64)]) -> Result<(), ParameterError> {
        let mut staged = self.params.clone();
        for &(name, value) in values {
            staged.set_value(name, value)?;
        }
        self.params = staged;
        self.invalidate();
        Ok(())
    }

    /// Narrows one parameter's search interval.
    pub fn set_parameter_range(
        &mut self,
        name: &str,
        min: i64,
        max: i64,
    ) -> Result<(), ParameterError> {
        self.params.set_range(name, min, max)?;
        self.invalidate();
        Ok(())
    }

    /// Clears the cached optimum; ranges and frozen values survive.
    pub fn reset(&mut self) {
        self.invalidate();
    }

    /// Clears the cache *and* restores the declared parameter ranges.
    pub fn reset_parameters(&mut self) {
        self.params.reset();
        self.invalidate();
    }

    /// Minimised time complexity (log₂), searching on first call.
    /// `+∞` when no admissible sample exists.
    pub fn time_complexity(&mut self) -> f64 {
        self.ensure_optimum();
        self.optimum
            .as_ref()
            .map_or(f64::INFINITY, |o| o.sample.time)
    }

    /// Memory complexity (log₂) at the time-minimising assignment.
    pub fn memory_complexity(&mut self) -> f64 {
        self.ensure_optimum();
        self.optimum
            .as_ref()
            .map_or(f64::INFINITY, |o| o.sample.memory)
    }

    /// The minimising assignment, computed if not cached.
    pub fn optimal_parameters(&mut self) -> Option<&Assignment> {
        self.ensure_optimum();
        self.optimum.as_ref().map(|o| &o.assignment)
    }

    /// Snapshot of the currently cached assignment, possibly empty.
    pub fn optimal_parameters_dict(&self) -> Assignment {
        self.optimum
            .as_ref()
            .map(|o| o.assignment.clone())
            .unwrap_or_default()
    }

    /// Snapshot of the aux map preserved from the best sample.
    pub fn verbose_information(&self) -> Option<&AuxMap> {
        self.optimum.as_ref().map(|o| &o.aux)
    }

    /// Quantum time at the classical optimum, `+∞` when the attack exposes
    /// no quantum variant or no optimum exists.
    pub fn quantum_time_complexity(&mut self) -> f64 {
        self.ensure_optimum();
        let Some(optimum) = self.optimum.as_ref() else {
            return f64::INFINITY;
        };
        match self
            .model
            .quantum_time(&self.problem, &optimum.assignment)
        {
            Some(t) if self.config.bit_complexities => self.problem.to_bitcomplexity_time(t),
            Some(t) => t,
            None => f64::INFINITY,
        }
    }

    /// Õ cost at the classical optimum, `CostSample::INFEASIBLE` when the
    /// attack has no asymptotic variant.
    pub fn tilde_o_complexity(&mut self) -> CostSample {
        self.ensure_optimum();
        let Some(optimum) = self.optimum.as_ref() else {
            return CostSample::INFEASIBLE;
        };
        self.model
            .tilde_o_cost(&self.problem, &optimum.assignment)
            .unwrap_or(CostSample::INFEASIBLE)
    }

    /// Transformed cost of an explicit assignment, bypassing the cache.
    ///
    /// Joint parameters must all be given; independents missing from
    /// `values` are filled by the attack's analytic rule. Unknown names are
    /// rejected at the call-site. The memory bound is not applied here;
    /// the caller asked for this exact assignment's price.
    pub fn complexity_with_parameters(
        &self,
        values: &[(&str, i64)],
    ) -> Result<CostSample, ParameterError> {
        for &(name, _) in values {
            if self.params.get(name).is_none() {
                return Err(ParameterError::UnknownParameter(name.to_string()));
            }
        }
        let mut assignment = Assignment::new();
        for entry in self.params.iter() {
            let given = values
                .iter()
                .find(|(n, _)| *n == entry.name())
                .map(|&(_, v)| v);
            match (given, entry.kind()) {
                (Some(v), _) => assignment.set(entry.name(), v),
                (None, ParamKind::Independent) => {
                    match self
                        .model
                        .optimal_independent(&self.problem, entry.name(), &assignment)
                    {
                        Some(v) => assignment.set(entry.name(), v),
                        None => {
                            return Err(ParameterError::MissingParameter(
                                entry.name().to_string(),
                            ));
                        }
                    }
                }
                (None, ParamKind::Joint) => {
                    return Err(ParameterError::MissingParameter(entry.name().to_string()));
                }
            }
        }
        if self
            .model
            .are_parameters_invalid(&self.problem, &assignment)
        {
            return Ok(CostSample::INFEASIBLE);
        }
        Ok(evaluate_sample(
            self.model.as_ref(),
            &self.problem,
            &self.config,
            &assignment,
            None,
        ))
    }

    fn invalidate(&mut self) {
        self.state = OptimumState::Unevaluated;
        self.optimum = None;
    }

    fn ensure_optimum(&mut self) {
        if self.state != OptimumState::Unevaluated {
            return;
        }
        self.state = OptimumState::Optimising;
        let result = search::find_optimum(
            self.model.as_ref(),
            self.problem.as_ref(),
            &self.params,
            &self.config,
        );
        match result {
            Some(optimum) => {
                self.optimum = Some(optimum);
                self.state = OptimumState::Optimal;
            }
            None => {
                self.optimum = None;
                self.state = OptimumState::NoFeasibleSample;
            }
        }
    }
}

/// Applies the cost-model transform chain to one assignment: the pure cost
/// in native units, then unit conversion, then the memory-access penalty.
/// In Õ mode the attack's asymptotic cost replaces the chain entirely.
pub(crate) fn evaluate_sample<P: Problem>(
    model: &dyn AttackModel<P>,
    problem: &P,
    config: &AlgorithmConfig,
    assignment: &Assignment,
    aux: Option<&mut AuxMap>,
) -> CostSample {
    match config.complexity_type {
        ComplexityType::Estimate => {
            let raw = model.cost(problem, assignment, aux);
            let (time, memory) = if config.bit_complexities {
                (
                    problem.to_bitcomplexity_time(raw.time),
                    problem.to_bitcomplexity_memory(raw.memory),
                )
            } else {
                (raw.time, raw.memory)
            };
            CostSample {
                time: time + config.memory_access.penalty(memory),
                memory,
            }
        }
        ComplexityType::TildeO => model
            .tilde_o_cost(problem, assignment)
            .unwrap_or(CostSample::INFEASIBLE),
    }
}
