//! Structured estimation results
//!
//! The report is the only externalised surface of the core: a list of
//! per-algorithm entries in registration order, serialisable with serde so
//! that any renderer (plain-text table, JSON consumer) can format it.
//! Infinite complexities serialise as `null`; renderers print them as `--`.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::algorithm::AuxMap;

/// Estimation results for every algorithm of one estimator run.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub entries: Vec<AlgorithmReport>,
}

/// One algorithm's minimised complexities and chosen tuning parameters.
#[derive(Debug, Clone, Serialize)]
pub struct AlgorithmReport {
    pub algorithm: String,
    pub time: f64,
    pub memory: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantum_time: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tilde_o_time: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tilde_o_memory: Option<f64>,
    pub parameters: BTreeMap<String, i64>,
    pub additional_information: AuxMap,
}

impl Report {
    pub fn get(&self, algorithm: &str) -> Option<&AlgorithmReport> {
        self.entries.iter().find(|e| e.algorithm == algorithm)
    }

    /// Entry with the smallest finite time, first one on ties.
    pub fn fastest(&self) -> Option<&AlgorithmReport> {
        self.entries
            .iter()
            .filter(|e| e.time.is_finite())
            .fold(None, |best: Option<&AlgorithmReport>, e| match best {
                Some(b) if b.time <= e.time => Some(b),
                _ => Some(e),
            })
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).expect("report serialises")
    }
}
