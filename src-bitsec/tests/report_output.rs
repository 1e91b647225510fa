//! Report serialisation and rendering round-trips.

use bitsec::{render_table, write_csv, EstimatorConfig, SDEstimator};
use bitsec_sd::SDProblem;

#[test]
fn table_shows_the_reference_rounding() {
    let mut est = SDEstimator::new(100, 50, 10, &[]);
    let report = est.estimate();
    let table = render_table(&report, est.config());
    assert!(table.contains("| algorithm"));
    assert!(table.contains("28.3"));
    assert!(table.contains("12.7"));
    assert!(table.contains("22.3"));
    assert!(table.contains("16.0"));
}

#[test]
fn table_precision_follows_the_config() {
    let mut est = SDEstimator::new(100, 50, 10, &[])
        .with_config(EstimatorConfig::default().with_precision(3).with_all_parameters(true));
    let report = est.estimate();
    let table = render_table(&report, est.config());
    assert!(table.contains("28.292"));
    assert!(table.contains("{l: 9, p: 2, r: 4}"));
}

#[test]
fn infeasible_runs_render_as_dashes() {
    let mut est = SDEstimator::for_problem(
        SDProblem::new(100, 50, 10).with_memory_bound(f64::NEG_INFINITY),
        &[],
    );
    let report = est.estimate();
    assert!(report.fastest().is_none());
    let table = render_table(&report, est.config());
    for entry in &report.entries {
        assert!(entry.time.is_infinite());
        assert!(entry.parameters.is_empty());
    }
    assert!(table.contains("--"));

    let json = report.to_json();
    assert!(json["entries"][0]["time"].is_null());
}

#[test]
fn json_carries_estimates_and_additional_information() {
    let mut est = SDEstimator::new(100, 50, 10, &[]);
    let report = est.estimate();
    let json = report.to_json();
    let stern = report.get("Stern").unwrap();
    let entries = json["entries"].as_array().unwrap();
    let stern_json = entries
        .iter()
        .find(|e| e["algorithm"] == "Stern")
        .unwrap();
    assert!((stern_json["time"].as_f64().unwrap() - stern.time).abs() < 1e-12);
    assert_eq!(stern_json["parameters"]["l"], 9);
    assert!(stern_json["additional_information"]["permutations"].is_number());
}

#[test]
fn csv_export_writes_one_row_per_algorithm() {
    let mut est = SDEstimator::new(100, 50, 10, &[]);
    let report = est.estimate();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.csv");
    write_csv(&report, &path).unwrap();
    let content = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.trim().lines().collect();
    assert_eq!(lines.len(), 1 + report.entries.len());
    assert!(lines[0].starts_with("algorithm,time,memory,parameters"));
    assert!(content.contains("Prange"));
    assert!(content.contains("Stern"));
}
