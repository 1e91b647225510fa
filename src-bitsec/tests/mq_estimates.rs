//! End-to-end multivariate-quadratic estimates on the (15, 17, 3)
//! instance.

use bitsec::MQEstimator;

#[test]
fn default_table() {
    let mut est = MQEstimator::new(15, 17, 3, &[]);
    // DinurFirst is binary-only and filtered out up front
    assert_eq!(
        est.algorithm_names(),
        vec![
            "BooleanSolveFXL",
            "Crossbred",
            "ExhaustiveSearch",
            "F5",
            "HybridF5",
            "Lokshtanov"
        ]
    );
    let report = est.estimate();

    let exhaustive = report.get("ExhaustiveSearch").unwrap();
    assert!((exhaustive.time - 25.439).abs() < 0.01);
    assert!((exhaustive.memory - 12.901).abs() < 0.01);

    let lokshtanov = report.get("Lokshtanov").unwrap();
    assert!(lokshtanov.time > 63.0 && lokshtanov.time < 65.0);

    assert_eq!(est.fastest_algorithm().unwrap().name(), "ExhaustiveSearch");
}

#[test]
fn excluding_the_search_family_leaves_the_algebraic_attacks() {
    let mut est = MQEstimator::new(
        15,
        17,
        3,
        &["ExhaustiveSearch", "F5", "HybridF5", "Lokshtanov"],
    );
    assert_eq!(est.algorithm_names(), vec!["BooleanSolveFXL", "Crossbred"]);
    let report = est.estimate();
    assert_eq!(report.entries.len(), 2);

    let fxl = report.get("BooleanSolveFXL").unwrap();
    assert!(fxl.time > 30.0 && fxl.time < 31.0);
    assert!((fxl.memory - 12.901).abs() < 0.01);

    let crossbred = report.get("Crossbred").unwrap();
    assert!(crossbred.time > 29.5 && crossbred.time < 30.5);
    assert!(crossbred.memory > 14.4 && crossbred.memory < 15.4);

    assert_eq!(est.fastest_algorithm().unwrap().name(), "Crossbred");
}

#[test]
fn exclusion_does_not_shift_the_survivors() {
    let mut everything = MQEstimator::new(15, 17, 3, &[]);
    let mut filtered = MQEstimator::new(15, 17, 3, &["ExhaustiveSearch"]);
    let full = everything.estimate();
    let partial = filtered.estimate();
    for entry in &partial.entries {
        let other = full.get(&entry.algorithm).unwrap();
        assert_eq!(entry.time.to_bits(), other.time.to_bits());
    }
}

#[test]
fn binary_fields_admit_dinur() {
    let mut est = MQEstimator::new(15, 17, 2, &[]);
    assert!(est.algorithm_names().contains(&"DinurFirst"));
    let report = est.estimate();
    let dinur = report.get("DinurFirst").unwrap();
    assert!(dinur.time.is_finite());
    assert!((dinur.time - 18.226).abs() < 0.02);
}
