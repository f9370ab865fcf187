//! Tests for loading result files and writing reports

use pfm_densebench_application::compute_report;
use pfm_densebench_domain::{Catalog, LoadError};
use pfm_densebench_storage::{load_result_set, method_source_path, read_report, write_report};
use pfm_densebench_testing::{small_result_set, synthetic_catalog, write_result_files};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_load_ignores_other_metrics() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("lora.json"),
        r#"{
            "GlaS": {
                "uni_v2": {
                    "Mean_Dice": {"mean": 0.9123, "ci_lower": 0.90, "ci_upper": 0.92},
                    "Mean_IoU": {"mean": 0.85, "ci_lower": 0.84, "ci_upper": 0.86},
                    "Pixel_Accuracy": 0.97
                },
                "phikon": {
                    "Mean_IoU": {"mean": 0.80, "ci_lower": 0.79, "ci_upper": 0.81}
                }
            }
        }"#,
    )
    .unwrap();

    let results = load_result_set(dir.path(), &["lora"]).unwrap();
    let glas = &results.method("lora").unwrap()["GlaS"];

    assert_eq!(glas.len(), 2);
    assert_eq!(glas["uni_v2"].score(), Some(0.9123));
    assert_eq!(glas["phikon"].score(), None);
}

#[test]
fn test_malformed_json_is_load_error() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("lora.json"), "{ not json").unwrap();

    let err = load_result_set(dir.path(), &["lora"]).unwrap_err();
    assert!(matches!(err, LoadError::Malformed { ref method, .. } if method == "lora"));
}

#[test]
fn test_wrong_shape_is_load_error() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("cnn.json"), r#"{"GlaS": [0.9, 0.8]}"#).unwrap();

    let err = load_result_set(dir.path(), &["cnn"]).unwrap_err();
    assert!(matches!(err, LoadError::Malformed { .. }));
}

#[test]
fn test_missing_score_bounds_is_load_error() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("dora.json"),
        r#"{"GlaS": {"uni_v2": {"Mean_Dice": {"mean": 0.9}}}}"#,
    )
    .unwrap();

    let err = load_result_set(dir.path(), &["dora"]).unwrap_err();
    assert!(matches!(err, LoadError::Malformed { .. }));
}

#[test]
fn test_directory_as_source_is_unreadable() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(method_source_path(dir.path(), "frozen")).unwrap();

    let err = load_result_set(dir.path(), &["frozen"]).unwrap_err();
    assert!(matches!(
        err,
        LoadError::Unreadable { .. } | LoadError::Malformed { .. }
    ));
    assert_eq!(err.method(), Some("frozen"));
}

#[test]
fn test_default_catalog_requires_all_methods() {
    let dir = TempDir::new().unwrap();
    write_result_files(dir.path(), &small_result_set()).unwrap();

    let catalog = Catalog::default();
    let err = load_result_set(dir.path(), &catalog.methods).unwrap_err();
    assert!(matches!(err, LoadError::NotFound { ref method, .. } if method == "frozen"));
}

#[test]
fn test_written_report_reads_back() {
    let data_dir = TempDir::new().unwrap();
    let output_dir = TempDir::new().unwrap();
    let catalog = synthetic_catalog();
    write_result_files(data_dir.path(), &small_result_set()).unwrap();

    let results = load_result_set(data_dir.path(), &catalog.methods).unwrap();
    let report = compute_report(&results, &catalog);
    let path = write_report(&report, output_dir.path(), "stats.json").unwrap();

    let read_back = read_report(&path).unwrap();
    assert_eq!(read_back.dataset_sota, report.dataset_sota);
    assert_eq!(read_back.method_comparison, report.method_comparison);
    assert_eq!(read_back.model_ranks.len(), report.model_ranks.len());
    assert!(read_back.model_ranks.iter().all(|e| e.observations.is_empty()));
}

#[test]
fn test_output_is_byte_for_byte_reproducible() {
    let data_dir = TempDir::new().unwrap();
    let output_dir = TempDir::new().unwrap();
    let catalog = synthetic_catalog();
    write_result_files(data_dir.path(), &small_result_set()).unwrap();

    let mut outputs = Vec::new();
    for run in 0..2 {
        let results = load_result_set(data_dir.path(), &catalog.methods).unwrap();
        let report = compute_report(&results, &catalog);
        let path = write_report(&report, output_dir.path(), &format!("stats-{}.json", run)).unwrap();
        outputs.push(fs::read(path).unwrap());
    }

    assert_eq!(outputs[0], outputs[1]);
}

#[test]
fn test_report_uses_two_space_indent() {
    let output_dir = TempDir::new().unwrap();
    let report = compute_report(&small_result_set(), &synthetic_catalog());
    let path = write_report(&report, output_dir.path(), "stats.json").unwrap();

    let contents = fs::read_to_string(path).unwrap();
    assert!(contents.starts_with("{\n  \"dataset_sota\": {\n    \"GlaS\": {"));
}
