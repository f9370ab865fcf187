//! End-to-end tests for the `densebench-stats` binary

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use pfm_densebench_testing::{small_result_set, write_result_files, ResultSetBuilder};
use tempfile::TempDir;

const CATALOG: &str = r#"
methods = ["lora", "cnn"]

[method_names]
lora = "LoRA"
cnn = "CNN Adapter"

[model_names]
uni_v2 = "UNI2-h"
phikon = "Phikon"

[[categories]]
category = "Gland"
datasets = ["GlaS"]

[[categories]]
category = "Nuclear"
datasets = ["TNBC"]
"#;

fn densebench_stats(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_densebench-stats"))
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1")
        .args(args)
        .output()
        .unwrap()
}

fn workspace() -> TempDir {
    let dir = TempDir::new().unwrap();
    write_result_files(&dir.path().join("Data"), &small_result_set()).unwrap();
    fs::write(dir.path().join("catalog.toml"), CATALOG).unwrap();
    dir
}

#[test]
fn test_run_with_catalog_file() {
    let dir = workspace();
    let output = densebench_stats(dir.path(), &["--catalog", "catalog.toml", "--format", "plain"]);

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("DATASET SOTA (mDice)"));
    assert!(stdout.contains("UNI2-h"));
    assert!(stdout.contains("Results saved to"));
    assert!(dir.path().join("data_computed").join("stats.json").exists());
}

#[test]
fn test_bare_invocation_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let mut builder = ResultSetBuilder::new();
    for method in ["frozen", "lora", "dora", "cnn", "transformer"] {
        builder = builder.score(method, "GlaS", "uni_v2", 0.9);
    }
    write_result_files(&dir.path().join("Data"), &builder.build()).unwrap();

    let output = densebench_stats(dir.path(), &[]);

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let written = fs::read_to_string(dir.path().join("data_computed").join("stats.json")).unwrap();
    let stats: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(stats["dataset_sota"]["GlaS"]["model"], "UNI2-h");
    assert_eq!(stats["dataset_sota"]["GlaS"]["method_key"], "frozen");
    assert_eq!(stats["method_comparison"].as_object().unwrap().len(), 5);
}

#[test]
fn test_json_format_prints_report() {
    let dir = workspace();
    let output = densebench_stats(dir.path(), &["--catalog", "catalog.toml", "-o", "json"]);

    assert!(output.status.success());
    let written = fs::read_to_string(dir.path().join("data_computed").join("stats.json")).unwrap();
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim_end(), written);
}

#[test]
fn test_reruns_are_identical() {
    let dir = workspace();
    let report = dir.path().join("data_computed").join("stats.json");

    assert!(densebench_stats(dir.path(), &["--catalog", "catalog.toml"]).status.success());
    let first = fs::read(&report).unwrap();
    assert!(densebench_stats(dir.path(), &["--catalog", "catalog.toml"]).status.success());
    let second = fs::read(&report).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_missing_method_file_fails_without_output() {
    let dir = workspace();
    fs::remove_file(dir.path().join("Data").join("cnn.json")).unwrap();

    let output = densebench_stats(dir.path(), &["--catalog", "catalog.toml"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("cnn"));
    assert!(stderr.contains("LOAD_ERROR"));
    assert!(!dir.path().join("data_computed").exists());
}

#[test]
fn test_paths_from_flags() {
    let dir = workspace();
    let output = densebench_stats(
        dir.path(),
        &[
            "--catalog",
            "catalog.toml",
            "--data-dir",
            "Data",
            "--output-dir",
            "out",
            "--markdown",
        ],
    );

    assert!(output.status.success());
    assert!(dir.path().join("out").join("stats.json").exists());
    assert!(dir.path().join("out").join("summary.md").exists());
}

#[test]
fn test_config_file_sets_paths() {
    let dir = workspace();
    fs::write(
        dir.path().join("densebench.toml"),
        "[paths]\noutput_dir = \"computed\"\noutput_file = \"leaderboard.json\"\ncatalog_file = \"catalog.toml\"\n",
    )
    .unwrap();

    let output = densebench_stats(dir.path(), &[]);

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert!(dir.path().join("computed").join("leaderboard.json").exists());
}
