//! The statistics run: load, aggregate, write.

use std::path::PathBuf;

use anyhow::Result;
use chrono::Utc;
use pfm_densebench_application::compute_report;
use pfm_densebench_common::StatsConfig;
use pfm_densebench_domain::{Catalog, StatsError, StatsReport};
use pfm_densebench_storage::{load_result_set, stage_report, stage_summary, StagedFile};
use tracing::{info, instrument};

/// What a successful run produced
#[derive(Debug)]
pub struct RunOutcome {
    /// The computed statistics
    pub report: StatsReport,
    /// Location of the written report
    pub report_path: PathBuf,
    /// Location of the Markdown leaderboard, when enabled
    pub summary_path: Option<PathBuf>,
}

/// Load every configured method, compute the statistics and write them.
///
/// Nothing is written unless every method file loads, and the report and
/// summary only replace earlier files once both are fully written.
#[instrument(skip_all, fields(data_dir = %config.paths.data_dir.display()))]
pub fn run(config: &StatsConfig, catalog: &Catalog) -> Result<RunOutcome> {
    info!("Loading data");
    let results =
        load_result_set(&config.paths.data_dir, &catalog.methods).map_err(StatsError::from)?;

    let report = compute_report(&results, catalog);

    let output_dir = &config.paths.output_dir;
    let staged_report =
        stage_report(&report, output_dir, &config.paths.output_file).map_err(StatsError::from)?;
    let staged_summary = if config.output.markdown_summary {
        Some(stage_summary(&report, output_dir, Utc::now()).map_err(StatsError::from)?)
    } else {
        None
    };

    let report_path = staged_report.commit().map_err(StatsError::from)?;
    info!(path = %report_path.display(), "Results saved");

    let summary_path = staged_summary
        .map(StagedFile::commit)
        .transpose()
        .map_err(StatsError::from)?;

    Ok(RunOutcome {
        report,
        report_path,
        summary_path,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pfm_densebench_testing::{small_result_set, synthetic_catalog, write_result_files};
    use tempfile::TempDir;

    fn config_for(dir: &TempDir) -> StatsConfig {
        let mut config = StatsConfig::default();
        config.paths.data_dir = dir.path().join("Data");
        config.paths.output_dir = dir.path().join("data_computed");
        config
    }

    #[test]
    fn test_run_writes_report() {
        let dir = TempDir::new().unwrap();
        let config = config_for(&dir);
        write_result_files(&config.paths.data_dir, &small_result_set()).unwrap();

        let outcome = run(&config, &synthetic_catalog()).unwrap();

        assert_eq!(outcome.report_path, config.output_path());
        assert!(outcome.report_path.exists());
        assert!(outcome.summary_path.is_none());
        assert_eq!(outcome.report.dataset_sota.len(), 2);
    }

    #[test]
    fn test_run_with_markdown_summary() {
        let dir = TempDir::new().unwrap();
        let mut config = config_for(&dir);
        config.output.markdown_summary = true;
        write_result_files(&config.paths.data_dir, &small_result_set()).unwrap();

        let outcome = run(&config, &synthetic_catalog()).unwrap();
        let summary = outcome.summary_path.unwrap();
        assert!(summary.ends_with("summary.md"));
        assert!(summary.exists());
    }

    #[test]
    fn test_failed_rerun_keeps_previous_report() {
        let dir = TempDir::new().unwrap();
        let config = config_for(&dir);
        write_result_files(&config.paths.data_dir, &small_result_set()).unwrap();
        run(&config, &synthetic_catalog()).unwrap();
        let previous = std::fs::read(config.output_path()).unwrap();

        std::fs::write(config.paths.data_dir.join("cnn.json"), "{ truncated").unwrap();
        assert!(run(&config, &synthetic_catalog()).is_err());

        assert_eq!(std::fs::read(config.output_path()).unwrap(), previous);
        assert_eq!(std::fs::read_dir(&config.paths.output_dir).unwrap().count(), 1);
    }

    #[test]
    fn test_missing_method_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let config = config_for(&dir);
        write_result_files(&config.paths.data_dir, &small_result_set()).unwrap();

        let mut catalog = synthetic_catalog();
        catalog.methods.push("dora".to_string());
        let err = run(&config, &catalog).unwrap_err();

        let stats_err = err.downcast_ref::<StatsError>().unwrap();
        assert_eq!(stats_err.error_code(), "LOAD_ERROR");
        assert!(!config.paths.output_dir.exists());
    }
}
