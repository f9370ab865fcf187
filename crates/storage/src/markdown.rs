//! Markdown leaderboard generation.
//!
//! Renders the report as three Markdown tables for pages that do not consume
//! `stats.json` directly.

use std::fmt;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use pfm_densebench_domain::{StatsReport, WriteError};
use tracing::info;

use crate::io::StagedFile;

/// Default summary file name, written next to the report.
pub const SUMMARY_FILE: &str = "summary.md";

/// Renders the report as Markdown.
///
/// Datasets are listed by descending score, models in rank order and methods
/// by descending average score.
pub fn render_summary(report: &StatsReport, generated_at: DateTime<Utc>) -> String {
    let mut md = String::new();
    // Writing into a String cannot fail.
    let _ = write_markdown(&mut md, report, generated_at);
    md
}

fn write_markdown(
    md: &mut impl fmt::Write,
    report: &StatsReport,
    generated_at: DateTime<Utc>,
) -> fmt::Result {
    writeln!(md, "# PFM-DenseBench Leaderboard")?;
    writeln!(md)?;
    writeln!(md, "_Generated {}_", generated_at.format("%Y-%m-%d %H:%M:%S UTC"))?;
    writeln!(md)?;

    writeln!(md, "## Dataset SOTA (mDice)")?;
    writeln!(md)?;
    if report.dataset_sota.is_empty() {
        writeln!(md, "No scored datasets.")?;
    } else {
        writeln!(md, "| Dataset | Category | mDice | 95% CI | Model | Method |")?;
        writeln!(md, "|---------|----------|------:|--------|-------|--------|")?;
        for (_, entry) in report.sota_by_score() {
            writeln!(
                md,
                "| {} | {} | {} | {:.4} - {:.4} | {} | {} |",
                escape(&entry.dataset_display),
                entry.category,
                entry.m_dice_display,
                entry.ci_lower,
                entry.ci_upper,
                escape(&entry.model),
                escape(&entry.method),
            )?;
        }
    }
    writeln!(md)?;

    writeln!(md, "## Model Rankings (average rank, lower is better)")?;
    writeln!(md)?;
    if report.model_ranks.is_empty() {
        writeln!(md, "No ranked models.")?;
    } else {
        writeln!(md, "| # | Model | Avg Rank | Comparisons |")?;
        writeln!(md, "|--:|-------|---------:|------------:|")?;
        for entry in &report.model_ranks {
            writeln!(
                md,
                "| {} | {} | {} | {} |",
                entry.position,
                escape(&entry.model_display),
                entry.avg_rank_display,
                entry.total_comparisons,
            )?;
        }
    }
    writeln!(md)?;

    writeln!(md, "## Method Comparison (average mDice)")?;
    writeln!(md)?;
    if report.method_comparison.is_empty() {
        writeln!(md, "No scored methods.")?;
    } else {
        writeln!(md, "| Method | Avg mDice | Experiments |")?;
        writeln!(md, "|--------|----------:|------------:|")?;
        for (_, entry) in report.methods_by_score() {
            writeln!(
                md,
                "| {} | {} | {} |",
                escape(&entry.method_display),
                entry.avg_m_dice_display,
                entry.num_experiments,
            )?;
        }
    }

    Ok(())
}

/// Renders the summary into a staged `summary.md` in `output_dir`.
pub fn stage_summary(
    report: &StatsReport,
    output_dir: &Path,
    generated_at: DateTime<Utc>,
) -> Result<StagedFile, WriteError> {
    let markdown = render_summary(report, generated_at);
    let path = output_dir.join(SUMMARY_FILE);
    let target = path.clone();

    StagedFile::stage(path, |writer| {
        writer
            .write_all(markdown.as_bytes())
            .map_err(|source| WriteError::Io { path: target, source })
    })
}

/// Writes `summary.md` into `output_dir`.
///
/// # Returns
///
/// The path to the written file on success.
pub fn write_summary(report: &StatsReport, output_dir: &Path) -> Result<PathBuf, WriteError> {
    let file_path = stage_summary(report, output_dir, Utc::now())?.commit()?;
    info!(path = %file_path.display(), "Markdown summary written");
    Ok(file_path)
}

fn escape(cell: &str) -> String {
    cell.replace('|', "\\|")
}
