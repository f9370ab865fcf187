//! Console rendering of the statistics report.
//!
//! Every format lists datasets by descending score, models in rank order and
//! methods by descending average score.

use anyhow::Result;
use pfm_densebench_domain::StatsReport;

use super::{colors, OutputFormat, TableFormatter};

const RULE_WIDTH: usize = 60;

const SOTA_TITLE: &str = "DATASET SOTA (mDice)";
const RANKS_TITLE: &str = "MODEL RANKINGS (Average Rank, lower is better)";
const METHODS_TITLE: &str = "METHOD COMPARISON (Average mDice)";

/// Render the report for the console in the given format.
pub fn render_report(report: &StatsReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        OutputFormat::Table => Ok(render_tables(report)),
        OutputFormat::Plain => Ok(render_plain(report)),
    }
}

fn render_plain(report: &StatsReport) -> String {
    let mut lines = Vec::new();

    push_heading(&mut lines, SOTA_TITLE);
    for (_, entry) in report.sota_by_score() {
        lines.push(format!(
            "{:15} | {} | {:15} | {}",
            entry.dataset_display, entry.m_dice_display, entry.model, entry.method
        ));
    }

    push_heading(&mut lines, RANKS_TITLE);
    for entry in &report.model_ranks {
        lines.push(format!(
            "{:2}. {:20} | Avg Rank: {} | Comparisons: {}",
            entry.position, entry.model_display, entry.avg_rank_display, entry.total_comparisons
        ));
    }

    push_heading(&mut lines, METHODS_TITLE);
    for (_, entry) in report.methods_by_score() {
        lines.push(format!(
            "{:15} | Avg mDice: {} | Experiments: {}",
            entry.method_display, entry.avg_m_dice_display, entry.num_experiments
        ));
    }

    lines.join("\n")
}

fn push_heading(lines: &mut Vec<String>, title: &str) {
    lines.push(String::new());
    lines.push("=".repeat(RULE_WIDTH));
    lines.push(title.to_string());
    lines.push("=".repeat(RULE_WIDTH));
}

fn render_tables(report: &StatsReport) -> String {
    let sota_rows = report
        .sota_by_score()
        .into_iter()
        .map(|(_, entry)| {
            vec![
                entry.dataset_display.clone(),
                entry.category.to_string(),
                entry.m_dice_display.clone(),
                format!("{:.4} - {:.4}", entry.ci_lower, entry.ci_upper),
                entry.model.clone(),
                entry.method.clone(),
            ]
        })
        .collect();

    let rank_rows = report
        .model_ranks
        .iter()
        .map(|entry| {
            vec![
                entry.position.to_string(),
                entry.model_display.clone(),
                entry.avg_rank_display.clone(),
                entry.total_comparisons.to_string(),
            ]
        })
        .collect();

    let method_rows = report
        .methods_by_score()
        .into_iter()
        .map(|(_, entry)| {
            vec![
                entry.method_display.clone(),
                entry.avg_m_dice_display.clone(),
                entry.num_experiments.to_string(),
            ]
        })
        .collect();

    [
        colors::heading(SOTA_TITLE).to_string(),
        TableFormatter::simple(
            &["Dataset", "Category", "mDice", "95% CI", "Model", "Method"],
            sota_rows,
            &[2],
        ),
        colors::heading(RANKS_TITLE).to_string(),
        TableFormatter::simple(&["#", "Model", "Avg Rank", "Comparisons"], rank_rows, &[0, 2, 3]),
        colors::heading(METHODS_TITLE).to_string(),
        TableFormatter::simple(&["Method", "Avg mDice", "Experiments"], method_rows, &[1, 2]),
    ]
    .join("\n")
}
