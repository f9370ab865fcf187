//! Derived leaderboard statistics.
//!
//! These records are recomputed from scratch on every run. Field names follow
//! the published `stats.json` layout consumed by the leaderboard website.

use crate::catalog::DatasetCategory;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Formats a Dice score for display (4 decimals).
pub fn format_score(score: f64) -> String {
    format!("{:.4}", score)
}

/// Formats an average rank for display (2 decimals).
pub fn format_rank(rank: f64) -> String {
    format!("{:.2}", rank)
}

/// Best (model, method) pair observed on one dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetSotaEntry {
    /// Best mean Dice.
    #[serde(rename = "mDice")]
    pub m_dice: f64,
    /// Best mean Dice with 4 decimals.
    #[serde(rename = "mDice_display")]
    pub m_dice_display: String,
    /// Lower confidence bound of the winning score.
    pub ci_lower: f64,
    /// Upper confidence bound of the winning score.
    pub ci_upper: f64,
    /// Winning model display name.
    pub model: String,
    /// Winning model identifier.
    pub model_key: String,
    /// Winning method display name.
    pub method: String,
    /// Winning method identifier.
    pub method_key: String,
    /// Dataset display name.
    pub dataset_display: String,
    /// Dataset category.
    pub category: DatasetCategory,
}

/// A model's rank within one (dataset, method) group.
#[derive(Debug, Clone, PartialEq)]
pub struct RankObservation {
    /// Dataset identifier.
    pub dataset: String,
    /// Method identifier.
    pub method: String,
    /// 1-based rank within the group.
    pub rank: usize,
    /// The model's score in the group.
    pub score: f64,
    /// Number of ranked models in the group.
    pub total_models: usize,
}

/// Average rank of one model across every group it was scored in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelRankEntry {
    /// Mean of the model's per-group ranks.
    pub avg_rank: f64,
    /// Average rank with 2 decimals.
    pub avg_rank_display: String,
    /// Number of groups contributing to the average.
    pub total_comparisons: usize,
    /// Model display name.
    pub model_display: String,
    /// Model identifier.
    pub model_key: String,
    /// 1-based leaderboard position.
    pub position: usize,
    /// Per-group ranks behind the average.
    #[serde(skip)]
    pub observations: Vec<RankObservation>,
}

/// Average score of one adaptation method.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodComparisonEntry {
    /// Mean of every valid score under the method.
    #[serde(rename = "avg_mDice")]
    pub avg_m_dice: f64,
    /// Average score with 4 decimals.
    #[serde(rename = "avg_mDice_display")]
    pub avg_m_dice_display: String,
    /// Method display name.
    pub method_display: String,
    /// Number of scores averaged.
    pub num_experiments: usize,
}

/// The complete `stats.json` record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatsReport {
    /// Dataset identifier -> best result.
    pub dataset_sota: BTreeMap<String, DatasetSotaEntry>,
    /// Models in leaderboard order.
    pub model_ranks: Vec<ModelRankEntry>,
    /// Method identifier -> average score, in method order.
    pub method_comparison: IndexMap<String, MethodComparisonEntry>,
}

impl StatsReport {
    /// SOTA entries sorted by descending score; equal scores keep identifier order.
    pub fn sota_by_score(&self) -> Vec<(&str, &DatasetSotaEntry)> {
        let mut entries: Vec<_> = self
            .dataset_sota
            .iter()
            .map(|(k, v)| (k.as_str(), v))
            .collect();
        entries.sort_by(|a, b| b.1.m_dice.total_cmp(&a.1.m_dice));
        entries
    }

    /// Method entries sorted by descending average score.
    pub fn methods_by_score(&self) -> Vec<(&str, &MethodComparisonEntry)> {
        let mut entries: Vec<_> = self
            .method_comparison
            .iter()
            .map(|(k, v)| (k.as_str(), v))
            .collect();
        entries.sort_by(|a, b| b.1.avg_m_dice.total_cmp(&a.1.avg_m_dice));
        entries
    }

    /// True when no section has any entry.
    pub fn is_empty(&self) -> bool {
        self.dataset_sota.is_empty() && self.model_ranks.is_empty() && self.method_comparison.is_empty()
    }
}
