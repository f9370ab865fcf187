//! Raw benchmark results as produced by the evaluation runs.
//!
//! One result collection exists per adaptation method. Each collection maps a
//! dataset identifier to the models evaluated on it, and each model to its
//! metrics record.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Mean Dice score with its confidence bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeanDice {
    /// Primary score, higher is better.
    pub mean: f64,
    /// Lower confidence bound.
    pub ci_lower: f64,
    /// Upper confidence bound.
    pub ci_upper: f64,
}

impl MeanDice {
    /// Creates a new score record.
    pub fn new(mean: f64, ci_lower: f64, ci_upper: f64) -> Self {
        Self {
            mean,
            ci_lower,
            ci_upper,
        }
    }
}

/// Metrics reported for one (method, dataset, model) triple.
///
/// Only `Mean_Dice` is read; every other metric in the source record is
/// ignored. A record without `Mean_Dice` means the model was not evaluated on
/// this combination and is skipped by every aggregation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    /// The mean Dice record, if the model was evaluated.
    #[serde(rename = "Mean_Dice", default, skip_serializing_if = "Option::is_none")]
    pub mean_dice: Option<MeanDice>,
}

impl Metrics {
    /// Metrics carrying a mean Dice score.
    pub fn scored(mean: f64, ci_lower: f64, ci_upper: f64) -> Self {
        Self {
            mean_dice: Some(MeanDice::new(mean, ci_lower, ci_upper)),
        }
    }

    /// Metrics without a mean Dice score.
    pub fn unscored() -> Self {
        Self::default()
    }

    /// Returns the primary score if present.
    pub fn score(&self) -> Option<f64> {
        self.mean_dice.map(|d| d.mean)
    }
}

/// Model identifier -> metrics, for one dataset under one method.
pub type DatasetResults = BTreeMap<String, Metrics>;

/// Dataset identifier -> per-model metrics, for one method.
pub type MethodResults = BTreeMap<String, DatasetResults>;

/// A valid score together with the keys it was found under.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredEntry<'a> {
    /// Method identifier.
    pub method: &'a str,
    /// Dataset identifier.
    pub dataset: &'a str,
    /// Model identifier.
    pub model: &'a str,
    /// The mean Dice record.
    pub score: &'a MeanDice,
}

/// All loaded results: method -> dataset -> model -> metrics.
///
/// Methods keep their insertion order, which is the configured load order.
/// Datasets and models are stored sorted by identifier, so every traversal of
/// a `ResultSet` is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultSet {
    methods: IndexMap<String, MethodResults>,
}

impl ResultSet {
    /// Creates an empty result set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the results of one method, returning any previous results under
    /// the same identifier. A replaced method keeps its original position.
    pub fn insert_method(
        &mut self,
        method: impl Into<String>,
        results: MethodResults,
    ) -> Option<MethodResults> {
        self.methods.insert(method.into(), results)
    }

    /// Mutable results of a method, appending an empty collection if absent.
    pub fn method_entry(&mut self, method: impl Into<String>) -> &mut MethodResults {
        self.methods.entry(method.into()).or_default()
    }

    /// Iterates methods in load order.
    pub fn methods(&self) -> impl Iterator<Item = (&str, &MethodResults)> {
        self.methods.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Results of a single method.
    pub fn method(&self, method: &str) -> Option<&MethodResults> {
        self.methods.get(method)
    }

    /// Number of loaded methods.
    pub fn method_count(&self) -> usize {
        self.methods.len()
    }

    /// True when no method has been loaded.
    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }

    /// Union of dataset identifiers over all methods, sorted.
    pub fn datasets(&self) -> BTreeSet<&str> {
        self.methods
            .values()
            .flat_map(|datasets| datasets.keys().map(String::as_str))
            .collect()
    }

    /// The (method, models) groups reporting `dataset`, in method order.
    pub fn groups_for<'a>(
        &'a self,
        dataset: &'a str,
    ) -> impl Iterator<Item = (&'a str, &'a DatasetResults)> + 'a {
        self.methods()
            .filter_map(move |(method, datasets)| datasets.get(dataset).map(|m| (method, m)))
    }

    /// Every valid score, method-major, then dataset, then model.
    pub fn scored_entries(&self) -> impl Iterator<Item = ScoredEntry<'_>> {
        self.methods().flat_map(|(method, datasets)| {
            datasets.iter().flat_map(move |(dataset, models)| {
                models.iter().filter_map(move |(model, metrics)| {
                    metrics.mean_dice.as_ref().map(|score| ScoredEntry {
                        method,
                        dataset: dataset.as_str(),
                        model: model.as_str(),
                        score,
                    })
                })
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn method_results(value: serde_json::Value) -> MethodResults {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_metrics_without_mean_dice() {
        let metrics: Metrics = serde_json::from_value(json!({"Hausdorff": 12.5})).unwrap();
        assert!(metrics.mean_dice.is_none());
        assert_eq!(metrics.score(), None);
    }

    #[test]
    fn test_metrics_ignores_other_keys() {
        let metrics: Metrics = serde_json::from_value(json!({
            "Mean_Dice": {"mean": 0.81, "ci_lower": 0.79, "ci_upper": 0.83},
            "Mean_IoU": {"mean": 0.7}
        }))
        .unwrap();
        assert_eq!(metrics.score(), Some(0.81));
    }

    #[test]
    fn test_mean_dice_requires_bounds() {
        let parsed: Result<Metrics, _> =
            serde_json::from_value(json!({"Mean_Dice": {"mean": 0.81}}));
        assert!(parsed.is_err());
    }

    #[test]
    fn test_datasets_union_is_sorted() {
        let mut results = ResultSet::new();
        results.insert_method("lora", method_results(json!({"TNBC": {}, "CRAG": {}})));
        results.insert_method("cnn", method_results(json!({"BCSS": {}, "TNBC": {}})));

        let datasets: Vec<_> = results.datasets().into_iter().collect();
        assert_eq!(datasets, vec!["BCSS", "CRAG", "TNBC"]);
    }

    #[test]
    fn test_methods_keep_insertion_order() {
        let mut results = ResultSet::new();
        results.insert_method("lora", MethodResults::new());
        results.insert_method("cnn", MethodResults::new());
        results.insert_method("frozen", MethodResults::new());

        let methods: Vec<_> = results.methods().map(|(m, _)| m).collect();
        assert_eq!(methods, vec!["lora", "cnn", "frozen"]);
    }

    #[test]
    fn test_scored_entries_skip_missing_metrics() {
        let mut results = ResultSet::new();
        results.insert_method(
            "lora",
            method_results(json!({
                "GlaS": {
                    "uni_v2": {"Mean_Dice": {"mean": 0.9, "ci_lower": 0.88, "ci_upper": 0.92}},
                    "phikon": {"Mean_IoU": {"mean": 0.5}}
                }
            })),
        );

        let entries: Vec<_> = results.scored_entries().collect();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].model, "uni_v2");
        assert_eq!(entries[0].dataset, "GlaS");
        assert_eq!(entries[0].method, "lora");
    }

    #[test]
    fn test_groups_for_dataset() {
        let mut results = ResultSet::new();
        results.insert_method("lora", method_results(json!({"GlaS": {}})));
        results.insert_method("cnn", method_results(json!({"CRAG": {}})));
        results.insert_method("dora", method_results(json!({"GlaS": {}})));

        let methods: Vec<_> = results.groups_for("GlaS").map(|(m, _)| m).collect();
        assert_eq!(methods, vec!["lora", "dora"]);
    }
}
