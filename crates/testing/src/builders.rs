//! Fluent builder for constructing test result sets.

use pfm_densebench_domain::{Metrics, ResultSet};

/// Default half-width of the confidence interval attached by [`ResultSetBuilder::score`].
pub const DEFAULT_CI_HALF_WIDTH: f64 = 0.01;

/// Builder for creating `ResultSet` test instances
///
/// Methods are registered in the order they are first mentioned, mirroring
/// the load order of a configured catalog.
#[derive(Clone, Default)]
pub struct ResultSetBuilder {
    results: ResultSet,
}

impl ResultSetBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a method with no datasets.
    pub fn method(mut self, method: &str) -> Self {
        self.results.method_entry(method);
        self
    }

    /// Registers a dataset under a method with no models.
    pub fn dataset(mut self, method: &str, dataset: &str) -> Self {
        self.results
            .method_entry(method)
            .entry(dataset.to_string())
            .or_default();
        self
    }

    /// Adds a scored entry with a symmetric confidence interval.
    pub fn score(self, method: &str, dataset: &str, model: &str, mean: f64) -> Self {
        self.score_with_ci(
            method,
            dataset,
            model,
            mean,
            mean - DEFAULT_CI_HALF_WIDTH,
            mean + DEFAULT_CI_HALF_WIDTH,
        )
    }

    /// Adds a scored entry with explicit confidence bounds.
    pub fn score_with_ci(
        self,
        method: &str,
        dataset: &str,
        model: &str,
        mean: f64,
        ci_lower: f64,
        ci_upper: f64,
    ) -> Self {
        self.metrics(method, dataset, model, Metrics::scored(mean, ci_lower, ci_upper))
    }

    /// Adds an entry without `Mean_Dice`.
    pub fn unscored(self, method: &str, dataset: &str, model: &str) -> Self {
        self.metrics(method, dataset, model, Metrics::unscored())
    }

    /// Adds an arbitrary metrics record, replacing any previous one.
    pub fn metrics(mut self, method: &str, dataset: &str, model: &str, metrics: Metrics) -> Self {
        self.results
            .method_entry(method)
            .entry(dataset.to_string())
            .or_default()
            .insert(model.to_string(), metrics);
        self
    }

    pub fn build(self) -> ResultSet {
        self.results
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_registers_methods_in_order() {
        let results = ResultSetBuilder::new()
            .method("cnn")
            .score("lora", "GlaS", "uni_v2", 0.9)
            .build();

        let methods: Vec<_> = results.methods().map(|(m, _)| m).collect();
        assert_eq!(methods, vec!["cnn", "lora"]);
    }

    #[test]
    fn test_builder_score_attaches_ci() {
        let results = ResultSetBuilder::new()
            .score("lora", "GlaS", "uni_v2", 0.5)
            .build();

        let dice = results.method("lora").unwrap()["GlaS"]["uni_v2"].mean_dice.unwrap();
        assert_eq!(dice.mean, 0.5);
        assert!((dice.ci_lower - 0.49).abs() < 1e-12);
        assert!((dice.ci_upper - 0.51).abs() < 1e-12);
    }

    #[test]
    fn test_builder_replaces_entries() {
        let results = ResultSetBuilder::new()
            .score("lora", "GlaS", "uni_v2", 0.5)
            .unscored("lora", "GlaS", "uni_v2")
            .build();

        assert_eq!(results.scored_entries().count(), 0);
    }
}
