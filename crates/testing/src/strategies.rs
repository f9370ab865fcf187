//! Proptest strategies for arbitrary result sets.
//!
//! Identifiers are drawn from small pools so that generated sets have
//! overlapping datasets and models across methods, plus entries without
//! `Mean_Dice` and groups where every entry is unscored.

use crate::builders::ResultSetBuilder;
use pfm_densebench_domain::ResultSet;
use proptest::prelude::*;

pub const METHODS: [&str; 3] = ["frozen", "lora", "cnn"];
pub const DATASETS: [&str; 4] = ["GlaS", "Kumar", "TNBC", "kumar"];
pub const MODELS: [&str; 5] = ["conch_v1", "musk", "phikon", "uni_v1", "uni_v2"];

/// One generated entry: indices into the pools and an optional score.
pub type EntrySpec = (usize, usize, usize, Option<f64>);

fn entry_spec() -> impl Strategy<Value = EntrySpec> {
    (
        0..METHODS.len(),
        0..DATASETS.len(),
        0..MODELS.len(),
        // Scores on a coarse grid so ties show up regularly.
        prop::option::weighted(0.8, (0u32..=20).prop_map(|step| f64::from(step) / 20.0)),
    )
}

/// Builds a result set from entry specs; later specs replace earlier ones.
pub fn build_result_set(specs: &[EntrySpec]) -> ResultSet {
    specs
        .iter()
        .fold(ResultSetBuilder::new(), |builder, &(method, dataset, model, score)| {
            let (method, dataset, model) = (METHODS[method], DATASETS[dataset], MODELS[model]);
            match score {
                Some(mean) => builder.score(method, dataset, model, mean),
                None => builder.unscored(method, dataset, model),
            }
        })
        .build()
}

/// Arbitrary result sets of up to 60 entries.
pub fn arb_result_set() -> impl Strategy<Value = ResultSet> {
    prop::collection::vec(entry_spec(), 0..60).prop_map(|specs| build_result_set(&specs))
}
