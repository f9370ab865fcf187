//! Average rank per model.
//!
//! Every (dataset, method) pair with at least one scored model forms a group.
//! Models are ranked 1..k inside each group by descending score, then each
//! model's ranks are averaged over the groups it was scored in. Models that
//! are missing from a group are not penalised for it. Averages are not
//! normalised by group size, so ranking against fewer models yields lower
//! ranks.

use indexmap::IndexMap;
use pfm_densebench_domain::{
    format_rank, Catalog, DatasetResults, ModelRankEntry, RankObservation, ResultSet,
};
use tracing::{debug, instrument};

/// Scored models of one group, best first.
///
/// The sort is stable: equal scores keep identifier order and receive
/// distinct consecutive ranks rather than a shared one.
pub fn rank_group(models: &DatasetResults) -> Vec<(&str, f64)> {
    let mut ranked: Vec<(&str, f64)> = models
        .iter()
        .filter_map(|(model, metrics)| metrics.score().map(|score| (model.as_str(), score)))
        .collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
    ranked
}

/// Computes every model's average rank, sorted best first with 1-based positions.
///
/// Equal averages keep the order in which the models were first ranked.
#[instrument(skip_all, fields(methods = results.method_count()))]
pub fn compute_model_ranks(results: &ResultSet, catalog: &Catalog) -> Vec<ModelRankEntry> {
    let mut observations: IndexMap<&str, Vec<RankObservation>> = IndexMap::new();

    for dataset in results.datasets() {
        for (method, models) in results.groups_for(dataset) {
            let ranked = rank_group(models);
            if ranked.is_empty() {
                debug!(dataset, method, "No scored model in group, skipping");
                continue;
            }

            let total_models = ranked.len();
            for (index, (model, score)) in ranked.into_iter().enumerate() {
                observations.entry(model).or_default().push(RankObservation {
                    dataset: dataset.to_string(),
                    method: method.to_string(),
                    rank: index + 1,
                    score,
                    total_models,
                });
            }
        }
    }

    let mut entries: Vec<ModelRankEntry> = observations
        .into_iter()
        .map(|(model, observations)| {
            let rank_sum: usize = observations.iter().map(|o| o.rank).sum();
            let avg_rank = rank_sum as f64 / observations.len() as f64;

            ModelRankEntry {
                avg_rank,
                avg_rank_display: format_rank(avg_rank),
                total_comparisons: observations.len(),
                model_display: catalog.model_display(model).to_string(),
                model_key: model.to_string(),
                position: 0,
                observations,
            }
        })
        .collect();

    entries.sort_by(|a, b| a.avg_rank.total_cmp(&b.avg_rank));
    for (index, entry) in entries.iter_mut().enumerate() {
        entry.position = index + 1;
    }

    debug!(models = entries.len(), "Model ranks computed");
    entries
}
