//! Leaderboard aggregations over a loaded result set.
//!
//! Traversal order is fixed: methods in load order, datasets and models
//! sorted by identifier. SOTA tie-breaks and the first-seen order used to
//! break average-rank ties both follow from it.

pub mod methods;
pub mod ranks;
pub mod sota;

pub use methods::compute_method_comparison;
pub use ranks::{compute_model_ranks, rank_group};
pub use sota::compute_dataset_sota;

use pfm_densebench_domain::{Catalog, ResultSet, StatsReport};
use tracing::{info, instrument, warn};

/// Runs the three aggregations and assembles the report.
#[instrument(skip_all, fields(methods = results.method_count()))]
pub fn compute_report(results: &ResultSet, catalog: &Catalog) -> StatsReport {
    info!("Computing dataset SOTA");
    let dataset_sota = compute_dataset_sota(results, catalog);

    info!("Computing model ranks");
    let model_ranks = compute_model_ranks(results, catalog);

    info!("Computing method comparison");
    let method_comparison = compute_method_comparison(results, catalog);

    info!(
        datasets = dataset_sota.len(),
        models = model_ranks.len(),
        methods = method_comparison.len(),
        "Statistics computed"
    );

    for entry in &model_ranks {
        if !catalog.model_names.contains_key(&entry.model_key) {
            warn!(model = %entry.model_key, "No display name for model, using identifier");
        }
    }
    for method in method_comparison.keys() {
        if !catalog.method_names.contains_key(method) {
            warn!(method = %method, "No display name for method, using identifier");
        }
    }

    StatsReport {
        dataset_sota,
        model_ranks,
        method_comparison,
    }
}
