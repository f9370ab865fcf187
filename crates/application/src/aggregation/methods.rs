//! Average score per adaptation method.

use indexmap::IndexMap;
use pfm_densebench_domain::{format_score, Catalog, MethodComparisonEntry, Metrics, ResultSet};
use tracing::{debug, instrument};

/// Averages every valid mean Dice under each method, keyed in method order.
///
/// Methods without a single valid score are omitted.
#[instrument(skip_all, fields(methods = results.method_count()))]
pub fn compute_method_comparison(
    results: &ResultSet,
    catalog: &Catalog,
) -> IndexMap<String, MethodComparisonEntry> {
    let mut comparison = IndexMap::new();

    for (method, datasets) in results.methods() {
        let scores: Vec<f64> = datasets
            .values()
            .flat_map(|models| models.values().filter_map(Metrics::score))
            .collect();

        if scores.is_empty() {
            debug!(method, "No scored experiments for method, omitting");
            continue;
        }

        let avg_m_dice = scores.iter().sum::<f64>() / scores.len() as f64;
        debug!(method, experiments = scores.len(), avg_m_dice, "Method averaged");

        comparison.insert(
            method.to_string(),
            MethodComparisonEntry {
                avg_m_dice,
                avg_m_dice_display: format_score(avg_m_dice),
                method_display: catalog.method_display(method).to_string(),
                num_experiments: scores.len(),
            },
        );
    }

    comparison
}
