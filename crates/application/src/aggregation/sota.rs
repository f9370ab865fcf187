//! Best score per dataset.

use pfm_densebench_domain::{format_score, Catalog, DatasetSotaEntry, MeanDice, ResultSet};
use std::collections::BTreeMap;
use tracing::{debug, instrument, trace};

/// Finds, for every dataset, the (model, method) pair with the highest mean Dice.
///
/// Ties keep the first pair encountered. Datasets where no pair has a valid
/// score are omitted.
#[instrument(skip_all, fields(methods = results.method_count()))]
pub fn compute_dataset_sota(
    results: &ResultSet,
    catalog: &Catalog,
) -> BTreeMap<String, DatasetSotaEntry> {
    let mut dataset_sota = BTreeMap::new();

    for dataset in results.datasets() {
        let mut best: Option<(&str, &str, &MeanDice)> = None;

        for (method, models) in results.groups_for(dataset) {
            for (model, metrics) in models {
                let Some(score) = metrics.mean_dice.as_ref() else {
                    trace!(dataset, method, model = %model, "No Mean_Dice, skipping");
                    continue;
                };

                if best.map_or(true, |(_, _, current)| score.mean > current.mean) {
                    best = Some((method, model.as_str(), score));
                }
            }
        }

        let Some((method, model, score)) = best else {
            debug!(dataset, "No scored model for dataset, omitting");
            continue;
        };

        dataset_sota.insert(
            dataset.to_string(),
            DatasetSotaEntry {
                m_dice: score.mean,
                m_dice_display: format_score(score.mean),
                ci_lower: score.ci_lower,
                ci_upper: score.ci_upper,
                model: catalog.model_display(model).to_string(),
                model_key: model.to_string(),
                method: catalog.method_display(method).to_string(),
                method_key: method.to_string(),
                dataset_display: catalog.dataset_display(dataset).to_string(),
                category: catalog.category_of(dataset),
            },
        );
    }

    dataset_sota
}
