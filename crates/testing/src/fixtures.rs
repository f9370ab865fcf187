//! Test fixtures with known aggregation results.

use crate::builders::ResultSetBuilder;
use pfm_densebench_domain::{Catalog, DatasetCategory, ResultSet};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// A two-method catalog with a handful of display names.
pub fn synthetic_catalog() -> Catalog {
    Catalog::new(["lora", "cnn"])
        .with_method_name("lora", "LoRA")
        .with_method_name("cnn", "CNN Adapter")
        .with_model_name("uni_v2", "UNI2-h")
        .with_model_name("phikon", "Phikon")
        .with_dataset_name("GlaS", "GlaS")
        .with_dataset_name("TNBC", "TNBC")
        .with_category(DatasetCategory::Gland, ["GlaS"])
        .with_category(DatasetCategory::Nuclear, ["TNBC"])
}

/// 2 methods x 2 datasets x 2 models, two entries without `Mean_Dice`.
///
/// | method | dataset | uni_v2 | phikon |
/// |--------|---------|--------|--------|
/// | lora   | GlaS    | 0.91   | 0.85   |
/// | lora   | TNBC    | 0.70   | -      |
/// | cnn    | GlaS    | -      | 0.88   |
/// | cnn    | TNBC    | 0.72   | 0.75   |
pub fn small_result_set() -> ResultSet {
    ResultSetBuilder::new()
        .score("lora", "GlaS", "uni_v2", 0.91)
        .score("lora", "GlaS", "phikon", 0.85)
        .score("lora", "TNBC", "uni_v2", 0.70)
        .unscored("lora", "TNBC", "phikon")
        .unscored("cnn", "GlaS", "uni_v2")
        .score("cnn", "GlaS", "phikon", 0.88)
        .score("cnn", "TNBC", "uni_v2", 0.72)
        .score("cnn", "TNBC", "phikon", 0.75)
        .build()
}

/// GlaS scored by lora/uni_v2 at 0.9123 and cnn/conch_v1 at 0.8890.
pub fn glas_result_set() -> ResultSet {
    ResultSetBuilder::new()
        .score_with_ci("lora", "GlaS", "uni_v2", 0.9123, 0.9011, 0.9230)
        .score_with_ci("cnn", "GlaS", "conch_v1", 0.8890, 0.8702, 0.9051)
        .build()
}

/// Three lora groups: `phikon` ranks 1st on GlaS, 3rd on CRAG and 2nd on TNBC.
pub fn phikon_rank_result_set() -> ResultSet {
    ResultSetBuilder::new()
        .score("lora", "GlaS", "phikon", 0.90)
        .score("lora", "GlaS", "uni_v2", 0.80)
        .score("lora", "GlaS", "musk", 0.70)
        .score("lora", "CRAG", "uni_v2", 0.90)
        .score("lora", "CRAG", "musk", 0.85)
        .score("lora", "CRAG", "phikon", 0.60)
        .score("lora", "TNBC", "uni_v2", 0.75)
        .score("lora", "TNBC", "phikon", 0.70)
        .score("lora", "TNBC", "musk", 0.65)
        .build()
}

/// Writes one `<method>.json` per method of `results` into `dir`.
pub fn write_result_files(dir: &Path, results: &ResultSet) -> io::Result<Vec<PathBuf>> {
    fs::create_dir_all(dir)?;

    let mut paths = Vec::with_capacity(results.method_count());
    for (method, datasets) in results.methods() {
        let path = dir.join(format!("{}.json", method));
        let contents = serde_json::to_string_pretty(datasets)?;
        fs::write(&path, contents)?;
        paths.push(path);
    }

    Ok(paths)
}
