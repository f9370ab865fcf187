//! Lookup tables used to present benchmark results.
//!
//! The catalog lists the adaptation methods to load and maps raw identifiers
//! to display names and dataset categories. It is plain data handed to each
//! aggregation, so tests can supply their own tables.

use crate::errors::CatalogError;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::fmt;

/// Dataset categories shown on the leaderboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DatasetCategory {
    /// Nuclear instance and semantic segmentation.
    Nuclear,
    /// Gland segmentation.
    Gland,
    /// Tissue-level segmentation.
    Tissue,
    /// Datasets not listed in any group.
    Other,
}

impl DatasetCategory {
    /// Human-readable name, also the serialized form.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Nuclear => "Nuclear",
            Self::Gland => "Gland",
            Self::Tissue => "Tissue",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for DatasetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Datasets that belong to one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryGroup {
    /// The category.
    pub category: DatasetCategory,
    /// Member dataset identifiers, matched exactly and case-sensitively.
    pub datasets: Vec<String>,
}

/// Method list, display names and category membership.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    /// Method identifiers in load order.
    pub methods: Vec<String>,
    /// Method identifier -> display name.
    #[serde(default)]
    pub method_names: BTreeMap<String, String>,
    /// Model identifier -> display name.
    #[serde(default)]
    pub model_names: BTreeMap<String, String>,
    /// Dataset identifier -> display name. Case variants may share a name.
    #[serde(default)]
    pub dataset_names: BTreeMap<String, String>,
    /// Category groups; the first group listing a dataset wins.
    #[serde(default)]
    pub categories: Vec<CategoryGroup>,
}

impl Catalog {
    /// A catalog with the given methods and no display names or categories.
    pub fn new<I, S>(methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            methods: methods.into_iter().map(Into::into).collect(),
            method_names: BTreeMap::new(),
            model_names: BTreeMap::new(),
            dataset_names: BTreeMap::new(),
            categories: Vec::new(),
        }
    }

    /// Adds a method display name.
    pub fn with_method_name(mut self, key: impl Into<String>, name: impl Into<String>) -> Self {
        self.method_names.insert(key.into(), name.into());
        self
    }

    /// Adds a model display name.
    pub fn with_model_name(mut self, key: impl Into<String>, name: impl Into<String>) -> Self {
        self.model_names.insert(key.into(), name.into());
        self
    }

    /// Adds a dataset display name.
    pub fn with_dataset_name(mut self, key: impl Into<String>, name: impl Into<String>) -> Self {
        self.dataset_names.insert(key.into(), name.into());
        self
    }

    /// Appends a category group.
    pub fn with_category<I, S>(mut self, category: DatasetCategory, datasets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories.push(CategoryGroup {
            category,
            datasets: datasets.into_iter().map(Into::into).collect(),
        });
        self
    }

    /// Display name of a method, or the identifier itself.
    pub fn method_display<'a>(&'a self, key: &'a str) -> &'a str {
        self.method_names.get(key).map(String::as_str).unwrap_or(key)
    }

    /// Display name of a model, or the identifier itself.
    pub fn model_display<'a>(&'a self, key: &'a str) -> &'a str {
        self.model_names.get(key).map(String::as_str).unwrap_or(key)
    }

    /// Display name of a dataset, or the identifier itself.
    pub fn dataset_display<'a>(&'a self, key: &'a str) -> &'a str {
        self.dataset_names.get(key).map(String::as_str).unwrap_or(key)
    }

    /// Category of a dataset; unlisted datasets are `Other`.
    pub fn category_of(&self, dataset: &str) -> DatasetCategory {
        self.categories
            .iter()
            .find(|group| group.datasets.iter().any(|d| d == dataset))
            .map(|group| group.category)
            .unwrap_or(DatasetCategory::Other)
    }

    /// Checks that the catalog can drive a run.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.methods.is_empty() {
            return Err(CatalogError::NoMethods);
        }

        let mut seen = HashSet::with_capacity(self.methods.len());
        for method in &self.methods {
            if method.trim().is_empty() {
                return Err(CatalogError::EmptyMethodId);
            }
            if !seen.insert(method.as_str()) {
                return Err(CatalogError::DuplicateMethod(method.clone()));
            }
        }

        Ok(())
    }
}

impl Default for Catalog {
    /// The PFM-DenseBench tables.
    fn default() -> Self {
        Self::new(["frozen", "lora", "dora", "cnn", "transformer"])
            .with_method_name("frozen", "Frozen")
            .with_method_name("lora", "LoRA")
            .with_method_name("dora", "DoRA")
            .with_method_name("cnn", "CNN Adapter")
            .with_method_name("transformer", "Trans. Adapter")
            .with_model_name("PathOrchestra", "PathOrchestra")
            .with_model_name("conch_v1_5", "CONCHv1.5")
            .with_model_name("conch_v1", "CONCH")
            .with_model_name("gigapath", "Prov-GigaPath")
            .with_model_name("hibou_l", "Hibou-L")
            .with_model_name("hoptimus_0", "H-Optimus-0")
            .with_model_name("hoptimus_1", "H-Optimus-1")
            .with_model_name("kaiko-vitl14", "Kaiko-L")
            .with_model_name("lunit_vits8", "Lunit")
            .with_model_name("midnight12k", "Midnight-12k")
            .with_model_name("musk", "MUSK")
            .with_model_name("phikon", "Phikon")
            .with_model_name("phikon_v2", "Phikon-v2")
            .with_model_name("uni_v1", "UNI")
            .with_model_name("uni_v2", "UNI2-h")
            .with_model_name("virchow_v1", "Virchow")
            .with_model_name("virchow_v2", "Virchow2")
            .with_model_name("patho3dmatrix-vision", "Patho3DMatrix")
            .with_dataset_name("BCSS", "BCSS")
            .with_dataset_name("CoCaHis", "CoCaHis")
            .with_dataset_name("CoNIC2022", "CoNIC2022")
            .with_dataset_name("CoNSeP", "CoNSeP")
            .with_dataset_name("COSAS24", "COSAS24")
            .with_dataset_name("CRAG", "CRAG")
            .with_dataset_name("EBHI", "EBHI")
            .with_dataset_name("GlaS", "GlaS")
            .with_dataset_name("Janowczyk", "Janowczyk")
            .with_dataset_name("Kumar", "Kumar")
            .with_dataset_name("kumar", "Kumar")
            .with_dataset_name("Lizard", "Lizard")
            .with_dataset_name("NuCLS", "NuCLS")
            .with_dataset_name("PanNuke", "PanNuke")
            .with_dataset_name("RINGS", "RINGS")
            .with_dataset_name("TNBC", "TNBC")
            .with_dataset_name("WSSS4LUAD", "WSSS4LUAD")
            .with_dataset_name("cpm15", "CPM15")
            .with_dataset_name("cpm17", "CPM17")
            .with_category(
                DatasetCategory::Nuclear,
                [
                    "CoNIC2022", "CoNSeP", "cpm15", "cpm17", "Kumar", "kumar", "Lizard", "NuCLS",
                    "PanNuke", "TNBC",
                ],
            )
            .with_category(DatasetCategory::Gland, ["GlaS", "CRAG", "RINGS"])
            .with_category(
                DatasetCategory::Tissue,
                ["BCSS", "CoCaHis", "COSAS24", "EBHI", "WSSS4LUAD", "Janowczyk"],
            )
    }
}
