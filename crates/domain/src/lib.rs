//! PFM-DenseBench Domain Types
//!
//! This crate provides the core data model for the PFM-DenseBench leaderboard
//! statistics: the raw benchmark results keyed by method, dataset and model,
//! the lookup catalog used for presentation, and the derived report entries.
//!
//! ## Architecture
//!
//! The domain layer is organized into the following modules:
//!
//! - **results**: `ResultSet`, `Metrics` and the `Mean_Dice` score record
//! - **catalog**: display names, dataset categories and the method list
//! - **stats**: derived report entries (`DatasetSotaEntry`, `ModelRankEntry`, ...)
//! - **errors**: load, write and catalog error types
//!
//! ## Usage
//!
//! ```rust
//! use pfm_densebench_domain::{catalog::Catalog, DatasetCategory};
//!
//! let catalog = Catalog::default();
//! assert_eq!(catalog.dataset_display("kumar"), "Kumar");
//! assert_eq!(catalog.category_of("GlaS"), DatasetCategory::Gland);
//! assert_eq!(catalog.category_of("unlisted"), DatasetCategory::Other);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod catalog;
pub mod errors;
pub mod results;
pub mod stats;

pub use catalog::{Catalog, CategoryGroup, DatasetCategory};
pub use errors::{CatalogError, LoadError, StatsError, WriteError};
pub use results::{DatasetResults, MeanDice, MethodResults, Metrics, ResultSet, ScoredEntry};
pub use stats::{
    format_rank, format_score, DatasetSotaEntry, MethodComparisonEntry, ModelRankEntry,
    RankObservation, StatsReport,
};
