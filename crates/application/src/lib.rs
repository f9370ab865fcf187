//! Application layer for PFM-DenseBench statistics
//!
//! This crate holds the leaderboard aggregations. Each one is a pure function
//! of a loaded `ResultSet` and a `Catalog`; none of them fails, and entities
//! without any valid score are left out of the output.
//!
//! ## Modules
//!
//! - `aggregation::sota` - best (model, method) per dataset
//! - `aggregation::ranks` - average rank per model
//! - `aggregation::methods` - average score per method

pub mod aggregation;

// Re-export commonly used functions
pub use aggregation::{
    compute_dataset_sota, compute_method_comparison, compute_model_ranks, compute_report,
    rank_group,
};
