//! Testing utilities for PFM-DenseBench statistics
//!
//! This crate provides:
//! - Fixtures: synthetic catalogs and result sets with known answers
//! - Builders: a fluent `ResultSetBuilder`
//! - Strategies: proptest generators for arbitrary result sets
//! - Helpers to lay out per-method result files on disk
//!
//! # Examples
//!
//! ```
//! use pfm_densebench_testing::{builders::ResultSetBuilder, fixtures::synthetic_catalog};
//!
//! let results = ResultSetBuilder::new()
//!     .score("lora", "GlaS", "uni_v2", 0.9123)
//!     .unscored("lora", "GlaS", "phikon")
//!     .build();
//!
//! assert_eq!(results.method_count(), 1);
//! assert_eq!(synthetic_catalog().methods, vec!["lora", "cnn"]);
//! ```

pub mod builders;
pub mod fixtures;
pub mod strategies;

// Re-export commonly used types
pub use builders::*;
pub use fixtures::*;
