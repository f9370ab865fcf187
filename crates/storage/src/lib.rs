//! PFM-DenseBench Result Storage
//!
//! This crate reads the per-method benchmark result files and writes the
//! computed leaderboard statistics.
//!
//! ## Architecture
//!
//! - **io**: loading `<method>.json` files into a `ResultSet`, writing and
//!   reading `stats.json`
//! - **markdown**: Markdown leaderboard generation
//!
//! ## Usage
//!
//! ```rust,no_run
//! use pfm_densebench_domain::Catalog;
//! use pfm_densebench_storage::{load_result_set, write_report};
//! use pfm_densebench_domain::StatsReport;
//! use std::path::Path;
//!
//! fn main() -> anyhow::Result<()> {
//!     let catalog = Catalog::default();
//!     let results = load_result_set(Path::new("Data"), &catalog.methods)?;
//!     println!("Loaded {} methods", results.method_count());
//!
//!     let path = write_report(&StatsReport::default(), Path::new("data_computed"), "stats.json")?;
//!     println!("Wrote {}", path.display());
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod io;
pub mod markdown;

pub use io::{
    load_result_set, method_source_path, read_method_results, read_report, stage_report,
    write_report, StagedFile,
};
pub use markdown::{render_summary, stage_summary, write_summary, SUMMARY_FILE};
