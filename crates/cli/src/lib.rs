//! PFM-DenseBench Statistics CLI Library
//!
//! The pieces behind the `densebench-stats` binary: the end-to-end run and
//! console rendering of its report.

pub mod output;
pub mod run;

pub use output::{render_report, OutputFormat, TableFormatter};
pub use run::{run, RunOutcome};
