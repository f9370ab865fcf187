//! Shared configuration and telemetry for the PFM-DenseBench statistics tools.
//!
//! This crate provides:
//! - Layered configuration (defaults, `densebench.toml`, environment)
//! - Catalog file loading
//! - Tracing subscriber setup

pub mod config;
pub mod telemetry;

// Re-export commonly used types
pub use config::{read_catalog, OutputConfig, PathsConfig, StatsConfig, TelemetryConfig};
pub use telemetry::{init_from_config, init_tracing};
