//! Configuration management for the statistics run.
//!
//! Settings are layered, later sources overriding earlier ones:
//!
//! 1. Built-in defaults (`Data/` in, `data_computed/stats.json` out)
//! 2. `densebench.toml` in the working directory (if it exists)
//! 3. Environment variables prefixed with `DENSEBENCH_`
//!
//! ## Example Configuration
//!
//! ```toml
//! [paths]
//! data_dir = "Data"
//! output_dir = "data_computed"
//! output_file = "stats.json"
//! catalog_file = "catalog.toml"
//!
//! [telemetry]
//! json_logging = false
//! log_level = "info"
//!
//! [output]
//! markdown_summary = true
//! ```
//!
//! The lookup catalog lives in its own TOML file because dataset identifiers
//! such as `Kumar` and `kumar` must stay distinct keys.

use anyhow::{Context, Result};
use pfm_densebench_domain::{Catalog, CatalogError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Default configuration file name, resolved with any supported extension.
pub const DEFAULT_CONFIG_NAME: &str = "densebench";

/// Prefix for environment overrides, e.g. `DENSEBENCH_PATHS__DATA_DIR`.
pub const ENV_PREFIX: &str = "DENSEBENCH";

const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Main configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StatsConfig {
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Input and output locations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Directory holding one `<method>.json` per method
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Directory the report is written to, created if absent
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Report file name inside `output_dir`
    #[serde(default = "default_output_file")]
    pub output_file: String,

    /// Optional TOML catalog replacing the built-in lookup tables
    #[serde(default)]
    pub catalog_file: Option<PathBuf>,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetryConfig {
    /// Enable JSON logging format
    #[serde(default)]
    pub json_logging: bool,

    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

/// Extra outputs
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Also write a Markdown leaderboard next to the report
    #[serde(default)]
    pub markdown_summary: bool,
}

// Default value functions
fn default_data_dir() -> PathBuf {
    PathBuf::from("Data")
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("data_computed")
}

fn default_output_file() -> String {
    "stats.json".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            output_dir: default_output_dir(),
            output_file: default_output_file(),
            catalog_file: None,
        }
    }
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            json_logging: false,
            log_level: default_log_level(),
        }
    }
}

impl StatsConfig {
    /// Load configuration from `densebench.toml` (optional) and the environment.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use pfm_densebench_common::config::StatsConfig;
    ///
    /// let config = StatsConfig::load().expect("Failed to load configuration");
    /// println!("Reading results from {}", config.paths.data_dir.display());
    /// ```
    pub fn load() -> Result<Self> {
        let builder = config::Config::builder()
            .add_source(config::File::with_name(DEFAULT_CONFIG_NAME).required(false));
        Self::build(builder)
    }

    /// Load configuration from an explicit file, which must exist, plus the environment.
    pub fn load_from(path: &Path) -> Result<Self> {
        let builder = config::Config::builder()
            .add_source(config::File::from(path).required(true));
        Self::build(builder)
    }

    fn build(builder: config::ConfigBuilder<config::builder::DefaultState>) -> Result<Self> {
        let config = builder
            // Example: DENSEBENCH_PATHS__DATA_DIR=/srv/results
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .context("Failed to build configuration")?;

        let stats_config: StatsConfig = config
            .try_deserialize()
            .context("Failed to deserialize configuration")?;

        stats_config.validate()?;

        Ok(stats_config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.paths.data_dir.as_os_str().is_empty() {
            anyhow::bail!("Data directory is required");
        }

        if self.paths.output_file.trim().is_empty() {
            anyhow::bail!("Output file name is required");
        }

        if !VALID_LOG_LEVELS.contains(&self.telemetry.log_level.as_str()) {
            anyhow::bail!(
                "Invalid log level '{}'. Must be one of: {}",
                self.telemetry.log_level,
                VALID_LOG_LEVELS.join(", ")
            );
        }

        Ok(())
    }

    /// Full path of the report file
    pub fn output_path(&self) -> PathBuf {
        self.paths.output_dir.join(&self.paths.output_file)
    }

    /// The catalog to run with: the configured file, or the built-in tables.
    pub fn load_catalog(&self) -> Result<Catalog, CatalogError> {
        let catalog = match &self.paths.catalog_file {
            Some(path) => read_catalog(path)?,
            None => Catalog::default(),
        };
        catalog.validate()?;
        Ok(catalog)
    }
}

/// Read a catalog from a TOML file.
pub fn read_catalog(path: &Path) -> Result<Catalog, CatalogError> {
    debug!(path = %path.display(), "Reading catalog file");

    let contents = fs::read_to_string(path).map_err(|source| CatalogError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;

    toml::from_str(&contents).map_err(|e| CatalogError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn test_default_config() {
        let config = StatsConfig::default();
        assert_eq!(config.paths.data_dir, PathBuf::from("Data"));
        assert_eq!(config.output_path(), PathBuf::from("data_computed/stats.json"));
        assert_eq!(config.telemetry.log_level, "info");
        assert!(!config.output.markdown_summary);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("densebench.toml");
        fs::write(
            &path,
            "[paths]\ndata_dir = \"results\"\n\n[output]\nmarkdown_summary = true\n",
        )
        .unwrap();

        let config = StatsConfig::load_from(&path).unwrap();
        assert_eq!(config.paths.data_dir, PathBuf::from("results"));
        assert_eq!(config.paths.output_file, "stats.json");
        assert!(config.output.markdown_summary);
    }

    #[test]
    fn test_load_from_missing_file_fails() {
        let dir = TempDir::new().unwrap();
        let result = StatsConfig::load_from(&dir.path().join("absent.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_log_level() {
        let mut config = StatsConfig::default();
        config.telemetry.log_level = "verbose".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_output_file() {
        let mut config = StatsConfig::default();
        config.paths.output_file = " ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_default_catalog_without_file() {
        let config = StatsConfig::default();
        let catalog = config.load_catalog().unwrap();
        assert_eq!(catalog, Catalog::default());
    }

    #[test]
    fn test_catalog_file_override() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "methods = [\"lora\", \"cnn\"]").unwrap();
        writeln!(file, "[model_names]").unwrap();
        writeln!(file, "uni_v2 = \"UNI2-h\"").unwrap();

        let mut config = StatsConfig::default();
        config.paths.catalog_file = Some(file.path().to_path_buf());

        let catalog = config.load_catalog().unwrap();
        assert_eq!(catalog.methods, vec!["lora", "cnn"]);
        assert_eq!(catalog.model_display("uni_v2"), "UNI2-h");
    }

    #[test]
    fn test_catalog_file_invalid() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "methods = 42").unwrap();

        let mut config = StatsConfig::default();
        config.paths.catalog_file = Some(file.path().to_path_buf());

        assert!(matches!(config.load_catalog(), Err(CatalogError::Parse { .. })));
    }

    #[test]
    fn test_catalog_file_without_methods_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "methods = []").unwrap();

        let mut config = StatsConfig::default();
        config.paths.catalog_file = Some(file.path().to_path_buf());

        assert!(matches!(config.load_catalog(), Err(CatalogError::NoMethods)));
    }
}
