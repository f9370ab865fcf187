//! Error types for the leaderboard statistics pipeline.
//!
//! Loading and writing are all-or-nothing: any error here aborts the run
//! before output is produced. Missing scores and empty groups are not errors
//! and have no variant; the aggregations skip them.

use std::path::PathBuf;

/// Top-level error type
///
/// Wraps every failure the pipeline can report so callers can handle a single
/// type and still match on the stage that failed.
#[derive(Debug, thiserror::Error)]
pub enum StatsError {
    /// Loading the per-method result files failed
    #[error("Load error: {0}")]
    Load(#[from] LoadError),

    /// Writing the report failed
    #[error("Write error: {0}")]
    Write(#[from] WriteError),

    /// The lookup catalog is unusable
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),
}

impl StatsError {
    /// Machine-readable code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Load(_) => "LOAD_ERROR",
            Self::Write(_) => "WRITE_ERROR",
            Self::Catalog(_) => "CATALOG_ERROR",
        }
    }
}

/// A required method result source is missing or malformed.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// No method identifiers were configured
    #[error("No methods configured")]
    NoMethods,

    /// The result file does not exist
    #[error("Result file for method '{method}' not found: {}", .path.display())]
    NotFound {
        /// Method identifier
        method: String,
        /// Expected location
        path: PathBuf,
    },

    /// The result file exists but could not be read
    #[error("Failed to read result file for method '{method}' at {}: {source}", .path.display())]
    Unreadable {
        /// Method identifier
        method: String,
        /// File location
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The result file is not a dataset -> model -> metrics record
    #[error("Malformed result file for method '{method}' at {}: {source}", .path.display())]
    Malformed {
        /// Method identifier
        method: String,
        /// File location
        path: PathBuf,
        /// Underlying parse error
        source: serde_json::Error,
    },
}

impl LoadError {
    /// The method whose source failed, if any
    pub fn method(&self) -> Option<&str> {
        match self {
            Self::NoMethods => None,
            Self::NotFound { method, .. }
            | Self::Unreadable { method, .. }
            | Self::Malformed { method, .. } => Some(method),
        }
    }
}

/// Writing the report failed.
#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    /// The output directory could not be created
    #[error("Failed to create directory {}: {source}", .path.display())]
    CreateDir {
        /// Directory location
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The output file could not be created or flushed
    #[error("Failed to write file {}: {source}", .path.display())]
    Io {
        /// File location
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The report could not be serialized
    #[error("Failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// The lookup catalog cannot drive a run.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The method list is empty
    #[error("Catalog lists no methods")]
    NoMethods,

    /// A method identifier is blank
    #[error("Catalog contains a blank method identifier")]
    EmptyMethodId,

    /// A method is listed twice
    #[error("Duplicate method in catalog: {0}")]
    DuplicateMethod(String),

    /// The catalog file could not be read
    #[error("Failed to read catalog file {}: {source}", .path.display())]
    Unreadable {
        /// File location
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The catalog file is not valid
    #[error("Invalid catalog file {}: {message}", .path.display())]
    Parse {
        /// File location
        path: PathBuf,
        /// Parser message
        message: String,
    },
}
