//! I/O operations for result files and the statistics report.
//!
//! Each adaptation method has one `<method>.json` file in the data directory.
//! Loading is all-or-nothing: the first missing or malformed file aborts the
//! load. Outputs are written to a temporary file in the output directory
//! and renamed over their target only when complete.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use pfm_densebench_domain::{LoadError, MethodResults, ResultSet, StatsReport, WriteError};
use tempfile::NamedTempFile;
use tracing::{debug, info, instrument};

/// Location of a method's result file inside `data_dir`.
pub fn method_source_path(data_dir: &Path, method: &str) -> PathBuf {
    data_dir.join(format!("{}.json", method))
}

/// Reads one method's results.
///
/// # Arguments
///
/// * `method` - Method identifier, used for error reporting
/// * `path` - Path to the JSON file
pub fn read_method_results(method: &str, path: &Path) -> Result<MethodResults, LoadError> {
    let file = File::open(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => LoadError::NotFound {
            method: method.to_string(),
            path: path.to_path_buf(),
        },
        _ => LoadError::Unreadable {
            method: method.to_string(),
            path: path.to_path_buf(),
            source,
        },
    })?;
    let reader = BufReader::new(file);

    serde_json::from_reader(reader).map_err(|source| {
        if source.is_io() {
            LoadError::Unreadable {
                method: method.to_string(),
                path: path.to_path_buf(),
                source: source.into(),
            }
        } else {
            LoadError::Malformed {
                method: method.to_string(),
                path: path.to_path_buf(),
                source,
            }
        }
    })
}

/// Loads every configured method into one result set.
///
/// Methods are inserted in the given order, which becomes the traversal
/// order of every aggregation.
///
/// # Errors
///
/// Returns `LoadError::NoMethods` for an empty method list and the first
/// per-file error otherwise.
#[instrument(skip_all, fields(data_dir = %data_dir.display(), methods = methods.len()))]
pub fn load_result_set<S: AsRef<str>>(data_dir: &Path, methods: &[S]) -> Result<ResultSet, LoadError> {
    if methods.is_empty() {
        return Err(LoadError::NoMethods);
    }

    let mut results = ResultSet::new();

    for method in methods {
        let method = method.as_ref();
        let path = method_source_path(data_dir, method);
        let method_results = read_method_results(method, &path)?;

        debug!(
            method,
            datasets = method_results.len(),
            path = %path.display(),
            "Loaded method results"
        );
        results.insert_method(method, method_results);
    }

    info!(methods = results.method_count(), "Loaded result set");
    Ok(results)
}

/// A fully written file in `output_dir` that has not replaced its target yet.
///
/// Dropping it deletes the temporary file and leaves the target untouched.
#[derive(Debug)]
pub struct StagedFile {
    temp: NamedTempFile,
    path: PathBuf,
}

impl StagedFile {
    /// Runs `write` against a temporary file in the directory of `path`,
    /// creating that directory if needed.
    pub fn stage(
        path: PathBuf,
        write: impl FnOnce(&mut BufWriter<&File>) -> Result<(), WriteError>,
    ) -> Result<Self, WriteError> {
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&dir).map_err(|source| WriteError::CreateDir {
            path: dir.clone(),
            source,
        })?;

        let io_error = |source: std::io::Error| WriteError::Io {
            path: path.clone(),
            source,
        };

        let temp = NamedTempFile::new_in(&dir).map_err(io_error)?;
        // Temporary files are created owner-only; published outputs are world-readable.
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            temp.as_file()
                .set_permissions(fs::Permissions::from_mode(0o644))
                .map_err(io_error)?;
        }
        {
            let mut writer = BufWriter::new(temp.as_file());
            write(&mut writer)?;
            writer.flush().map_err(io_error)?;
        }

        Ok(Self { temp, path })
    }

    /// Target location.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Renames the temporary file over the target.
    pub fn commit(self) -> Result<PathBuf, WriteError> {
        let Self { temp, path } = self;
        temp.persist(&path).map_err(|e| WriteError::Io {
            path: path.clone(),
            source: e.error,
        })?;
        Ok(path)
    }
}

/// Serializes the report as pretty JSON into a staged file for `output_dir/file_name`.
pub fn stage_report(
    report: &StatsReport,
    output_dir: &Path,
    file_name: &str,
) -> Result<StagedFile, WriteError> {
    StagedFile::stage(output_dir.join(file_name), |writer| {
        serde_json::to_writer_pretty(writer, report)?;
        Ok(())
    })
}

/// Writes the report as pretty JSON, creating `output_dir` if needed.
///
/// An existing report is only replaced once the new one is fully written.
///
/// # Returns
///
/// The path to the written file on success.
pub fn write_report(
    report: &StatsReport,
    output_dir: &Path,
    file_name: &str,
) -> Result<PathBuf, WriteError> {
    let file_path = stage_report(report, output_dir, file_name)?.commit()?;
    info!(path = %file_path.display(), "Report written");
    Ok(file_path)
}

/// Reads a previously written report.
///
/// Rank observations are not part of the file and come back empty.
pub fn read_report(path: &Path) -> Result<StatsReport> {
    let file =
        File::open(path).with_context(|| format!("Failed to open file: {}", path.display()))?;
    let reader = BufReader::new(file);

    serde_json::from_reader(reader)
        .with_context(|| format!("Failed to parse report from: {}", path.display()))
}
