//! Single-file analysis library
//!
//! Inspects one file on disk and produces a report made of its metadata
//! (size, timestamps, MIME guess, digests), a per-type structural summary and
//! a fixed set of descriptive labels.

pub mod cli;
pub mod models;
pub mod services;

pub use models::{AnalysisOutcome, AnalysisReport, FailureRecord, FileRecord, StructuralSummary};

use std::path::Path;
use std::result;

/// Quality level used when the caller does not supply one
pub const DEFAULT_QUALITY_LEVEL: &str = "full";

/// Custom error type for the library
#[derive(Debug)]
pub enum Error {
    NotFound(String),
    Io(std::io::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::NotFound(path) => write!(f, "File not found: {path}"),
            Error::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

pub type Result<T> = result::Result<T, Error>;

/// Options for a single analysis call
#[derive(Debug, Clone)]
pub struct AnalyzeOptions {
    /// Free-form label copied into the report; never interpreted
    pub quality_level: String,
}

impl Default for AnalyzeOptions {
    fn default() -> Self {
        Self {
            quality_level: DEFAULT_QUALITY_LEVEL.to_string(),
        }
    }
}

/// Analyze a file and return the composed report
///
/// A missing path is not an error: it yields [`AnalysisOutcome::Failed`]
/// carrying the `File not found` record. Failures while reading an existing
/// path (permissions, directories) are returned as [`Error::Io`].
///
/// # Arguments
/// * `path` - The file to analyze
/// * `opts` - Analysis options
pub fn analyze_file<P: AsRef<Path>>(path: P, opts: &AnalyzeOptions) -> Result<AnalysisOutcome> {
    let path = path.as_ref();

    let (record, content) = match services::metadata::extract_metadata(path) {
        Ok(extracted) => extracted,
        Err(Error::NotFound(missing)) => {
            log::debug!("Skipping analysis, path does not exist: {missing}");
            return Ok(AnalysisOutcome::Failed(FailureRecord::not_found()));
        }
        Err(e) => return Err(e),
    };

    let summary = services::structure::summarize(&record, &content);
    let report = services::compose::compose_report(record, summary, &opts.quality_level);

    Ok(AnalysisOutcome::Report(Box::new(report)))
}

/// Convenience wrapper around [`analyze_file`] taking the quality level directly
pub fn analyze_file_with_level<P: AsRef<Path>>(path: P, quality_level: &str) -> Result<AnalysisOutcome> {
    let opts = AnalyzeOptions {
        quality_level: quality_level.to_string(),
    };
    analyze_file(path, &opts)
}
