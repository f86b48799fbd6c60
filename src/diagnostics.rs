//! Per-file extraction outcomes.
//!
//! Extraction never fails as a whole: a file that cannot be read or parsed is skipped. The
//! outcome of every file is still reported to a [`DiagnosticsSink`] so callers can see what
//! was skipped and why.

use crate::error::Error;
use log::{debug, warn};
use std::path::PathBuf;

/// Why a file contributed nothing.
#[derive(Debug)]
pub enum SkipReason {
    /// The file could not be read
    Io(Error),
    /// The file is not valid Java
    Parse(Error),
}

impl From<Error> for SkipReason {
    fn from(err: Error) -> Self {
        match err {
            Error::IoError { .. } => SkipReason::Io(err),
            other => SkipReason::Parse(other),
        }
    }
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            SkipReason::Io(e) | SkipReason::Parse(e) => write!(f, "{}", e),
        }
    }
}

/// Result of processing one source file.
#[derive(Debug)]
pub enum FileOutcome {
    Extracted { path: PathBuf, blueprints: usize },
    Skipped { path: PathBuf, reason: SkipReason },
}

impl FileOutcome {
    pub fn path(&self) -> &PathBuf {
        match self {
            FileOutcome::Extracted { path, .. } | FileOutcome::Skipped { path, .. } => path,
        }
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, FileOutcome::Skipped { .. })
    }
}

/// Receiver for per-file outcomes.
pub trait DiagnosticsSink {
    fn record(&mut self, outcome: FileOutcome);
}

/// Collects outcomes in memory.
impl DiagnosticsSink for Vec<FileOutcome> {
    fn record(&mut self, outcome: FileOutcome) {
        self.push(outcome);
    }
}

/// Writes outcomes to the log and keeps running totals.
#[derive(Debug, Default)]
pub struct LogSink {
    pub extracted_files: usize,
    pub skipped_files: usize,
}

impl DiagnosticsSink for LogSink {
    fn record(&mut self, outcome: FileOutcome) {
        match outcome {
            FileOutcome::Extracted { path, blueprints } => {
                self.extracted_files += 1;
                debug!("{}: {} blueprints", path.display(), blueprints);
            }
            FileOutcome::Skipped { path, reason } => {
                self.skipped_files += 1;
                warn!("Skipping {}: {}", path.display(), reason);
            }
        }
    }
}
