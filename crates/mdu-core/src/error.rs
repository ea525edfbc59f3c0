//! Error types for disk usage runs.

use std::io;
use std::path::{Path, PathBuf};

use derive_builder::UninitializedFieldError;
use thiserror::Error;

/// Errors that abort a run.
///
/// Access failures on individual paths are not represented here; they are
/// recovered where they happen, see [`AccessFailure`].
#[derive(Debug, Error)]
pub enum UsageError {
    /// A result line could not be written to the output stream.
    #[error("failed to write output: {source}")]
    Output {
        #[source]
        source: io::Error,
    },

    /// Invalid configuration.
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },
}

impl UsageError {
    /// Wrap an output stream error.
    pub fn output(source: io::Error) -> Self {
        Self::Output { source }
    }

    /// Whether the output failed because the reader went away.
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, Self::Output { source } if source.kind() == io::ErrorKind::BrokenPipe)
    }
}

impl From<UninitializedFieldError> for UsageError {
    fn from(err: UninitializedFieldError) -> Self {
        Self::InvalidConfig {
            message: err.to_string(),
        }
    }
}

/// Filesystem call that failed on a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Querying the path status.
    Stat,
    /// Opening a directory for listing.
    ReadDir,
    /// Reading the next entry of an open listing.
    ReadEntry,
}

/// A path that could not be accessed.
///
/// Displays as `<path>: <reason>`, which is the line written to the error
/// channel. The entry contributes zero to every enclosing sum.
#[derive(Debug, Error)]
#[error("{}: {source}", .path.display())]
pub struct AccessFailure {
    /// Path that failed.
    pub path: PathBuf,
    /// Which call failed.
    pub kind: FailureKind,
    /// Underlying error.
    #[source]
    pub source: io::Error,
}

impl AccessFailure {
    /// Create a new access failure.
    pub fn new(path: impl Into<PathBuf>, kind: FailureKind, source: io::Error) -> Self {
        Self {
            path: path.into(),
            kind,
            source,
        }
    }

    /// Failure to stat `path`.
    pub fn stat(path: &Path, source: io::Error) -> Self {
        Self::new(path, FailureKind::Stat, source)
    }

    /// Failure to open `path` for listing.
    pub fn read_dir(path: &Path, source: io::Error) -> Self {
        Self::new(path, FailureKind::ReadDir, source)
    }

    /// Failure while reading entries of the listing of `path`.
    pub fn read_entry(path: &Path, source: io::Error) -> Self {
        Self::new(path, FailureKind::ReadEntry, source)
    }

    /// Whether access was refused.
    pub fn is_permission_denied(&self) -> bool {
        self.source.kind() == io::ErrorKind::PermissionDenied
    }

    /// Whether the path was missing, including entries removed mid-walk.
    pub fn is_not_found(&self) -> bool {
        self.source.kind() == io::ErrorKind::NotFound
    }
}
