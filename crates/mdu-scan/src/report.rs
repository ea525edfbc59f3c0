//! Output sinks for walk results.

use std::io::{self, StderrLock, StdoutLock, Write};
use std::path::{Path, PathBuf};

use mdu_core::{AccessFailure, UsageError};

/// Receives result lines and access failures as the walk produces them.
pub trait Reporter {
    /// A measured path: a sub-directory, or a top-level argument.
    fn entry(&mut self, size: u64, path: &Path) -> Result<(), UsageError>;

    /// The grand total over all top-level arguments.
    fn total(&mut self, size: u64) -> Result<(), UsageError>;

    /// A path that could not be accessed.
    fn failure(&mut self, failure: &AccessFailure);
}

/// Writes `<size>\t<path>` lines to one stream and failures to another.
#[derive(Debug)]
pub struct StreamReporter<O, E> {
    out: O,
    err: E,
}

impl<O: Write, E: Write> StreamReporter<O, E> {
    /// Create a reporter over the given output and error streams.
    pub fn new(out: O, err: E) -> Self {
        Self { out, err }
    }

    /// Flush the output stream.
    pub fn flush(&mut self) -> Result<(), UsageError> {
        self.out.flush().map_err(UsageError::output)
    }

    /// Give back the underlying streams.
    pub fn into_inner(self) -> (O, E) {
        (self.out, self.err)
    }
}

impl StreamReporter<StdoutLock<'static>, StderrLock<'static>> {
    /// Reporter bound to the process's standard output and error.
    pub fn stdio() -> Self {
        Self::new(io::stdout().lock(), io::stderr().lock())
    }
}

impl<O: Write, E: Write> Reporter for StreamReporter<O, E> {
    fn entry(&mut self, size: u64, path: &Path) -> Result<(), UsageError> {
        write!(self.out, "{size}\t")
            .and_then(|()| write_path(&mut self.out, path))
            .and_then(|()| self.out.write_all(b"\n"))
            .map_err(UsageError::output)
    }

    fn total(&mut self, size: u64) -> Result<(), UsageError> {
        writeln!(self.out, "total\t{size}").map_err(UsageError::output)
    }

    fn failure(&mut self, failure: &AccessFailure) {
        // Nowhere left to report a failing error stream
        let _ = writeln!(self.err, "{failure}");
    }
}

/// Paths are written as raw bytes where the platform allows it.
#[cfg(unix)]
fn write_path(w: &mut impl Write, path: &Path) -> io::Result<()> {
    use std::os::unix::ffi::OsStrExt;
    w.write_all(path.as_os_str().as_bytes())
}

#[cfg(not(unix))]
fn write_path(w: &mut impl Write, path: &Path) -> io::Result<()> {
    write!(w, "{}", path.display())
}

/// Collects everything in memory.
#[derive(Debug, Default)]
pub struct MemoryReporter {
    /// Reported `(size, path)` pairs, in the order they were produced.
    pub entries: Vec<(u64, PathBuf)>,
    /// Grand total, if one was reported.
    pub total: Option<u64>,
    /// Access failures, in the order they were produced.
    pub failures: Vec<AccessFailure>,
}

impl MemoryReporter {
    /// Create an empty reporter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sizes reported for `path`.
    pub fn sizes_of(&self, path: impl AsRef<Path>) -> Vec<u64> {
        let path = path.as_ref();
        self.entries
            .iter()
            .filter(|(_, p)| p == path)
            .map(|(size, _)| *size)
            .collect()
    }

    /// The single size reported for `path`, if it was reported exactly once.
    pub fn size_of(&self, path: impl AsRef<Path>) -> Option<u64> {
        match self.sizes_of(path).as_slice() {
            [size] => Some(*size),
            _ => None,
        }
    }
}

impl Reporter for MemoryReporter {
    fn entry(&mut self, size: u64, path: &Path) -> Result<(), UsageError> {
        self.entries.push((size, path.to_path_buf()));
        Ok(())
    }

    fn total(&mut self, size: u64) -> Result<(), UsageError> {
        self.total = Some(size);
        Ok(())
    }

    fn failure(&mut self, failure: &AccessFailure) {
        let source = match failure.source.raw_os_error() {
            Some(code) => io::Error::from_raw_os_error(code),
            None => io::Error::new(failure.source.kind(), failure.source.to_string()),
        };
        self.failures
            .push(AccessFailure::new(&failure.path, failure.kind, source));
    }
}
