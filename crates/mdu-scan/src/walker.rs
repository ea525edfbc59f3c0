//! Depth-first disk usage walker.

use std::fs;
use std::path::Path;

use tracing::{debug, trace, warn};

use mdu_core::{AccessFailure, FileRecord, UsageConfig, UsageError, WalkStats, join_entry};

use crate::report::Reporter;

/// Result of a complete run over all top-level arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Sum of the sizes of every top-level argument.
    pub total: u64,
    /// What the run evaluated.
    pub stats: WalkStats,
}

/// Single-threaded recursive walker.
///
/// Every directory's size is its own size plus the sizes of its immediate
/// children, all measured with the same [`SizePolicy`](mdu_core::SizePolicy).
/// Entries are visited in listing order, so output order follows the
/// filesystem and is not sorted.
///
/// Symlink cycles are not detected: with `follow_symlinks` a looping link
/// recurses until the filesystem refuses the path.
pub struct UsageWalker<R> {
    config: UsageConfig,
    reporter: R,
    stats: WalkStats,
}

impl<R: Reporter> UsageWalker<R> {
    /// Create a new walker.
    pub fn new(config: UsageConfig, reporter: R) -> Self {
        Self {
            config,
            reporter,
            stats: WalkStats::new(),
        }
    }

    /// Statistics accumulated so far.
    pub fn stats(&self) -> &WalkStats {
        &self.stats
    }

    /// The reporter receiving results.
    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    /// Mutable access to the reporter.
    pub fn reporter_mut(&mut self) -> &mut R {
        &mut self.reporter
    }

    /// Consume the walker, returning its reporter.
    pub fn into_reporter(self) -> R {
        self.reporter
    }

    /// Measure every path in order, reporting each one and, if configured,
    /// the grand total. No paths means the current directory.
    ///
    /// Inaccessible arguments count as zero. Only output failures abort.
    pub fn run<P: AsRef<Path>>(&mut self, paths: &[P]) -> Result<RunSummary, UsageError> {
        let mut total: u64 = 0;

        if paths.is_empty() {
            total += self.measure_argument(Path::new("."))?;
        } else {
            for path in paths {
                total += self.measure_argument(path.as_ref())?;
            }
        }

        if self.config.print_total {
            self.reporter.total(total)?;
        }

        debug!(
            total,
            files = self.stats.files,
            dirs = self.stats.dirs,
            symlinks = self.stats.symlinks,
            others = self.stats.others,
            failures = self.stats.failures,
            "run complete"
        );

        Ok(RunSummary {
            total,
            stats: self.stats,
        })
    }

    /// Evaluate one top-level argument and always report it.
    fn measure_argument(&mut self, path: &Path) -> Result<u64, UsageError> {
        debug!(path = %path.display(), "measuring argument");
        let size = self.evaluate(path, 0)?;
        self.reporter.entry(size, path)?;
        Ok(size)
    }

    /// Size of `path`, recursing into it if it is a directory.
    ///
    /// Directories below the top level (`depth > 0`) are reported here once
    /// their cumulative size is known. Other entries are never reported on
    /// their own. A path that cannot be stat'ed is reported as a failure and
    /// contributes zero.
    pub fn evaluate(&mut self, path: &Path, depth: u32) -> Result<u64, UsageError> {
        let metadata = match self.config.stat(path) {
            Ok(metadata) => metadata,
            Err(err) => {
                self.fail(AccessFailure::stat(path, err));
                return Ok(0);
            }
        };

        let record = FileRecord::from_metadata(&metadata, self.config.size_policy());
        self.stats.record(record.kind);
        trace!(path = %path.display(), kind = ?record.kind, size = record.size, depth, "evaluated");

        if !record.is_dir() {
            return Ok(record.size);
        }

        let size = record.size + self.expand(path, depth)?;
        if depth > 0 {
            self.reporter.entry(size, path)?;
        }

        Ok(size)
    }

    /// Sum of the sizes of the entries of directory `path`.
    ///
    /// Each entry is evaluated at `depth + 1`. Failing to open the listing
    /// is reported and yields zero; a failure while reading the listing
    /// is reported and the entries read so far still count.
    pub fn expand(&mut self, path: &Path, depth: u32) -> Result<u64, UsageError> {
        let entries = match fs::read_dir(path) {
            Ok(entries) => entries,
            Err(err) => {
                self.fail(AccessFailure::read_dir(path, err));
                return Ok(0);
            }
        };

        debug!(path = %path.display(), depth, "expanding directory");

        let mut size: u64 = 0;
        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    self.fail(AccessFailure::read_entry(path, err));
                    continue;
                }
            };

            let child = join_entry(path, &entry.file_name());
            size += self.evaluate(&child, depth + 1)?;
        }

        Ok(size)
    }

    fn fail(&mut self, failure: AccessFailure) {
        warn!(path = %failure.path.display(), kind = ?failure.kind, error = %failure.source, "cannot access");
        self.stats.record_failure();
        self.reporter.failure(&failure);
    }
}
