//! Recursive disk usage walker for mdu.
//!
//! This crate computes the cumulative size of each path it is given,
//! descending depth-first into directories on a single thread.
//!
//! # Overview
//!
//! [`UsageWalker`] pairs two operations that call each other:
//!
//! - **`evaluate`** stats one path and, for a directory, adds the result of
//!   expanding it. Sub-directories print a line once their sum is known.
//! - **`expand`** lists a directory and evaluates every entry, one level
//!   deeper, returning the sum.
//!
//! Paths that cannot be accessed are sent to the [`Reporter`] as
//! [`AccessFailure`]s, count as zero and never stop the walk.
//!
//! # Example
//!
//! ```rust,no_run
//! use mdu_scan::{StreamReporter, UsageConfig, UsageWalker};
//!
//! let config = UsageConfig::builder().print_total(true).build().unwrap();
//! let mut walker = UsageWalker::new(config, StreamReporter::stdio());
//! let summary = walker.run(&["/var/log", "/tmp"]).unwrap();
//!
//! println!("{} entries, {} failures", summary.stats.entries(), summary.stats.failures);
//! ```

mod report;
mod walker;

pub use report::{MemoryReporter, Reporter, StreamReporter};
pub use walker::{RunSummary, UsageWalker};

// Re-export core types for convenience
pub use mdu_core::{
    AccessFailure, EntryKind, FailureKind, FileRecord, SizePolicy, UsageConfig, UsageError,
    WalkStats,
};
