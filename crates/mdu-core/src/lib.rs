//! Core types for mdu.
//!
//! This crate provides the data model shared by the walker and the CLI:
//! the immutable run configuration, the size policy, per-entry records,
//! the path joining rule and the error types.

mod config;
mod error;
mod path;
mod record;
mod stats;

pub use config::{UsageConfig, UsageConfigBuilder};
pub use error::{AccessFailure, FailureKind, UsageError};
pub use path::join_entry;
pub use record::{EntryKind, FileRecord, SizePolicy};
pub use stats::WalkStats;
