//! Run configuration.

use std::fs::{self, Metadata};
use std::io;
use std::path::Path;

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::error::UsageError;
use crate::record::SizePolicy;

/// Options resolved once before traversal begins.
///
/// The walker takes this by value and only ever hands out shared
/// references, so options cannot change in the middle of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Builder, Serialize, Deserialize)]
#[builder(setter(into), build_fn(error = "UsageError"))]
pub struct UsageConfig {
    /// Resolve symbolic links when determining type and size.
    #[builder(default = "false")]
    #[serde(default)]
    pub follow_symlinks: bool,

    /// Report logical byte length instead of allocated blocks.
    #[builder(default = "false")]
    #[serde(default)]
    pub apparent_size: bool,

    /// Print a grand total after all arguments.
    #[builder(default = "false")]
    #[serde(default)]
    pub print_total: bool,
}

impl UsageConfig {
    /// Create a new config builder.
    pub fn builder() -> UsageConfigBuilder {
        UsageConfigBuilder::default()
    }

    /// Create a config with every option disabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// The size policy selected by `apparent_size`.
    pub fn size_policy(&self) -> SizePolicy {
        if self.apparent_size {
            SizePolicy::Apparent
        } else {
            SizePolicy::Allocated
        }
    }

    /// Query the status of `path`, following links only when configured to.
    pub fn stat(&self, path: &Path) -> io::Result<Metadata> {
        if self.follow_symlinks {
            fs::metadata(path)
        } else {
            fs::symlink_metadata(path)
        }
    }
}
