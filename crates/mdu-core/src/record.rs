//! Per-entry records and the size policy.

use std::fs::{FileType, Metadata};

#[cfg(unix)]
use std::os::unix::fs::MetadataExt;

/// Type of a filesystem entry as seen by the walker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    /// Regular file.
    File,
    /// Directory.
    Directory,
    /// Symbolic link (only seen when links are not followed).
    Symlink,
    /// Other file types (sockets, devices, fifos).
    Other,
}

impl EntryKind {
    /// Classify a file type.
    pub fn from_file_type(file_type: FileType) -> Self {
        if file_type.is_dir() {
            Self::Directory
        } else if file_type.is_file() {
            Self::File
        } else if file_type.is_symlink() {
            Self::Symlink
        } else {
            Self::Other
        }
    }

    /// Check if this is a directory.
    pub fn is_dir(&self) -> bool {
        matches!(self, Self::Directory)
    }
}

/// How the size of a single entry is measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizePolicy {
    /// Logical byte length.
    Apparent,
    /// Allocated storage, in the platform's 512-byte block count.
    Allocated,
}

impl SizePolicy {
    /// Size of one entry, excluding anything below it.
    pub fn measure(self, metadata: &Metadata) -> u64 {
        match self {
            Self::Apparent => metadata.len(),
            Self::Allocated => allocated_blocks(metadata),
        }
    }
}

/// Type and own size of one evaluated path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileRecord {
    /// Resolved entry type.
    pub kind: EntryKind,
    /// Size under the active policy.
    pub size: u64,
}

impl FileRecord {
    /// Build a record from stat results.
    pub fn from_metadata(metadata: &Metadata, policy: SizePolicy) -> Self {
        Self {
            kind: EntryKind::from_file_type(metadata.file_type()),
            size: policy.measure(metadata),
        }
    }

    /// Check if this record is a directory.
    pub fn is_dir(&self) -> bool {
        self.kind.is_dir()
    }
}

#[cfg(unix)]
fn allocated_blocks(metadata: &Metadata) -> u64 {
    metadata.blocks()
}

#[cfg(not(unix))]
fn allocated_blocks(metadata: &Metadata) -> u64 {
    // No block count available, estimate from the length
    metadata.len().div_ceil(512)
}
