//! Walk statistics.

use crate::record::EntryKind;

/// Counts of what a run evaluated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkStats {
    /// Regular files evaluated.
    pub files: u64,
    /// Directories evaluated, top-level arguments included.
    pub dirs: u64,
    /// Symbolic links reported as themselves.
    pub symlinks: u64,
    /// Sockets, devices and other special files.
    pub others: u64,
    /// Paths that could not be accessed.
    pub failures: u64,
}

impl WalkStats {
    /// Create new empty stats.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one successfully evaluated entry.
    pub fn record(&mut self, kind: EntryKind) {
        match kind {
            EntryKind::File => self.files += 1,
            EntryKind::Directory => self.dirs += 1,
            EntryKind::Symlink => self.symlinks += 1,
            EntryKind::Other => self.others += 1,
        }
    }

    /// Record an access failure.
    pub fn record_failure(&mut self) {
        self.failures += 1;
    }

    /// Total entries evaluated successfully.
    pub fn entries(&self) -> u64 {
        self.files + self.dirs + self.symlinks + self.others
    }
}
