//! Run statistics
//!
//! Aggregate counts for one exploration run: files, directories and the
//! total size of all files seen. The accumulator is owned by the caller and
//! threaded through the traversal by mutable reference.

use crate::entry::DirectoryEntry;

/// Totals accumulated over one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStatistics {
    /// Number of files classified
    pub total_files: u64,
    /// Number of directories classified (the root itself is not counted)
    pub total_directories: u64,
    /// Sum of the sizes of all classified files
    pub total_size_bytes: u64,
}

impl RunStatistics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Zero all counters.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Record one successfully classified entry.
    pub fn record(&mut self, entry: &DirectoryEntry) {
        if entry.is_dir() {
            self.total_directories += 1;
        } else {
            self.total_files += 1;
            self.total_size_bytes += entry.size_bytes;
        }
    }

    /// Read-only snapshot of the counters.
    pub fn summary(&self) -> RunStatistics {
        *self
    }

    /// Number of entries recorded so far.
    pub fn total_entries(&self) -> u64 {
        self.total_files + self.total_directories
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_files_and_directories() {
        let mut stats = RunStatistics::new();
        stats.record(&DirectoryEntry::directory("src"));
        stats.record(&DirectoryEntry::file("src/main.rs", 120));
        stats.record(&DirectoryEntry::file("README.md", 30));

        let summary = stats.summary();
        assert_eq!(summary.total_files, 2);
        assert_eq!(summary.total_directories, 1);
        assert_eq!(summary.total_size_bytes, 150);
        assert_eq!(summary.total_entries(), 3);
    }

    #[test]
    fn test_directory_size_is_ignored() {
        let mut stats = RunStatistics::new();
        let mut dir = DirectoryEntry::directory("odd");
        dir.size_bytes = 4096;
        stats.record(&dir);
        assert_eq!(stats.total_size_bytes, 0);
    }

    #[test]
    fn test_reset() {
        let mut stats = RunStatistics::new();
        stats.record(&DirectoryEntry::file("a", 10));
        stats.reset();
        assert_eq!(stats, RunStatistics::default());
    }
}
