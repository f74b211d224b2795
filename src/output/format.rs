//! Pure formatting of entries and sizes

use std::fmt;

use crate::entry::{DirectoryEntry, EntryKind};

const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Format a size in bytes to human-readable format.
///
/// Plain bytes below 1 KB, otherwise two decimals in the largest unit that
/// keeps the value under 1024 (TB is the ceiling).
pub fn format_size(bytes: u64) -> String {
    if bytes < 1024 {
        return format!("{} B", bytes);
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{:.2} {}", value, UNITS[unit])
}

/// One display line for an entry: the path followed by a bracketed tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryLine {
    pub path: String,
    pub kind: EntryKind,
    /// `(Directory)` or `(File - <size>)`
    pub tag: String,
}

impl fmt::Display for EntryLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.path, self.tag)
    }
}

/// Build the display line for an entry.
pub fn present(entry: &DirectoryEntry) -> EntryLine {
    let tag = match entry.kind {
        EntryKind::Directory => "(Directory)".to_string(),
        EntryKind::File => format!("(File - {})", format_size(entry.size_bytes)),
    };
    EntryLine {
        path: entry.path.display().to_string(),
        kind: entry.kind,
        tag,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size_boundaries() {
        assert_eq!(format_size(0), "0 B");
        assert_eq!(format_size(1), "1 B");
        assert_eq!(format_size(1023), "1023 B");
        assert_eq!(format_size(1024), "1.00 KB");
        assert_eq!(format_size(1536), "1.50 KB");
        assert_eq!(format_size(1024 * 1024 - 1), "1024.00 KB");
        assert_eq!(format_size(1024 * 1024), "1.00 MB");
        assert_eq!(format_size(1024 * 1024 * 1024), "1.00 GB");
        assert_eq!(format_size(1024u64.pow(4)), "1.00 TB");
    }

    #[test]
    fn test_format_size_tb_ceiling() {
        assert_eq!(format_size(2048 * 1024u64.pow(4)), "2048.00 TB");
    }

    #[test]
    fn test_present_directory() {
        let line = present(&DirectoryEntry::directory("src/tree"));
        assert_eq!(line.to_string(), "src/tree (Directory)");
    }

    #[test]
    fn test_present_file() {
        let line = present(&DirectoryEntry::file("notes.txt", 2560));
        assert_eq!(line.path, "notes.txt");
        assert_eq!(line.tag, "(File - 2.50 KB)");
        assert_eq!(line.to_string(), "notes.txt (File - 2.50 KB)");
    }

    #[test]
    fn test_present_empty_file() {
        let line = present(&DirectoryEntry::file("empty", 0));
        assert_eq!(line.to_string(), "empty (File - 0 B)");
    }
}
