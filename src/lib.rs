//! Dirscout - interactive directory explorer with file, directory and size totals

pub mod entry;
pub mod error;
pub mod explore;
pub mod gate;
pub mod output;
pub mod prompt;
pub mod stats;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use entry::{DirectoryEntry, EntryKind, classify, list_children, sort_entries};
pub use error::{ExploreError, Result};
pub use explore::{ExploreOutput, Explorer, ExplorerConfig};
pub use gate::{Confirmation, GateDecision};
pub use output::{ConsoleFormatter, EntryLine, OutputConfig, format_size, present, print_fatal};
pub use prompt::{EXPLORE_PROMPT, LinePrompter, Prompter, is_affirmative};
pub use stats::RunStatistics;
