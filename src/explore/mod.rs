//! Directory exploration
//!
//! `Explorer` lists one directory level at a time, prints it in sorted order
//! and asks before descending. Output and prompting are pluggable through
//! `ExploreOutput` and `Prompter` so the traversal can be driven from tests.

mod config;
mod walker;

pub use config::ExplorerConfig;
pub use walker::{ExploreOutput, Explorer};
