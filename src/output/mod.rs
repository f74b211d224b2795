//! Exploration output
//!
//! - `format` - pure formatting: display lines and human-readable sizes
//! - `console` - colored console formatter used by the binary
//! - `config` - output configuration

mod config;
mod console;
mod format;

pub use config::OutputConfig;
pub use console::{ConsoleFormatter, print_fatal};
pub use format::{EntryLine, format_size, present};
