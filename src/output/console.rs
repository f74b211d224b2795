//! Console output formatter
//!
//! Writes entries, the summary block and recoverable errors as they happen.
//! Normal output goes to stdout and errors to stderr, both colored when enabled.

use std::io::{self, Write};
use std::path::Path;

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::entry::{DirectoryEntry, EntryKind};
use crate::error::ExploreError;
use crate::explore::ExploreOutput;
use crate::stats::RunStatistics;

use super::config::OutputConfig;
use super::format::{format_size, present};

fn color_choice(use_color: bool) -> ColorChoice {
    if use_color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    }
}

/// Console formatter, streams directly to stdout/stderr without buffering.
pub struct ConsoleFormatter {
    stdout: StandardStream,
    stderr: StandardStream,
}

impl ConsoleFormatter {
    pub fn new(config: OutputConfig) -> Self {
        let choice = color_choice(config.use_color);
        Self {
            stdout: StandardStream::stdout(choice),
            stderr: StandardStream::stderr(choice),
        }
    }
}

impl ExploreOutput for ConsoleFormatter {
    fn start(&mut self, root: &Path) -> io::Result<()> {
        self.stdout
            .set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
        write!(self.stdout, "Exploring directory: ")?;
        self.stdout
            .set_color(ColorSpec::new().set_fg(Some(Color::Yellow)))?;
        writeln!(self.stdout, "{}", root.display())?;
        self.stdout.reset()?;
        Ok(())
    }

    fn entry(&mut self, entry: &DirectoryEntry) -> io::Result<()> {
        let line = present(entry);
        let (path_color, tag_color) = match line.kind {
            EntryKind::Directory => (Color::Blue, Color::Green),
            EntryKind::File => (Color::Cyan, Color::Yellow),
        };

        self.stdout
            .set_color(ColorSpec::new().set_fg(Some(path_color)).set_bold(true))?;
        write!(self.stdout, "{}", line.path)?;
        self.stdout
            .set_color(ColorSpec::new().set_fg(Some(tag_color)))?;
        writeln!(self.stdout, " {}", line.tag)?;
        self.stdout.reset()?;
        Ok(())
    }

    fn error(&mut self, error: &ExploreError) -> io::Result<()> {
        // Keep prompt text and entries ahead of the error
        self.stdout.flush()?;
        print_error(&mut self.stderr, error)
    }

    fn finish(&mut self, stats: &RunStatistics) -> io::Result<()> {
        let mut bold = ColorSpec::new();
        bold.set_bold(true);

        writeln!(self.stdout)?;
        self.stdout.set_color(&bold)?;
        writeln!(self.stdout, "--- Summary ---")?;
        self.stdout.reset()?;
        writeln!(self.stdout, "Total Files: {}", stats.total_files)?;
        writeln!(self.stdout, "Total Directories: {}", stats.total_directories)?;
        writeln!(
            self.stdout,
            "Total Size: {}",
            format_size(stats.total_size_bytes)
        )?;
        self.stdout
            .set_color(ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true))?;
        writeln!(self.stdout, "--- Exploration complete! ---")?;
        self.stdout.reset()?;
        self.stdout.flush()
    }
}

fn print_error(stream: &mut StandardStream, error: &ExploreError) -> io::Result<()> {
    stream.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
    write!(stream, "Error:")?;
    stream.reset()?;
    stream.set_color(ColorSpec::new().set_fg(Some(Color::Red)))?;
    writeln!(stream, " {}", error)?;
    stream.reset()?;
    Ok(())
}

/// Print an error that ends the run to stderr.
pub fn print_fatal(error: &ExploreError, config: &OutputConfig) -> io::Result<()> {
    let mut stderr = StandardStream::stderr(color_choice(config.use_color));
    print_error(&mut stderr, error)
}
