//! Explorer - interactive depth-first traversal

use std::io;
use std::path::Path;

use crate::entry::{DirectoryEntry, classify, list_children, sort_entries};
use crate::error::{ExploreError, Result};
use crate::gate::{self, Confirmation};
use crate::prompt::Prompter;
use crate::stats::RunStatistics;

use super::config::ExplorerConfig;

/// Receives exploration events for display.
pub trait ExploreOutput {
    /// Called once after the root has been validated.
    fn start(&mut self, root: &Path) -> io::Result<()>;

    /// Called for every classified entry, in display order.
    fn entry(&mut self, entry: &DirectoryEntry) -> io::Result<()>;

    /// Called for every recoverable listing or stat failure.
    fn error(&mut self, error: &ExploreError) -> io::Result<()>;

    /// Called once with the final totals.
    fn finish(&mut self, stats: &RunStatistics) -> io::Result<()>;
}

/// Walks a directory tree one level at a time, asking before descending.
///
/// Each level is listed, classified and sorted (directories first), then
/// displayed. Subdirectories are visited afterwards in the same order, each
/// one explored completely before the next sibling.
pub struct Explorer<O, P> {
    config: ExplorerConfig,
    output: O,
    prompter: P,
}

impl<O: ExploreOutput, P: Prompter> Explorer<O, P> {
    pub fn new(config: ExplorerConfig, output: O, prompter: P) -> Self {
        Self {
            config,
            output,
            prompter,
        }
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    pub fn prompter(&self) -> &P {
        &self.prompter
    }

    pub fn into_parts(self) -> (O, P) {
        (self.output, self.prompter)
    }

    /// Explore `root` and return the totals for the run.
    pub fn explore(&mut self, root: &Path) -> Result<RunStatistics> {
        let mut stats = RunStatistics::new();
        self.explore_into(root, &mut stats)?;
        Ok(stats.summary())
    }

    /// Explore `root`, accumulating into `stats` (which is reset first).
    ///
    /// Fails with `RootNotFound` before any output when `root` does not exist.
    pub fn explore_into(&mut self, root: &Path, stats: &mut RunStatistics) -> Result<()> {
        if !root.exists() {
            return Err(ExploreError::RootNotFound(root.to_path_buf()));
        }

        stats.reset();
        self.output.start(root)?;
        self.explore_dir(root, Confirmation::Pending, stats)?;
        self.output.finish(&stats.summary())?;

        tracing::debug!(
            files = stats.total_files,
            directories = stats.total_directories,
            bytes = stats.total_size_bytes,
            "exploration complete"
        );
        Ok(())
    }

    fn explore_dir(
        &mut self,
        dir: &Path,
        confirmation: Confirmation,
        stats: &mut RunStatistics,
    ) -> Result<()> {
        tracing::debug!(dir = %dir.display(), ?confirmation, "entering directory");

        let children = match list_children(dir) {
            Ok(children) => children,
            Err(e) => return self.report(e),
        };

        let mut batch = Vec::with_capacity(children.len());
        for child in children {
            match classify(&child) {
                Ok(Some(entry)) => {
                    tracing::trace!(path = %entry.path.display(), kind = ?entry.kind, "classified");
                    stats.record(&entry);
                    batch.push(entry);
                }
                Ok(None) => {
                    tracing::debug!(path = %child.display(), "skipping special file");
                }
                Err(e) => self.report(e)?,
            }
        }

        let batch = sort_entries(batch);
        for entry in &batch {
            self.output.entry(entry)?;
        }

        let subdirs: Vec<&DirectoryEntry> = batch
            .iter()
            .filter(|e| e.is_dir() && (self.config.descend_symlinks || !e.is_symlink))
            .collect();

        let decision = gate::decide(subdirs.len(), confirmation, &mut self.prompter)
            .map_err(ExploreError::Prompt)?;
        tracing::debug!(dir = %dir.display(), ?decision, "gate");

        if decision.descends() {
            for sub in subdirs {
                self.explore_dir(&sub.path, Confirmation::Confirmed, stats)?;
            }
        }
        Ok(())
    }

    /// Hand a recoverable error to the output and keep going.
    fn report(&mut self, error: ExploreError) -> Result<()> {
        debug_assert!(error.is_recoverable());
        tracing::debug!(path = ?error.path(), error = %error, "skipping");
        self.output.error(&error)?;
        Ok(())
    }
}
