//! Test utilities for building directory trees and driving the explorer.
//!
//! This module is only compiled for tests and benchmarks.

use std::collections::VecDeque;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::entry::DirectoryEntry;
use crate::error::ExploreError;
use crate::explore::ExploreOutput;
use crate::output::present;
use crate::prompt::{Prompter, is_affirmative};
use crate::stats::RunStatistics;

/// A temporary directory tree for testing.
///
/// The tree is automatically cleaned up when dropped.
pub struct TestTree {
    dir: TempDir,
}

impl TestTree {
    /// Create a new empty temporary directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Add a file of exactly `size` bytes.
    ///
    /// Creates parent directories as needed.
    pub fn add_file(&self, path: &str, size: usize) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, vec![b'x'; size]).expect("Failed to write file");
        full_path
    }

    /// Add an empty directory, creating parents as needed.
    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }
}

impl Default for TestTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Prompter that replays canned answers and records the questions asked.
///
/// Once the answers run out every further question is declined.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<String>,
    questions: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            questions: Vec::new(),
        }
    }

    /// Number of questions asked so far.
    pub fn asked(&self) -> usize {
        self.questions.len()
    }

    pub fn questions(&self) -> &[String] {
        &self.questions
    }
}

impl Prompter for ScriptedPrompter {
    fn confirm(&mut self, question: &str) -> io::Result<bool> {
        self.questions.push(question.to_string());
        Ok(self
            .answers
            .pop_front()
            .is_some_and(|answer| is_affirmative(&answer)))
    }
}

/// Output that keeps every event in memory.
#[derive(Debug, Default)]
pub struct RecordingOutput {
    pub root: Option<PathBuf>,
    pub entries: Vec<DirectoryEntry>,
    pub errors: Vec<String>,
    pub summary: Option<RunStatistics>,
}

impl RecordingOutput {
    /// Display lines for the recorded entries, in order.
    pub fn lines(&self) -> Vec<String> {
        self.entries.iter().map(|e| present(e).to_string()).collect()
    }
}

impl ExploreOutput for RecordingOutput {
    fn start(&mut self, root: &Path) -> io::Result<()> {
        self.root = Some(root.to_path_buf());
        Ok(())
    }

    fn entry(&mut self, entry: &DirectoryEntry) -> io::Result<()> {
        self.entries.push(entry.clone());
        Ok(())
    }

    fn error(&mut self, error: &ExploreError) -> io::Result<()> {
        self.errors.push(error.to_string());
        Ok(())
    }

    fn finish(&mut self, stats: &RunStatistics) -> io::Result<()> {
        self.summary = Some(*stats);
        Ok(())
    }
}
