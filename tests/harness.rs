//! Test harness for dirscout integration tests

use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

pub use dirscout::test_utils::TestTree;

pub const SUMMARY_HEADER: &str = "--- Summary ---";

/// Run the binary in `dir`, feeding `stdin` as the user's answers.
pub fn run_dirscout(dir: &Path, args: &[&str], stdin: &str) -> (String, String, bool) {
    let binary = env!("CARGO_BIN_EXE_dirscout");
    let mut child = Command::new(binary)
        .args(args)
        .current_dir(dir)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to run dirscout");

    // The process may exit before reading its input
    if let Some(mut input) = child.stdin.take() {
        let _ = input.write_all(stdin.as_bytes());
    }

    let output = child.wait_with_output().expect("Failed to wait for dirscout");
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();

    (stdout, stderr, output.status.success())
}

/// Count how many times the exploration prompt was printed.
pub fn prompt_count(stdout: &str) -> usize {
    stdout.matches(dirscout::EXPLORE_PROMPT).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_harness_creates_temp_dir() {
        let tree = TestTree::new();
        assert!(tree.path().exists());
    }

    #[test]
    fn test_harness_add_file() {
        let tree = TestTree::new();
        let file_path = tree.add_file("nested/file.txt", 12);
        assert_eq!(std::fs::metadata(file_path).unwrap().len(), 12);
    }
}
