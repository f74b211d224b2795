//! Yes/no prompting

use std::io::{self, BufRead, Stdout, StdinLock, Write};

/// Question asked before descending into subdirectories.
pub const EXPLORE_PROMPT: &str = "Do you want to explore subdirectories? (y/n): ";

/// Source of yes/no answers from the user.
pub trait Prompter {
    /// Ask `question` and block until an answer arrives.
    fn confirm(&mut self, question: &str) -> io::Result<bool>;
}

/// Whether an answer counts as "yes".
pub fn is_affirmative(answer: &str) -> bool {
    let answer = answer.trim();
    answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes")
}

/// Prompter that writes the question to a writer and reads one line back.
pub struct LinePrompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl LinePrompter<StdinLock<'static>, Stdout> {
    /// Prompt on stdout, read answers from stdin.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn confirm(&mut self, question: &str) -> io::Result<bool> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;

        // Bytes, not String: an answer that is not UTF-8 declines instead of failing.
        // End of input reads as "no".
        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(false);
        }
        Ok(is_affirmative(&String::from_utf8_lossy(&line)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_is_affirmative() {
        assert!(is_affirmative("y"));
        assert!(is_affirmative("Y\n"));
        assert!(is_affirmative("yes"));
        assert!(is_affirmative("  YeS \r\n"));
        assert!(!is_affirmative("n"));
        assert!(!is_affirmative(""));
        assert!(!is_affirmative("yep"));
        assert!(!is_affirmative("no"));
    }

    #[test]
    fn test_line_prompter_writes_question() {
        let mut out = Vec::new();
        let answer = LinePrompter::new(Cursor::new("yes\n"), &mut out)
            .confirm(EXPLORE_PROMPT)
            .unwrap();
        assert!(answer);
        assert_eq!(String::from_utf8(out).unwrap(), EXPLORE_PROMPT);
    }

    #[test]
    fn test_line_prompter_reads_one_line_per_question() {
        let mut prompter = LinePrompter::new(Cursor::new("n\ny\n"), Vec::new());
        assert!(!prompter.confirm("first? ").unwrap());
        assert!(prompter.confirm("second? ").unwrap());
    }

    #[test]
    fn test_invalid_utf8_answer_declines() {
        let mut prompter = LinePrompter::new(Cursor::new(&b"\xff\n"[..]), Vec::new());
        assert!(!prompter.confirm(EXPLORE_PROMPT).unwrap());
    }

    #[test]
    fn test_invalid_utf8_does_not_eat_next_answer() {
        let mut prompter = LinePrompter::new(Cursor::new(&b"\xfe\xff\ny\n"[..]), Vec::new());
        assert!(!prompter.confirm("first? ").unwrap());
        assert!(prompter.confirm("second? ").unwrap());
    }

    #[test]
    fn test_end_of_input_declines() {
        let mut prompter = LinePrompter::new(Cursor::new(""), Vec::new());
        assert!(!prompter.confirm(EXPLORE_PROMPT).unwrap());
    }
}
