//! Recursion gate
//!
//! Decides, once per visited directory, whether the traversal descends into
//! the subdirectories found there. The first directory with subdirectories
//! asks the user. A "yes" confirms the whole branch below it: every
//! descendant inherits the confirmation and is never asked again. Anything
//! else declines descent for that directory's children only.

use std::io;

use crate::prompt::{EXPLORE_PROMPT, Prompter};

/// Confirmation state carried down one traversal branch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Confirmation {
    /// Nobody above this directory has confirmed descent
    #[default]
    Pending,
    /// An ancestor (or this directory) confirmed descent
    Confirmed,
}

/// Outcome of the gate for one directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    /// No subdirectories, nothing to decide
    NoSubdirectories,
    /// Descend; children run under `Confirmation::Confirmed`
    Descend,
    /// The user declined; children are not visited
    Declined,
}

impl GateDecision {
    pub fn descends(self) -> bool {
        self == GateDecision::Descend
    }
}

/// Run the gate for a directory holding `subdirectories` child directories.
///
/// Prompts only when there is something to descend into and the branch has
/// not already been confirmed.
pub fn decide<P: Prompter + ?Sized>(
    subdirectories: usize,
    inherited: Confirmation,
    prompter: &mut P,
) -> io::Result<GateDecision> {
    if subdirectories == 0 {
        return Ok(GateDecision::NoSubdirectories);
    }
    if inherited == Confirmation::Confirmed {
        return Ok(GateDecision::Descend);
    }
    if prompter.confirm(EXPLORE_PROMPT)? {
        Ok(GateDecision::Descend)
    } else {
        Ok(GateDecision::Declined)
    }
}
