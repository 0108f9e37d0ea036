//! Ranked capability candidate.

use super::CapabilityEntry;

/// A registry entry paired with its relevance score for one task.
///
/// Candidates borrow from the registry snapshot they were ranked against and
/// are discarded once the task has been dispatched.
#[derive(Debug, Clone, Copy)]
pub struct RankedCandidate<'r> {
    score: f64,
    entry: &'r CapabilityEntry,
}

impl<'r> RankedCandidate<'r> {
    /// Pairs an entry with its cosine similarity to the task.
    #[must_use]
    pub const fn new(score: f64, entry: &'r CapabilityEntry) -> Self {
        Self { score, entry }
    }

    /// Returns the cosine similarity score.
    #[must_use]
    pub const fn score(&self) -> f64 {
        self.score
    }

    /// Returns the ranked registry entry.
    #[must_use]
    pub const fn entry(&self) -> &'r CapabilityEntry {
        self.entry
    }
}
