//! Candidate limit applied when ranking capabilities.

use super::CapabilityDomainError;
use std::fmt;
use std::num::NonZeroUsize;

/// Default number of ranked candidates offered to the coordinator.
const DEFAULT_LIMIT: NonZeroUsize = NonZeroUsize::MIN.saturating_add(4);

/// Maximum number of candidates returned by a ranking pass. Never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CandidateLimit(NonZeroUsize);

impl CandidateLimit {
    /// Creates a limit from a raw count.
    ///
    /// # Errors
    ///
    /// Returns [`CapabilityDomainError::ZeroCandidateLimit`] when `value` is 0.
    pub const fn new(value: usize) -> Result<Self, CapabilityDomainError> {
        match NonZeroUsize::new(value) {
            Some(limit) => Ok(Self(limit)),
            None => Err(CapabilityDomainError::ZeroCandidateLimit),
        }
    }

    /// Returns the limit as a plain count.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0.get()
    }
}

impl Default for CandidateLimit {
    fn default() -> Self {
        Self(DEFAULT_LIMIT)
    }
}

impl From<NonZeroUsize> for CandidateLimit {
    fn from(value: NonZeroUsize) -> Self {
        Self(value)
    }
}

impl fmt::Display for CandidateLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
