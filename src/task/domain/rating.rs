//! Validated task rating type.

use super::TaskDomainError;
use serde::Serialize;
use std::fmt;

/// Task rating on a 0 to 5 scale.
///
/// Freshly assigned tasks carry a rating of 0; the value becomes
/// meaningful once the task's progress reaches completion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Rating(u8);

impl Rating {
    /// Largest accepted rating.
    pub const MAX: u8 = 5;

    /// Creates a validated rating.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::RatingOutOfRange`] when the value
    /// exceeds [`Rating::MAX`].
    pub const fn new(value: u8) -> Result<Self, TaskDomainError> {
        if value > Self::MAX {
            return Err(TaskDomainError::RatingOutOfRange(value));
        }
        Ok(Self(value))
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
