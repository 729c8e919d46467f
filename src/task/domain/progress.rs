//! Free-form task progress marker.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Free-form progress marker for a task.
///
/// Progress is deliberately open text: downstream consumers rely on being
/// able to write arbitrary values, so no transition table is enforced.
/// The informally intended progression runs from [`Progress::NOT_STARTED`]
/// through [`Progress::RECENTLY_STARTED`], [`Progress::ONGOING`], or
/// [`Progress::ON_HOLD`] to [`Progress::COMPLETED`], and the well-known
/// values are provided as constants for callers that want them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Progress(String);

impl Progress {
    /// Initial progress of every freshly assigned task.
    pub const NOT_STARTED: &'static str = "Not started";
    /// Work has recently begun.
    pub const RECENTLY_STARTED: &'static str = "Recently Started";
    /// Work is under way.
    pub const ONGOING: &'static str = "Ongoing";
    /// Work is paused.
    pub const ON_HOLD: &'static str = "On Hold";
    /// Work is finished; the rating becomes meaningful.
    pub const COMPLETED: &'static str = "Completed";

    /// Wraps a progress value; any string is accepted.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the initial progress marker.
    #[must_use]
    pub fn not_started() -> Self {
        Self(Self::NOT_STARTED.to_owned())
    }

    /// Returns the progress value as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Progress {
    fn default() -> Self {
        Self::not_started()
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
