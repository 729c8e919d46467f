//! Account role.

use super::ParseRoleError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Role of a registered account within the organisation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Supervising staff who assign and review tasks.
    #[serde(rename = "Reporting Officer")]
    ReportingOfficer,
    /// Subordinate staff to whom tasks are assigned.
    Employee,
}

impl Role {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ReportingOfficer => "Reporting Officer",
            Self::Employee => "Employee",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Role {
    type Error = ParseRoleError;

    /// Parses a role from its canonical string.
    ///
    /// The match is exact; no trimming or case folding is applied.
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "Reporting Officer" => Ok(Self::ReportingOfficer),
            "Employee" => Ok(Self::Employee),
            _ => Err(ParseRoleError(value.to_owned())),
        }
    }
}
