//! Sort direction for list operations.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;

/// Sort direction for list operations.
///
/// Serialized as the service's wire literals `asc` and `desc`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortOrder {
    /// Ascending order (A-Z).
    #[default]
    #[serde(rename = "asc")]
    Ascending,
    /// Descending order (Z-A).
    #[serde(rename = "desc")]
    Descending,
}

impl SortOrder {
    /// Returns `true` if this is ascending order.
    pub fn is_ascending(&self) -> bool {
        matches!(self, SortOrder::Ascending)
    }

    /// Returns `true` if this is descending order.
    pub fn is_descending(&self) -> bool {
        matches!(self, SortOrder::Descending)
    }

    /// Returns the string representation for API queries.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Ascending => "asc",
            SortOrder::Descending => "desc",
        }
    }

    /// Returns the opposite direction.
    #[must_use]
    pub fn flip(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }
}

/// Flips a requested direction for a "previous page" fetch.
///
/// An absent direction is left to the service default and passes through
/// unchanged.
pub fn flip_direction(sort_dir: Option<SortOrder>) -> Option<SortOrder> {
    sort_dir.map(SortOrder::flip)
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortOrder::Ascending),
            "desc" => Ok(SortOrder::Descending),
            other => Err(Error::invalid_argument(format!(
                "unknown sort direction '{}', expected 'asc' or 'desc'",
                other
            ))),
        }
    }
}
