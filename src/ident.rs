//! Record identifiers: parsing the external string form, formatting the internal key.

use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Key of one stored record. Assigned at insert, immutable afterwards.
///
/// Every identifier-shaped string coming in from a route parameter, query
/// parameter, or request body must go through [`RecordId::parse`] before it
/// is used as a lookup key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(Uuid);

impl RecordId {
    /// Fresh identifier for a record being inserted.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse an identifier arriving as text. Rejects anything that is not a
    /// well-formed UUID with `AppError::InvalidId`.
    pub fn parse(text: &str) -> Result<Self, AppError> {
        Uuid::parse_str(text)
            .map(Self)
            .map_err(|_| AppError::InvalidId(text.to_string()))
    }
}

impl Default for RecordId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RecordId {
    /// Canonical lowercase hyphenated form; this is what crosses back out
    /// to responses and what is stored as the row key.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for RecordId {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
