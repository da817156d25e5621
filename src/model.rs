//! Record types for the four collections.
//!
//! One struct per collection with named optional fields, so a missing
//! reference is a checked `None` rather than a failed key lookup. References
//! are plain identifiers with no foreign-key enforcement; a stored reference
//! may dangle and readers must cope (see `resolve`).

use crate::ident::RecordId;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A student and the classes they are enrolled in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub name: String,
    /// Enrolled class references. Set-like: no duplicate entries.
    #[serde(default)]
    pub class_ids: Vec<RecordId>,
}

impl Student {
    /// Drop duplicate class references, keeping the first occurrence.
    /// Applied at the write boundary so stored records uphold the set
    /// invariant no matter what the request carried.
    pub fn dedup_class_ids(&mut self) {
        let mut seen = HashSet::new();
        self.class_ids.retain(|id| seen.insert(*id));
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Teacher {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Class {
    pub name: String,
    /// Absent means unassigned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub teacher_id: Option<RecordId>,
    /// Free-form display string, settable only through the edit path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule: Option<String>,
}

/// One timetable slot. Day and times are opaque strings; no overlap or
/// time-zone validation happens anywhere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    pub class_id: RecordId,
    pub teacher_id: RecordId,
    pub day_of_week: String,
    pub start_time: String,
    pub end_time: String,
}
