//! Reference resolution: foreign identifiers to display values.
//!
//! Absence is never a failure here. A missing reference field gets the
//! caller's default label, a dangling single reference gets "Unknown", and a
//! dangling entry in a reference list is silently dropped. The asymmetry
//! between the single and list cases is intentional; do not unify it
//! without a product decision. Storage errors still propagate.
//!
//! Every resolution is a fresh `find_by_id`; nothing is cached within or
//! across requests.

use crate::error::AppError;
use crate::ident::RecordId;
use crate::store::Collection;
use serde::de::DeserializeOwned;

/// Label shown when a single reference points at a record that is gone.
pub const UNKNOWN: &str = "Unknown";
/// Default label for a class with no teacher assigned.
pub const NOT_ASSIGNED: &str = "Not Assigned";

/// Resolve one optional reference to a projected display value.
///
/// `None` reference → `missing` label; dangling reference → [`UNKNOWN`];
/// otherwise the projection of the target record.
pub async fn resolve_one<T, F>(
    target: &Collection<T>,
    id: Option<&RecordId>,
    missing: &str,
    project: F,
) -> Result<String, AppError>
where
    T: DeserializeOwned,
    F: Fn(&T) -> String,
{
    let Some(id) = id else {
        return Ok(missing.to_string());
    };
    Ok(match target.find_by_id(id).await? {
        Some(record) => project(&record.doc),
        None => UNKNOWN.to_string(),
    })
}

/// Resolve a list of references, dropping entries that fail to resolve.
/// One lookup per entry, in order.
pub async fn resolve_many<T, F>(
    target: &Collection<T>,
    ids: &[RecordId],
    project: F,
) -> Result<Vec<String>, AppError>
where
    T: DeserializeOwned,
    F: Fn(&T) -> String,
{
    let mut out = Vec::with_capacity(ids.len());
    for id in ids {
        if let Some(record) = target.find_by_id(id).await? {
            out.push(project(&record.doc));
        }
    }
    Ok(out)
}
