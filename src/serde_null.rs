//! Serialization helpers for nullable lists.
//!
//! The dashboard API sends `null` and omits fields interchangeably; both
//! deserialize to an empty `Vec`.

use serde::{Deserialize, Deserializer};

/// Deserialize `null` or a missing list as empty.
pub fn deserialize<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
