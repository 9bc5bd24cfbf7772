//! Serialization contract for the collection columns of `events`.
//!
//! `tags`, `speakers` and `schedule` are each stored as one UTF-8 JSON array
//! in a `TEXT` column. The store never looks inside them; it only needs
//! `decode(encode(x)) == x`. A blank blob decodes to an empty list so rows
//! written without collections stay readable.

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Encode a collection as a JSON array.
pub fn encode<T: Serialize>(items: &[T]) -> Result<String, serde_json::Error> {
    serde_json::to_string(items)
}

/// Decode a JSON array previously produced by [`encode`].
pub fn decode<T: DeserializeOwned>(blob: &str) -> Result<Vec<T>, serde_json::Error> {
    if blob.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str(blob)
}
