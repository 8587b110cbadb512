//! Content hashes for cache filenames.

use md5::{Digest, Md5};
use serde_json::Value;

/// Length of the hex prefix used in filenames.
const HASH_LEN: usize = 8;

/// Lowercase hex prefix of the MD5 digest of `value`'s canonical JSON.
///
/// Object keys are sorted recursively, so equal values always hash alike.
pub fn content_hash(value: &Value) -> String {
    let json = canonical(value).to_string();
    let digest = Md5::digest(json.as_bytes());

    let mut hex: String = digest.iter().map(|b| format!("{b:02x}")).collect();
    hex.truncate(HASH_LEN);
    hex
}

fn canonical(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<_> = map.iter().collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));
            Value::Object(
                entries
                    .into_iter()
                    .map(|(key, value)| (key.clone(), canonical(value)))
                    .collect(),
            )
        }
        Value::Array(items) => Value::Array(items.iter().map(canonical).collect()),
        other => other.clone(),
    }
}
