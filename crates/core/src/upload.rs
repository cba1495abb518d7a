//! Normalization of raw upload-widget values.
//!
//! A form widget may hand the wizard a media field as a bare string path,
//! a wrapper object, or a collection (a multi-file widget returning one
//! item). [`extract_upload_path`] reduces all of these to a single path,
//! or to "absent" when the shape is unrecognized. Malformed shapes are
//! never an error: the reconciler skips the slot and rendering proceeds.

use serde_json::Value;

/// The shapes an upload widget value can take, in resolution priority order.
#[derive(Debug)]
enum UploadValue<'a> {
    /// A bare string path.
    Direct(&'a str),
    /// An object wrapper carrying the path under a known key.
    Wrapper(&'a serde_json::Map<String, Value>),
    /// A collection; only the first element is considered.
    Collection(&'a Vec<Value>),
    /// Anything else: null, numbers, empty strings, unknown shapes.
    Absent,
}

/// Wrapper-object keys consulted for the path, in priority order.
const WRAPPER_KEYS: [&str; 2] = ["path", "file"];

fn classify(value: &Value) -> UploadValue<'_> {
    match value {
        Value::String(s) if !s.trim().is_empty() => UploadValue::Direct(s),
        Value::Object(map) => UploadValue::Wrapper(map),
        Value::Array(items) if !items.is_empty() => UploadValue::Collection(items),
        _ => UploadValue::Absent,
    }
}

/// Extract the storage path from a raw upload-widget value.
///
/// Priority: direct string, then a `path` key, then a `file` key, then the
/// first element of a collection (applying the same rule once more, so a
/// single-element array of `{"path": ...}` still resolves). Returns `None`
/// for every other shape.
pub fn extract_upload_path(value: &Value) -> Option<String> {
    extract(value, true)
}

fn extract(value: &Value, descend: bool) -> Option<String> {
    match classify(value) {
        UploadValue::Direct(path) => Some(path.to_string()),
        UploadValue::Wrapper(map) => WRAPPER_KEYS.iter().find_map(|key| {
            map.get(*key).and_then(|v| match v {
                Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
                _ => None,
            })
        }),
        // Recurse once: a collection inside a collection is unrecognized.
        UploadValue::Collection(items) if descend => extract(&items[0], false),
        UploadValue::Collection(_) | UploadValue::Absent => None,
    }
}

/// Extract the upload path for a named field of a raw submission object.
///
/// Missing keys are "absent", same as unrecognized shapes.
pub fn extract_field_path(raw: &Value, field: &str) -> Option<String> {
    raw.get(field).and_then(extract_upload_path)
}
