use crate::error::Result;
use crate::extractor::RawText;
use serde_json::Value;

/// Flattens a JSON document into a single space-joined string.
///
/// Top-level object: the textual representation of every value (keys are
/// dropped), in key order as written. Top-level array: every element.
/// Top-level scalar: its own textual representation. Object key order is
/// preserved by serde_json's `preserve_order` feature.
pub fn extract(content: &[u8]) -> Result<RawText> {
    let value: Value = serde_json::from_slice(content)?;

    let parts: Vec<String> = match value {
        Value::Object(map) => map.values().map(value_to_text).collect(),
        Value::Array(items) => items.iter().map(value_to_text).collect(),
        scalar => vec![value_to_text(&scalar)],
    };

    Ok(parts.join(" "))
}

/// Textual representation of a JSON value. Strings render verbatim
/// (no surrounding quotes); everything else renders as compact JSON.
fn value_to_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
