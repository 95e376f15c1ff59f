//! Option key camelization

use indexmap::IndexMap;
use serde_json::Value;

/// Caller-supplied options, keyed by option name, in insertion order
pub type OptionMap = IndexMap<String, Value>;

/// `stroke_weight` -> `strokeWeight`. Already camel-cased keys pass through.
pub fn camelize(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    for (i, part) in key.split('_').filter(|p| !p.is_empty()).enumerate() {
        let mut chars = part.chars();
        if let Some(first) = chars.next() {
            if i == 0 {
                out.extend(first.to_lowercase());
            } else {
                out.extend(first.to_uppercase());
            }
            out.push_str(chars.as_str());
        }
    }
    out
}

/// Camelize every key, descending into nested mappings and lists.
///
/// When two keys collapse to the same name the later one wins.
pub fn camelize_keys(options: &OptionMap) -> OptionMap {
    let mut out = OptionMap::with_capacity(options.len());
    for (key, value) in options {
        let camel = camelize(key);
        if out.contains_key(&camel) {
            tracing::warn!("option '{}' collapses onto '{}', keeping the later value", key, camel);
        }
        out.insert(camel, camelize_value(value));
    }
    out
}

fn camelize_value(value: &Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(k, v)| (camelize(k), camelize_value(v)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.iter().map(camelize_value).collect()),
        other => other.clone(),
    }
}
