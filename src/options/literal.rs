//! Object literal serialization with selectively unescaped values

use indexmap::IndexSet;
use serde::Serialize;
use serde_json::Value;

use super::keys::OptionMap;
use crate::error::RenderError;

/// Serialize options as `{"key": value, ...}`.
///
/// Keys are always JSON strings. Values of keys in `unescaped` are written as
/// raw code: strings verbatim, other scalars in literal form. Everything else
/// is a JSON literal.
pub fn to_object_literal(
    options: &OptionMap,
    unescaped: &IndexSet<&str>,
) -> Result<String, RenderError> {
    let mut fields = Vec::with_capacity(options.len());

    for (key, value) in options {
        let quoted_key = serde_json::to_string(key)
            .map_err(|e| RenderError::malformed(key.as_str(), e.to_string()))?;
        let rendered = if unescaped.contains(key.as_str()) {
            raw_value(key, value)?
        } else {
            serde_json::to_string(value)
                .map_err(|e| RenderError::malformed(key.as_str(), e.to_string()))?
        };
        fields.push(format!("{}: {}", quoted_key, rendered));
    }

    Ok(format!("{{{}}}", fields.join(", ")))
}

fn raw_value(key: &str, value: &Value) -> Result<String, RenderError> {
    match value {
        Value::String(code) if code.trim().is_empty() => {
            Err(RenderError::malformed(key, "empty code expression"))
        }
        Value::String(code) => Ok(code.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Null => Ok("null".to_string()),
        Value::Array(_) | Value::Object(_) => Err(RenderError::malformed(
            key,
            "an unescaped value must be a code expression or scalar",
        )),
    }
}

/// Build an [`OptionMap`] from any serializable mapping (a struct, a
/// `HashMap`, `json!({...})`).
pub fn options_from<T: Serialize>(options: &T) -> Result<OptionMap, RenderError> {
    match serde_json::to_value(options) {
        Ok(Value::Object(map)) => Ok(map.into_iter().collect()),
        Ok(Value::Null) => Ok(OptionMap::new()),
        Ok(other) => Err(RenderError::malformed(
            "<options>",
            format!("expected a mapping, got {}", json_type_name(&other)),
        )),
        Err(e) => Err(RenderError::malformed("<options>", e.to_string())),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "a mapping",
    }
}
