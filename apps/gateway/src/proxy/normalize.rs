use serde_json::Value;
use tracing::debug;

/// Flatten a backend list reply into its items.
///
/// Accepted shapes, checked in order: a bare array, `{ <key>: [...] }`,
/// `{ data: [...] }`. Anything else (including no body) yields no items.
pub fn normalize_list(body: Option<Value>, key: &str) -> Vec<Value> {
    match body {
        Some(Value::Array(items)) => items,
        Some(Value::Object(mut map)) => {
            for field in [key, "data"] {
                if let Some(Value::Array(items)) = map.remove(field) {
                    return items;
                }
            }
            debug!(key, "list reply has no recognizable array field");
            Vec::new()
        }
        Some(other) => {
            debug!(key, kind = json_kind(&other), "list reply is not a list");
            Vec::new()
        }
        None => Vec::new(),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
