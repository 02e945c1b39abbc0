//! Variable values and their textual rendering
//!
//! Values are plain JSON values so configuration stores can hand back
//! strings, numbers, booleans or lists without conversion.

pub use serde_json::Value;

/// Renders a value as the text substituted into a template.
///
/// - strings are returned verbatim
/// - booleans and numbers use their canonical text form
/// - arrays render each element and join them with a single space
/// - objects render as compact JSON
///
/// Returns `None` for `null`, which the filter treats as absent.
#[must_use]
pub fn render(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Array(items) => {
            let parts: Vec<String> = items.iter().filter_map(render).collect();
            Some(parts.join(" "))
        }
        Value::Object(_) => Some(value.to_string()),
    }
}
