//! Presence checks shared by the builders.
//!
//! A builder field counts as "set" only when it carries content: empty
//! strings, empty lists and empty JSON values are treated as absent so they
//! never reach the serialized document.

use serde_json::Value as JsonValue;

pub(crate) fn text(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

pub(crate) fn list<T>(value: Option<Vec<T>>) -> Option<Vec<T>> {
    value.filter(|v| !v.is_empty())
}

/// Keeps a JSON payload unless it is `null`, `{}`, `[]` or `""`.
pub(crate) fn json(value: Option<JsonValue>) -> Option<JsonValue> {
    value.filter(|v| match v {
        JsonValue::Null => false,
        JsonValue::Object(map) => !map.is_empty(),
        JsonValue::Array(items) => !items.is_empty(),
        JsonValue::String(s) => !s.is_empty(),
        _ => true,
    })
}

/// Appends string items to an accumulating list, creating it on first use.
pub(crate) fn extend<I, S>(target: &mut Option<Vec<String>>, items: I)
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    target
        .get_or_insert_with(Vec::new)
        .extend(items.into_iter().map(Into::into));
}
