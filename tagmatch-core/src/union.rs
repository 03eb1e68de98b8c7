// Tagged-union predicates and discriminant access

use serde_json::Value;

/// Field name used for the discriminant when callers don't pick their own.
pub const DEFAULT_DISCRIMINANT: &str = "type";

/// Check whether a value qualifies as a tagged union: an object whose field
/// at `discriminant` holds a string.
///
/// Arrays never qualify, even though they are object-like in loosely typed
/// representations. Numeric, boolean, or object-valued discriminants
/// disqualify the value; the empty string qualifies (the check is on string
/// kind, not emptiness).
pub fn is_union(value: &Value, discriminant: &str) -> bool {
    match value {
        Value::Object(fields) => matches!(fields.get(discriminant), Some(Value::String(_))),
        _ => false,
    }
}

/// Check whether a value is the `tag` variant of a union.
///
/// Pure equality on the discriminant field; does not re-run the full
/// [`is_union`] check. Malformed input yields `false`, so this works directly
/// as a filter predicate over heterogeneous collections.
pub fn is_variant(value: &Value, tag: &str, discriminant: &str) -> bool {
    matches!(union_tag(value, discriminant), Some(t) if t == tag)
}

/// Read the discriminant tag out of a value.
///
/// `Some` exactly when [`is_union`] holds.
pub fn union_tag<'v>(value: &'v Value, discriminant: &str) -> Option<&'v str> {
    match value {
        Value::Object(fields) => match fields.get(discriminant) {
            Some(Value::String(tag)) => Some(tag.as_str()),
            _ => None,
        },
        _ => None,
    }
}
