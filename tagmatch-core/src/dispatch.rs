// Dispatch engine - validity gate plus the four matching operations

use serde_json::Value;

use crate::error::MatchError;
use crate::handlers::{Handlers, Transforms};
use crate::union::union_tag;

/// Single dispatch chokepoint for the matching operations: resolve the tag
/// to a table entry, fall back if one was supplied, otherwise the matcher is
/// incomplete. Exactly one dispatch happens per call.
fn dispatch<'h, R>(
    value: &Value,
    tag: &str,
    handlers: &Handlers<'h, R>,
    fallback: Option<&(dyn Fn() -> R + 'h)>,
) -> Result<R, MatchError> {
    match handlers.entry(tag) {
        Some(handler) => Ok(handler(value)),
        None => match fallback {
            Some(fallback) => Ok(fallback()),
            None => Err(MatchError::IncompleteMatcher),
        },
    }
}

/// Shared body of the two transformation operations. The value is consumed so
/// the no-match path can give it back untouched, preserving its allocations.
fn apply_transform(
    value: Value,
    discriminant: &str,
    transforms: &Transforms<'_>,
    exhaustive: bool,
) -> Result<Value, MatchError> {
    let tag = match union_tag(&value, discriminant) {
        Some(tag) => tag.to_owned(),
        None => return Err(MatchError::InvalidInput),
    };
    match transforms.entry(&tag) {
        Some(transform) => match value {
            Value::Object(mut fields) => {
                fields.remove(discriminant);
                Ok(transform(fields))
            }
            // union_tag only resolves on objects
            _ => Err(MatchError::InvalidInput),
        },
        None if exhaustive => Err(MatchError::IncompleteMatcher),
        None => Ok(value),
    }
}

/// Exhaustive matching: dispatch to the entry for the value's discriminant.
///
/// The handler receives the entire value, discriminant field included. A tag
/// with no entry is an incomplete matcher; any fallback set on the table is
/// ignored, since the exhaustive discipline admits none.
pub fn match_union<R>(
    value: &Value,
    discriminant: &str,
    handlers: &Handlers<'_, R>,
) -> Result<R, MatchError> {
    let tag = union_tag(value, discriminant).ok_or(MatchError::InvalidInput)?;
    dispatch(value, tag, handlers, None)
}

/// Partial matching: dispatch to the entry for the value's discriminant, or
/// to the table's fallback when no entry matches.
///
/// A dynamically built table missing both the entry and the fallback fails as
/// an incomplete matcher.
pub fn match_with_default<R>(
    value: &Value,
    discriminant: &str,
    handlers: &Handlers<'_, R>,
) -> Result<R, MatchError> {
    let tag = union_tag(value, discriminant).ok_or(MatchError::InvalidInput)?;
    dispatch(value, tag, handlers, handlers.fallback().map(|f| f.as_ref()))
}

/// Partial transformation: variants with an entry are rebuilt by it, all
/// others pass through unchanged.
///
/// The transform receives only the payload fields (discriminant removed) and
/// by convention re-includes the tag in its result. An unmatched value is
/// returned as the very same owned value, so consumers comparing allocations
/// can tell "untouched" from "rebuilt equal".
pub fn map_union(
    value: Value,
    discriminant: &str,
    transforms: &Transforms<'_>,
) -> Result<Value, MatchError> {
    apply_transform(value, discriminant, transforms, false)
}

/// Exhaustive transformation: same mechanics as [`map_union`], but every
/// variant the value can take must have an entry; an unmatched tag is an
/// incomplete matcher instead of a passthrough.
pub fn map_all(
    value: Value,
    discriminant: &str,
    transforms: &Transforms<'_>,
) -> Result<Value, MatchError> {
    apply_transform(value, discriminant, transforms, true)
}
