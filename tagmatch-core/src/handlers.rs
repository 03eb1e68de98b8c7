// Handler tables - discriminant-to-function mappings

use serde_json::{Map, Value};
use std::collections::BTreeMap;

type Handler<'h, R> = Box<dyn Fn(&Value) -> R + 'h>;
type Fallback<'h, R> = Box<dyn Fn() -> R + 'h>;
type Transform<'h> = Box<dyn Fn(Map<String, Value>) -> Value + 'h>;

/// Matching handler table: one entry per discriminant value, plus an optional
/// no-argument fallback for unmatched variants.
///
/// Entries receive the entire value, discriminant field included. The
/// fallback deliberately receives nothing: the unmatched value could be any
/// of the uncovered variants, so there is no single shape to hand it as.
///
/// ```
/// use tagmatch_core::Handlers;
///
/// let handlers: Handlers<&str> = Handlers::new()
///     .on("circle", |_| "round")
///     .on("rectangle", |_| "boxy")
///     .or_else(|| "unknown");
/// ```
pub struct Handlers<'h, R> {
    entries: BTreeMap<String, Handler<'h, R>>,
    fallback: Option<Fallback<'h, R>>,
}

impl<'h, R> Handlers<'h, R> {
    pub fn new() -> Self {
        Handlers {
            entries: BTreeMap::new(),
            fallback: None,
        }
    }

    /// Register the handler for one discriminant value. Re-registering a tag
    /// replaces the previous entry.
    pub fn on(mut self, tag: impl Into<String>, handler: impl Fn(&Value) -> R + 'h) -> Self {
        self.entries.insert(tag.into(), Box::new(handler));
        self
    }

    /// Set the fallback invoked when no entry matches. Used by
    /// `match_with_default`; exhaustive matching ignores it.
    pub fn or_else(mut self, fallback: impl Fn() -> R + 'h) -> Self {
        self.fallback = Some(Box::new(fallback));
        self
    }

    pub(crate) fn entry(&self, tag: &str) -> Option<&Handler<'h, R>> {
        self.entries.get(tag)
    }

    pub(crate) fn fallback(&self) -> Option<&Fallback<'h, R>> {
        self.fallback.as_ref()
    }
}

impl<R> Default for Handlers<'_, R> {
    fn default() -> Self {
        Handlers::new()
    }
}

/// Transformation table: each entry receives the payload fields of its
/// variant (discriminant removed) and returns a replacement value.
///
/// By convention the returned value re-includes the discriminant field under
/// the original tag; the dispatcher does not verify this. There is no
/// fallback slot — a partial table's fallback is identity, supplied by the
/// mapping operation itself.
pub struct Transforms<'h> {
    entries: BTreeMap<String, Transform<'h>>,
}

impl<'h> Transforms<'h> {
    pub fn new() -> Self {
        Transforms {
            entries: BTreeMap::new(),
        }
    }

    /// Register the transform for one discriminant value.
    pub fn on(
        mut self,
        tag: impl Into<String>,
        transform: impl Fn(Map<String, Value>) -> Value + 'h,
    ) -> Self {
        self.entries.insert(tag.into(), Box::new(transform));
        self
    }

    pub(crate) fn entry(&self, tag: &str) -> Option<&Transform<'h>> {
        self.entries.get(tag)
    }
}

impl Default for Transforms<'_> {
    fn default() -> Self {
        Transforms::new()
    }
}
