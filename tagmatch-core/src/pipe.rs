// Discriminant-bound, handlers-first calling convention

use serde_json::Value;

use crate::dispatch::{map_all, map_union, match_union, match_with_default};
use crate::error::MatchError;
use crate::handlers::{Handlers, Transforms};
use crate::union::DEFAULT_DISCRIMINANT;

/// Factory binding a discriminant key once for reuse across many values.
///
/// Each method takes its handler table FIRST and returns a single-argument
/// closure, the shape generic pipeline utilities expect ("apply this to every
/// element", "compose this into a stage"). Returned closures own their table,
/// re-validate every input value, and share no state with the factory or with
/// each other.
///
/// ```
/// use serde_json::json;
/// use tagmatch_core::{Handlers, PipeHandlers};
///
/// let pets = PipeHandlers::new("kind");
/// let describe = pets.matcher(
///     Handlers::new()
///         .on("dog", |v| format!("Dog:{}", v["name"].as_str().unwrap_or("?")))
///         .on("cat", |_| "cat".to_string()),
/// );
///
/// let rex = json!({"kind": "dog", "name": "Rex"});
/// assert_eq!(describe(&rex).unwrap(), "Dog:Rex");
/// ```
#[derive(Debug, Clone)]
pub struct PipeHandlers {
    discriminant: String,
}

impl PipeHandlers {
    pub fn new(discriminant: impl Into<String>) -> Self {
        PipeHandlers {
            discriminant: discriminant.into(),
        }
    }

    /// Exhaustive matching with the bound discriminant.
    pub fn matcher<'h, R: 'h>(
        &self,
        handlers: Handlers<'h, R>,
    ) -> impl Fn(&Value) -> Result<R, MatchError> + 'h {
        let discriminant = self.discriminant.clone();
        move |value| match_union(value, &discriminant, &handlers)
    }

    /// Partial matching with the bound discriminant; unmatched variants route
    /// to the table's fallback.
    pub fn matcher_with_default<'h, R: 'h>(
        &self,
        handlers: Handlers<'h, R>,
    ) -> impl Fn(&Value) -> Result<R, MatchError> + 'h {
        let discriminant = self.discriminant.clone();
        move |value| match_with_default(value, &discriminant, &handlers)
    }

    /// Partial transformation with the bound discriminant; unmatched variants
    /// pass through unchanged.
    pub fn mapper<'h>(
        &self,
        transforms: Transforms<'h>,
    ) -> impl Fn(Value) -> Result<Value, MatchError> + 'h {
        let discriminant = self.discriminant.clone();
        move |value| map_union(value, &discriminant, &transforms)
    }

    /// Exhaustive transformation with the bound discriminant.
    pub fn mapper_all<'h>(
        &self,
        transforms: Transforms<'h>,
    ) -> impl Fn(Value) -> Result<Value, MatchError> + 'h {
        let discriminant = self.discriminant.clone();
        move |value| map_all(value, &discriminant, &transforms)
    }
}

impl Default for PipeHandlers {
    /// Bound to the `"type"` discriminant key.
    fn default() -> Self {
        PipeHandlers::new(DEFAULT_DISCRIMINANT)
    }
}
