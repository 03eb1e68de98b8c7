//! Pattern matching and transformation over tagged-union JSON values.
//!
//! A tagged union is a [`serde_json::Value`] object whose discriminant field
//! (default key `"type"`) names which of a closed set of shapes the rest of
//! the object takes. This crate dispatches such values to handler tables:
//! exhaustively ([`match_union`], [`map_all`]), with a fallback
//! ([`match_with_default`]), or with identity passthrough for unhandled
//! variants ([`map_union`]). [`PipeHandlers`] flips the calling convention to
//! handlers-first for use inside collection pipelines.
//!
//! Typed boundaries should prefer `#[serde(tag = "...")]` enums and let the
//! compiler enforce exhaustiveness; this crate is the safety net for values
//! that stay dynamic (deserialized external input, ad hoc lookups).

pub mod dispatch;
pub mod error;
pub mod handlers;
pub mod pipe;
pub mod union;

pub use dispatch::{map_all, map_union, match_union, match_with_default};
pub use error::MatchError;
pub use handlers::{Handlers, Transforms};
pub use pipe::PipeHandlers;
pub use union::{is_union, is_variant, union_tag, DEFAULT_DISCRIMINANT};
