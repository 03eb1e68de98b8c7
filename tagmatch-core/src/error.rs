// Error types for tagmatch

use std::error::Error;
use std::fmt;

/// Dispatch contract violations.
///
/// Both variants represent programmer errors rather than recoverable runtime
/// conditions: a well-typed caller validates values at its boundary and
/// supplies complete handler tables. Display strings are fixed so callers and
/// tests can match on them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchError {
    /// The value is not a tagged union (wrong kind, or the discriminant field
    /// is missing or not a string).
    InvalidInput,
    /// No handler entry matched the value's discriminant and no fallback was
    /// available.
    IncompleteMatcher,
}

impl Error for MatchError {}

impl fmt::Display for MatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchError::InvalidInput => {
                write!(f, "Invalid input: expected a tagged union value")
            }
            MatchError::IncompleteMatcher => {
                write!(f, "Incomplete matcher: no handler for discriminant")
            }
        }
    }
}
