//! Parse errors shared by the markup and stylesheet parsers.
//!
//! Every grammar-level mismatch aborts the parse and surfaces as exactly one
//! [`ParseError`]. There is no recovery and no partial result.

/// Errors from markup or stylesheet parsing.
///
/// Every variant carries the byte offset into the source at which the
/// problem was detected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("unexpected character at byte {position}: expected {expected}, found {found:?}")]
    UnexpectedCharacter {
        expected: String,
        found: char,
        position: usize,
    },
    #[error("unexpected end of input at byte {position}: expected {context}")]
    UnexpectedEndOfInput { context: String, position: usize },
    #[error("mismatched closing tag at byte {position}: <{opening}> closed by </{closing}>")]
    TagMismatch {
        opening: String,
        closing: String,
        position: usize,
    },
    #[error("unknown unit {text:?} at byte {position}")]
    UnknownUnit { text: String, position: usize },
    #[error("element nesting exceeds {limit} levels at byte {position}")]
    NestingTooDeep { limit: usize, position: usize },
}

impl ParseError {
    /// Byte offset into the source where the error was detected.
    pub fn position(&self) -> usize {
        match self {
            ParseError::UnexpectedCharacter { position, .. }
            | ParseError::UnexpectedEndOfInput { position, .. }
            | ParseError::TagMismatch { position, .. }
            | ParseError::UnknownUnit { position, .. }
            | ParseError::NestingTooDeep { position, .. } => *position,
        }
    }

    pub(crate) fn unexpected(expected: impl Into<String>, found: char, position: usize) -> Self {
        ParseError::UnexpectedCharacter {
            expected: expected.into(),
            found,
            position,
        }
    }

    pub(crate) fn eof(context: impl Into<String>, position: usize) -> Self {
        ParseError::UnexpectedEndOfInput {
            context: context.into(),
            position,
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ParseError>;
