//! Error types for lexing and parsing.

use thiserror::Error;

/// Expectation label the lexer attaches to an invalid character before the
/// parser knows which production it was in.
pub(crate) const ANY_TOKEN: &str = "<token>";

/// Errors that can occur while turning source text into a value tree.
///
/// Every variant carries the 1-based line and column of the offending token's
/// first character.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A string's closing `"` was missing before the end of input.
    /// The position is that of the opening quote.
    #[error("unterminated string starting at line {line}:{column}")]
    UnterminatedString { line: usize, column: usize },

    /// A character that starts no valid token.
    #[error("expected '{expected}' at line {line}:{column} but got invalid character '{found}' instead")]
    InvalidCharacter {
        found: char,
        expected: &'static str,
        line: usize,
        column: usize,
    },

    /// A well-formed token in a position the grammar does not allow.
    #[error("expected '{expected}' at line {line}:{column} but got '{found}' instead")]
    UnexpectedToken {
        expected: &'static str,
        found: String,
        line: usize,
        column: usize,
    },

    /// A key appeared twice in one object while duplicates are rejected.
    #[error("duplicate key '{key}' at line {line}:{column}")]
    DuplicateKey {
        key: String,
        line: usize,
        column: usize,
    },

    /// Objects and arrays were nested deeper than the configured limit.
    #[error("nesting deeper than {limit} levels at line {line}:{column}")]
    DepthLimitExceeded {
        limit: usize,
        line: usize,
        column: usize,
    },
}

impl ParseError {
    /// 1-based line of the offending token.
    pub fn line(&self) -> usize {
        match self {
            ParseError::UnterminatedString { line, .. }
            | ParseError::InvalidCharacter { line, .. }
            | ParseError::UnexpectedToken { line, .. }
            | ParseError::DuplicateKey { line, .. }
            | ParseError::DepthLimitExceeded { line, .. } => *line,
        }
    }

    /// 1-based column of the offending token.
    pub fn column(&self) -> usize {
        match self {
            ParseError::UnterminatedString { column, .. }
            | ParseError::InvalidCharacter { column, .. }
            | ParseError::UnexpectedToken { column, .. }
            | ParseError::DuplicateKey { column, .. }
            | ParseError::DepthLimitExceeded { column, .. } => *column,
        }
    }

    /// The expected-token label, for the variants that carry one.
    ///
    /// A position is reported with the same label whether the input there is
    /// a well-formed but misplaced token ([`ParseError::UnexpectedToken`]) or
    /// a character that starts no token ([`ParseError::InvalidCharacter`]).
    /// Match on the label to ask "what did the grammar want here".
    pub fn expected(&self) -> Option<&'static str> {
        match self {
            ParseError::InvalidCharacter { expected, .. }
            | ParseError::UnexpectedToken { expected, .. } => Some(expected),
            _ => None,
        }
    }

    /// Replace the generic lexer expectation with the parser's label.
    pub(crate) fn expecting(self, label: &'static str) -> Self {
        match self {
            ParseError::InvalidCharacter {
                found,
                line,
                column,
                ..
            } => ParseError::InvalidCharacter {
                found,
                expected: label,
                line,
                column,
            },
            other => other,
        }
    }
}

/// Convenience alias used throughout jtree-core.
pub type Result<T> = std::result::Result<T, ParseError>;
