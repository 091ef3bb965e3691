//! Token types produced by the lexer.

use std::fmt;

/// The kind of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `[`
    LBracket,
    /// `]`
    RBracket,
    /// `:`
    Colon,
    /// `,`
    Comma,
    /// Quoted string: `"hello"`
    String,
    /// End of input
    Eof,
}

impl TokenKind {
    /// Label used for this kind in "expected ..." diagnostics.
    pub fn label(&self) -> &'static str {
        match self {
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::LBracket => "[",
            TokenKind::RBracket => "]",
            TokenKind::Colon => ":",
            TokenKind::Comma => ",",
            TokenKind::String => "<string>",
            TokenKind::Eof => "<eof>",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A token with its kind, source text, and 1-based position of its first
/// character.
///
/// For punctuation `text` is the character itself; for strings it is the raw
/// interior between the quotes; for [`TokenKind::Eof`] it is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub text: &'src str,
    pub line: usize,
    pub column: usize,
}

impl<'src> Token<'src> {
    pub fn new(kind: TokenKind, text: &'src str, line: usize, column: usize) -> Self {
        Self {
            kind,
            text,
            line,
            column,
        }
    }

    /// How this token is named when it shows up where it should not.
    pub fn describe(&self) -> &'src str {
        match self.kind {
            TokenKind::Eof => "<eof>",
            _ => self.text,
        }
    }
}
