//! Recursive-descent parser — turns lexer tokens into a value tree.
//!
//! Grammar:
//!
//! ```text
//! document := object
//! object   := '{' '}' | '{' member (',' member)* '}'
//! member   := string ':' value
//! value    := string | array | object
//! array    := '[' ']' | '[' value (',' value)* ']'
//! ```
//!
//! # Key design decisions
//!
//! - **Single current-token slot**: the [`Parser`] keeps the most recently
//!   fetched token in `current`. Every production is entered with `current`
//!   on its first token and returns with `current` on the first token after
//!   it, so the caller can decide whether a `,` follows.
//! - **Follow labels**: productions take the label of what their caller
//!   expects next. When the lexer hits an invalid character while advancing,
//!   that label is stamped onto the error so all diagnostics read
//!   "expected X ... but got Y".
//! - **Root stops at its brace**: nothing after the root object's closing
//!   `}` is read, so trailing text is ignored unless
//!   [`ParserConfig::reject_trailing`] is set.
//! - **Fail fast**: the first error ends the parse. No partial tree is
//!   returned and no resynchronisation is attempted.

use crate::config::{DuplicateKeys, ParserConfig};
use crate::error::{ParseError, Result};
use crate::lexer::Lexer;
use crate::token::{Token, TokenKind};
use crate::value::{Array, Object, Value};
use tracing::debug;

const VALUE: &str = "<value>";
/// After a member value either another member or the closing brace may come.
const MEMBER_END: &str = ", or }";
const ELEMENT_END: &str = ", or ]";

/// Parse a document with the default [`ParserConfig`].
///
/// ```rust
/// let root = jtree_core::parse(r#"{"name": "Alice", "tags": ["a", "b"]}"#).unwrap();
/// assert_eq!(root.get("name").and_then(|v| v.as_str()), Some("Alice"));
/// assert_eq!(root.get("tags").and_then(|v| v.as_array()).map(|a| a.len()), Some(2));
/// ```
pub fn parse(text: &str) -> Result<Object> {
    parse_with_config(text, &ParserConfig::default())
}

/// Parse a document with explicit options.
pub fn parse_with_config(text: &str, config: &ParserConfig) -> Result<Object> {
    Parser::new(Lexer::new(text), config.clone()).parse()
}

/// Parser state for a single document.
pub struct Parser<'src> {
    lexer: Lexer<'src>,
    current: Token<'src>,
    config: ParserConfig,
    depth: usize,
}

impl<'src> Parser<'src> {
    pub fn new(lexer: Lexer<'src>, config: ParserConfig) -> Self {
        Self {
            lexer,
            current: Token::new(TokenKind::Eof, "", 1, 1),
            config,
            depth: 0,
        }
    }

    /// Parse the whole input as one root object. Consumes the parser.
    pub fn parse(mut self) -> Result<Object> {
        let result = self.parse_document();
        match &result {
            Ok(root) => debug!(members = root.len(), "parsed document"),
            Err(e) => debug!(line = e.line(), column = e.column(), "parse failed: {e}"),
        }
        result
    }

    fn parse_document(&mut self) -> Result<Object> {
        self.advance(TokenKind::LBrace.label())?;
        let root = self.parse_object_body()?;
        if self.config.reject_trailing {
            self.advance(TokenKind::Eof.label())?;
            self.require(TokenKind::Eof)?;
        }
        Ok(root)
    }

    fn parse_object(&mut self, follow: &'static str) -> Result<Object> {
        let obj = self.parse_object_body()?;
        self.advance(follow)?;
        Ok(obj)
    }

    /// `'{' ... '}'`, leaving `current` on the closing brace.
    fn parse_object_body(&mut self) -> Result<Object> {
        self.require(TokenKind::LBrace)?;
        self.enter()?;
        self.advance(TokenKind::String.label())?;

        let obj = if self.current.kind == TokenKind::RBrace {
            Object::new()
        } else {
            let obj = self.parse_members()?;
            self.require_as(TokenKind::RBrace, MEMBER_END)?;
            obj
        };

        self.leave();
        Ok(obj)
    }

    /// `member (',' member)*`. Stops on the first token after a value that is
    /// not a comma; the caller checks it is the closing brace.
    fn parse_members(&mut self) -> Result<Object> {
        let mut obj = Object::new();
        loop {
            self.require(TokenKind::String)?;
            let key = self.current.text;
            if self.config.duplicate_keys == DuplicateKeys::Reject && obj.contains_key(key) {
                return Err(ParseError::DuplicateKey {
                    key: key.to_string(),
                    line: self.current.line,
                    column: self.current.column,
                });
            }

            self.advance(TokenKind::Colon.label())?;
            self.require(TokenKind::Colon)?;
            self.advance(VALUE)?;

            let value = self.parse_value(MEMBER_END)?;
            obj.insert(key, value);

            if self.current.kind != TokenKind::Comma {
                break;
            }
            self.advance(TokenKind::String.label())?;
        }
        Ok(obj)
    }

    fn parse_array(&mut self, follow: &'static str) -> Result<Array> {
        self.require(TokenKind::LBracket)?;
        self.enter()?;
        self.advance(VALUE)?;

        let mut arr = Array::new();
        if self.current.kind != TokenKind::RBracket {
            loop {
                arr.push(self.parse_value(ELEMENT_END)?);
                if self.current.kind != TokenKind::Comma {
                    break;
                }
                self.advance(VALUE)?;
            }
            self.require_as(TokenKind::RBracket, ELEMENT_END)?;
        }

        self.leave();
        self.advance(follow)?;
        Ok(arr)
    }

    fn parse_value(&mut self, follow: &'static str) -> Result<Value> {
        match self.current.kind {
            TokenKind::String => {
                let text = self.current.text.to_string();
                self.advance(follow)?;
                Ok(Value::String(text))
            }
            TokenKind::LBracket => self.parse_array(follow).map(Value::Array),
            TokenKind::LBrace => self.parse_object(follow).map(Value::Object),
            _ => Err(self.unexpected(VALUE)),
        }
    }

    /// Fetch the next token into `current`. `expected` labels what the
    /// grammar wants here, for invalid-character diagnostics.
    fn advance(&mut self, expected: &'static str) -> Result<()> {
        self.current = self
            .lexer
            .next_token()
            .map_err(|e| e.expecting(expected))?;
        Ok(())
    }

    fn require(&self, kind: TokenKind) -> Result<()> {
        self.require_as(kind, kind.label())
    }

    /// Like [`Self::require`], reporting `label` when other tokens were also
    /// valid here.
    fn require_as(&self, kind: TokenKind, label: &'static str) -> Result<()> {
        if self.current.kind == kind {
            Ok(())
        } else {
            Err(self.unexpected(label))
        }
    }

    fn unexpected(&self, expected: &'static str) -> ParseError {
        ParseError::UnexpectedToken {
            expected,
            found: self.current.describe().to_string(),
            line: self.current.line,
            column: self.current.column,
        }
    }

    fn enter(&mut self) -> Result<()> {
        self.depth += 1;
        if self.depth > self.config.max_depth {
            return Err(ParseError::DepthLimitExceeded {
                limit: self.config.max_depth,
                line: self.current.line,
                column: self.current.column,
            });
        }
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }
}
