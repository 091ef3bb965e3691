//! # jtree-core
//!
//! Parser for a restricted JSON-like grammar: objects, arrays, and strings,
//! nested in any combination. Source text goes in; an owned tree of typed
//! values comes out, or a [`ParseError`] naming the line and column of the
//! offending token.
//!
//! ## Quick start
//!
//! ```rust
//! use jtree_core::{parse, Value};
//!
//! let root = parse(r#"{"a": ["x", "y", {"b": "z"}]}"#).unwrap();
//! let items = root.get("a").and_then(Value::as_array).unwrap();
//! assert_eq!(items.len(), 3);
//!
//! let inner = items.get(2).and_then(Value::as_object).unwrap();
//! assert_eq!(inner.get("b").and_then(Value::as_str), Some("z"));
//! ```
//!
//! Strings are kept verbatim: there are no escape sequences, numbers,
//! booleans, or `null`.
//!
//! ## Modules
//!
//! - [`value`] — `Value`, `Array`, `Object` tree
//! - [`token`] — token kinds produced by the lexer
//! - [`lexer`] — source text → tokens, one at a time
//! - [`parser`] — tokens → tree (`parse`, `parse_with_config`)
//! - [`config`] — `ParserConfig` (duplicate-key policy, nesting limit)
//! - [`error`] — `ParseError`

pub mod config;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod token;
pub mod value;

pub use config::{DuplicateKeys, ParserConfig};
pub use error::{ParseError, Result};
pub use lexer::Lexer;
pub use parser::{parse, parse_with_config, Parser};
pub use token::{Token, TokenKind};
pub use value::{Array, Object, Value, ValueKind};
