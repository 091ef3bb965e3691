//! Lexer: turns source text into one token at a time.
//!
//! The lexer holds no lookahead. Each call to [`Lexer::next_token`] skips
//! whitespace, consumes exactly one token, and returns it with the 1-based
//! line and column of its first character. Columns count characters, not
//! bytes. Once the input is exhausted every further call returns an
//! [`TokenKind::Eof`] token.

use crate::error::{ParseError, Result, ANY_TOKEN};
use crate::token::{Token, TokenKind};
use tracing::trace;

/// On-demand tokenizer over a borrowed source string.
#[derive(Debug, Clone)]
pub struct Lexer<'src> {
    source: &'src str,
    /// Byte offset of the next unread character.
    pos: usize,
    line: usize,
    column: usize,
    /// Set once the iterator has yielded an error or reached the end.
    finished: bool,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            pos: 0,
            line: 1,
            column: 1,
            finished: false,
        }
    }

    /// Current 1-based `(line, column)` of the cursor.
    pub fn position(&self) -> (usize, usize) {
        (self.line, self.column)
    }

    /// Consume and return the next token.
    pub fn next_token(&mut self) -> Result<Token<'src>> {
        self.skip_whitespace();

        let (line, column) = (self.line, self.column);
        let start = self.pos;
        let Some(c) = self.bump() else {
            trace!("Token Eof at {}:{}", line, column);
            return Ok(Token::new(TokenKind::Eof, "", line, column));
        };

        let kind = match c {
            '{' => TokenKind::LBrace,
            '}' => TokenKind::RBrace,
            '[' => TokenKind::LBracket,
            ']' => TokenKind::RBracket,
            ':' => TokenKind::Colon,
            ',' => TokenKind::Comma,
            '"' => return self.lex_string(line, column),
            found => {
                return Err(ParseError::InvalidCharacter {
                    found,
                    expected: ANY_TOKEN,
                    line,
                    column,
                })
            }
        };

        let token = Token::new(kind, &self.source[start..self.pos], line, column);
        trace!("Token {:?} at {}:{}", token.kind, line, column);
        Ok(token)
    }

    /// Lex the remainder of a string whose opening quote was just consumed.
    ///
    /// The payload is kept verbatim. A backslash takes the next character
    /// along with it, so `\"` does not close the string.
    fn lex_string(&mut self, line: usize, column: usize) -> Result<Token<'src>> {
        let start = self.pos;
        loop {
            match self.bump() {
                None => return Err(ParseError::UnterminatedString { line, column }),
                Some('"') => break,
                Some('\\') => {
                    if self.bump().is_none() {
                        return Err(ParseError::UnterminatedString { line, column });
                    }
                }
                Some(_) => {}
            }
        }

        // The closing quote is a single byte.
        let text = &self.source[start..self.pos - 1];
        trace!("Token String at {}:{}: {:?}", line, column, text);
        Ok(Token::new(TokenKind::String, text, line, column))
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(' ' | '\t' | '\n' | '\r')) {
            self.bump();
        }
    }

    fn peek(&self) -> Option<char> {
        self.source[self.pos..].chars().next()
    }

    /// Consume one character, keeping line and column in step.
    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }
}

/// Yields tokens up to (not including) [`TokenKind::Eof`], then stops.
/// After an error the iterator is exhausted.
impl<'src> Iterator for Lexer<'src> {
    type Item = Result<Token<'src>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match self.next_token() {
            Ok(token) if token.kind == TokenKind::Eof => {
                self.finished = true;
                None
            }
            Ok(token) => Some(Ok(token)),
            Err(e) => {
                self.finished = true;
                Some(Err(e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eof_is_sticky() {
        let mut lexer = Lexer::new("  ");
        assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Eof);
        assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Eof);
    }

    #[test]
    fn columns_count_characters_not_bytes() {
        let mut lexer = Lexer::new("\"é\" :");
        let s = lexer.next_token().unwrap();
        assert_eq!(s.text, "é");
        let colon = lexer.next_token().unwrap();
        assert_eq!((colon.line, colon.column), (1, 5));
    }
}
