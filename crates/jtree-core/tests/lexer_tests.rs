use jtree_core::{Lexer, ParseError, Token, TokenKind};

/// Helper: collect all tokens up to EOF, panicking on lexer errors.
fn lex_all(src: &str) -> Vec<Token<'_>> {
    Lexer::new(src)
        .collect::<Result<Vec<_>, _>>()
        .expect("lexing failed")
}

fn kinds(src: &str) -> Vec<TokenKind> {
    lex_all(src).into_iter().map(|t| t.kind).collect()
}

// ============================================================================
// Punctuation and strings
// ============================================================================

#[test]
fn lex_all_punctuation() {
    assert_eq!(
        kinds("{}[]:,"),
        vec![
            TokenKind::LBrace,
            TokenKind::RBrace,
            TokenKind::LBracket,
            TokenKind::RBracket,
            TokenKind::Colon,
            TokenKind::Comma,
        ]
    );
}

#[test]
fn punctuation_carries_its_literal_text() {
    let texts: Vec<&str> = lex_all("{ } [ ] : ,").iter().map(|t| t.text).collect();
    assert_eq!(texts, vec!["{", "}", "[", "]", ":", ","]);
}

#[test]
fn string_text_excludes_quotes() {
    let tokens = lex_all(r#""hello world""#);
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].text, "hello world");
}

#[test]
fn empty_string() {
    let tokens = lex_all(r#""""#);
    assert_eq!(tokens[0].text, "");
}

#[test]
fn string_payload_is_verbatim() {
    // No escape decoding: the backslash stays in the payload.
    let tokens = lex_all(r#""a\nb""#);
    assert_eq!(tokens[0].text, r"a\nb");
}

#[test]
fn escaped_quote_does_not_close_string() {
    let tokens = lex_all(r#""say \"hi\"""#);
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].text, r#"say \"hi\""#);
}

#[test]
fn string_may_contain_structural_characters() {
    let tokens = lex_all(r#""{[:,]}""#);
    assert_eq!(tokens[0].text, "{[:,]}");
}

// ============================================================================
// End of input
// ============================================================================

#[test]
fn empty_input_yields_eof() {
    let mut lexer = Lexer::new("");
    let token = lexer.next_token().unwrap();
    assert_eq!(token.kind, TokenKind::Eof);
    assert_eq!(token.text, "");
}

#[test]
fn whitespace_only_input_yields_eof() {
    let mut lexer = Lexer::new(" \t\r\n  ");
    let token = lexer.next_token().unwrap();
    assert_eq!(token.kind, TokenKind::Eof);
    assert_eq!((token.line, token.column), (2, 3));
}

#[test]
fn iterator_stops_at_eof() {
    let mut lexer = Lexer::new("{}");
    assert!(lexer.next().is_some());
    assert!(lexer.next().is_some());
    assert!(lexer.next().is_none());
    assert!(lexer.next().is_none());
}

// ============================================================================
// Positions (1-based, start of token)
// ============================================================================

#[test]
fn positions_on_one_line() {
    let tokens = lex_all(r#"{ "key" : "v" }"#);
    let positions: Vec<(usize, usize)> = tokens.iter().map(|t| (t.line, t.column)).collect();
    assert_eq!(positions, vec![(1, 1), (1, 3), (1, 9), (1, 11), (1, 15)]);
}

#[test]
fn newline_resets_column() {
    let tokens = lex_all("{\n  \"a\"\n}");
    assert_eq!((tokens[0].line, tokens[0].column), (1, 1));
    assert_eq!((tokens[1].line, tokens[1].column), (2, 3));
    assert_eq!((tokens[2].line, tokens[2].column), (3, 1));
}

#[test]
fn newline_inside_string_advances_line() {
    let tokens = lex_all("\"a\nb\" ,");
    assert_eq!(tokens[0].text, "a\nb");
    assert_eq!((tokens[0].line, tokens[0].column), (1, 1));
    assert_eq!((tokens[1].line, tokens[1].column), (2, 4));
}

#[test]
fn tab_and_carriage_return_count_as_one_column() {
    let tokens = lex_all("\t\r:");
    assert_eq!((tokens[0].line, tokens[0].column), (1, 3));
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn unterminated_string_points_at_opening_quote() {
    let mut lexer = Lexer::new(r#"  "abc"#);
    let err = lexer.next_token().unwrap_err();
    assert_eq!(err, ParseError::UnterminatedString { line: 1, column: 3 });
}

#[test]
fn trailing_backslash_is_unterminated() {
    let mut lexer = Lexer::new(r#""abc\"#);
    assert!(matches!(
        lexer.next_token(),
        Err(ParseError::UnterminatedString { .. })
    ));
}

#[test]
fn invalid_character_is_named() {
    let mut lexer = Lexer::new("  @");
    let err = lexer.next_token().unwrap_err();
    assert_eq!(
        err,
        ParseError::InvalidCharacter {
            found: '@',
            expected: "<token>",
            line: 1,
            column: 3,
        }
    );
}

#[test]
fn number_and_keyword_literals_are_invalid() {
    for src in ["1", "true", "null", "-"] {
        let mut lexer = Lexer::new(src);
        assert!(
            matches!(lexer.next_token(), Err(ParseError::InvalidCharacter { .. })),
            "expected invalid character for {src:?}"
        );
    }
}

#[test]
fn iterator_stops_after_error() {
    let mut lexer = Lexer::new("{ ? }");
    assert!(matches!(lexer.next(), Some(Ok(_))));
    assert!(matches!(lexer.next(), Some(Err(_))));
    assert!(lexer.next().is_none());
}
