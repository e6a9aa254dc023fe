use lscript::lexer::{tokenize, Keyword, LexerError, Token, TokenKind};

fn kinds(input: &str) -> Vec<TokenKind> {
    tokenize(input)
        .expect("input should tokenize")
        .into_iter()
        .map(|token| token.kind)
        .collect()
}

#[test]
fn test_empty_input() {
    assert!(tokenize("").unwrap().is_empty());
    assert!(tokenize("  \n\t \r\n").unwrap().is_empty());
}

#[test]
fn test_tokenize_is_deterministic() {
    let source = "fn add(a, b) {\n  ret a + b;\n}\nadd;";
    assert_eq!(tokenize(source).unwrap(), tokenize(source).unwrap());
}

#[test]
fn test_two_character_operators() {
    assert_eq!(kinds("!="), vec![TokenKind::NotEqual]);
    assert_eq!(kinds("=="), vec![TokenKind::Equal]);
    assert_eq!(kinds("<="), vec![TokenKind::LessEqual]);
    assert_eq!(kinds(">="), vec![TokenKind::GreaterEqual]);
}

#[test]
fn test_single_character_prefixes() {
    assert_eq!(
        kinds("! = < > = ="),
        vec![
            TokenKind::LogicalNot,
            TokenKind::Assign,
            TokenKind::Less,
            TokenKind::Greater,
            TokenKind::Assign,
            TokenKind::Assign,
        ]
    );
}

#[test]
fn test_punctuation() {
    assert_eq!(
        kinds(";(){},+-*/"),
        vec![
            TokenKind::Semicolon,
            TokenKind::OpenParen,
            TokenKind::CloseParen,
            TokenKind::OpenBrace,
            TokenKind::CloseBrace,
            TokenKind::Comma,
            TokenKind::Plus,
            TokenKind::Minus,
            TokenKind::Asterisk,
            TokenKind::Slash,
        ]
    );
}

#[test]
fn test_integer_literal() {
    let tokens = tokenize("123").unwrap();
    assert_eq!(tokens, vec![Token::new(TokenKind::Integer, "123", 1)]);
}

#[test]
fn test_float_literal() {
    let tokens = tokenize("12.5").unwrap();
    assert_eq!(tokens, vec![Token::new(TokenKind::Float, "12.5", 1)]);
}

#[test]
fn test_float_with_empty_fraction() {
    let tokens = tokenize("12.;").unwrap();
    assert_eq!(
        tokens,
        vec![
            Token::new(TokenKind::Float, "12.", 1),
            Token::new(TokenKind::Semicolon, ";", 1),
        ]
    );

    assert_eq!(kinds("12.x"), vec![TokenKind::Float, TokenKind::Identifier]);
}

#[test]
fn test_string_literal_strips_delimiters() {
    let tokens = tokenize("\"hi\"").unwrap();
    assert_eq!(tokens, vec![Token::new(TokenKind::StringLiteral, "hi", 1)]);

    let tokens = tokenize("'hi'").unwrap();
    assert_eq!(tokens, vec![Token::new(TokenKind::StringLiteral, "hi", 1)]);
}

#[test]
fn test_string_closes_on_matching_quote_only() {
    let tokens = tokenize("\"it's\" 'say \"x\"'").unwrap();
    assert_eq!(tokens[0].lexeme, "it's");
    assert_eq!(tokens[1].lexeme, "say \"x\"");
}

#[test]
fn test_unterminated_string() {
    assert_eq!(
        tokenize("x;\n\"never closed\n"),
        Err(LexerError::UnterminatedString(2))
    );
}

#[test]
fn test_keywords() {
    assert_eq!(kinds("fn"), vec![TokenKind::Keyword(Keyword::Fn)]);
    assert_eq!(kinds("raw"), vec![TokenKind::Keyword(Keyword::Raw)]);
    assert_eq!(kinds("ret"), vec![TokenKind::Keyword(Keyword::Ret)]);
    assert_eq!(kinds("var"), vec![TokenKind::Keyword(Keyword::Var)]);
}

#[test]
fn test_identifiers() {
    let tokens = tokenize("foo _bar fnx ret2 a_1").unwrap();
    assert!(tokens.iter().all(|token| token.kind == TokenKind::Identifier));
    let names: Vec<_> = tokens.iter().map(|token| token.lexeme.as_str()).collect();
    assert_eq!(names, vec!["foo", "_bar", "fnx", "ret2", "a_1"]);
}

#[test]
fn test_number_followed_by_identifier() {
    assert_eq!(kinds("12ab"), vec![TokenKind::Integer, TokenKind::Identifier]);
}

#[test]
fn test_uppercase_is_rejected() {
    assert_eq!(tokenize("foo Bar"), Err(LexerError::UnexpectedChar('B', 1)));
}

#[test]
fn test_unexpected_character_reports_line() {
    let err = tokenize("a;\n\nb;\n@").unwrap_err();
    assert_eq!(err, LexerError::UnexpectedChar('@', 4));
    assert_eq!(err.line(), 4);
    assert_eq!(err.to_string(), "Invalid character '@'");
}

#[test]
fn test_lone_dot_is_rejected() {
    assert_eq!(tokenize("a . b"), Err(LexerError::UnexpectedChar('.', 1)));
}

#[test]
fn test_line_numbers_count_every_newline() {
    let tokens = tokenize("a\n\n\nb\n'x\ny' c").unwrap();
    let lines: Vec<_> = tokens.iter().map(|token| token.line).collect();
    assert_eq!(lines, vec![1, 4, 5, 6]);
}

#[test]
fn test_line_numbers_are_monotonic() {
    let source = std::fs::read_to_string(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/tests/programs/strings.ls"
    ))
    .unwrap();
    let tokens = tokenize(&source).unwrap();

    assert!(tokens.windows(2).all(|pair| pair[0].line <= pair[1].line));

    let multi_line = tokens
        .iter()
        .find(|token| token.lexeme == "multi\nline")
        .unwrap();
    assert_eq!(multi_line.line, 6);
    assert_eq!(tokens.last().unwrap().line, 8);
}

#[test]
fn test_token_kind_names() {
    assert_eq!(TokenKind::LessEqual.name(), "lesser equals(<=)");
    assert_eq!(TokenKind::Keyword(Keyword::Fn).name(), "fn keyword");
    assert_eq!(TokenKind::Identifier.name(), "Identifier");
    assert_eq!(TokenKind::Assign.name(), "equals(=)");
    assert_eq!(TokenKind::Comma.name(), "comma(,)");
}
