use crate::lexer::{Keyword, LexerError, Token, TokenKind};

pub struct Scanner {
    input: Vec<char>,
    current: usize,
    line: usize,
    tokens: Vec<Token>,
}

impl Scanner {
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            current: 0,
            line: 1,
            tokens: Vec::new(),
        }
    }

    /// Scan the whole input. Stops at the first error.
    pub fn scan_all(mut self) -> Result<Vec<Token>, LexerError> {
        loop {
            self.skip_whitespace();

            let line = self.line;
            let start_idx = self.current;
            let Some(ch) = self.advance() else {
                break;
            };

            let token = self.scan_token(ch, start_idx, line)?;
            self.tokens.push(token);
        }

        Ok(self.tokens)
    }

    fn peek(&self) -> Option<char> {
        self.input.get(self.current).copied()
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.current += 1;
        if ch == '\n' {
            self.line += 1;
        }
        Some(ch)
    }

    fn match_char(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn text(&self, start: usize) -> String {
        self.input[start..self.current].iter().collect()
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.advance();
        }
    }

    fn scan_token(&mut self, ch: char, start_idx: usize, line: usize) -> Result<Token, LexerError> {
        let kind = match ch {
            // Single-character tokens
            '(' => TokenKind::OpenParen,
            ')' => TokenKind::CloseParen,
            '{' => TokenKind::OpenBrace,
            '}' => TokenKind::CloseBrace,
            ';' => TokenKind::Semicolon,
            ',' => TokenKind::Comma,
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => TokenKind::Asterisk,
            '/' => TokenKind::Slash,

            // Two-character operators win over their prefixes
            '=' => {
                if self.match_char('=') {
                    TokenKind::Equal
                } else {
                    TokenKind::Assign
                }
            }
            '!' => {
                if self.match_char('=') {
                    TokenKind::NotEqual
                } else {
                    TokenKind::LogicalNot
                }
            }
            '<' => {
                if self.match_char('=') {
                    TokenKind::LessEqual
                } else {
                    TokenKind::Less
                }
            }
            '>' => {
                if self.match_char('=') {
                    TokenKind::GreaterEqual
                } else {
                    TokenKind::Greater
                }
            }

            // String literals
            '"' | '\'' => return self.scan_string_literal(ch, line),

            // Numbers
            '0'..='9' => return self.scan_number(start_idx, line),

            // Identifiers and keywords
            ch if is_identifier_start(ch) => {
                return Ok(self.scan_identifier_or_keyword(start_idx, line));
            }

            _ => return Err(LexerError::UnexpectedChar(ch, line)),
        };

        Ok(Token::new(kind, self.text(start_idx), line))
    }

    fn scan_string_literal(&mut self, quote: char, line: usize) -> Result<Token, LexerError> {
        let start_idx = self.current;

        loop {
            match self.peek() {
                None => return Err(LexerError::UnterminatedString(line)),
                Some(ch) if ch == quote => break,
                Some(_) => {
                    self.advance();
                }
            }
        }

        let value = self.text(start_idx);
        self.advance(); // closing quote

        Ok(Token::new(TokenKind::StringLiteral, value, line))
    }

    fn scan_number(&mut self, start_idx: usize, line: usize) -> Result<Token, LexerError> {
        self.skip_digits();

        if !self.match_char('.') {
            return Ok(Token::new(TokenKind::Integer, self.text(start_idx), line));
        }

        // The fraction may be empty: `12.` is a float
        self.skip_digits();

        Ok(Token::new(TokenKind::Float, self.text(start_idx), line))
    }

    fn skip_digits(&mut self) {
        while self.peek().is_some_and(|ch| ch.is_ascii_digit()) {
            self.advance();
        }
    }

    fn scan_identifier_or_keyword(&mut self, start_idx: usize, line: usize) -> Token {
        while self.peek().is_some_and(is_identifier_char) {
            self.advance();
        }

        let text = self.text(start_idx);

        match Keyword::from_str(&text) {
            Some(keyword) => Token::new(TokenKind::Keyword(keyword), text, line),
            None => Token::new(TokenKind::Identifier, text, line),
        }
    }
}

fn is_identifier_start(ch: char) -> bool {
    ch.is_ascii_lowercase() || ch == '_'
}

fn is_identifier_char(ch: char) -> bool {
    is_identifier_start(ch) || ch.is_ascii_digit()
}

/// Convenience function for tokenizing input
///
/// # Errors
/// On the first character that cannot start a token or an unterminated
/// string literal.
pub fn tokenize(input: &str) -> Result<Vec<Token>, LexerError> {
    Scanner::new(input).scan_all()
}
