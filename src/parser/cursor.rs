use crate::lexer::{Token, TokenKind};
use crate::parser::ParserError;

/// Read position over a borrowed token sequence.
///
/// The index never passes the end of the slice; lookahead past the end
/// yields `None`.
#[derive(Debug, Clone, Copy)]
pub struct TokenCursor<'t> {
    tokens: &'t [Token],
    current: usize,
}

impl<'t> TokenCursor<'t> {
    #[must_use]
    pub fn new(tokens: &'t [Token]) -> Self {
        Self { tokens, current: 0 }
    }

    #[must_use]
    pub fn position(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn is_at_end(&self) -> bool {
        self.current >= self.tokens.len()
    }

    /// Token under the cursor without consuming it
    #[must_use]
    pub fn peek(&self) -> Option<&'t Token> {
        self.tokens.get(self.current)
    }

    /// Peek ahead n tokens
    #[must_use]
    pub fn peek_ahead(&self, n: usize) -> Option<&'t Token> {
        self.tokens.get(self.current + n)
    }

    /// Last token of the whole sequence, used to place end-of-input errors.
    #[must_use]
    pub fn last(&self) -> Option<&'t Token> {
        self.tokens.last()
    }

    pub fn advance(&mut self) -> Option<&'t Token> {
        let token = self.peek()?;
        self.current += 1;
        Some(token)
    }

    #[must_use]
    pub fn check(&self, kind: TokenKind) -> bool {
        self.peek().is_some_and(|token| token.is(kind))
    }

    #[must_use]
    pub fn check_any(&self, kinds: &[TokenKind]) -> bool {
        self.peek().is_some_and(|token| token.is_any(kinds))
    }

    /// Consume the next token if it is one of `kinds`
    pub fn match_any(&mut self, kinds: &[TokenKind]) -> Option<&'t Token> {
        if self.check_any(kinds) {
            self.advance()
        } else {
            None
        }
    }

    /// Expect a specific token kind and consume it
    pub fn expect(&mut self, kind: TokenKind) -> Result<&'t Token, ParserError> {
        self.expect_any(&[kind])
    }

    /// Expect one of several token kinds and consume it
    pub fn expect_any(&mut self, kinds: &[TokenKind]) -> Result<&'t Token, ParserError> {
        match self.peek() {
            Some(token) if token.is_any(kinds) => {
                self.current += 1;
                Ok(token)
            }
            found => Err(ParserError::ExpectedToken {
                expected: kinds.to_vec(),
                found: found.map(|token| token.lexeme.clone()),
                line: found.map(|token| token.line),
            }),
        }
    }
}
