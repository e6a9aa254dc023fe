use crate::lexer::{Token, TokenKind};
use crate::parser::{BinaryOp, ExprKind, Expression, ParserError, TokenCursor, UnaryOp};
use crate::scope::ScopeTrace;

/// Longest chain of prefix operators `parse_unary` accepts. Binary levels
/// loop instead of recursing, so prefix chains are the only unbounded descent.
pub const MAX_NESTING_DEPTH: usize = 256;

pub struct Parser<'t> {
    pub(crate) cursor: TokenCursor<'t>,
    pub(crate) scope: ScopeTrace,
    depth: usize,
}

impl<'t> Parser<'t> {
    #[must_use]
    pub fn new(tokens: &'t [Token]) -> Self {
        Self {
            cursor: TokenCursor::new(tokens),
            scope: ScopeTrace::new(),
            depth: 0,
        }
    }

    /// Get reference to the scope trace
    #[must_use]
    pub fn scope_trace(&self) -> &ScopeTrace {
        &self.scope
    }

    /// Parse an expression
    ///
    /// # Errors
    /// If the tokens under the cursor do not form an expression.
    pub fn parse_expression(&mut self) -> Result<Expression, ParserError> {
        self.parse_equality()
    }

    /// Parse equality expressions (==, !=)
    fn parse_equality(&mut self) -> Result<Expression, ParserError> {
        self.parse_binary_expr(Self::parse_comparison, &[BinaryOp::Equal, BinaryOp::NotEqual])
    }

    /// Parse comparison expressions (<, >, <=, >=)
    fn parse_comparison(&mut self) -> Result<Expression, ParserError> {
        self.parse_binary_expr(
            Self::parse_term,
            &[
                BinaryOp::Less,
                BinaryOp::Greater,
                BinaryOp::LessEqual,
                BinaryOp::GreaterEqual,
            ],
        )
    }

    /// Parse additive expressions (+, -)
    fn parse_term(&mut self) -> Result<Expression, ParserError> {
        self.parse_binary_expr(Self::parse_factor, &[BinaryOp::Add, BinaryOp::Sub])
    }

    /// Parse multiplicative expressions (*, /)
    fn parse_factor(&mut self) -> Result<Expression, ParserError> {
        self.parse_binary_expr(Self::parse_unary, &[BinaryOp::Mul, BinaryOp::Div])
    }

    /// Generic left-associative binary expression parser
    fn parse_binary_expr<F>(
        &mut self,
        next_level: F,
        operators: &[BinaryOp],
    ) -> Result<Expression, ParserError>
    where
        F: Fn(&mut Self) -> Result<Expression, ParserError>,
    {
        let mut left = next_level(self)?;

        while let Some((op, line)) = self.match_binary_op(operators) {
            let right = next_level(self)?;
            left = Expression::binary(left, op, right, line);
        }

        Ok(left)
    }

    /// Consume the next token if it is one of `operators`
    fn match_binary_op(&mut self, operators: &[BinaryOp]) -> Option<(BinaryOp, usize)> {
        let token = self.cursor.peek()?;
        let op = BinaryOp::from_token(token.kind).filter(|op| operators.contains(op))?;
        self.cursor.advance();
        Some((op, token.line))
    }

    /// Parse unary expressions (!, -)
    fn parse_unary(&mut self) -> Result<Expression, ParserError> {
        let prefix = self
            .cursor
            .peek()
            .and_then(|token| UnaryOp::from_token(token.kind).map(|op| (op, token.line)));

        match prefix {
            Some((op, line)) => {
                self.cursor.advance();
                if self.depth >= MAX_NESTING_DEPTH {
                    return Err(ParserError::NestingTooDeep(line));
                }

                self.depth += 1;
                let operand = self.parse_unary();
                self.depth -= 1;

                Ok(Expression::unary(op, operand?, line))
            }
            None => self.parse_primary(),
        }
    }

    /// Parse primary expressions (integer, string, identifier)
    fn parse_primary(&mut self) -> Result<Expression, ParserError> {
        let Some(token) = self.cursor.peek() else {
            return Err(ParserError::InvalidExpression(
                self.cursor.last().map(|token| token.line),
            ));
        };

        let kind = match token.kind {
            TokenKind::Integer => {
                let value: i64 = token
                    .lexeme
                    .parse()
                    .map_err(|_| ParserError::InvalidLiteral(token.lexeme.clone(), token.line))?;
                ExprKind::IntLiteral(value)
            }
            TokenKind::StringLiteral => ExprKind::StringLiteral(token.lexeme.clone()),
            TokenKind::Identifier => ExprKind::Identifier(token.lexeme.clone()),
            _ => return Err(ParserError::InvalidLiteral(token.lexeme.clone(), token.line)),
        };

        self.cursor.advance();
        Ok(Expression::new(kind, token.line))
    }
}
