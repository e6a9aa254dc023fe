use std::collections::HashSet;

use crate::lexer::{Keyword, TokenKind};
use crate::parser::expressions::Parser;
use crate::parser::{
    FunctionDeclaration, Identifier, ParserError, Program, Statement, StatementKind,
};

impl Parser<'_> {
    /// Parse a complete program
    ///
    /// # Errors
    /// On the first token sequence that does not fit the grammar.
    pub fn parse_program(&mut self) -> Result<Program, ParserError> {
        let body = self.parse_statements()?;
        Ok(Program::new(body))
    }

    /// Parse statements until end of input or the `}` closing the current
    /// block. The `}` itself is left for the caller and the block's trace
    /// frame is popped.
    pub(crate) fn parse_statements(&mut self) -> Result<Vec<Statement>, ParserError> {
        let mut statements = Vec::new();

        while let Some(token) = self.cursor.peek() {
            match token.kind {
                TokenKind::Keyword(Keyword::Fn) => {
                    if !self.scope.is_global() {
                        return Err(ParserError::NestedFunction(token.line));
                    }
                    statements.push(self.parse_function()?);
                }
                TokenKind::CloseBrace => {
                    if self.scope.exit().is_none() {
                        return Err(ParserError::UnmatchedCloseBrace(token.line));
                    }
                    return Ok(statements);
                }
                TokenKind::Keyword(Keyword::Ret) => statements.push(self.parse_return_statement()?),
                _ => statements.push(self.parse_expression_statement(token.line)?),
            }
        }

        Ok(statements)
    }

    /// Parse `fn name(params) { body }`
    fn parse_function(&mut self) -> Result<Statement, ParserError> {
        let fn_token = self.cursor.expect(TokenKind::Keyword(Keyword::Fn))?;
        let name = self.cursor.expect(TokenKind::Identifier)?;

        self.scope.enter(name.lexeme.clone(), name.line);

        self.cursor.expect(TokenKind::OpenParen)?;
        let params = self.parse_params()?;
        self.cursor.expect(TokenKind::CloseParen)?;

        self.cursor.expect(TokenKind::OpenBrace)?;
        let body = self.parse_statements()?;
        self.cursor.expect(TokenKind::CloseBrace)?;

        Ok(Statement::new(
            StatementKind::Function(FunctionDeclaration {
                name: name.lexeme.clone(),
                params,
                body,
            }),
            fn_token.line,
        ))
    }

    /// Parse a comma separated parameter list, stopping before `)`
    fn parse_params(&mut self) -> Result<Vec<Identifier>, ParserError> {
        let mut params = Vec::new();
        let mut seen = HashSet::new();

        if self.cursor.check(TokenKind::CloseParen) {
            return Ok(params);
        }

        loop {
            let token = self.cursor.expect(TokenKind::Identifier)?;
            if !seen.insert(token.lexeme.as_str()) {
                return Err(ParserError::DuplicateParameter(token.lexeme.clone(), token.line));
            }
            params.push(Identifier::new(token.lexeme.clone(), token.line));

            if self.cursor.check(TokenKind::CloseParen) {
                break;
            }
            self.cursor.expect(TokenKind::Comma)?;
        }

        Ok(params)
    }

    /// Parse `ret expression;`
    fn parse_return_statement(&mut self) -> Result<Statement, ParserError> {
        let ret = self.cursor.expect(TokenKind::Keyword(Keyword::Ret))?;
        let value = self.parse_expression()?;
        self.cursor.expect(TokenKind::Semicolon)?;

        Ok(Statement::new(StatementKind::Return(value), ret.line))
    }

    /// Parse `expression;`
    fn parse_expression_statement(&mut self, line: usize) -> Result<Statement, ParserError> {
        let expr = self.parse_expression()?;
        self.cursor.expect(TokenKind::Semicolon)?;

        Ok(Statement::new(StatementKind::Expression(expr), line))
    }
}
