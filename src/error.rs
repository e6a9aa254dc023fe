use std::fmt;

use crate::lexer::LexerError;
use crate::parser::ParserError;

/// The one error kind handed back to callers of the front end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    pub message: String,
    pub line: Option<usize>,
}

impl SyntaxError {
    pub fn new(message: impl Into<String>, line: Option<usize>) -> Self {
        Self {
            message: message.into(),
            line,
        }
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "Syntax Error at line {line}: {}", self.message),
            None => write!(f, "Syntax Error: {}", self.message),
        }
    }
}

impl std::error::Error for SyntaxError {}

impl From<LexerError> for SyntaxError {
    fn from(err: LexerError) -> Self {
        Self::new(err.to_string(), Some(err.line()))
    }
}

impl From<ParserError> for SyntaxError {
    fn from(err: ParserError) -> Self {
        Self::new(err.to_string(), err.line())
    }
}
