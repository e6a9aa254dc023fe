use thiserror::Error;

use crate::lexer::TokenKind;

/// Parser error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParserError {
    #[error(
        "expected {}, but got {}",
        describe_expected(.expected),
        describe_found(.found.as_deref())
    )]
    ExpectedToken {
        expected: Vec<TokenKind>,
        found: Option<String>,
        line: Option<usize>,
    },

    #[error("function declaration inside another method or sub-block is not allowed")]
    NestedFunction(usize),

    #[error("re-usage of argument name '{0}'")]
    DuplicateParameter(String, usize),

    #[error("Invalid expression")]
    InvalidExpression(Option<usize>),

    #[error("Invalid literal '{0}'")]
    InvalidLiteral(String, usize),

    #[error("unmatched '}}' outside of any function body")]
    UnmatchedCloseBrace(usize),

    #[error("expression nested too deeply")]
    NestingTooDeep(usize),
}

impl ParserError {
    /// Source line of the offending token, if input was not exhausted.
    #[must_use]
    pub fn line(&self) -> Option<usize> {
        match self {
            ParserError::ExpectedToken { line, .. } | ParserError::InvalidExpression(line) => *line,
            ParserError::NestedFunction(line)
            | ParserError::DuplicateParameter(_, line)
            | ParserError::InvalidLiteral(_, line)
            | ParserError::UnmatchedCloseBrace(line)
            | ParserError::NestingTooDeep(line) => Some(*line),
        }
    }
}

fn describe_expected(expected: &[TokenKind]) -> String {
    expected
        .iter()
        .map(|kind| format!("`{}`", kind.name()))
        .collect::<Vec<_>>()
        .join(" or ")
}

fn describe_found(found: Option<&str>) -> String {
    format!("`{}`", found.unwrap_or("nothing"))
}
