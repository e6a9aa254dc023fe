use thiserror::Error;

/// Lexer error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexerError {
    #[error("Invalid character '{0}'")]
    UnexpectedChar(char, usize),

    #[error("Unterminated string literal")]
    UnterminatedString(usize),
}

impl LexerError {
    /// Line on which the offending input started.
    #[must_use]
    pub fn line(&self) -> usize {
        match self {
            LexerError::UnexpectedChar(_, line)
            | LexerError::UnterminatedString(line) => *line,
        }
    }
}
