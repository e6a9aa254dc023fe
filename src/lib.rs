//! lscript front end
//!
//! Turns lscript source text into a validated AST. The [`lexer`] produces a
//! token sequence, the [`parser`] walks it with a [`parser::TokenCursor`] and
//! builds a [`parser::Program`]. Both stages stop at the first error.

pub mod error;
pub mod lexer;
pub mod parser;
pub mod scope;
pub mod source;

pub use error::SyntaxError;
pub use lexer::{tokenize, Keyword, LexerError, Token, TokenKind};
pub use parser::{Parser, ParserError, Program};
pub use scope::ScopeTrace;

/// Tokenize and parse `source` in one go.
///
/// # Errors
/// The first lexing or parsing error, converted to a [`SyntaxError`].
pub fn parse_source(source: &str) -> Result<Program, SyntaxError> {
    let tokens = tokenize(source)?;
    let mut parser = Parser::new(&tokens);
    Ok(parser.parse_program()?)
}
