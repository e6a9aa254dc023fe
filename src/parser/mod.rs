pub mod ast;
pub mod cursor;
pub mod errors;
pub mod expressions;
pub mod statements;

pub use ast::*;
pub use cursor::*;
pub use errors::*;
pub use expressions::{Parser, MAX_NESTING_DEPTH};
