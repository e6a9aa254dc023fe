use std::fmt;

/// Language keywords
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    Fn,
    Raw,
    Ret,
    Var,
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match self {
            Keyword::Fn => "fn",
            Keyword::Raw => "raw",
            Keyword::Ret => "ret",
            Keyword::Var => "var",
        };
        write!(f, "{}", s)
    }
}

impl Keyword {
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "fn" => Some(Keyword::Fn),
            "raw" => Some(Keyword::Raw),
            "ret" => Some(Keyword::Ret),
            "var" => Some(Keyword::Var),
            _ => None,
        }
    }
}

/// Token kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Literals and identifiers
    Identifier,
    Integer,
    StringLiteral,
    Float,
    Keyword(Keyword),

    // Punctuation
    Semicolon,          // ;
    OpenParen,          // (
    CloseParen,         // )
    OpenBrace,          // {
    CloseBrace,         // }
    Comma,              // ,

    // Arithmetic operators
    Plus,               // +
    Minus,              // -
    Asterisk,           // *
    Slash,              // /

    // Logical operators
    LogicalNot,         // !

    // Relational operators
    Less,               // <
    Greater,            // >
    LessEqual,          // <=
    GreaterEqual,       // >=
    Equal,              // ==
    NotEqual,           // !=

    // Not consumed by any grammar rule yet
    Assign,             // =
}

impl TokenKind {
    /// Human-readable name used in diagnostics.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Identifier => "Identifier",
            TokenKind::Integer => "integer",
            TokenKind::StringLiteral => "string",
            TokenKind::Float => "float",
            TokenKind::Keyword(Keyword::Fn) => "fn keyword",
            TokenKind::Keyword(Keyword::Raw) => "raw keyword",
            TokenKind::Keyword(Keyword::Ret) => "ret keyword",
            TokenKind::Keyword(Keyword::Var) => "var keyword",
            TokenKind::Semicolon => ";",
            TokenKind::OpenParen => "(",
            TokenKind::CloseParen => ")",
            TokenKind::OpenBrace => "{",
            TokenKind::CloseBrace => "}",
            TokenKind::Comma => "comma(,)",
            TokenKind::Plus => "plus(+)",
            TokenKind::Minus => "minus(-)",
            TokenKind::Asterisk => "star(*)",
            TokenKind::Slash => "slash(/)",
            TokenKind::LogicalNot => "not(!)",
            TokenKind::Less => "lesser(<)",
            TokenKind::Greater => "greater(>)",
            TokenKind::LessEqual => "lesser equals(<=)",
            TokenKind::GreaterEqual => "greater equals(>=)",
            TokenKind::Equal => "double equals(==)",
            TokenKind::NotEqual => "not equals(!=)",
            TokenKind::Assign => "equals(=)",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TokenKind::Identifier => write!(f, "identifier"),
            TokenKind::Integer => write!(f, "integer"),
            TokenKind::StringLiteral => write!(f, "string"),
            TokenKind::Float => write!(f, "float"),
            TokenKind::Keyword(kw) => write!(f, "{}", kw),
            TokenKind::Semicolon => write!(f, ";"),
            TokenKind::OpenParen => write!(f, "("),
            TokenKind::CloseParen => write!(f, ")"),
            TokenKind::OpenBrace => write!(f, "{{"),
            TokenKind::CloseBrace => write!(f, "}}"),
            TokenKind::Comma => write!(f, ","),
            TokenKind::Plus => write!(f, "+"),
            TokenKind::Minus => write!(f, "-"),
            TokenKind::Asterisk => write!(f, "*"),
            TokenKind::Slash => write!(f, "/"),
            TokenKind::LogicalNot => write!(f, "!"),
            TokenKind::Less => write!(f, "<"),
            TokenKind::Greater => write!(f, ">"),
            TokenKind::LessEqual => write!(f, "<="),
            TokenKind::GreaterEqual => write!(f, ">="),
            TokenKind::Equal => write!(f, "=="),
            TokenKind::NotEqual => write!(f, "!="),
            TokenKind::Assign => write!(f, "="),
        }
    }
}

/// A token with the line it started on.
///
/// For string literals `lexeme` holds the contents without the delimiters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub line: usize,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, line: usize) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            line,
        }
    }

    #[must_use]
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    #[must_use]
    pub fn is_any(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }
}
