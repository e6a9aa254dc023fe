use std::fmt;

use crate::lexer::TokenKind;

/// Version tag carried by every parsed program.
pub const PROGRAM_VERSION: &str = "v1";

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    // Equality
    Equal,
    NotEqual,

    // Comparison
    Less,
    Greater,
    LessEqual,
    GreaterEqual,

    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
}

impl BinaryOp {
    #[must_use]
    pub fn from_token(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Equal => Some(BinaryOp::Equal),
            TokenKind::NotEqual => Some(BinaryOp::NotEqual),
            TokenKind::Less => Some(BinaryOp::Less),
            TokenKind::Greater => Some(BinaryOp::Greater),
            TokenKind::LessEqual => Some(BinaryOp::LessEqual),
            TokenKind::GreaterEqual => Some(BinaryOp::GreaterEqual),
            TokenKind::Plus => Some(BinaryOp::Add),
            TokenKind::Minus => Some(BinaryOp::Sub),
            TokenKind::Asterisk => Some(BinaryOp::Mul),
            TokenKind::Slash => Some(BinaryOp::Div),
            _ => None,
        }
    }

    /// Token kind this operator was parsed from
    #[must_use]
    pub fn token_kind(&self) -> TokenKind {
        match self {
            BinaryOp::Equal => TokenKind::Equal,
            BinaryOp::NotEqual => TokenKind::NotEqual,
            BinaryOp::Less => TokenKind::Less,
            BinaryOp::Greater => TokenKind::Greater,
            BinaryOp::LessEqual => TokenKind::LessEqual,
            BinaryOp::GreaterEqual => TokenKind::GreaterEqual,
            BinaryOp::Add => TokenKind::Plus,
            BinaryOp::Sub => TokenKind::Minus,
            BinaryOp::Mul => TokenKind::Asterisk,
            BinaryOp::Div => TokenKind::Slash,
        }
    }
}

/// Prefix operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Not,
    Negate,
}

impl UnaryOp {
    #[must_use]
    pub fn from_token(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::LogicalNot => Some(UnaryOp::Not),
            TokenKind::Minus => Some(UnaryOp::Negate),
            _ => None,
        }
    }

    #[must_use]
    pub fn token_kind(&self) -> TokenKind {
        match self {
            UnaryOp::Not => TokenKind::LogicalNot,
            UnaryOp::Negate => TokenKind::Minus,
        }
    }
}

/// A bare name together with the line it appeared on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    pub name: String,
    pub line: usize,
}

impl Identifier {
    pub fn new(name: impl Into<String>, line: usize) -> Self {
        Self {
            name: name.into(),
            line,
        }
    }
}

/// Expression variants
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExprKind {
    Identifier(String),
    IntLiteral(i64),
    StringLiteral(String),
    Unary {
        op: UnaryOp,
        operand: Box<Expression>,
    },
    Binary {
        left: Box<Expression>,
        op: BinaryOp,
        right: Box<Expression>,
    },
}

/// Expression with the line of its leading token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expression {
    pub kind: ExprKind,
    pub line: usize,
}

impl Expression {
    pub fn new(kind: ExprKind, line: usize) -> Self {
        Self { kind, line }
    }

    pub fn unary(op: UnaryOp, operand: Expression, line: usize) -> Self {
        Self::new(
            ExprKind::Unary {
                op,
                operand: Box::new(operand),
            },
            line,
        )
    }

    pub fn binary(left: Expression, op: BinaryOp, right: Expression, line: usize) -> Self {
        Self::new(
            ExprKind::Binary {
                left: Box::new(left),
                op,
                right: Box::new(right),
            },
            line,
        )
    }
}

/// Function declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionDeclaration {
    pub name: String,
    pub params: Vec<Identifier>,
    pub body: Vec<Statement>,
}

/// Statement variants
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatementKind {
    Expression(Expression),
    Function(FunctionDeclaration),
    Return(Expression),
    /// Reserved: no grammar rule produces it yet.
    VarDecl {
        identifier: Identifier,
        init: Expression,
    },
    /// Reserved: no grammar rule produces it yet.
    RawCode {
        code: u32,
        params: Vec<Expression>,
    },
}

/// Statement with the line of its leading token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    pub kind: StatementKind,
    pub line: usize,
}

impl Statement {
    pub fn new(kind: StatementKind, line: usize) -> Self {
        Self { kind, line }
    }
}

/// Complete program AST
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    pub version: &'static str,
    pub body: Vec<Statement>,
}

impl Program {
    #[must_use]
    pub fn new(body: Vec<Statement>) -> Self {
        Self {
            version: PROGRAM_VERSION,
            body,
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.kind {
            ExprKind::Identifier(name) => write!(f, "{name}"),
            ExprKind::IntLiteral(value) => write!(f, "{value}"),
            ExprKind::StringLiteral(value) => write!(f, "\"{value}\""),
            ExprKind::Unary { op, operand } => write!(f, "({} {operand})", op.token_kind()),
            ExprKind::Binary { left, op, right } => {
                write!(f, "({} {left} {right})", op.token_kind())
            }
        }
    }
}

impl Statement {
    fn write_tree(&self, f: &mut fmt::Formatter, depth: usize) -> fmt::Result {
        let indent = "  ".repeat(depth);
        match &self.kind {
            StatementKind::Expression(expr) => writeln!(f, "{indent}expr {expr}"),
            StatementKind::Return(expr) => writeln!(f, "{indent}ret {expr}"),
            StatementKind::Function(func) => {
                let params = func
                    .params
                    .iter()
                    .map(|param| param.name.as_str())
                    .collect::<Vec<_>>()
                    .join(", ");
                writeln!(f, "{indent}fn {}({params})", func.name)?;
                for stmt in &func.body {
                    stmt.write_tree(f, depth + 1)?;
                }
                Ok(())
            }
            StatementKind::VarDecl { identifier, init } => {
                writeln!(f, "{indent}var {} = {init}", identifier.name)
            }
            StatementKind::RawCode { code, params } => {
                let params = params
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(" ");
                writeln!(f, "{indent}raw {code} [{params}]")
            }
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.write_tree(f, 0)
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "program {}", self.version)?;
        for stmt in &self.body {
            stmt.write_tree(f, 1)?;
        }
        Ok(())
    }
}
