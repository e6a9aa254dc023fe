use crate::lexer::TokenKind;

/// Name of the frame every trace starts with.
pub const GLOBAL_BLOCK: &str = "global";

/// Variable record attached to a frame.
///
/// Nothing in the current grammar declares variables, so frames are never
/// populated with these yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variable {
    pub name: String,
    pub var_type: TokenKind,
}

/// One enclosing block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceFrame {
    pub block_name: String,
    pub line: usize,
    pub variables: Vec<Variable>,
}

impl TraceFrame {
    pub fn new(block_name: impl Into<String>, line: usize) -> Self {
        Self {
            block_name: block_name.into(),
            line,
            variables: Vec::new(),
        }
    }
}

/// Stack of blocks opened by function parsing.
///
/// Depth 1 means only the global frame is open. The global frame is never
/// popped.
#[derive(Debug)]
pub struct ScopeTrace {
    frames: Vec<TraceFrame>,
}

impl Default for ScopeTrace {
    fn default() -> Self {
        Self::new()
    }
}

impl ScopeTrace {
    #[must_use]
    pub fn new() -> Self {
        Self {
            frames: vec![TraceFrame::new(GLOBAL_BLOCK, 1)],
        }
    }

    /// Open a block, e.g. when a function header is parsed
    pub fn enter(&mut self, block_name: impl Into<String>, line: usize) {
        self.frames.push(TraceFrame::new(block_name, line));
    }

    /// Close the innermost block. Returns `None` when only the global
    /// frame is left.
    pub fn exit(&mut self) -> Option<TraceFrame> {
        if self.is_global() {
            return None;
        }
        self.frames.pop()
    }

    #[must_use]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    #[must_use]
    pub fn is_global(&self) -> bool {
        self.frames.len() == 1
    }

    /// Innermost open block
    #[must_use]
    pub fn current(&self) -> Option<&TraceFrame> {
        self.frames.last()
    }

    pub fn frames(&self) -> impl Iterator<Item = &TraceFrame> {
        self.frames.iter()
    }
}
