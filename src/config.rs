//! Tokenizer configuration.

/// Default limit on nested bracket and `sgn(...)` expressions.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Options controlling a parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenizerConfig {
    /// Deepest allowed nesting of composite expressions.
    /// The top-level expression is depth 0.
    pub max_depth: usize,
}

impl TokenizerConfig {
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
