//! Tokenizer driver for learning-rule expressions.
//!
//! Repeatedly offers the unconsumed suffix of the expression to each symbol
//! kind in `SymbolKind::PRIORITY` order. The first kind that matches wins and
//! the text after it becomes the new input. Bracket and `sgn(...)` symbols
//! run the same loop over their inner text, one level deeper.

use tracing::{debug, trace};

use super::matcher::recognize;
use super::symbol::{Symbol, SymbolKind, SymbolList};
use crate::config::TokenizerConfig;
use crate::error::{Result, SymbolError};

/// Tokenizer state: the config and the current nesting depth.
#[derive(Debug, Clone, Copy, Default)]
pub struct Tokenizer {
    config: TokenizerConfig,
    depth: usize,
}

impl Tokenizer {
    /// Create a tokenizer for a top-level expression.
    pub fn new(config: TokenizerConfig) -> Self {
        Self { config, depth: 0 }
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Tokenizer for the inner text of a composite expression.
    pub(crate) fn nested(&self) -> Result<Self> {
        let depth = self.depth + 1;
        if depth > self.config.max_depth {
            debug!(limit = self.config.max_depth, "nesting limit exceeded");
            return Err(SymbolError::NestingTooDeep {
                limit: self.config.max_depth,
            });
        }
        Ok(Self { depth, ..*self })
    }

    /// Try a single kind at the start of `text`.
    ///
    /// Returns the matched symbol and the rest of `text`, or `None` and
    /// `text` unchanged.
    pub fn find<'a>(&self, kind: SymbolKind, text: &'a str) -> Result<(Option<Symbol>, &'a str)> {
        Ok(match recognize(kind, text, self)? {
            Some((symbol, rest)) => (Some(symbol), rest),
            None => (None, text),
        })
    }

    /// Tokenize a whole expression into a flat list.
    ///
    /// Whitespace between symbols is skipped. Fails if any non-blank text
    /// remains that no kind recognizes.
    pub fn tokenize(&self, expression: &str) -> Result<SymbolList> {
        let mut symbols = SymbolList::new();
        let mut rest = expression.trim_start();

        'scan: while !rest.is_empty() {
            for kind in SymbolKind::PRIORITY {
                if let (Some(symbol), remainder) = self.find(kind, rest)? {
                    trace!(kind = kind.name(), expr = symbol.expr(), depth = self.depth, "symbol");
                    symbols.append(symbol);
                    rest = remainder.trim_start();
                    continue 'scan;
                }
            }
            debug!(remaining = rest, depth = self.depth, "unrecognized token");
            return Err(SymbolError::UnrecognizedToken {
                remaining: rest.to_string(),
            });
        }

        Ok(symbols)
    }
}

/// Tokenize an expression with the default config.
pub fn tokenize(expression: &str) -> Result<SymbolList> {
    Tokenizer::default().tokenize(expression)
}
