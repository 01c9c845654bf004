//! Symbolic learning-rule equations.
//!
//! A `SymbolicEquation` pairs the updated quantity (`dw`, `dd`, `dt`, ...)
//! with the tokenized right-hand side, and answers the questions the
//! equation compiler asks before it generates update logic: which spike
//! dependencies are touched, which traces are read, and at which decimation.

use std::fmt;

use indexmap::IndexSet;
use tracing::debug;

use crate::config::TokenizerConfig;
use crate::error::{Result, SymbolError};
use crate::syntax::{Symbol, SymbolList, Tokenizer};

/// Dependency of a learning rule on a spike or time-step event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dependency {
    /// Presynaptic spike `x0`
    X0,
    /// Postsynaptic spike `y0`
    Y0,
    /// Decimated time step `u<k>`
    U,
}

impl fmt::Display for Dependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dependency::X0 => write!(f, "x0"),
            Dependency::Y0 => write!(f, "y0"),
            Dependency::U => write!(f, "u"),
        }
    }
}

impl SymbolList {
    /// Spike and time-step dependencies in order of first occurrence.
    pub fn dependencies(&self) -> IndexSet<Dependency> {
        let mut deps = IndexSet::new();
        self.walk(&mut |symbol: &Symbol| match symbol {
            Symbol::X0 { .. } => {
                deps.insert(Dependency::X0);
            }
            Symbol::Y0 { .. } => {
                deps.insert(Dependency::Y0);
            }
            Symbol::Uk { .. } => {
                deps.insert(Dependency::U);
            }
            _ => {}
        });
        deps
    }

    /// Distinct variable names (`x1`, `y2`, `w`, ...) in order of first use.
    pub fn variables(&self) -> IndexSet<String> {
        let mut names = IndexSet::new();
        self.walk(&mut |symbol: &Symbol| {
            if let Symbol::Variable { expr } = symbol {
                names.insert(expr.clone());
            }
        });
        names
    }

    /// Distinct `k` of every `u<k>`, in order of first use.
    pub fn decimate_exponents(&self) -> IndexSet<u32> {
        let mut exponents = IndexSet::new();
        self.walk(&mut |symbol: &Symbol| {
            if let Some(k) = symbol.decimate_exponent() {
                exponents.insert(k);
            }
        });
        exponents
    }
}

/// A tokenized learning-rule equation: `target = symbol_list`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolicEquation {
    pub target: String,
    pub symbol_list: SymbolList,
}

impl SymbolicEquation {
    /// Tokenize `expression` as the update rule for `target`.
    pub fn parse(target: impl Into<String>, expression: &str) -> Result<Self> {
        Self::parse_with(target, expression, TokenizerConfig::default())
    }

    /// Like [`SymbolicEquation::parse`] with an explicit config.
    pub fn parse_with(
        target: impl Into<String>,
        expression: &str,
        config: TokenizerConfig,
    ) -> Result<Self> {
        let target = target.into();
        let symbol_list = Tokenizer::new(config).tokenize(expression).map_err(|e| {
            debug!(lhs = %target, error = %e, "failed to tokenize equation");
            e
        })?;
        debug!(lhs = %target, symbols = symbol_list.len(), "tokenized equation");
        Ok(Self {
            target,
            symbol_list,
        })
    }

    pub fn dependencies(&self) -> IndexSet<Dependency> {
        self.symbol_list.dependencies()
    }

    pub fn variables(&self) -> IndexSet<String> {
        self.symbol_list.variables()
    }

    /// The single decimation exponent used by this equation, if any.
    ///
    /// An equation may only be evaluated at one decimation; mixing `u<k>`
    /// with different `k` is an error.
    pub fn decimate_exponent(&self) -> Result<Option<u32>> {
        let exponents = self.symbol_list.decimate_exponents();
        match (exponents.get_index(0), exponents.get_index(1)) {
            (Some(&first), Some(&second)) => {
                Err(SymbolError::InconsistentDecimation { first, second })
            }
            (first, _) => Ok(first.copied()),
        }
    }
}

impl fmt::Display for SymbolicEquation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.target, self.symbol_list)
    }
}
