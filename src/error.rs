//! Error types for learning-rule tokenization.

use thiserror::Error;

/// The main error type for tokenizing a symbolic equation.
///
/// A kind declining to match is not an error; every variant here aborts the
/// whole parse, including any enclosing bracket or `sgn(...)` expression.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SymbolError {
    /// No symbol kind matches the start of the remaining text
    #[error("unrecognized token at: {remaining:?}")]
    UnrecognizedToken { remaining: String },

    /// Opening prefix found without a matching `)`
    #[error("{kind} is missing a closing bracket: {expr:?}")]
    UnclosedExpression { kind: &'static str, expr: String },

    /// Numeric token whose value cannot be represented
    #[error("number out of range: {expr:?}")]
    NumberOutOfRange { expr: String },

    /// Composite expressions nested deeper than the configured limit
    #[error("expression nested deeper than {limit} levels")]
    NestingTooDeep { limit: usize },

    /// Equation mixes different `u<k>` decimation exponents
    #[error("inconsistent decimate exponents: u{first} and u{second}")]
    InconsistentDecimation { first: u32, second: u32 },
}

/// Result type for tokenizer operations.
pub type Result<T> = std::result::Result<T, SymbolError>;
