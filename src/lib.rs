//! Tokenizer for symbolic synaptic learning rules.
//!
//! A learning rule describes how a synaptic quantity changes, for example
//!
//! ```text
//! dw = x0*(-1)*2^-1*y1 + y0*1*2^1*x1
//! ```
//!
//! where `x0`/`y0` are pre- and postsynaptic spikes, `x<k>`/`y<k>` are
//! traces, `w`, `d` and `t` are weight, delay and tag, and `u<k>` marks a
//! decimated time step. This crate turns the right-hand side into an ordered
//! list of typed symbols for the stage that compiles update logic.
//!
//! ```
//! use synapse_eq::SymbolicEquation;
//!
//! let se = SymbolicEquation::parse("dw", "x0 * (w - 2)").unwrap();
//! assert_eq!(
//!     se.symbol_list.to_string(),
//!     "[X0(x0), Multiplication(*), BracketExpression([Variable(w), Subtraction(-), Literal(2)])]"
//! );
//! ```

pub mod config;
pub mod equation;
pub mod error;
pub mod syntax;

pub use config::TokenizerConfig;
pub use equation::{Dependency, SymbolicEquation};
pub use error::{Result, SymbolError};
pub use syntax::{tokenize, Composite, Symbol, SymbolKind, SymbolList, Tokenizer};
