//! Syntax module: lexemes, symbol recognizers, and the tokenizer driver.

mod matcher;
mod parser;
mod scanner;
mod symbol;
mod token;

pub use parser::{tokenize, Tokenizer};
pub use symbol::{Composite, Symbol, SymbolKind, SymbolList};
pub use token::Lexeme;
