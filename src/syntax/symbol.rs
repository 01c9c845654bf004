//! Symbols produced by the tokenizer and the list that holds them.

use std::fmt;

use super::parser::Tokenizer;
use crate::error::Result;

/// The closed set of symbol kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolKind {
    SgnExpression,
    BracketExpression,
    X0,
    Y0,
    Uk,
    Variable,
    Addition,
    Subtraction,
    Multiplication,
    Literal,
}

impl SymbolKind {
    /// Order in which the tokenizer offers text to each kind.
    ///
    /// `sgn(` before `(`, reserved `x0`/`y0` and `u<k>` before generic
    /// variables, operators before signed literals.
    pub const PRIORITY: [SymbolKind; 10] = [
        SymbolKind::SgnExpression,
        SymbolKind::BracketExpression,
        SymbolKind::X0,
        SymbolKind::Y0,
        SymbolKind::Uk,
        SymbolKind::Variable,
        SymbolKind::Addition,
        SymbolKind::Subtraction,
        SymbolKind::Multiplication,
        SymbolKind::Literal,
    ];

    /// Name used in the canonical rendering.
    pub fn name(self) -> &'static str {
        match self {
            SymbolKind::SgnExpression => "SgnExpression",
            SymbolKind::BracketExpression => "BracketExpression",
            SymbolKind::X0 => "X0",
            SymbolKind::Y0 => "Y0",
            SymbolKind::Uk => "Uk",
            SymbolKind::Variable => "Variable",
            SymbolKind::Addition => "Addition",
            SymbolKind::Subtraction => "Subtraction",
            SymbolKind::Multiplication => "Multiplication",
            SymbolKind::Literal => "Literal",
        }
    }

    /// Whether symbols of this kind own a nested list.
    pub fn is_composite(self) -> bool {
        matches!(self, SymbolKind::SgnExpression | SymbolKind::BracketExpression)
    }

    /// Try to match a symbol of this kind at the very start of `text`.
    ///
    /// On a match, returns the symbol and the text following it. Otherwise
    /// returns `None` together with `text` itself, never partially consumed.
    /// Composite kinds tokenize their inner text with the default config.
    pub fn find(self, text: &str) -> Result<(Option<Symbol>, &str)> {
        Tokenizer::default().find(self, text)
    }
}

impl fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A bracketed or `sgn(...)`-wrapped sub-expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Composite {
    /// Full consumed text, including the prefix and closing bracket
    pub expr: String,
    /// Text strictly between the brackets
    pub sub_expr: String,
    /// Tokenized `sub_expr`
    pub symbol_list: SymbolList,
}

/// One recognized token of a learning-rule equation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Symbol {
    Addition { expr: String },
    Subtraction { expr: String },
    Multiplication { expr: String },

    /// Presynaptic spike `x0`
    X0 { expr: String },

    /// Postsynaptic spike `y0`
    Y0 { expr: String },

    /// Decimated time step indicator `u<k>`
    Uk { expr: String, decimate_exponent: u32 },

    /// Trace `x<k>`/`y<k>` or synaptic variable `w`, `d`, `t`
    Variable { expr: String },

    /// Numeric constant, folded to an integer
    Literal { expr: String, val: i64 },

    BracketExpression(Composite),
    SgnExpression(Composite),
}

impl Symbol {
    pub fn kind(&self) -> SymbolKind {
        match self {
            Symbol::Addition { .. } => SymbolKind::Addition,
            Symbol::Subtraction { .. } => SymbolKind::Subtraction,
            Symbol::Multiplication { .. } => SymbolKind::Multiplication,
            Symbol::X0 { .. } => SymbolKind::X0,
            Symbol::Y0 { .. } => SymbolKind::Y0,
            Symbol::Uk { .. } => SymbolKind::Uk,
            Symbol::Variable { .. } => SymbolKind::Variable,
            Symbol::Literal { .. } => SymbolKind::Literal,
            Symbol::BracketExpression(_) => SymbolKind::BracketExpression,
            Symbol::SgnExpression(_) => SymbolKind::SgnExpression,
        }
    }

    /// The exact source text this symbol consumed.
    pub fn expr(&self) -> &str {
        match self {
            Symbol::Addition { expr }
            | Symbol::Subtraction { expr }
            | Symbol::Multiplication { expr }
            | Symbol::X0 { expr }
            | Symbol::Y0 { expr }
            | Symbol::Uk { expr, .. }
            | Symbol::Variable { expr }
            | Symbol::Literal { expr, .. } => expr,
            Symbol::BracketExpression(c) | Symbol::SgnExpression(c) => &c.expr,
        }
    }

    pub fn val(&self) -> Option<i64> {
        match self {
            Symbol::Literal { val, .. } => Some(*val),
            _ => None,
        }
    }

    pub fn decimate_exponent(&self) -> Option<u32> {
        match self {
            Symbol::Uk {
                decimate_exponent, ..
            } => Some(*decimate_exponent),
            _ => None,
        }
    }

    pub fn composite(&self) -> Option<&Composite> {
        match self {
            Symbol::BracketExpression(c) | Symbol::SgnExpression(c) => Some(c),
            _ => None,
        }
    }

    pub fn sub_expr(&self) -> Option<&str> {
        self.composite().map(|c| c.sub_expr.as_str())
    }

    pub fn symbol_list(&self) -> Option<&SymbolList> {
        self.composite().map(|c| &c.symbol_list)
    }

    pub fn symbol_list_mut(&mut self) -> Option<&mut SymbolList> {
        match self {
            Symbol::BracketExpression(c) | Symbol::SgnExpression(c) => Some(&mut c.symbol_list),
            _ => None,
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.symbol_list() {
            Some(list) => write!(f, "{}({})", self.kind(), list),
            None => write!(f, "{}({})", self.kind(), self.expr()),
        }
    }
}

/// Insertion-ordered sequence of symbols.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolList {
    symbols: Vec<Symbol>,
}

impl SymbolList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, symbol: Symbol) {
        self.symbols.push(symbol);
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Symbol> {
        self.symbols.iter()
    }

    pub fn as_slice(&self) -> &[Symbol] {
        &self.symbols
    }

    /// Visit every symbol depth-first, composites before their contents.
    pub fn walk<F: FnMut(&Symbol)>(&self, visit: &mut F) {
        for symbol in &self.symbols {
            visit(symbol);
            if let Some(nested) = symbol.symbol_list() {
                nested.walk(visit);
            }
        }
    }
}

impl fmt::Display for SymbolList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, symbol) in self.symbols.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", symbol)?;
        }
        write!(f, "]")
    }
}

impl FromIterator<Symbol> for SymbolList {
    fn from_iter<I: IntoIterator<Item = Symbol>>(iter: I) -> Self {
        Self {
            symbols: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a SymbolList {
    type Item = &'a Symbol;
    type IntoIter = std::slice::Iter<'a, Symbol>;

    fn into_iter(self) -> Self::IntoIter {
        self.symbols.iter()
    }
}

impl std::ops::Index<usize> for SymbolList {
    type Output = Symbol;

    fn index(&self, index: usize) -> &Symbol {
        &self.symbols[index]
    }
}
