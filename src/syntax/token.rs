//! Lexeme definitions for the learning-rule tokenizer.
//!
//! Uses the `logos` crate for fast lexing. Lexemes are deliberately finer
//! than symbols: every symbol kind is recognized by a small recursive-descent
//! routine over these character classes (see `matcher`).

use logos::Logos;

/// Character-level lexemes of the equation language.
///
/// Whitespace is kept as a lexeme rather than skipped so that a symbol can
/// never be assembled across a gap (`x 1` is not the trace `x1`).
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lexeme {
    // Operators
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("^")]
    Caret,

    // Brackets
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,

    /// A single ASCII letter or underscore
    #[regex(r"[a-zA-Z_]", |lex| lex.slice().chars().next())]
    Letter(char),

    /// A single decimal digit, carrying its value
    #[regex(r"[0-9]", |lex| lex.slice().as_bytes()[0] - b'0')]
    Digit(u8),

    #[regex(r"[ \t\r\n]+")]
    Space,
}
