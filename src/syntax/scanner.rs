//! Cursor over the lexemes at the start of a candidate text.

use super::token::Lexeme;
use logos::{Lexer, Logos};

/// Scanner state.
///
/// Cloning is cheap and serves as a checkpoint: try an optional suffix on a
/// clone and assign it back only if the suffix matched.
#[derive(Clone)]
pub(crate) struct Scanner<'a> {
    lexer: Lexer<'a, Lexeme>,
}

impl<'a> Scanner<'a> {
    /// Create a new scanner positioned at the start of `text`.
    pub fn new(text: &'a str) -> Self {
        Self {
            lexer: Lexeme::lexer(text),
        }
    }

    /// Peek at the next lexeme without consuming it.
    /// Unknown characters read as `None`.
    pub fn peek(&self) -> Option<Lexeme> {
        self.lexer.clone().next().and_then(Result::ok)
    }

    /// Consume the next lexeme if it equals `expected`.
    pub fn eat(&mut self, expected: Lexeme) -> bool {
        self.eat_with(|lexeme| (lexeme == expected).then_some(())).is_some()
    }

    /// Consume the next lexeme if `accept` maps it to a value.
    pub fn eat_with<T>(&mut self, accept: impl FnOnce(Lexeme) -> Option<T>) -> Option<T> {
        let value = accept(self.peek()?)?;
        self.lexer.next();
        Some(value)
    }

    /// Consume the longest run of adjacent digits, returning its text.
    pub fn eat_digits(&mut self) -> Option<&'a str> {
        let start = self.offset();
        while self.eat_with(|l| matches!(l, Lexeme::Digit(_)).then_some(())).is_some() {}
        let end = self.offset();
        (end > start).then(|| &self.lexer.source()[start..end])
    }

    /// Skip forward past the `)` that balances an already consumed `(`.
    ///
    /// Returns `false` if the text ends first. Characters the lexer does not
    /// know are skipped; they are reported when the inner text is tokenized.
    pub fn skip_to_close(&mut self) -> bool {
        let mut depth = 1usize;
        for lexeme in self.lexer.by_ref() {
            match lexeme {
                Ok(Lexeme::LParen) => depth += 1,
                Ok(Lexeme::RParen) => {
                    depth -= 1;
                    if depth == 0 {
                        return true;
                    }
                }
                _ => {}
            }
        }
        false
    }

    /// Byte offset of everything consumed so far.
    pub fn offset(&self) -> usize {
        self.lexer.span().end
    }

    /// Split the source into the consumed prefix and the untouched rest.
    pub fn split(&self) -> (&'a str, &'a str) {
        self.lexer.source().split_at(self.offset())
    }
}
