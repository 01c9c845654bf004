//! Per-kind recognizers.
//!
//! Each recognizer inspects only the start of its input. `Ok(None)` means the
//! kind declines; errors are reserved for input that starts like the kind but
//! cannot be completed (an unclosed bracket, an unrepresentable number).

use super::parser::Tokenizer;
use super::scanner::Scanner;
use super::symbol::{Composite, Symbol, SymbolKind};
use super::token::Lexeme;
use crate::error::{Result, SymbolError};

/// A matched symbol and the text after it.
type Match<'a> = Option<(Symbol, &'a str)>;

/// Dispatch `text` to the recognizer for `kind`.
pub(crate) fn recognize<'a>(
    kind: SymbolKind,
    text: &'a str,
    tokenizer: &Tokenizer,
) -> Result<Match<'a>> {
    match kind {
        SymbolKind::Addition => Ok(operator(text, Lexeme::Plus, |expr| Symbol::Addition { expr })),
        SymbolKind::Subtraction => {
            Ok(operator(text, Lexeme::Minus, |expr| Symbol::Subtraction { expr }))
        }
        SymbolKind::Multiplication => {
            Ok(operator(text, Lexeme::Star, |expr| Symbol::Multiplication { expr }))
        }
        SymbolKind::X0 => Ok(spike(text, 'x', |expr| Symbol::X0 { expr })),
        SymbolKind::Y0 => Ok(spike(text, 'y', |expr| Symbol::Y0 { expr })),
        SymbolKind::Uk => uk(text),
        SymbolKind::Variable => Ok(variable(text)),
        SymbolKind::Literal => literal(text),
        SymbolKind::BracketExpression | SymbolKind::SgnExpression => {
            composite(kind, text, tokenizer)
        }
    }
}

fn accept<'a>(scan: &Scanner<'a>, build: impl FnOnce(String) -> Symbol) -> Match<'a> {
    let (expr, rest) = scan.split();
    Some((build(expr.to_string()), rest))
}

/// `+`, `-` or `*`: exactly one character.
fn operator<'a>(text: &'a str, lexeme: Lexeme, build: fn(String) -> Symbol) -> Match<'a> {
    let mut scan = Scanner::new(text);
    if !scan.eat(lexeme) {
        return None;
    }
    accept(&scan, build)
}

/// `x0` or `y0`: exactly two characters.
fn spike<'a>(text: &'a str, letter: char, build: fn(String) -> Symbol) -> Match<'a> {
    let mut scan = Scanner::new(text);
    if !(scan.eat(Lexeme::Letter(letter)) && scan.eat(Lexeme::Digit(0))) {
        return None;
    }
    accept(&scan, build)
}

/// `u` followed by at least one digit.
fn uk(text: &str) -> Result<Match<'_>> {
    let mut scan = Scanner::new(text);
    if !scan.eat(Lexeme::Letter('u')) {
        return Ok(None);
    }
    let Some(digits) = scan.eat_digits() else {
        return Ok(None);
    };
    let (expr, rest) = scan.split();
    let decimate_exponent = digits
        .parse::<u32>()
        .map_err(|_| SymbolError::NumberOutOfRange {
            expr: expr.to_string(),
        })?;
    Ok(Some((
        Symbol::Uk {
            expr: expr.to_string(),
            decimate_exponent,
        },
        rest,
    )))
}

/// Traces `x<k>`/`y<k>`, or a bare synaptic variable `w`, `d`, `t`.
fn variable(text: &str) -> Match<'_> {
    let mut scan = Scanner::new(text);
    let letter = scan.eat_with(|l| match l {
        Lexeme::Letter(c @ ('x' | 'y' | 'w' | 'd' | 't')) => Some(c),
        _ => None,
    })?;
    match letter {
        'x' | 'y' => {
            scan.eat_digits()?;
        }
        _ => {
            if matches!(scan.peek(), Some(Lexeme::Digit(_))) {
                return None;
            }
        }
    }
    accept(&scan, |expr| Symbol::Variable { expr })
}

/// `^` with an optionally signed exponent. Returns `(negative, digits)`.
fn power<'a>(scan: &mut Scanner<'a>) -> Option<(bool, &'a str)> {
    let mut attempt = scan.clone();
    if !attempt.eat(Lexeme::Caret) {
        return None;
    }
    let negative = signed(&mut attempt);
    let digits = attempt.eat_digits()?;
    *scan = attempt;
    Some((negative, digits))
}

/// Consume an optional sign, returning whether it was `-`.
fn signed(scan: &mut Scanner<'_>) -> bool {
    scan.eat_with(|l| match l {
        Lexeme::Plus => Some(false),
        Lexeme::Minus => Some(true),
        _ => None,
    })
    .unwrap_or(false)
}

/// `[+-]base`, `[+-]base^[+-]exp` or `[+-]base*radix^[+-]exp`, longest first.
fn literal(text: &str) -> Result<Match<'_>> {
    let mut scan = Scanner::new(text);
    let negative = signed(&mut scan);
    let Some(base) = scan.eat_digits() else {
        return Ok(None);
    };

    let mut suffix = None;
    let mut attempt = scan.clone();
    if attempt.eat(Lexeme::Star) {
        if let Some(radix) = attempt.eat_digits() {
            if let Some(exponent) = power(&mut attempt) {
                suffix = Some((Some(radix), exponent));
                scan = attempt;
            }
        }
    }
    if suffix.is_none() {
        suffix = power(&mut scan).map(|exponent| (None, exponent));
    }

    let (expr, rest) = scan.split();
    let val = fold_literal(expr, negative, base, suffix)?;
    Ok(Some((
        Symbol::Literal {
            expr: expr.to_string(),
            val,
        },
        rest,
    )))
}

/// Fold a literal to an integer.
///
/// Without a radix the signed base is raised to the exponent. Negative
/// exponents divide exactly and truncate toward zero, so `2*2^-3` folds to 0.
fn fold_literal(
    expr: &str,
    negative: bool,
    base: &str,
    suffix: Option<(Option<&str>, (bool, &str))>,
) -> Result<i64> {
    let out_of_range = || SymbolError::NumberOutOfRange {
        expr: expr.to_string(),
    };

    let base = base.parse::<i64>().map_err(|_| out_of_range())?;
    let base = if negative { -base } else { base };
    let Some((radix, (negative_exponent, exponent))) = suffix else {
        return Ok(base);
    };

    let exponent = exponent.parse::<u32>().map_err(|_| out_of_range())?;
    let (coefficient, radix) = match radix {
        Some(radix) => (base, radix.parse::<i64>().map_err(|_| out_of_range())?),
        None => (1, base),
    };
    let scale = radix.checked_pow(exponent).ok_or_else(out_of_range)?;

    if negative_exponent {
        coefficient.checked_div(scale).ok_or_else(out_of_range)
    } else {
        coefficient.checked_mul(scale).ok_or_else(out_of_range)
    }
}

/// `(` ... `)` or `sgn(` ... `)`, with the inner text tokenized recursively.
fn composite<'a>(kind: SymbolKind, text: &'a str, tokenizer: &Tokenizer) -> Result<Match<'a>> {
    let mut scan = Scanner::new(text);
    if kind == SymbolKind::SgnExpression
        && !['s', 'g', 'n'].into_iter().all(|c| scan.eat(Lexeme::Letter(c)))
    {
        return Ok(None);
    }
    if !scan.eat(Lexeme::LParen) {
        return Ok(None);
    }

    let open = scan.offset();
    if !scan.skip_to_close() {
        return Err(SymbolError::UnclosedExpression {
            kind: kind.name(),
            expr: text.to_string(),
        });
    }
    let (expr, rest) = scan.split();
    let sub_expr = &expr[open..expr.len() - 1];
    let symbol_list = tokenizer.nested()?.tokenize(sub_expr)?;

    let composite = Composite {
        expr: expr.to_string(),
        sub_expr: sub_expr.to_string(),
        symbol_list,
    };
    let symbol = match kind {
        SymbolKind::SgnExpression => Symbol::SgnExpression(composite),
        _ => Symbol::BracketExpression(composite),
    };
    Ok(Some((symbol, rest)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TokenizerConfig;

    fn find(kind: SymbolKind, text: &str) -> (Option<Symbol>, &str) {
        kind.find(text).unwrap()
    }

    fn assert_declines(kind: SymbolKind, text: &str) {
        let (symbol, rest) = find(kind, text);
        assert!(symbol.is_none(), "{} should not match {:?}", kind, text);
        assert!(std::ptr::eq(rest, text), "{} consumed part of {:?}", kind, text);
    }

    fn assert_exact(kind: SymbolKind, text: &str) -> Symbol {
        let (symbol, rest) = find(kind, text);
        let symbol = symbol.unwrap_or_else(|| panic!("{} should match {:?}", kind, text));
        assert_eq!(symbol.kind(), kind);
        assert_eq!(symbol.expr(), text);
        assert_eq!(rest, "");
        symbol
    }

    #[test]
    fn test_every_kind_declines_unrelated_text() {
        for kind in SymbolKind::PRIORITY {
            assert_declines(kind, "n");
            assert_declines(kind, "");
            assert_declines(kind, " w");
        }
    }

    #[test]
    fn test_operators() {
        assert_exact(SymbolKind::Addition, "+");
        assert_exact(SymbolKind::Subtraction, "-");
        assert_exact(SymbolKind::Multiplication, "*");

        let (symbol, rest) = find(SymbolKind::Subtraction, "-1");
        assert_eq!(symbol.unwrap().expr(), "-");
        assert_eq!(rest, "1");
        assert_declines(SymbolKind::Addition, "-");
    }

    #[test]
    fn test_spikes() {
        assert_exact(SymbolKind::X0, "x0");
        assert_exact(SymbolKind::Y0, "y0");
        assert_declines(SymbolKind::X0, "y0");
        assert_declines(SymbolKind::X0, "x1");
        assert_declines(SymbolKind::Y0, "y");

        let (symbol, rest) = find(SymbolKind::X0, "x0*y1");
        assert_eq!(symbol.unwrap().expr(), "x0");
        assert_eq!(rest, "*y1");
    }

    #[test]
    fn test_uk() {
        let symbol = assert_exact(SymbolKind::Uk, "u5");
        assert_eq!(symbol.decimate_exponent(), Some(5));

        let symbol = assert_exact(SymbolKind::Uk, "u12");
        assert_eq!(symbol.decimate_exponent(), Some(12));
    }

    #[test]
    fn test_bare_u_is_not_uk() {
        assert_declines(SymbolKind::Uk, "u");
        assert_declines(SymbolKind::Uk, "u*2");
    }

    #[test]
    fn test_uk_exponent_out_of_range() {
        assert!(matches!(
            SymbolKind::Uk.find("u99999999999"),
            Err(SymbolError::NumberOutOfRange { .. })
        ));
    }

    #[test]
    fn test_trace_variables() {
        for text in ["x1", "x2", "y1", "y2", "y3", "x10"] {
            assert_exact(SymbolKind::Variable, text);
        }
        assert_declines(SymbolKind::Variable, "x");
        assert_declines(SymbolKind::Variable, "y+1");
    }

    #[test]
    fn test_synaptic_variables() {
        for text in ["w", "d", "t"] {
            assert_exact(SymbolKind::Variable, text);
        }
        let (symbol, rest) = find(SymbolKind::Variable, "w - 2");
        assert_eq!(symbol.unwrap().expr(), "w");
        assert_eq!(rest, " - 2");
        assert_declines(SymbolKind::Variable, "w2");
        assert_declines(SymbolKind::Variable, "u1");
    }

    #[test]
    fn test_literal_plain() {
        for (text, val) in [("1", 1), ("+2", 2), ("-3", -3), ("042", 42)] {
            assert_eq!(assert_exact(SymbolKind::Literal, text).val(), Some(val));
        }
    }

    #[test]
    fn test_literal_with_radix() {
        for (text, val) in [("1*2^3", 8), ("-3*2^+3", -24), ("+2*2^-3", 0), ("-3*2^-1", -1)] {
            assert_eq!(
                assert_exact(SymbolKind::Literal, text).val(),
                Some(val),
                "{}",
                text
            );
        }
    }

    #[test]
    fn test_literal_power_only() {
        for (text, val) in [("2^3", 8), ("+2^-3", 0), ("-2^+3", -8), ("-1^-3", -1), ("7^0", 1)] {
            assert_eq!(
                assert_exact(SymbolKind::Literal, text).val(),
                Some(val),
                "{}",
                text
            );
        }
    }

    #[test]
    fn test_literal_stops_before_dangling_suffix() {
        let (symbol, rest) = find(SymbolKind::Literal, "1*2*x1");
        assert_eq!(symbol.unwrap().expr(), "1");
        assert_eq!(rest, "*2*x1");

        let (symbol, rest) = find(SymbolKind::Literal, "2^-1*y1");
        assert_eq!(symbol.unwrap().expr(), "2^-1");
        assert_eq!(rest, "*y1");

        let (symbol, rest) = find(SymbolKind::Literal, "3^x");
        assert_eq!(symbol.unwrap().val(), Some(3));
        assert_eq!(rest, "^x");
    }

    #[test]
    fn test_literal_sign_without_digits() {
        assert_declines(SymbolKind::Literal, "-");
        assert_declines(SymbolKind::Literal, "+w");
    }

    #[test]
    fn test_literal_out_of_range() {
        for text in ["99999999999999999999", "2^64", "0*0^-1", "2*2^99999999999"] {
            assert!(
                matches!(
                    SymbolKind::Literal.find(text),
                    Err(SymbolError::NumberOutOfRange { .. })
                ),
                "{}",
                text
            );
        }
    }

    #[test]
    fn test_bracket_expression() {
        let symbol = assert_exact(SymbolKind::BracketExpression, "(w + 3)");
        assert_eq!(symbol.sub_expr(), Some("w + 3"));
        assert_eq!(
            symbol.to_string(),
            "BracketExpression([Variable(w), Addition(+), Literal(3)])"
        );

        let (symbol, rest) = find(SymbolKind::BracketExpression, "(w - 2) * x1");
        assert_eq!(symbol.unwrap().sub_expr(), Some("w - 2"));
        assert_eq!(rest, " * x1");
    }

    #[test]
    fn test_sgn_expression() {
        let symbol = assert_exact(SymbolKind::SgnExpression, "sgn(w + 3)");
        assert_eq!(symbol.sub_expr(), Some("w + 3"));
        assert_declines(SymbolKind::SgnExpression, "(w + 3)");
        assert_declines(SymbolKind::SgnExpression, "sg(w)");
        assert_declines(SymbolKind::SgnExpression, "sgn (w)");
    }

    #[test]
    fn test_missing_closing_bracket() {
        assert_eq!(
            SymbolKind::BracketExpression.find("(w + 3"),
            Err(SymbolError::UnclosedExpression {
                kind: "BracketExpression",
                expr: "(w + 3".to_string(),
            })
        );
        assert!(matches!(
            SymbolKind::SgnExpression.find("sgn(w + 3"),
            Err(SymbolError::UnclosedExpression {
                kind: "SgnExpression",
                ..
            })
        ));
    }

    #[test]
    fn test_nested_brackets_match_outermost() {
        let symbol = assert_exact(SymbolKind::BracketExpression, "((w - 2) * x1)");
        assert_eq!(symbol.sub_expr(), Some("(w - 2) * x1"));
        assert_eq!(
            symbol.to_string(),
            "BracketExpression([BracketExpression([Variable(w), Subtraction(-), Literal(2)]), \
             Multiplication(*), Variable(x1)])"
        );
    }

    #[test]
    fn test_empty_brackets() {
        let symbol = assert_exact(SymbolKind::BracketExpression, "()");
        assert_eq!(symbol.sub_expr(), Some(""));
        assert!(symbol.symbol_list().unwrap().is_empty());
    }

    #[test]
    fn test_inner_error_propagates() {
        assert!(matches!(
            SymbolKind::BracketExpression.find("(w / 2)"),
            Err(SymbolError::UnrecognizedToken { remaining }) if remaining == "/ 2"
        ));
    }

    #[test]
    fn test_depth_limit_applies_to_composites() {
        let tokenizer = Tokenizer::new(TokenizerConfig::default().with_max_depth(1));
        assert!(tokenizer.find(SymbolKind::BracketExpression, "(w)").is_ok());
        assert_eq!(
            tokenizer.find(SymbolKind::BracketExpression, "((w))"),
            Err(SymbolError::NestingTooDeep { limit: 1 })
        );
    }
}
