use std::fmt;

use logos::Logos;

use crate::{error::FatalError, interpreter::evaluator::core::EvalResult, syntax::Operator};

/// Represents one atom of an expression.
///
/// Atoms are what the reorderer shuffles into postfix order: literals and
/// identifiers are operands, operators and parentheses are structure.
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Atom {
    /// Real literals, such as `3.14`, `2.0` or `2.1e-10`.
    #[regex(r"[0-9]+\.[0-9]+([eE][+-]?[0-9]+)?", parse_real)]
    #[regex(r"[0-9]+[eE][+-]?[0-9]+", parse_real)]
    Real(f64),
    /// Integer literals, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Int(i64),
    /// String literals, such as `"x * 2"`. The payload is unescaped.
    #[regex(r#""([^"\\]|\\.)*""#, parse_string)]
    Str(String),
    /// Names of variables and functions, such as `x` or `sin`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_owned())]
    Identifier(String),
    /// Any infix operator from the precedence table.
    #[regex(r"<=>|<<|>>|<-|->|<=|>=|!=|\+\+|&&|\|\||[$:^*/%+<>=&|,;-]",
            |lex| Operator::from_symbol(lex.slice()))]
    Operator(Operator),
    /// `(`
    #[token("(")]
    Open,
    /// `)`
    #[token(")")]
    Close,
    /// Whitespace between atoms.
    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    Whitespace,
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Real(r) => write!(f, "{r:?}"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Str(s) => write!(f, "{s:?}"),
            Self::Identifier(name) => f.write_str(name),
            Self::Operator(op) => write!(f, "{op}"),
            Self::Open => f.write_str("("),
            Self::Close => f.write_str(")"),
            Self::Whitespace => f.write_str(" "),
        }
    }
}

/// Parses a real literal, rejecting values that overflow to infinity.
fn parse_real(lex: &logos::Lexer<Atom>) -> Option<f64> {
    lex.slice().parse().ok().filter(|r: &f64| r.is_finite())
}

/// Parses an integer literal. Literals that do not fit in `i64` fail.
fn parse_integer(lex: &logos::Lexer<Atom>) -> Option<i64> {
    lex.slice().parse().ok()
}

/// Strips the quotes of a string literal and resolves its escapes.
///
/// `\n`, `\t` and `\r` stand for control characters; any other escaped
/// character stands for itself.
fn parse_string(lex: &logos::Lexer<Atom>) -> String {
    let slice = lex.slice();
    let inner = &slice[1..slice.len() - 1];

    let mut text = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            text.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => text.push('\n'),
            Some('t') => text.push('\t'),
            Some('r') => text.push('\r'),
            Some(other) => text.push(other),
            None => {},
        }
    }
    text
}

/// Scans an expression into atoms.
///
/// Numeric literals are unsigned and there is no prefix minus: `-` always
/// scans as the binary operator, so `(-3)` leaves `-` short of an operand
/// when evaluated. Negative numbers are written `0 - 3`.
///
/// # Errors
/// `FatalError::Grammar` for characters that start no atom, integer
/// literals beyond the `i64` range and real literals that overflow.
///
/// # Example
/// ```
/// use ysh::{interpreter::lexer::expression::{Atom, scan}, syntax::Operator};
///
/// let atoms = scan("x <- 1.5").unwrap();
///
/// assert_eq!(atoms,
///            vec![Atom::Identifier("x".into()),
///                 Atom::Operator(Operator::Assign),
///                 Atom::Real(1.5)]);
/// ```
pub fn scan(source: &str) -> EvalResult<Vec<Atom>> {
    let mut lexer = Atom::lexer(source);
    let mut atoms = Vec::new();

    while let Some(atom) = lexer.next() {
        match atom {
            Ok(atom) => atoms.push(atom),
            Err(()) => {
                return Err(FatalError::grammar(format!("unexpected '{}' at column {}",
                                                       lexer.slice(),
                                                       lexer.span().start + 1)));
            },
        }
    }

    Ok(atoms)
}
