use std::str::Lines;

use tracing::{debug, warn};

use crate::interpreter::{
    evaluator::{
        core::{EvalResult, evaluate},
        environment::Environment,
    },
    lexer::line::{TokenKind, tokenize},
    value::core::Value,
};

/// One logical line of a script: physical lines joined at trailing
/// backslashes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogicalLine {
    /// The 1-based number of the first physical line.
    pub number: usize,
    /// The joined text, continuation backslashes removed.
    pub text:   String,
}

/// Iterator over the logical lines of a source text, see [`logical_lines`].
#[derive(Debug, Clone)]
pub struct LogicalLines<'a> {
    lines:  Lines<'a>,
    number: usize,
}

/// Counts the backslashes at the end of `line`.
fn trailing_backslashes(line: &str) -> usize {
    line.bytes().rev().take_while(|&b| b == b'\\').count()
}

impl Iterator for LogicalLines<'_> {
    type Item = LogicalLine;

    fn next(&mut self) -> Option<LogicalLine> {
        let first = self.lines.next()?;
        self.number += 1;

        let mut line = LogicalLine { number: self.number,
                                     text:   String::new(), };
        let mut current = first;

        // An odd count means the last backslash is not itself escaped.
        while trailing_backslashes(current) % 2 == 1 {
            line.text.push_str(&current[..current.len() - 1]);
            match self.lines.next() {
                Some(next) => {
                    self.number += 1;
                    current = next;
                },
                None => return Some(line),
            }
        }

        line.text.push_str(current);
        Some(line)
    }
}

/// Splits a script into logical lines.
///
/// A physical line ending in an odd number of backslashes continues on the
/// next one; the final backslash is dropped and the lines are joined.
///
/// # Example
/// ```
/// use ysh::shell::logical_lines;
///
/// let lines = logical_lines("(1 +\\\n 2)\n(3)").map(|l| l.text).collect::<Vec<_>>();
/// assert_eq!(lines, ["(1 + 2)", "(3)"]);
/// ```
#[must_use]
pub fn logical_lines(source: &str) -> LogicalLines<'_> {
    LogicalLines { lines:  source.lines(),
                   number: 0, }
}

/// Runs one logical line against an environment.
///
/// Every expression token of the line is evaluated in order and its value
/// collected. Comments and blank lines produce nothing. Commands are not
/// executed; their tokens are skipped with a warning.
///
/// # Errors
/// The first fatal error of tokenizing or of any expression. Bindings made
/// by earlier expressions of the line stay in effect.
///
/// # Example
/// ```
/// use ysh::{interpreter::evaluator::environment::Environment, shell::run_line, Value};
///
/// let mut env = Environment::new();
/// let values = run_line("(x <- 2) (x * 21) # answer", &mut env).unwrap();
///
/// assert_eq!(values, [Value::Int(2), Value::Int(42)]);
/// ```
pub fn run_line(line: &str, env: &mut Environment) -> EvalResult<Vec<Value>> {
    let mut values = Vec::new();

    for token in tokenize(line)? {
        match token.kind {
            TokenKind::Expression => values.push(evaluate(token.text, env)?),
            TokenKind::Comment | TokenKind::Empty => debug!(text = token.text, "skipped"),
            TokenKind::Name
            | TokenKind::Operator
            | TokenKind::Option
            | TokenKind::Pack
            | TokenKind::Script
            | TokenKind::String => {
                warn!(kind = ?token.kind, text = token.text, "commands are not executed");
            },
        }
    }

    Ok(values)
}
