use std::iter::FusedIterator;

use crate::{error::FatalError, interpreter::evaluator::core::EvalResult};

/// The kind of a line token, decided by its leading character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// `#` up to the end of the line.
    Comment,
    /// The only token of a blank line.
    Empty,
    /// A parenthesized span, evaluated as an expression.
    Expression,
    /// Any other word: a command or an argument.
    Name,
    /// A word starting with `<`, `>`, `|` or `&`.
    Operator,
    /// A word starting with `-`.
    Option,
    /// A bracketed span: an option name followed by its bound arguments.
    Pack,
    /// A braced span.
    Script,
    /// A double-quoted string, quotes and escapes kept as written.
    String,
}

/// One token of a line: its kind and the exact text it spans.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    /// What the token is.
    pub kind: TokenKind,
    /// The source text, delimiters included.
    pub text: &'a str,
}

/// Lazily scans a line, one token per call to `next`.
///
/// The scan runs left to right once. After a grammar error the iterator is
/// exhausted.
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    line:     &'a str,
    position: usize,
    state:    State,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Fresh,
    Scanning,
    Done,
}

/// Characters that start a new token even without whitespace in front.
const fn opens_token(c: char) -> bool {
    matches!(c, '#' | '(' | '[' | '{' | '"')
}

const fn closer_of(open: char) -> Option<char> {
    match open {
        '(' => Some(')'),
        '[' => Some(']'),
        '{' => Some('}'),
        '"' => Some('"'),
        _ => None,
    }
}

const fn classify(first: char) -> TokenKind {
    match first {
        '#' => TokenKind::Comment,
        '(' => TokenKind::Expression,
        '-' => TokenKind::Option,
        '[' => TokenKind::Pack,
        '{' => TokenKind::Script,
        '"' => TokenKind::String,
        '<' | '>' | '|' | '&' => TokenKind::Operator,
        _ => TokenKind::Name,
    }
}

impl<'a> Tokens<'a> {
    /// Prepares a scan of `line`. Nothing is read until the first `next`.
    #[must_use]
    pub const fn new(line: &'a str) -> Self {
        Self { line,
               position: 0,
               state: State::Fresh }
    }

    fn rest(&self) -> &'a str {
        let line = self.line;
        &line[self.position..]
    }

    /// Scans a bracketed or quoted span starting at the current position and
    /// returns the byte offset just past its closing delimiter.
    fn scan_delimited(&self) -> EvalResult<usize> {
        let mut stack: Vec<char> = Vec::new();
        let mut chars = self.rest().char_indices();

        while let Some((offset, c)) = chars.next() {
            if c == '\\' {
                if chars.next().is_none() {
                    return Err(FatalError::grammar("line ends inside an escape sequence"));
                }
                continue;
            }

            if stack.last() == Some(&'"') {
                if c == '"' {
                    stack.pop();
                }
            } else if let Some(close) = closer_of(c) {
                stack.push(close);
            } else if matches!(c, ')' | ']' | '}') {
                match stack.pop() {
                    Some(expected) if expected == c => {},
                    Some(expected) => {
                        return Err(FatalError::grammar(format!("expected '{expected}' but found \
                                                                '{c}' at column {}",
                                                               self.position + offset + 1)));
                    },
                    None => {
                        return Err(FatalError::grammar(format!("unmatched '{c}' at column {}",
                                                               self.position + offset + 1)));
                    },
                }
            }

            if stack.is_empty() {
                return Ok(self.position + offset + c.len_utf8());
            }
        }

        let close = stack.last().copied().unwrap_or('"');
        Err(FatalError::grammar(format!("missing '{close}' before the end of the line")))
    }

    /// Scans a plain word and returns the byte offset just past it.
    fn scan_word(&self) -> EvalResult<usize> {
        let mut chars = self.rest().char_indices();

        while let Some((offset, c)) = chars.next() {
            if offset > 0 && (c.is_whitespace() || opens_token(c)) {
                return Ok(self.position + offset);
            }
            match c {
                '\\' => {
                    if chars.next().is_none() {
                        return Err(FatalError::grammar("line ends inside an escape sequence"));
                    }
                },
                ')' | ']' | '}' => {
                    return Err(FatalError::grammar(format!("unmatched '{c}' at column {}",
                                                           self.position + offset + 1)));
                },
                _ => {},
            }
        }

        Ok(self.line.len())
    }

    fn scan(&mut self) -> Option<EvalResult<Token<'a>>> {
        let skipped = self.rest().len() - self.rest().trim_start().len();
        self.position += skipped;

        let first = self.rest().chars().next()?;
        let end = match first {
            '#' => Ok(self.line.len()),
            '(' | '[' | '{' | '"' => self.scan_delimited(),
            _ => self.scan_word(),
        };

        let end = match end {
            Ok(end) => end,
            Err(error) => return Some(Err(error)),
        };

        let line = self.line;
        let token = Token { kind: classify(first),
                            text: &line[self.position..end], };
        self.position = end;
        Some(Ok(token))
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = EvalResult<Token<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.state {
            State::Done => return None,
            State::Fresh => {
                self.state = State::Scanning;
                if self.line.trim().is_empty() {
                    self.state = State::Done;
                    return Some(Ok(Token { kind: TokenKind::Empty,
                                           text: self.line, }));
                }
            },
            State::Scanning => {},
        }

        let item = self.scan();
        match &item {
            Some(Ok(token)) => tracing::trace!(kind = ?token.kind, text = token.text, "token"),
            Some(Err(_)) | None => self.state = State::Done,
        }
        item
    }
}

impl FusedIterator for Tokens<'_> {}

/// Tokenizes a whole line.
///
/// # Errors
/// `FatalError::Grammar` when brackets are unbalanced or mismatched, or the
/// line ends inside a string or an escape.
///
/// # Example
/// ```
/// use ysh::interpreter::lexer::line::{TokenKind, tokenize};
///
/// let tokens = tokenize("echo\"123\"").unwrap();
///
/// assert_eq!(tokens.len(), 2);
/// assert_eq!((tokens[0].kind, tokens[0].text), (TokenKind::Name, "echo"));
/// assert_eq!((tokens[1].kind, tokens[1].text), (TokenKind::String, "\"123\""));
/// ```
pub fn tokenize(line: &str) -> EvalResult<Vec<Token<'_>>> {
    Tokens::new(line).collect()
}
