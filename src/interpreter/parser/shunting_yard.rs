use crate::{
    error::FatalError,
    interpreter::{evaluator::core::EvalResult, lexer::expression::Atom},
    syntax::{Associativity, Operator, Postfix},
};

/// The role a token plays during reordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Class {
    /// An infix operator from the precedence table.
    Operator(Operator),
    /// `(`
    Open,
    /// `)`
    Close,
    /// Anything else: literals, names, arguments.
    Operand,
}

/// A token the reorderer can classify.
pub trait Symbol {
    /// Tells the reorderer how to treat this token.
    fn class(&self) -> Class;
}

impl Symbol for &str {
    fn class(&self) -> Class {
        match *self {
            "(" => Class::Open,
            ")" => Class::Close,
            text => Operator::from_symbol(text).map_or(Class::Operand, Class::Operator),
        }
    }
}

impl Symbol for Atom {
    fn class(&self) -> Class {
        match self {
            Self::Operator(op) => Class::Operator(*op),
            Self::Open => Class::Open,
            Self::Close => Class::Close,
            Self::Real(_)
            | Self::Int(_)
            | Self::Str(_)
            | Self::Identifier(_)
            | Self::Whitespace => Class::Operand,
        }
    }
}

/// An entry of the operator stack.
#[derive(Debug, Clone, Copy)]
enum Pending {
    Operator(Operator),
    Open,
}

/// Reordering state.
///
/// `chains` holds one entry per open parenthesis group (plus the outermost
/// one). An entry is `Some(depth)` once the group starts with an
/// application: from then on every operator of the group pops the
/// operators above `depth`, so the rest of the group reads left to right.
struct ShuntingYard<T> {
    output: Vec<Postfix<T>>,
    stack:  Vec<Pending>,
    chains: Vec<Option<usize>>,
}

impl<T: Symbol + Clone> ShuntingYard<T> {
    fn new() -> Self {
        Self { output: Vec::new(),
               stack:  Vec::new(),
               chains: vec![None], }
    }

    fn run(mut self, tokens: &[T]) -> EvalResult<Vec<Postfix<T>>> {
        let mut index = 0;
        let mut at_group_start = true;

        while let Some(token) = tokens.get(index) {
            index += 1;
            match token.class() {
                Class::Operator(op) => {
                    self.push_operator(op);
                    at_group_start = op == Operator::Sequence;
                },
                Class::Open => {
                    self.stack.push(Pending::Open);
                    self.chains.push(None);
                    at_group_start = true;
                },
                Class::Close => {
                    self.close_group()?;
                    at_group_start = false;
                },
                Class::Operand => {
                    let (arity, next) = self.emit_arguments(tokens, index)?;
                    index = next;
                    if arity == 0 {
                        self.output.push(Postfix::Operand(token.clone()));
                    } else {
                        self.output.push(Postfix::Apply { function: token.clone(),
                                                          arity });
                        if at_group_start && let Some(chain) = self.chains.last_mut() {
                            *chain = Some(self.stack.len());
                        }
                    }
                    at_group_start = false;
                },
            }
        }

        while let Some(pending) = self.stack.pop() {
            match pending {
                Pending::Operator(op) => self.output.push(Postfix::Operator(op)),
                Pending::Open => return Err(FatalError::grammar("missing ')'")),
            }
        }

        Ok(self.output)
    }

    fn push_operator(&mut self, incoming: Operator) {
        let floor = self.chains.last().copied().flatten();

        while let Some(&Pending::Operator(top)) = self.stack.last() {
            let chained = floor.is_some_and(|depth| self.stack.len() > depth);
            let outranks = match incoming.associativity() {
                Associativity::Left => top.stack_precedence() >= incoming.precedence(),
                Associativity::Right => top.stack_precedence() > incoming.precedence(),
            };
            if !(chained || outranks) {
                break;
            }
            self.stack.pop();
            self.output.push(Postfix::Operator(top));
        }

        if incoming == Operator::Sequence
           && let Some(chain) = self.chains.last_mut()
        {
            *chain = None;
        }
        self.stack.push(Pending::Operator(incoming));
    }

    fn close_group(&mut self) -> EvalResult<()> {
        loop {
            match self.stack.pop() {
                Some(Pending::Operator(op)) => self.output.push(Postfix::Operator(op)),
                Some(Pending::Open) => break,
                None => return Err(FatalError::grammar("unmatched ')'")),
            }
        }
        self.chains.pop();
        Ok(())
    }

    /// Emits the argument run that directly follows a juxtaposition head.
    ///
    /// Plain operands are arguments as they are; a parenthesized group is
    /// reordered on its own and counts as one argument. Returns the number
    /// of arguments and the index of the first token after them.
    fn emit_arguments(&mut self, tokens: &[T], start: usize) -> EvalResult<(usize, usize)> {
        let mut index = start;
        let mut arity = 0;

        while let Some(token) = tokens.get(index) {
            match token.class() {
                Class::Operand => {
                    self.output.push(Postfix::Operand(token.clone()));
                    index += 1;
                },
                Class::Open => {
                    let close = matching_close(tokens, index)?;
                    let inner = &tokens[index + 1..close];
                    if inner.is_empty() {
                        return Err(FatalError::grammar("empty argument group '()'"));
                    }
                    self.output.extend(shunting_yard(inner)?);
                    index = close + 1;
                },
                Class::Operator(_) | Class::Close => break,
            }
            arity += 1;
        }

        Ok((arity, index))
    }
}

/// Finds the `)` matching the `(` at `open`.
fn matching_close<T: Symbol>(tokens: &[T], open: usize) -> EvalResult<usize> {
    let mut depth = 0usize;
    for (index, token) in tokens.iter().enumerate().skip(open) {
        match token.class() {
            Class::Open => depth += 1,
            Class::Close => {
                depth -= 1;
                if depth == 0 {
                    return Ok(index);
                }
            },
            Class::Operator(_) | Class::Operand => {},
        }
    }
    Err(FatalError::grammar("missing ')'"))
}

/// Reorders infix tokens into structured postfix items.
///
/// Operators follow the precedence table of [`Operator`]: a left
/// associative operator pops stacked operators of greater or equal
/// precedence, a right associative one pops those of strictly greater
/// precedence. Parentheses group and are dropped.
///
/// A token followed directly by further operands is an application: the
/// arguments are emitted first and the head becomes a [`Postfix::Apply`].
/// When an application opens an expression or a parenthesized group, the
/// operators after it in that group apply left to right, the way shell
/// commands read: `magic 1 2 + 4 * 5` is `((magic 1 2) + 4) * 5`. An
/// application elsewhere is an ordinary operand: `1 + 2 * sin 3` is
/// `1 + (2 * (sin 3))`.
///
/// # Errors
/// `FatalError::Grammar` for unbalanced parentheses or an empty argument
/// group.
pub fn shunting_yard<T: Symbol + Clone>(tokens: &[T]) -> EvalResult<Vec<Postfix<T>>> {
    ShuntingYard::new().run(tokens)
}

/// Reorders infix text tokens into postfix text tokens.
///
/// Applications render as their head token, after their arguments.
///
/// # Errors
/// `FatalError::Grammar` for unbalanced parentheses or an empty argument
/// group.
///
/// # Example
/// ```
/// use ysh::interpreter::parser::shunting_yard::reorder;
///
/// assert_eq!(reorder(&["1", "+", "2", "*", "sin", "3"]).unwrap(),
///            ["1", "2", "3", "sin", "*", "+"]);
/// assert_eq!(reorder(&["magic", "1", "2", "3", "+", "4", "*", "5"]).unwrap(),
///            ["1", "2", "3", "magic", "4", "+", "5", "*"]);
/// ```
pub fn reorder<S: AsRef<str>>(tokens: &[S]) -> EvalResult<Vec<String>> {
    let symbols = tokens.iter().map(AsRef::as_ref).collect::<Vec<&str>>();

    let postfix = shunting_yard(&symbols)?;
    Ok(postfix.into_iter()
              .map(|item| match item {
                  Postfix::Operand(text) | Postfix::Apply { function: text, .. } => text.to_owned(),
                  Postfix::Operator(op) => op.symbol().to_owned(),
              })
              .collect())
}
