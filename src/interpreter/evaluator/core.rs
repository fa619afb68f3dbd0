use crate::{
    error::FatalError,
    interpreter::{
        evaluator::{
            binary::{core::eval_binary, structure::apply},
            environment::Environment,
            function::abstraction::abstraction,
        },
        lexer::expression::{Atom, scan},
        parser::shunting_yard::shunting_yard,
        value::core::Value,
    },
    syntax::{Operator, Postfix},
};

/// Result type of every fallible step of evaluation.
pub type EvalResult<T> = Result<T, FatalError>;

/// An entry of the operand stack.
///
/// Identifiers stay references until an operator consumes them, so that
/// assignment can rebind the variable instead of a copy of its value.
#[derive(Debug, Clone)]
enum Operand {
    Value(Value),
    Reference(String),
}

impl TryFrom<Atom> for Operand {
    type Error = FatalError;

    fn try_from(atom: Atom) -> EvalResult<Self> {
        match atom {
            Atom::Int(n) => Ok(Self::Value(Value::Int(n))),
            Atom::Real(r) => Ok(Self::Value(Value::Real(r))),
            Atom::Str(s) => Ok(Self::Value(Value::Str(s))),
            Atom::Identifier(name) => Ok(Self::Reference(name)),
            other @ (Atom::Operator(_) | Atom::Open | Atom::Close | Atom::Whitespace) => {
                Err(FatalError::grammar(format!("'{other}' cannot be used as an operand")))
            },
        }
    }
}

/// The postfix stack machine.
struct Machine<'env> {
    stack: Vec<Operand>,
    env:   &'env mut Environment,
}

impl<'env> Machine<'env> {
    const fn new(env: &'env mut Environment) -> Self {
        Self { stack: Vec::new(),
               env }
    }

    fn pop(&mut self, operator: &str) -> EvalResult<Operand> {
        self.stack
            .pop()
            .ok_or_else(|| FatalError::StackUnderflow { operator: operator.to_owned() })
    }

    fn pop_value(&mut self, operator: &str) -> EvalResult<Value> {
        let operand = self.pop(operator)?;
        self.resolve(operand)
    }

    fn resolve(&self, operand: Operand) -> EvalResult<Value> {
        match operand {
            Operand::Value(value) => Ok(value),
            Operand::Reference(name) => self.env.resolve(&name),
        }
    }

    fn step(&mut self, item: Postfix<Atom>) -> EvalResult<()> {
        let result = match item {
            Postfix::Operand(atom) => Operand::try_from(atom)?,
            Postfix::Operator(op) => self.operator(op)?,
            Postfix::Apply { function, arity } => self.application(function, arity)?,
        };
        self.stack.push(result);
        Ok(())
    }

    fn operator(&mut self, op: Operator) -> EvalResult<Operand> {
        let symbol = op.symbol();

        match op {
            Operator::Assign => {
                let value = self.pop_value(symbol)?;
                match self.pop(symbol)? {
                    Operand::Reference(name) => {
                        tracing::debug!(%name, %value, "assign");
                        self.env.assign(name, value.clone());
                        Ok(Operand::Value(value))
                    },
                    Operand::Value(_) => {
                        Err(FatalError::NotAssignable { operator: symbol.to_owned() })
                    },
                }
            },
            Operator::Abstract => {
                let body = self.pop_value(symbol)?;
                let parameter = match self.pop(symbol)? {
                    Operand::Reference(name) => Value::Str(name),
                    Operand::Value(value) => value,
                };
                Ok(Operand::Value(abstraction(&parameter, &body, self.env)))
            },
            Operator::Sequence => {
                let right = self.pop(symbol)?;
                self.pop(symbol)?;
                Ok(right)
            },
            _ => {
                let right = self.pop_value(symbol)?;
                let left = self.pop_value(symbol)?;
                eval_binary(op, &left, &right).map(Operand::Value)
            },
        }
    }

    /// Applies a juxtaposed head to its arguments one at a time:
    /// `f a b` is `(f $ a) $ b`.
    fn application(&mut self, function: Atom, arity: usize) -> EvalResult<Operand> {
        let name = function.to_string();

        let mut arguments = Vec::with_capacity(arity);
        for _ in 0..arity {
            arguments.push(self.pop_value(&name)?);
        }
        arguments.reverse();

        let head = self.resolve(Operand::try_from(function)?)?;
        let result = arguments.iter().fold(head, |f, argument| apply(&f, argument));
        Ok(Operand::Value(result))
    }

    fn finish(mut self) -> EvalResult<Value> {
        let result = self.stack.pop().ok_or(FatalError::EmptyExpression)?;
        if !self.stack.is_empty() {
            return Err(FatalError::grammar(format!("{} operand(s) are not consumed by any \
                                                    operator",
                                                   self.stack.len())));
        }
        self.resolve(result)
    }
}

/// Runs reordered postfix items against an environment.
///
/// # Errors
/// Fatal errors for stack underflow, assignment to a non-variable, unknown
/// variables, leftover operands and an empty expression.
pub fn execute(postfix: Vec<Postfix<Atom>>, env: &mut Environment) -> EvalResult<Value> {
    let mut machine = Machine::new(env);

    for item in postfix {
        tracing::trace!(?item, depth = machine.stack.len(), "postfix step");
        machine.step(item)?;
    }

    machine.finish()
}

/// Evaluates an expression against a variable environment.
///
/// The text is scanned into atoms, reordered into postfix and executed on an
/// operand stack. Invalid operator combinations, division by zero and list
/// length mismatches produce error values; structural problems abort with a
/// [`FatalError`].
///
/// # Errors
/// Grammar errors from scanning and reordering, plus everything listed on
/// [`execute`].
///
/// # Example
/// ```
/// use ysh::interpreter::{
///     evaluator::{core::evaluate, environment::Environment},
///     value::core::Value,
/// };
///
/// let mut env = Environment::new();
/// assert_eq!(evaluate("(1 + 2 * 3)", &mut env).unwrap(), Value::Int(7));
///
/// env.assign("x", Value::Int(5));
/// assert_eq!(evaluate("(x <- x + 1)", &mut env).unwrap(), Value::Int(6));
/// assert_eq!(env["x"], Value::Int(6));
/// ```
#[tracing::instrument(level = "debug", skip(env), err)]
pub fn evaluate(expression: &str, env: &mut Environment) -> EvalResult<Value> {
    let atoms = scan(expression)?;
    let postfix = shunting_yard(&atoms)?;
    execute(postfix, env)
}
