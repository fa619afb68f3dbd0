use crate::{
    error::{FatalError, operation_error, value_error::UNSUPPORTED},
    interpreter::{
        evaluator::{
            binary::{
                arithmetic::{add, div, mul, rem, sub},
                comparison::{compare, relation},
                logic::{and, bit_and, bit_or, or, shl, shr},
                power::pow,
                structure::{apply, concat, cons, zip},
            },
            core::EvalResult,
        },
        value::core::Value,
    },
    syntax::Operator,
};

/// Signature shared by the value-level binary operators.
pub type BinaryFn = fn(&Value, &Value) -> Value;

/// Evaluates a binary operator on two values.
///
/// Arithmetic, logic and structural operators always succeed with a value,
/// possibly an error value. Comparisons may fail fatally when nested
/// elements cannot be compared. `;` yields its right operand.
///
/// # Errors
/// - `FatalError::TypeMismatch` from comparisons of incomparable elements.
/// - `FatalError::Grammar` for `<-` and `->`, which need the evaluator's
///   variable environment.
///
/// # Example
/// ```
/// use ysh::{
///     interpreter::{evaluator::binary::core::eval_binary, value::core::Value},
///     syntax::Operator,
/// };
///
/// let r = eval_binary(Operator::Add, &Value::Int(3), &Value::Int(4)).unwrap();
/// assert_eq!(r, Value::Int(7));
/// ```
pub fn eval_binary(op: Operator, left: &Value, right: &Value) -> EvalResult<Value> {
    use Operator::{
        Abstract, Add, And, Apply, Assign, BitAnd, BitOr, Compare, Concat, Cons, Div, Equal,
        Greater, GreaterEqual, Less, LessEqual, Mul, NotEqual, Or, Pow, Rem, Sequence, Shl, Shr,
        Sub, Zip,
    };

    let function: BinaryFn = match op {
        Add => add,
        Sub => sub,
        Mul => mul,
        Div => div,
        Rem => rem,
        Pow => pow,
        BitAnd => bit_and,
        BitOr => bit_or,
        Shl => shl,
        Shr => shr,
        And => and,
        Or => or,
        Concat => concat,
        Cons => cons,
        Zip => zip,
        Apply => apply,
        Less | Greater | Equal | NotEqual | LessEqual | GreaterEqual => {
            return relation(op, left, right);
        },
        Compare => return compare(left, right),
        Sequence => return Ok(right.clone()),
        Assign | Abstract => {
            return Err(FatalError::grammar(format!("({op}) needs a variable environment")));
        },
    };

    Ok(function(left, right))
}

/// Returns the first error operand, left before right.
///
/// Error values pass through arithmetic untouched instead of being buried
/// in a new operation error.
pub(crate) fn propagated(left: &Value, right: &Value) -> Option<Value> {
    [left, right].into_iter().find(|value| value.is_error()).cloned()
}

/// The uniform "operation not supported" error for a binary operator.
pub(crate) fn unsupported(op: Operator, left: &Value, right: &Value) -> Value {
    operation_error(left.type_name(), &[right.type_name()], op.symbol(), UNSUPPORTED)
}
