use thiserror::Error;

use crate::interpreter::value::core::ValueKind;

/// Represents all failures that abort the current evaluation.
///
/// The shell loop catches these at the top of its read-eval cycle, reports
/// the message and moves on to the next line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FatalError {
    /// The input is structurally invalid (brackets, literals, stray symbols).
    #[error("Grammar Error: {details}")]
    Grammar {
        /// What went wrong, including the offending text where known.
        details: String,
    },
    /// A value had a different case than the one requested, or two values of
    /// incompatible cases met in raw equality or ordering.
    #[error("Type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        /// The case that was requested (or the left operand's case).
        expected: ValueKind,
        /// The case that was present (or the right operand's case).
        found:    ValueKind,
    },
    /// A value cannot be converted into the requested case.
    #[error("Invalid conversion from {from} to {to}")]
    InvalidConversion {
        /// The case of the source value.
        from: ValueKind,
        /// The requested case.
        to:   ValueKind,
    },
    /// An operator found fewer operands on the stack than it needs.
    #[error("Stack underflow: ({operator}) is missing an operand")]
    StackUnderflow {
        /// The symbol of the operator (or the applied function name).
        operator: String,
    },
    /// The left operand of an assignment was not a variable.
    #[error("Cannot assign with ({operator}): the left operand is not a variable")]
    NotAssignable {
        /// The assignment operator's symbol.
        operator: String,
    },
    /// Tried to read a name that is neither bound nor a builtin.
    #[error("Unknown variable '{name}'")]
    UnknownVariable {
        /// The name that failed to resolve.
        name: String,
    },
    /// The expression contained no operands at all.
    #[error("Grammar Error: empty expression")]
    EmptyExpression,
}

impl FatalError {
    /// Shorthand for a [`FatalError::Grammar`] with the given details.
    pub fn grammar(details: impl Into<String>) -> Self {
        Self::Grammar { details: details.into() }
    }
}
