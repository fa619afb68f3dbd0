/// Fatal errors.
///
/// Defines the failures that abort an evaluation entirely: unbalanced
/// brackets, malformed literals, stack underflow, assignment to something
/// that is not a variable, and type mismatches in raw equality or ordering.
/// These cannot be represented as a sensible value and travel through
/// `Result` instead.
pub mod fatal_error;
/// Value-level errors.
///
/// Builders for `Value::Error` payloads. An error value is an ordinary value:
/// it can be stored, printed and passed on, and it is what invalid operator
/// combinations, division by zero and list length mismatches produce.
pub mod value_error;

pub use fatal_error::FatalError;
pub use value_error::{arithmetic_error, operation_error, standard_error};
