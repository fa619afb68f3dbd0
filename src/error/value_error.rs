use crate::interpreter::value::core::Value;

/// Detail used by operation errors when the caller has nothing more specific.
pub const UNSUPPORTED: &str = "operation not supported";

/// Wraps a message into an error value without any prefix.
///
/// # Example
/// ```
/// use ysh::{error::standard_error, interpreter::value::core::Value};
///
/// assert_eq!(standard_error("boom").as_error(), Some("boom"));
/// ```
pub fn standard_error(message: impl Into<String>) -> Value {
    Value::Error(message.into())
}

/// Builds an arithmetic error value such as `Division by zero`.
pub fn arithmetic_error(message: impl Into<String>) -> Value {
    standard_error(message)
}

/// Builds the uniform "operation not supported" diagnostic.
///
/// The message names the primary object's type (the left operand, or the
/// function), the operator in parentheses and, when present, the types of
/// the remaining arguments.
///
/// # Parameters
/// - `primary`: Type name of the left operand.
/// - `arguments`: Type names of the other operands, possibly empty.
/// - `operator`: Operator symbol without parentheses.
/// - `detail`: Extra information; [`UNSUPPORTED`] when there is none.
///
/// # Example
/// ```
/// use ysh::error::{operation_error, value_error::UNSUPPORTED};
///
/// let error = operation_error("Int", &["Str"], ":", UNSUPPORTED);
/// assert_eq!(error.as_error(),
///            Some("Operation Error: operation not supported\n\twith primary object's \
///                  type: Int\n\tOperator: (:)\n\tArguments: Str"));
/// ```
pub fn operation_error<S: AsRef<str>>(primary: &str,
                                      arguments: &[S],
                                      operator: &str,
                                      detail: &str)
                                      -> Value {
    let mut message = format!("Operation Error: {detail}\n\twith primary object's type: \
                               {primary}\n\tOperator: ({operator})");

    if !arguments.is_empty() {
        let names = arguments.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(", ");
        message.push_str(&format!("\n\tArguments: {names}"));
    }

    standard_error(message)
}
