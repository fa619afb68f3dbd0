/// The evaluator module executes postfix items and computes results.
///
/// It runs reordered items on an operand stack, keeps identifiers as
/// references until an operator needs their value, and implements every
/// operator and builtin function of the language.
///
/// # Responsibilities
/// - Executes postfix items against a variable environment.
/// - Implements the binary operators, `!` and the builtins.
/// - Reports value-level errors as `Value::Error` and structural failures as
///   fatal errors.
pub mod evaluator;
/// The lexer module splits source text into tokens.
///
/// Shell lines are split into typed tokens first; the text of an expression
/// token is then scanned into atoms.
pub mod lexer;
/// The parser module reorders infix atoms into postfix order.
///
/// A shunting-yard pass driven by the operator table, extended with
/// juxtaposition for function application.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// # Responsibilities
/// - Defines the `Value` enum with its cases and type tags.
/// - Implements conversions, truthiness and display.
/// - Implements raw structural equality and ordering.
/// - Provides the `Tuple` cons list and the `Func` function value.
pub mod value;
