/// Infix to postfix reordering.
///
/// A shunting-yard pass driven by the operator precedence table, extended
/// with juxtaposition: `f a b` applies `f` to the arguments that follow it.
///
/// # Responsibilities
/// - Orders operators by precedence and associativity.
/// - Drops parentheses from the output.
/// - Lowers juxtaposed applications and reports unbalanced parentheses.
pub mod shunting_yard;
