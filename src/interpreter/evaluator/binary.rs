/// Operator dispatch.
///
/// Routes an operator to its implementation and holds the helpers shared by
/// all of them: error propagation and the unsupported-combination
/// diagnostic.
pub mod core;

/// Elementwise evaluation over lists.
///
/// List with list (equal lengths), list with scalar and scalar with list,
/// recursing into nested lists.
pub mod list;

/// Arithmetic operators: `+ - * / %`.
pub mod arithmetic;

/// The power operator `^`.
pub mod power;

/// Bitwise, shift and logical operators: `& | << >> && ||`.
pub mod logic;

/// Structural operators: `++ : , $`.
pub mod structure;

/// Comparison operators: `= != < > <= >= <=>`.
pub mod comparison;
