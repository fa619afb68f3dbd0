/// Binary operator evaluation logic.
///
/// One function per operator, each total over every pair of values: the
/// result is either the computed value or an error value. Lists broadcast,
/// numbers promote, and unsupported combinations produce the uniform
/// operation error.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements logical negation, exposed to scripts as the `not` builtin.
pub mod unary;

/// Core evaluation logic.
///
/// Contains the postfix stack machine and the `evaluate` entry point that
/// runs scanning, reordering and execution over a variable environment.
pub mod core;

/// The variable store.
///
/// Maps identifiers to values. Assignment rebinds entries in place and
/// abstractions capture a copy of it.
pub mod environment;

/// Function values.
///
/// Builtin functions and the abstraction operator.
pub mod function;
