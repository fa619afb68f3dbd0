/// Built-in function implementations.
///
/// Conversions, container inspection and numeric functions. Every builtin
/// takes one value and returns one value.
pub mod builtin;
/// The builtin table and name lookup.
pub mod core;
/// The abstraction operator `->`.
///
/// Builds function values from a parameter name and a body expression.
pub mod abstraction;
