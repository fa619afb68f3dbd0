/// The core value type.
///
/// Declares `Value`, the closed tagged union every expression evaluates to,
/// together with its case tags, conversions and truthiness.
///
/// # Responsibilities
/// - Construction from primitive Rust types.
/// - Checked access to a specific case.
/// - Conversions between cases and `Display` formatting.
pub mod core;
/// Function values.
///
/// `Func` wraps a single-argument mapping from `Value` to `Value`, used for
/// builtins, abstractions and constant functions.
pub mod func;
/// Raw equality and ordering.
///
/// Structural comparisons between values. Comparing values of incompatible
/// cases is a fatal `TypeMismatch`; the evaluator's comparison operators use
/// a separate wrapper that turns such pairs into error values.
pub mod ordering;
/// The recursive tuple.
///
/// A singly linked, exclusively owned cons list with O(1) prepend, used by
/// the zip operator.
pub mod tuple;
