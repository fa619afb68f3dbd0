/// Numeric conversion helpers.
///
/// Conversions between `i64`, `u32`, `usize` and `f64` used by value
/// conversions, shifts and string repetition. Lossy casts are confined to
/// this module so the rest of the crate can stay free of `as` conversions.
pub mod num;
