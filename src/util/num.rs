/// Widens an `i64` to `f64` for mixed arithmetic.
///
/// Magnitudes beyond `2^53` are rounded to the nearest
/// representable `f64`, the same way a `Real` operand would round them.
///
/// ## Example
/// ```
/// use ysh::util::num::i64_to_f64;
///
/// assert_eq!(i64_to_f64(42), 42.0);
/// ```
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub const fn i64_to_f64(value: i64) -> f64 {
    value as f64
}

/// Truncates an `f64` towards zero into an `i64`.
///
/// ## Errors
/// Returns `Err(error)` if the value is not finite or does not fit in `i64`
/// after truncation.
///
/// ## Example
/// ```
/// use ysh::util::num::f64_to_i64_truncated;
///
/// assert_eq!(f64_to_i64_truncated(-2.75, "bad"), Ok(-2));
/// assert_eq!(f64_to_i64_truncated(f64::NAN, "bad"), Err("bad"));
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
pub fn f64_to_i64_truncated<E>(value: f64, error: E) -> Result<i64, E> {
    if !value.is_finite() {
        return Err(error);
    }

    let truncated = value.trunc();
    // i64::MAX is not representable, so the upper bound is exclusive.
    if truncated < i64::MIN as f64 || truncated >= i64::MAX as f64 {
        return Err(error);
    }

    Ok(truncated as i64)
}

/// Converts a shift amount into the range accepted by `i64` shifts.
///
/// Returns `None` for negative amounts and amounts of 64 or more.
#[must_use]
pub fn shift_amount(value: i64) -> Option<u32> {
    u32::try_from(value).ok().filter(|amount| *amount < i64::BITS)
}

/// Converts a repetition count, clamping non-positive counts to zero.
///
/// Returns `None` when the count does not fit in `usize`.
#[must_use]
pub fn repeat_count(value: i64) -> Option<usize> {
    if value <= 0 {
        return Some(0);
    }

    usize::try_from(value).ok()
}

/// Converts a collection length into an `i64` value, saturating at
/// `i64::MAX`.
#[must_use]
pub fn len_to_i64(len: usize) -> i64 {
    i64::try_from(len).unwrap_or(i64::MAX)
}
