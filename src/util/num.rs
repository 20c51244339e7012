use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Largest integer value exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_INT: f64 = 9_007_199_254_740_991.0;

/// Converts an `f64` to `i64` if the value is finite, within range, and not
/// fractional.
///
/// The language has a single numeric type, so every place that needs an
/// integer (indexing, `range` bounds, code points) goes through this check
/// rather than truncating silently.
///
/// ## Errors
/// Returns a `TypeMismatch` for non-finite, out-of-range, or fractional
/// values.
///
/// ## Example
/// ```
/// use quill::util::num::f64_to_i64_checked;
///
/// assert_eq!(f64_to_i64_checked(1000.0, 1).unwrap(), 1000);
/// assert!(f64_to_i64_checked(1.5, 1).is_err());
/// assert!(f64_to_i64_checked(f64::INFINITY, 1).is_err());
/// ```
#[allow(clippy::cast_possible_truncation)]
pub fn f64_to_i64_checked(value: f64, line: usize) -> EvalResult<i64> {
    if !value.is_finite() || value.abs() > MAX_SAFE_INT || value.fract() != 0.0 {
        return Err(RuntimeError::TypeMismatch { expected: "integer".to_string(),
                                                found:    format!("number {value}"),
                                                line });
    }
    Ok(value as i64)
}

/// Converts a numeric index into a `usize` valid for a collection of length
/// `len`.
///
/// ## Errors
/// - `TypeMismatch` if the value is not an integer.
/// - `IndexOutOfRange` if the index is negative or not below `len`.
///
/// ## Example
/// ```
/// use quill::util::num::checked_index;
///
/// assert_eq!(checked_index(2.0, 3, 1).unwrap(), 2);
/// assert!(checked_index(3.0, 3, 1).is_err());
/// assert!(checked_index(-1.0, 3, 1).is_err());
/// ```
#[allow(clippy::cast_sign_loss)]
pub fn checked_index(value: f64, len: usize, line: usize) -> EvalResult<usize> {
    let index = f64_to_i64_checked(value, line)?;

    if index < 0 || (index as usize) >= len {
        return Err(RuntimeError::IndexOutOfRange { len,
                                                   found: index,
                                                   line });
    }
    Ok(index as usize)
}

/// Converts an `f64` code point into a `char`.
///
/// Used by the `tochar` intrinsic and by increment and decrement on char
/// values.
///
/// ## Errors
/// Returns a `TypeMismatch` if the value is fractional, out of range, or not
/// a valid Unicode scalar value.
///
/// ## Example
/// ```
/// use quill::util::num::f64_to_char_checked;
///
/// assert_eq!(f64_to_char_checked(97.0, 1).unwrap(), 'a');
/// assert!(f64_to_char_checked(-1.0, 1).is_err());
/// ```
pub fn f64_to_char_checked(value: f64, line: usize) -> EvalResult<char> {
    let code = f64_to_i64_checked(value, line)?;

    u32::try_from(code).ok().and_then(char::from_u32).ok_or_else(|| {
        RuntimeError::TypeMismatch { expected: "valid code point".to_string(),
                                     found:    format!("number {value}"),
                                     line }
    })
}
