use dq_reflect::Reflect;
use dq_reflect::info::classify;
use dq_reflect::ops::ReflectRef;

use crate::CompareError;

/// Compares two reflected values for exact equality.
///
/// Values of different kinds are never equal, so an `i32` and an `i64`
/// holding the same number compare `false`. Floats use IEEE equality without
/// an epsilon. Only scalars can be compared: two records, maps or other
/// non-scalar values of the same kind yield
/// [`CompareError::UnsupportedType`].
///
/// # Examples
///
/// ```
/// use dq_surf::{CompareError, compare};
/// use dq_reflect::info::ReflectKind;
///
/// assert_eq!(compare(&5_i32, &5_i32), Ok(true));
/// assert_eq!(compare(&5_i32, &5_i64), Ok(false));
/// assert_eq!(compare(&String::from("a"), &String::from("b")), Ok(false));
///
/// let err = compare(&vec![1_u8], &vec![1_u8]).unwrap_err();
/// assert_eq!(err, CompareError::UnsupportedType(ReflectKind::Unsupported));
/// ```
pub fn compare(lhs: &dyn Reflect, rhs: &dyn Reflect) -> Result<bool, CompareError> {
    let kind = classify(lhs);
    let other = classify(rhs);
    if kind != other {
        log::trace!("kind mismatch in comparison: {kind} vs {other}");
        return Ok(false);
    }

    match (lhs.reflect_ref(), rhs.reflect_ref()) {
        (ReflectRef::Scalar(lhs), ReflectRef::Scalar(rhs)) => Ok(lhs == rhs),
        _ => Err(CompareError::UnsupportedType(kind)),
    }
}
