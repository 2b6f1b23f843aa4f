use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError, ConstraintResult};

/// Marker type enforcing that a value is non-negative (zero or greater).
///
/// Sample times satisfy this: a step response starts at `t = 0`.
///
/// # Examples
///
/// ```
/// use tau_core::constraint::NonNegative;
///
/// assert!(NonNegative::new(0.0).is_ok());
/// assert!(NonNegative::new(-1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct NonNegative;

impl NonNegative {
    /// Constructs a `Constrained<T, NonNegative>` if the value is zero or greater.
    ///
    /// # Errors
    ///
    /// Fails if the value is negative or NaN.
    pub fn new<T: PartialOrd + Zero>(value: T) -> ConstraintResult<Constrained<T, NonNegative>> {
        Constrained::<T, NonNegative>::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for NonNegative {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater | Ordering::Equal) => Ok(()),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}
