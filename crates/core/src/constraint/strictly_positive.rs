use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError, ConstraintResult};

/// Marker type enforcing that a value is strictly positive (greater than zero).
///
/// Used for the electrical parameters of a circuit, where a zero resistance,
/// capacitance or inductance would collapse the time constant.
///
/// # Examples
///
/// ```
/// use tau_core::constraint::{ConstraintError, StrictlyPositive};
/// use uom::si::{electrical_resistance::ohm, f64::ElectricalResistance};
///
/// let r = StrictlyPositive::new(ElectricalResistance::new::<ohm>(2000.0)).unwrap();
/// assert_eq!(r.into_inner().get::<ohm>(), 2000.0);
///
/// let zero = StrictlyPositive::new(ElectricalResistance::new::<ohm>(0.0));
/// assert_eq!(zero.unwrap_err(), ConstraintError::Zero);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StrictlyPositive;

impl StrictlyPositive {
    /// Constructs a `Constrained<T, StrictlyPositive>` if the value is greater than zero.
    ///
    /// # Errors
    ///
    /// Fails if the value is zero, negative, or NaN.
    pub fn new<T: PartialOrd + Zero>(
        value: T,
    ) -> ConstraintResult<Constrained<T, StrictlyPositive>> {
        Constrained::<T, StrictlyPositive>::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for StrictlyPositive {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater) => Ok(()),
            Some(Ordering::Equal) => Err(ConstraintError::Zero),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{capacitance::microfarad, f64::Capacitance};

    #[test]
    fn floats() {
        assert!(StrictlyPositive::new(2.0).is_ok());
        assert_eq!(StrictlyPositive::new(0.0), Err(ConstraintError::Zero));
        assert_eq!(StrictlyPositive::new(-0.0), Err(ConstraintError::Zero));
        assert_eq!(StrictlyPositive::new(-2.0), Err(ConstraintError::Negative));
        assert_eq!(
            StrictlyPositive::new(f64::NAN),
            Err(ConstraintError::NotANumber)
        );
    }

    #[test]
    fn capacitance() {
        let c = Capacitance::new::<microfarad>(0.22);
        let positive = StrictlyPositive::new(c).unwrap();
        assert_eq!(positive.into_inner(), c);

        assert_eq!(
            StrictlyPositive::new(Capacitance::new::<microfarad>(-1.0)).unwrap_err(),
            ConstraintError::Negative,
        );
    }
}
