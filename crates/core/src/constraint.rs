//! Type-level numeric constraints checked once at construction.
//!
//! Circuit parameters only make physical sense within a certain range:
//! resistances, capacitances and inductances must be strictly positive, and
//! sample times must not be negative. The types in this module carry that
//! guarantee so downstream code can trust the values it is handed.
//!
//! # Provided Constraints
//!
//! - [`NonNegative`]: Zero or greater
//! - [`StrictlyPositive`]: Greater than zero
//!
//! Each marker is used with the generic [`Constrained<T, C>`] wrapper, where
//! `C` is the marker type implementing [`Constraint<T>`], and provides an
//! associated [`new()`](StrictlyPositive::new) constructor for convenience.

mod non_negative;
mod strictly_positive;

use std::marker::PhantomData;

use thiserror::Error;

pub use non_negative::NonNegative;
pub use strictly_positive::StrictlyPositive;

/// A physical range a circuit quantity must fall in.
///
/// Implemented by zero-sized markers such as [`StrictlyPositive`], which
/// [`RcCircuit`](crate::RcCircuit) and [`RlCircuit`](crate::RlCircuit) use
/// for their component values.
pub trait Constraint<T> {
    /// Checks `value` against the range.
    ///
    /// # Errors
    ///
    /// Returns the [`ConstraintError`] naming why the value is out of range.
    fn check(value: &T) -> Result<(), ConstraintError>;
}

/// Why a resistance, capacitance, inductance or sample time was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConstraintError {
    #[error("value must not be negative")]
    Negative,
    #[error("value must not be zero")]
    Zero,
    #[error("value is not a number")]
    NotANumber,
}

/// Result of validating a circuit quantity.
pub type ConstraintResult<T, E = ConstraintError> = Result<T, E>;

/// A quantity known to lie in the range described by `C`.
///
/// Circuits hold their component values in this form, so a time constant
/// computed from them is never zero, negative, or NaN.
///
/// # Example
///
/// ```
/// use tau_core::constraint::{Constrained, StrictlyPositive};
/// use uom::si::{electrical_resistance::ohm, f64::ElectricalResistance};
///
/// let r = ElectricalResistance::new::<ohm>(2000.0);
/// let checked = Constrained::<_, StrictlyPositive>::new(r).unwrap();
/// assert_eq!(checked.into_inner(), r);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Constrained<T, C: Constraint<T>> {
    value: T,
    _marker: PhantomData<C>,
}

impl<T, C: Constraint<T>> Constrained<T, C> {
    /// Checks `value` against `C` and wraps it.
    ///
    /// # Errors
    ///
    /// Returns the error reported by `C` when the value is out of range.
    pub fn new(value: T) -> Result<Self, ConstraintError> {
        C::check(&value)?;
        Ok(Self {
            value,
            _marker: PhantomData,
        })
    }

    /// Unwraps the checked quantity.
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T, C: Constraint<T>> AsRef<T> for Constrained<T, C> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}
