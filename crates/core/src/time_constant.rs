//! Time constants of first-order circuits.
//!
//! The functions here never validate their arguments. A zero resistance,
//! capacitance or inductance yields an infinite or NaN time constant, which
//! then propagates through every response built on it. Use
//! [`RcCircuit`](crate::RcCircuit) or [`RlCircuit`](crate::RlCircuit) to
//! reject such parameters up front.
//!
//! The two paths differ for sequences of times. The free functions in
//! [`rc`](crate::rc) and [`rl`](crate::rl) take one time each, so sampling
//! with unchecked parameters means mapping them over the times yourself,
//! and a zero parameter shows up as NaN or infinite samples. Element-wise
//! [`Response::sample`](crate::Response::sample) is only reachable through a
//! circuit, where the same parameter is rejected with a
//! [`ConstraintError`](crate::constraint::ConstraintError) before any sample
//! is computed.

use uom::si::{
    f64::{Capacitance, ElectricalResistance, Inductance, Ratio, Time},
    ratio::ratio,
};

/// Ratio between the measured period and the time constant used by
/// [`from_period`].
pub const PERIOD_PER_TIME_CONSTANT: f64 = 2.2;

/// Number of time constants after which a response is considered settled.
pub const SETTLING_TIME_CONSTANTS: f64 = 5.0;

/// Time constant of an RC circuit, `τ = R·C`.
///
/// # Example
///
/// ```
/// use tau_core::time_constant;
/// use uom::si::{
///     capacitance::farad, electrical_resistance::ohm,
///     f64::{Capacitance, ElectricalResistance}, time::second,
/// };
///
/// let tau = time_constant::rc(
///     ElectricalResistance::new::<ohm>(1000.0),
///     Capacitance::new::<farad>(1e-6),
/// );
/// assert!((tau.get::<second>() - 1e-3).abs() < 1e-15);
/// ```
#[must_use]
pub fn rc(resistance: ElectricalResistance, capacitance: Capacitance) -> Time {
    resistance * capacitance
}

/// Time constant of an RL circuit, `τ = L / R`.
#[must_use]
pub fn rl(resistance: ElectricalResistance, inductance: Inductance) -> Time {
    inductance / resistance
}

/// Time constant read off a charging curve as the time to reach 63.2% of the
/// final value.
///
/// That time *is* the time constant, so the measurement is returned as is.
#[must_use]
pub fn from_63_percent(time_to_63_percent: Time) -> Time {
    time_to_63_percent
}

/// Time constant read off a discharging curve as the time to fall to 36.8%
/// of the initial value.
///
/// Like [`from_63_percent`], the measurement is the time constant.
#[must_use]
pub fn from_37_percent(time_to_37_percent: Time) -> Time {
    time_to_37_percent
}

/// Time constant estimated from a measured period, `τ = period / 2.2`.
#[must_use]
pub fn from_period(period: Time) -> Time {
    period / PERIOD_PER_TIME_CONSTANT
}

/// Time for a response to settle, taken as five time constants.
#[must_use]
pub fn settling_time(time_constant: Time) -> Time {
    time_constant * SETTLING_TIME_CONSTANTS
}

/// Exponential decay factor `e^(−t/τ)` shared by every response.
///
/// Equals 1 at `t = 0` and tends to 0 as `t` grows.
#[must_use]
pub fn decay(time: Time, time_constant: Time) -> f64 {
    let elapsed: Ratio = time / time_constant;
    (-elapsed.get::<ratio>()).exp()
}
