//! Closed-form step responses of first-order RC and RL circuits.
//!
//! This crate provides:
//!
//! - [`time_constant`] — time constants from component values or measurements
//! - [`rc`] — capacitor voltage while charging and discharging
//! - [`rl`] — inductor current while charging and discharging, and the
//!   inductor voltage while charging
//! - [`Response`] — evaluation of a transient at one time or over many
//! - [`TimeVector`] — validated, ordered sample times
//! - [`constraint`] — type-level checks for circuit parameters
//!
//! All responses are pure functions of their parameters and the time.

pub mod constraint;
pub mod rc;
mod response;
pub mod rl;
pub mod time_constant;
mod time_vector;

pub use rc::{CapacitorCharge, CapacitorDischarge, RcCircuit};
pub use response::Response;
pub use rl::{InductorCharge, InductorDischarge, InductorVoltage, RlCircuit};
pub use time_vector::{TimeVector, TimeVectorError};
