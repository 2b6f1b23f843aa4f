//! Resistor-inductor circuits.
//!
//! Mirrors [`rc`](crate::rc): free functions for direct evaluation and
//! [`RlCircuit`] for validated parameters and [`Response`] values.

use uom::si::{
    electrical_resistance::ohm,
    f64::{ElectricCurrent, ElectricPotential, ElectricalResistance, Inductance, Time},
    inductance::henry,
};

use crate::{
    constraint::{Constrained, ConstraintResult, StrictlyPositive},
    response::Response,
    time_constant::{self, decay},
};

/// Current the inductor settles at once its voltage has decayed, `V / R`.
#[must_use]
pub fn steady_state_current(
    source: ElectricPotential,
    resistance: ElectricalResistance,
) -> ElectricCurrent {
    source / resistance
}

/// Inductor current while charging from zero toward `V / R`.
///
/// `iL = (V/R)·(1 − e^(−t/τ))` with `τ = L/R`.
#[must_use]
pub fn charging_current(
    time: Time,
    source: ElectricPotential,
    resistance: ElectricalResistance,
    inductance: Inductance,
) -> ElectricCurrent {
    let tau = time_constant::rl(resistance, inductance);
    steady_state_current(source, resistance) * (1.0 - decay(time, tau))
}

/// Inductor current while discharging from `initial` toward zero.
///
/// `iL = I0·e^(−t/τ)` with `τ = L/R`.
#[must_use]
pub fn discharging_current(
    time: Time,
    initial: ElectricCurrent,
    resistance: ElectricalResistance,
    inductance: Inductance,
) -> ElectricCurrent {
    let tau = time_constant::rl(resistance, inductance);
    initial * decay(time, tau)
}

/// Voltage across the inductor while it charges.
///
/// `vL = V·e^(−t/τ)`: the full source voltage at `t = 0`, decaying toward 0.
#[must_use]
pub fn inductor_voltage(
    time: Time,
    source: ElectricPotential,
    resistance: ElectricalResistance,
    inductance: Inductance,
) -> ElectricPotential {
    let tau = time_constant::rl(resistance, inductance);
    source * decay(time, tau)
}

/// A series RL circuit with strictly positive resistance and inductance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RlCircuit {
    resistance: Constrained<ElectricalResistance, StrictlyPositive>,
    inductance: Constrained<Inductance, StrictlyPositive>,
}

impl RlCircuit {
    /// Creates a circuit from its resistance and inductance.
    ///
    /// # Errors
    ///
    /// Fails if either parameter is zero, negative, or NaN.
    pub fn new(resistance: ElectricalResistance, inductance: Inductance) -> ConstraintResult<Self> {
        Ok(Self {
            resistance: StrictlyPositive::new(resistance)?,
            inductance: StrictlyPositive::new(inductance)?,
        })
    }

    /// Creates a circuit from SI values (Ω and H).
    ///
    /// # Errors
    ///
    /// Fails if either parameter is zero, negative, or NaN.
    pub fn new_si(resistance: f64, inductance: f64) -> ConstraintResult<Self> {
        Self::new(
            ElectricalResistance::new::<ohm>(resistance),
            Inductance::new::<henry>(inductance),
        )
    }

    #[must_use]
    pub fn resistance(&self) -> ElectricalResistance {
        *self.resistance.as_ref()
    }

    #[must_use]
    pub fn inductance(&self) -> Inductance {
        *self.inductance.as_ref()
    }

    /// The circuit's time constant, `τ = L/R`.
    #[must_use]
    pub fn time_constant(&self) -> Time {
        time_constant::rl(self.resistance(), self.inductance())
    }

    /// The current the circuit settles at when driven by `source`.
    #[must_use]
    pub fn steady_state_current(&self, source: ElectricPotential) -> ElectricCurrent {
        steady_state_current(source, self.resistance())
    }

    /// The inductor current rising after `source` is switched on.
    #[must_use]
    pub fn charging(self, source: ElectricPotential) -> InductorCharge {
        InductorCharge {
            circuit: self,
            source,
        }
    }

    /// The inductor current decaying from `initial` once the source is removed.
    #[must_use]
    pub fn discharging(self, initial: ElectricCurrent) -> InductorDischarge {
        InductorDischarge {
            circuit: self,
            initial,
        }
    }

    /// The inductor voltage after `source` is switched on.
    #[must_use]
    pub fn voltage(self, source: ElectricPotential) -> InductorVoltage {
        InductorVoltage {
            circuit: self,
            source,
        }
    }
}

/// Inductor current of an [`RlCircuit`] charging from a step source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InductorCharge {
    circuit: RlCircuit,
    source: ElectricPotential,
}

impl Response for InductorCharge {
    type Output = ElectricCurrent;

    fn at(&self, time: Time) -> ElectricCurrent {
        charging_current(
            time,
            self.source,
            self.circuit.resistance(),
            self.circuit.inductance(),
        )
    }
}

/// Inductor current of an [`RlCircuit`] decaying through its resistor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InductorDischarge {
    circuit: RlCircuit,
    initial: ElectricCurrent,
}

impl Response for InductorDischarge {
    type Output = ElectricCurrent;

    fn at(&self, time: Time) -> ElectricCurrent {
        discharging_current(
            time,
            self.initial,
            self.circuit.resistance(),
            self.circuit.inductance(),
        )
    }
}

/// Inductor voltage of an [`RlCircuit`] charging from a step source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InductorVoltage {
    circuit: RlCircuit,
    source: ElectricPotential,
}

impl Response for InductorVoltage {
    type Output = ElectricPotential;

    fn at(&self, time: Time) -> ElectricPotential {
        inductor_voltage(
            time,
            self.source,
            self.circuit.resistance(),
            self.circuit.inductance(),
        )
    }
}
