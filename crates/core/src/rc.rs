//! Resistor-capacitor circuits.
//!
//! The free functions evaluate the closed-form capacitor voltage directly
//! from raw parameters. [`RcCircuit`] validates the parameters once and hands
//! out [`Response`] values for the charging and discharging transients.

use uom::si::{
    capacitance::farad,
    electrical_resistance::ohm,
    f64::{Capacitance, ElectricPotential, ElectricalResistance, Time},
};

use crate::{
    constraint::{Constrained, ConstraintResult, StrictlyPositive},
    response::Response,
    time_constant::{self, decay},
};

/// Capacitor voltage while charging from zero toward `source`.
///
/// `Vc = V·(1 − e^(−t/RC))`, rising monotonically from 0 toward `V`.
#[must_use]
pub fn charging_voltage(
    time: Time,
    source: ElectricPotential,
    resistance: ElectricalResistance,
    capacitance: Capacitance,
) -> ElectricPotential {
    let tau = time_constant::rc(resistance, capacitance);
    source * (1.0 - decay(time, tau))
}

/// Capacitor voltage while discharging from `initial` toward zero.
///
/// `Vc = V0·e^(−t/RC)`, falling monotonically from `V0` toward 0.
#[must_use]
pub fn discharging_voltage(
    time: Time,
    initial: ElectricPotential,
    resistance: ElectricalResistance,
    capacitance: Capacitance,
) -> ElectricPotential {
    let tau = time_constant::rc(resistance, capacitance);
    initial * decay(time, tau)
}

/// A series RC circuit with strictly positive resistance and capacitance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RcCircuit {
    resistance: Constrained<ElectricalResistance, StrictlyPositive>,
    capacitance: Constrained<Capacitance, StrictlyPositive>,
}

impl RcCircuit {
    /// Creates a circuit from its resistance and capacitance.
    ///
    /// # Errors
    ///
    /// Fails if either parameter is zero, negative, or NaN.
    pub fn new(
        resistance: ElectricalResistance,
        capacitance: Capacitance,
    ) -> ConstraintResult<Self> {
        Ok(Self {
            resistance: StrictlyPositive::new(resistance)?,
            capacitance: StrictlyPositive::new(capacitance)?,
        })
    }

    /// Creates a circuit from SI values (Ω and F).
    ///
    /// # Errors
    ///
    /// Fails if either parameter is zero, negative, or NaN.
    pub fn new_si(resistance: f64, capacitance: f64) -> ConstraintResult<Self> {
        Self::new(
            ElectricalResistance::new::<ohm>(resistance),
            Capacitance::new::<farad>(capacitance),
        )
    }

    #[must_use]
    pub fn resistance(&self) -> ElectricalResistance {
        *self.resistance.as_ref()
    }

    #[must_use]
    pub fn capacitance(&self) -> Capacitance {
        *self.capacitance.as_ref()
    }

    /// The circuit's time constant, `τ = R·C`.
    #[must_use]
    pub fn time_constant(&self) -> Time {
        time_constant::rc(self.resistance(), self.capacitance())
    }

    /// The capacitor charging from zero toward `source`.
    #[must_use]
    pub fn charging(self, source: ElectricPotential) -> CapacitorCharge {
        CapacitorCharge {
            circuit: self,
            source,
        }
    }

    /// The capacitor discharging from `initial` toward zero.
    #[must_use]
    pub fn discharging(self, initial: ElectricPotential) -> CapacitorDischarge {
        CapacitorDischarge {
            circuit: self,
            initial,
        }
    }
}

/// Capacitor voltage of an [`RcCircuit`] charging from a step source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CapacitorCharge {
    circuit: RcCircuit,
    source: ElectricPotential,
}

impl Response for CapacitorCharge {
    type Output = ElectricPotential;

    fn at(&self, time: Time) -> ElectricPotential {
        charging_voltage(
            time,
            self.source,
            self.circuit.resistance(),
            self.circuit.capacitance(),
        )
    }
}

/// Capacitor voltage of an [`RcCircuit`] discharging through its resistor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CapacitorDischarge {
    circuit: RcCircuit,
    initial: ElectricPotential,
}

impl Response for CapacitorDischarge {
    type Output = ElectricPotential;

    fn at(&self, time: Time) -> ElectricPotential {
        discharging_voltage(
            time,
            self.initial,
            self.circuit.resistance(),
            self.circuit.capacitance(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use uom::si::{electric_potential::volt, time::second};

    use crate::constraint::ConstraintError;

    fn volts(value: f64) -> ElectricPotential {
        ElectricPotential::new::<volt>(value)
    }

    fn seconds(value: f64) -> Time {
        Time::new::<second>(value)
    }

    fn example() -> RcCircuit {
        RcCircuit::new_si(2000.0, 0.22e-6).unwrap()
    }

    #[test]
    fn rejects_non_positive_parameters() {
        assert_eq!(RcCircuit::new_si(0.0, 1e-6).unwrap_err(), ConstraintError::Zero);
        assert_eq!(RcCircuit::new_si(100.0, -1e-6).unwrap_err(), ConstraintError::Negative);
        assert_eq!(RcCircuit::new_si(f64::NAN, 1e-6).unwrap_err(), ConstraintError::NotANumber);
    }

    #[test]
    fn charging_starts_at_zero() {
        let charge = example().charging(volts(10.0));
        assert_eq!(charge.at(seconds(0.0)).get::<volt>(), 0.0);
    }

    #[test]
    fn charging_reaches_source_after_ten_time_constants() {
        let circuit = example();
        let charge = circuit.charging(volts(10.0));
        let v = charge.at(circuit.time_constant() * 10.0).get::<volt>();
        assert_abs_diff_eq!(v, 10.0, epsilon = 1e-4 * 10.0);
    }

    #[test]
    fn charging_at_one_time_constant() {
        // τ = 2000 Ω · 0.22 µF = 0.44 ms
        let v = charging_voltage(
            seconds(4.4e-4),
            volts(10.0),
            ElectricalResistance::new::<ohm>(2000.0),
            Capacitance::new::<farad>(0.22e-6),
        );
        assert_relative_eq!(v.get::<volt>(), 6.321_205_588, max_relative = 1e-6);
    }

    #[test]
    fn discharging_endpoints() {
        let circuit = example();
        let discharge = circuit.discharging(volts(10.0));

        assert_eq!(discharge.at(seconds(0.0)).get::<volt>(), 10.0);
        assert_relative_eq!(
            discharge.at(circuit.time_constant()).get::<volt>(),
            10.0 / std::f64::consts::E,
            max_relative = 1e-12
        );
    }

    #[test]
    fn responses_are_monotonic() {
        let circuit = example();
        let charge = circuit.charging(volts(10.0));
        let discharge = circuit.discharging(volts(10.0));

        let times: Vec<Time> = (0..100_u32).map(|i| seconds(f64::from(i) * 5e-5)).collect();
        let rising = charge.sample(&times);
        let falling = discharge.sample(&times);

        assert!(rising.windows(2).all(|w| w[0] <= w[1]));
        assert!(falling.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn response_matches_free_function() {
        let circuit = example();
        let t = seconds(1.3e-3);
        assert_eq!(
            circuit.charging(volts(5.0)).at(t),
            charging_voltage(t, volts(5.0), circuit.resistance(), circuit.capacitance())
        );
        assert_eq!(
            circuit.discharging(volts(5.0)).at(t),
            discharging_voltage(t, volts(5.0), circuit.resistance(), circuit.capacitance())
        );
    }

    #[test]
    fn repeated_evaluation_is_bit_identical() {
        let charge = example().charging(volts(10.0));
        let t = seconds(2.7e-4);
        assert_eq!(
            charge.at(t).get::<volt>().to_bits(),
            charge.at(t).get::<volt>().to_bits()
        );
    }

    #[test]
    fn zero_capacitance_propagates_nan() {
        let v = charging_voltage(
            seconds(0.0),
            volts(10.0),
            ElectricalResistance::new::<ohm>(2000.0),
            Capacitance::new::<farad>(0.0),
        );
        assert!(v.get::<volt>().is_nan());
    }
}
