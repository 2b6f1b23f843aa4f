use tau_core::{
    RcCircuit, Response, RlCircuit, TimeVector, TimeVectorError, constraint::ConstraintError,
};
use thiserror::Error;
use uom::si::{
    capacitance::microfarad,
    electric_potential::volt,
    electrical_resistance::ohm,
    f64::{Capacitance, ElectricCurrent, ElectricPotential, ElectricalResistance, Inductance, Time},
    inductance::henry,
    time::{millisecond, second},
};

/// Errors that can occur while evaluating a [`Scenario`].
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("invalid circuit parameter")]
    Parameter(#[from] ConstraintError),

    #[error("invalid time vector")]
    Time(#[from] TimeVectorError),
}

/// Component values and sampling for the example transients.
///
/// The RC and RL circuits share the resistor and the source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scenario {
    pub resistance: ElectricalResistance,
    pub capacitance: Capacitance,
    pub inductance: Inductance,
    pub source: ElectricPotential,
    pub horizon: Time,
    pub samples: usize,
}

impl Default for Scenario {
    fn default() -> Self {
        Self {
            resistance: ElectricalResistance::new::<ohm>(2000.0),
            capacitance: Capacitance::new::<microfarad>(0.22),
            inductance: Inductance::new::<henry>(1.0),
            source: ElectricPotential::new::<volt>(10.0),
            horizon: Time::new::<millisecond>(5.0),
            samples: 500,
        }
    }
}

impl Scenario {
    #[must_use]
    pub fn resistance(mut self, resistance: ElectricalResistance) -> Self {
        self.resistance = resistance;
        self
    }

    #[must_use]
    pub fn capacitance(mut self, capacitance: Capacitance) -> Self {
        self.capacitance = capacitance;
        self
    }

    #[must_use]
    pub fn inductance(mut self, inductance: Inductance) -> Self {
        self.inductance = inductance;
        self
    }

    #[must_use]
    pub fn source(mut self, source: ElectricPotential) -> Self {
        self.source = source;
        self
    }

    /// Sets the end of the sampled interval, which always starts at zero.
    #[must_use]
    pub fn horizon(mut self, horizon: Time) -> Self {
        self.horizon = horizon;
        self
    }

    #[must_use]
    pub fn samples(mut self, samples: usize) -> Self {
        self.samples = samples;
        self
    }

    /// Evaluates every example transient over the sampled interval.
    ///
    /// The capacitor discharges from the source voltage and the inductor
    /// discharges from its steady-state current.
    ///
    /// # Errors
    ///
    /// Fails if a component value is not strictly positive or the horizon
    /// is negative, infinite, or NaN.
    pub fn evaluate(&self) -> Result<Responses, ScenarioError> {
        let rc = RcCircuit::new(self.resistance, self.capacitance)?;
        let rl = RlCircuit::new(self.resistance, self.inductance)?;
        let time = TimeVector::linspace(Time::new::<second>(0.0), self.horizon, self.samples)?;

        log::info!(
            "evaluating {} samples over {} ms",
            time.len(),
            self.horizon.get::<millisecond>()
        );
        log::debug!(
            "rc tau = {} ms, rl tau = {} ms",
            rc.time_constant().get::<millisecond>(),
            rl.time_constant().get::<millisecond>()
        );

        let initial_current = rl.steady_state_current(self.source);

        Ok(Responses {
            capacitor_charge: rc.charging(self.source).sample(&time),
            capacitor_discharge: rc.discharging(self.source).sample(&time),
            inductor_charge: rl.charging(self.source).sample(&time),
            inductor_discharge: rl.discharging(initial_current).sample(&time),
            inductor_voltage: rl.voltage(self.source).sample(&time),
            time,
        })
    }
}

/// Sampled transients of a [`Scenario`], one entry per sample time.
#[derive(Debug, Clone, PartialEq)]
pub struct Responses {
    pub time: TimeVector,
    pub capacitor_charge: Vec<ElectricPotential>,
    pub capacitor_discharge: Vec<ElectricPotential>,
    pub inductor_charge: Vec<ElectricCurrent>,
    pub inductor_discharge: Vec<ElectricCurrent>,
    pub inductor_voltage: Vec<ElectricPotential>,
}
