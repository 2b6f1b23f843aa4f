use tau_plot::{Figure, LineStyle, Panel, Series};
use uom::si::{
    electric_current::ampere,
    electric_potential::volt,
    f64::{ElectricCurrent, ElectricPotential},
};

use crate::Responses;

pub const WINDOW_TITLE: &str = "RC and RL step responses";
pub const TIME_LABEL: &str = "Time (ms)";

pub const RC_TITLE: &str = "RC circuit - Vc(t)";
pub const RC_Y_LABEL: &str = "Capacitor voltage (V)";
pub const CAPACITOR_CHARGE: &str = "Capacitor charge";
pub const CAPACITOR_DISCHARGE: &str = "Capacitor discharge";

pub const RL_TITLE: &str = "RL circuit - iL(t) and vL(t)";
pub const RL_Y_LABEL: &str = "Current (A) / Voltage (V)";
pub const INDUCTOR_CHARGE: &str = "Charging current (iL)";
pub const INDUCTOR_DISCHARGE: &str = "Discharging current (iL)";
pub const INDUCTOR_VOLTAGE: &str = "Inductor voltage (vL)";

/// Lays out the sampled transients as an RC panel beside an RL panel.
///
/// Time is plotted in milliseconds, voltages in volts and currents in amperes.
///
/// # Errors
///
/// Fails if a response does not have one value per sample time.
pub fn figure(responses: &Responses) -> Result<Figure, tau_plot::Error> {
    let t = responses.time.to_millis();

    let rc = Panel::new(RC_TITLE)
        .x_label(TIME_LABEL)
        .y_label(RC_Y_LABEL)
        .grid(true)
        .legend()
        .series(Series::from_xy(CAPACITOR_CHARGE, &t, &volts(&responses.capacitor_charge))?)
        .series(
            Series::from_xy(CAPACITOR_DISCHARGE, &t, &volts(&responses.capacitor_discharge))?
                .style(LineStyle::Dashed),
        );

    let rl = Panel::new(RL_TITLE)
        .x_label(TIME_LABEL)
        .y_label(RL_Y_LABEL)
        .grid(true)
        .legend()
        .series(Series::from_xy(INDUCTOR_CHARGE, &t, &amps(&responses.inductor_charge))?)
        .series(
            Series::from_xy(INDUCTOR_DISCHARGE, &t, &amps(&responses.inductor_discharge))?
                .style(LineStyle::Dashed),
        )
        .series(
            Series::from_xy(INDUCTOR_VOLTAGE, &t, &volts(&responses.inductor_voltage))?
                .style(LineStyle::Dotted),
        );

    Ok(Figure::new(WINDOW_TITLE).size(1200.0, 600.0).panel(rc).panel(rl))
}

fn volts(values: &[ElectricPotential]) -> Vec<f64> {
    values.iter().map(|v| v.get::<volt>()).collect()
}

fn amps(values: &[ElectricCurrent]) -> Vec<f64> {
    values.iter().map(|i| i.get::<ampere>()).collect()
}
