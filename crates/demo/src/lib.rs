//! Example driver: samples the step responses of an RC and an RL circuit
//! and plots them side by side.

mod figure;
mod scenario;

pub use figure::{
    CAPACITOR_CHARGE, CAPACITOR_DISCHARGE, INDUCTOR_CHARGE, INDUCTOR_DISCHARGE, INDUCTOR_VOLTAGE,
    RC_TITLE, RL_TITLE, TIME_LABEL, WINDOW_TITLE, figure,
};
pub use scenario::{Responses, Scenario, ScenarioError};
