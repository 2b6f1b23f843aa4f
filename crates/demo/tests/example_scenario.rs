use approx::{assert_abs_diff_eq, assert_relative_eq};
use tau_demo::{
    CAPACITOR_CHARGE, CAPACITOR_DISCHARGE, INDUCTOR_CHARGE, INDUCTOR_DISCHARGE, INDUCTOR_VOLTAGE,
    RC_TITLE, RL_TITLE, Scenario, figure,
};
use tau_plot::LineStyle;
use uom::si::{
    electric_current::ampere,
    electric_potential::volt,
    time::{millisecond, second},
};

#[test]
fn every_response_has_one_value_per_sample() {
    let responses = Scenario::default().evaluate().unwrap();

    assert_eq!(responses.time.len(), 500);
    assert_eq!(responses.capacitor_charge.len(), 500);
    assert_eq!(responses.capacitor_discharge.len(), 500);
    assert_eq!(responses.inductor_charge.len(), 500);
    assert_eq!(responses.inductor_discharge.len(), 500);
    assert_eq!(responses.inductor_voltage.len(), 500);

    assert_eq!(responses.time[0].get::<second>(), 0.0);
    assert_relative_eq!(
        responses.time[499].get::<millisecond>(),
        5.0,
        max_relative = 1e-12
    );
}

#[test]
fn responses_start_and_end_where_expected() {
    let r = Scenario::default().evaluate().unwrap();

    assert_eq!(r.capacitor_charge[0].get::<volt>(), 0.0);
    assert_eq!(r.capacitor_discharge[0].get::<volt>(), 10.0);
    assert_eq!(r.inductor_charge[0].get::<ampere>(), 0.0);
    assert_eq!(r.inductor_voltage[0].get::<volt>(), 10.0);

    // The horizon is about 11 RC time constants and 10 RL time constants.
    assert_abs_diff_eq!(r.capacitor_charge[499].get::<volt>(), 10.0, epsilon = 1e-3);
    assert_abs_diff_eq!(r.capacitor_discharge[499].get::<volt>(), 0.0, epsilon = 1e-3);
    assert_abs_diff_eq!(
        r.inductor_charge[499].get::<ampere>(),
        0.005,
        epsilon = 1e-6
    );
    assert_abs_diff_eq!(
        r.inductor_discharge[499].get::<ampere>(),
        0.0,
        epsilon = 1e-6
    );
    assert_abs_diff_eq!(r.inductor_voltage[499].get::<volt>(), 0.0, epsilon = 1e-3);
}

#[test]
fn evaluation_is_reproducible() {
    let scenario = Scenario::default();
    assert_eq!(scenario.evaluate().unwrap(), scenario.evaluate().unwrap());
}

#[test]
fn figure_has_rc_panel_beside_rl_panel() {
    let responses = Scenario::default().evaluate().unwrap();
    let figure = figure(&responses).unwrap();

    let panels = figure.panels();
    assert_eq!(panels.len(), 2);
    assert_eq!(panels[0].title(), RC_TITLE);
    assert_eq!(panels[1].title(), RL_TITLE);

    let rc: Vec<(&str, LineStyle)> = panels[0]
        .all_series()
        .iter()
        .map(|s| (s.name(), s.line_style()))
        .collect();
    assert_eq!(
        rc,
        [
            (CAPACITOR_CHARGE, LineStyle::Solid),
            (CAPACITOR_DISCHARGE, LineStyle::Dashed),
        ]
    );

    let rl: Vec<(&str, LineStyle)> = panels[1]
        .all_series()
        .iter()
        .map(|s| (s.name(), s.line_style()))
        .collect();
    assert_eq!(
        rl,
        [
            (INDUCTOR_CHARGE, LineStyle::Solid),
            (INDUCTOR_DISCHARGE, LineStyle::Dashed),
            (INDUCTOR_VOLTAGE, LineStyle::Dotted),
        ]
    );
}

#[test]
fn plotted_points_use_milliseconds() {
    let responses = Scenario::default().evaluate().unwrap();
    let figure = figure(&responses).unwrap();

    for panel in figure.panels() {
        for series in panel.all_series() {
            let points = series.points();
            assert_eq!(points.len(), 500);
            assert_eq!(points[0][0], 0.0);
            assert_relative_eq!(points[499][0], 5.0, max_relative = 1e-12);
        }
    }

    let charge = &figure.panels()[0].all_series()[0];
    assert_eq!(
        charge.points()[250][1],
        responses.capacitor_charge[250].get::<volt>()
    );
}

#[test]
fn smaller_scenario_evaluates() {
    let responses = Scenario::default()
        .samples(3)
        .horizon(uom::si::f64::Time::new::<millisecond>(1.0))
        .evaluate()
        .unwrap();

    assert_eq!(responses.time.len(), 3);
    assert_relative_eq!(
        responses.time[1].get::<millisecond>(),
        0.5,
        max_relative = 1e-12
    );
}
