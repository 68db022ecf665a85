use svg_plot_gen::api::{MAX_VALUE_DIVISIONS, assemble_layout};
use svg_plot_gen::error::AxisKind;
use svg_plot_gen::{PlotConfig, PlotError};

#[test]
fn empty_range_is_rejected() {
    let config = PlotConfig::default().with_y_range(5.0, 5.0, 1.0);
    let err = assemble_layout(&config).expect_err("empty range");

    assert!(matches!(err, PlotError::InvalidRange { first, last } if first == 5.0 && last == 5.0));
    assert!(err.is_configuration_error());
}

#[test]
fn reversed_range_is_rejected() {
    let config = PlotConfig::default().with_y_range(5.0, 1.0, 1.0);
    assert!(matches!(
        assemble_layout(&config),
        Err(PlotError::InvalidRange { .. })
    ));
}

#[test]
fn zero_and_negative_steps_are_rejected() {
    for step in [0.0, -1.0] {
        let config = PlotConfig::default().with_y_range(0.0, 5.0, step);
        let err = assemble_layout(&config).expect_err("bad step");
        assert!(matches!(err, PlotError::InvalidStep { .. }));
        assert!(err.is_configuration_error());
    }
}

#[test]
fn zero_canvas_is_rejected() {
    for (width, height) in [(0, 380), (960, 0)] {
        let config = PlotConfig::default().with_canvas(width, height);
        assert!(matches!(
            assemble_layout(&config),
            Err(PlotError::InvalidCanvas { .. })
        ));
    }
}

#[test]
fn non_finite_range_is_rejected() {
    let config = PlotConfig::default().with_y_range(0.0, f64::INFINITY, 1.0);
    let err = assemble_layout(&config).expect_err("infinite range");
    assert!(matches!(err, PlotError::InvalidConfig(_)));

    let config = PlotConfig::default().with_y_range(0.0, 5.0, f64::NAN);
    assert!(assemble_layout(&config).is_err());
}

#[test]
fn log_exponents_beyond_f64_range_are_rejected() {
    let config = PlotConfig::default()
        .with_y_range(0.0, 400.0, 100.0)
        .with_log(true);
    let err = assemble_layout(&config).expect_err("overflowing exponent");
    assert!(matches!(err, PlotError::InvalidConfig(_)));

    // The same numbers are fine on a linear axis.
    assert!(assemble_layout(&config.with_log(false)).is_ok());
}

#[test]
fn steps_too_fine_for_the_range_are_rejected() {
    for (first, last, step) in [(0.0, 1.0, 1e-300), (0.0, 1e10, 1.0), (-1e308, 1e308, 1.0)] {
        let config = PlotConfig::default().with_y_range(first, last, step);
        let err = assemble_layout(&config).expect_err("too many divisions");
        assert!(matches!(err, PlotError::InvalidConfig(_)), "{first}..{last} step {step}");
        assert!(err.is_configuration_error());
    }

    let at_limit = PlotConfig::default().with_y_range(0.0, MAX_VALUE_DIVISIONS, 1.0);
    let geometry = assemble_layout(&at_limit).expect("limit is inclusive");
    assert_eq!(geometry.vertical.labels.len(), 10_001);
}

#[test]
fn margins_wider_than_canvas_are_rejected() {
    let config = PlotConfig::default().with_canvas(120, 380);
    let err = assemble_layout(&config).expect_err("no horizontal room");

    assert!(matches!(
        err,
        PlotError::DegenerateExtent {
            axis: AxisKind::Horizontal,
            ..
        }
    ));
    assert!(err.is_configuration_error());

    let config = PlotConfig::default().with_canvas(960, 90);
    assert!(matches!(
        assemble_layout(&config),
        Err(PlotError::DegenerateExtent {
            axis: AxisKind::Vertical,
            ..
        })
    ));
}

#[test]
fn representative_valid_configs_are_accepted() {
    for (first, last, step) in [
        (0.0, 5.0, 1.0),
        (-10.0, 10.0, 5.0),
        (0.0, 1.0, 0.1),
        (100.0, 300.0, 100.0),
        (-3.0, 3.0, 1.0),
    ] {
        for log in [false, true] {
            let config = PlotConfig::default()
                .with_y_range(first, last, step)
                .with_log(log);
            assert!(
                assemble_layout(&config).is_ok(),
                "{first}..{last} step {step} log={log} should be valid"
            );
        }
    }
}

#[test]
fn json_config_fills_missing_fields_with_defaults() {
    let config = PlotConfig::from_json_str(r#"{ "log": true, "y_last": 4.0, "x_text": "Hour" }"#)
        .expect("partial json");

    assert!(config.log);
    assert_eq!(config.y_last, 4.0);
    assert_eq!(config.x_text, "Hour");
    assert_eq!(config.width, 960);
    assert_eq!(config.y_text, "y-axis");
}

#[test]
fn malformed_json_config_is_reported() {
    let err = PlotConfig::from_json_str("{ width: }").expect_err("bad json");
    assert!(matches!(err, PlotError::ConfigFile(_)));
    assert!(!err.is_configuration_error());
}

#[test]
fn config_round_trips_through_json() {
    let config = PlotConfig::default()
        .with_template(true)
        .with_axis_titles("Time", "Power (W)");
    let json = serde_json::to_string(&config).expect("serialize");
    let restored = PlotConfig::from_json_str(&json).expect("deserialize");

    assert_eq!(restored, config);
}
