use approx::assert_relative_eq;
use svg_plot_gen::PlotConfig;
use svg_plot_gen::api::assemble_layout;
use svg_plot_gen::core::{AxisExtent, ValueRange, to_pixel};

#[test]
fn default_config_derives_expected_extents() {
    let geometry = assemble_layout(&PlotConfig::default()).expect("default layout");
    let bounds = geometry.bounding_box;

    assert_eq!(bounds.x_start, 100.0);
    assert_eq!(bounds.x_end, 935.0);
    assert_eq!(bounds.width(), 835.0);
    assert_eq!(bounds.y_start, 25.0);
    assert_eq!(bounds.y_end, 310.0);
    assert_eq!(bounds.height(), 285.0);
    assert_eq!(geometry.origin(), (100.0, 310.0));

    assert_eq!(geometry.horizontal.extent, AxisExtent::new(100.0, 935.0));
    assert_eq!(geometry.vertical.extent, AxisExtent::new(25.0, 310.0));
}

#[test]
fn to_pixel_inverts_the_vertical_axis() {
    let extent = AxisExtent::new(25.0, 310.0);
    let range = ValueRange::new(0.0, 5.0);

    assert_eq!(to_pixel(0.0, range, extent), 310.0);
    assert_eq!(to_pixel(5.0, range, extent), 25.0);
    assert_relative_eq!(to_pixel(0.25, range, extent), 295.75, epsilon = 1e-9);
    assert!(to_pixel(3.0, range, extent) < to_pixel(2.0, range, extent));
}

#[test]
fn horizontal_axis_has_twenty_five_divisions_and_thirteen_majors() {
    let geometry = assemble_layout(&PlotConfig::default()).expect("default layout");
    let horizontal = &geometry.horizontal;

    assert_eq!(horizontal.ticks.len(), 25);
    assert_eq!(horizontal.grid_lines.len(), 25);
    assert_eq!(horizontal.major_tick_count(), 13);
    assert_eq!(horizontal.labels.len(), 13);

    for (index, tick) in horizontal.ticks.iter().enumerate() {
        assert_eq!(tick.is_major, index % 2 == 0);
        assert_eq!(tick.length, if index % 2 == 0 { 10.0 } else { 5.0 });
    }
    assert_relative_eq!(horizontal.ticks[0].position, 100.0);
    assert_relative_eq!(horizontal.ticks[24].position, 935.0, epsilon = 1e-9);
    assert_relative_eq!(horizontal.ticks[1].position, 100.0 + 835.0 / 24.0, epsilon = 1e-9);
}

#[test]
fn horizontal_labels_run_from_midnight_to_midnight() {
    let geometry = assemble_layout(&PlotConfig::default()).expect("default layout");
    let labels: Vec<&str> = geometry
        .horizontal
        .labels
        .iter()
        .map(|label| label.text.as_str())
        .collect();

    assert_eq!(
        labels,
        vec![
            "00:00", "02:00", "04:00", "06:00", "08:00", "10:00", "12:00", "14:00", "16:00",
            "18:00", "20:00", "22:00", "00:00",
        ]
    );
    assert!(
        geometry
            .horizontal
            .labels
            .windows(2)
            .all(|pair| pair[0].position < pair[1].position)
    );
}

#[test]
fn vertical_linear_axis_matches_scale_and_extent() {
    let geometry = assemble_layout(&PlotConfig::default()).expect("default layout");
    let vertical = &geometry.vertical;

    assert_eq!(vertical.ticks.len(), 17);
    assert_eq!(vertical.grid_lines.len(), 6);
    let labels: Vec<&str> = vertical.labels.iter().map(|label| label.text.as_str()).collect();
    assert_eq!(labels, vec!["0", "1", "2", "3", "4", "5"]);

    let grid: Vec<f64> = vertical.grid_lines.iter().map(|line| line.position).collect();
    for (position, expected) in grid.iter().zip([310.0, 253.0, 196.0, 139.0, 82.0, 25.0]) {
        assert_relative_eq!(*position, expected, epsilon = 1e-9);
    }
    assert_eq!(vertical.ticks[1].length, 5.0);
    assert_eq!(vertical.ticks[4].length, 10.0);
}

#[test]
fn vertical_linear_labels_keep_fractional_majors() {
    let config = PlotConfig::default().with_y_range(0.0, 2.0, 0.5);
    let geometry = assemble_layout(&config).expect("layout");
    let labels: Vec<&str> = geometry
        .vertical
        .labels
        .iter()
        .map(|label| label.text.as_str())
        .collect();

    assert_eq!(labels, vec!["0", "0.5", "1", "1.5", "2"]);
}

#[test]
fn vertical_linear_labels_follow_step_precision() {
    let config = PlotConfig::default().with_y_range(0.0, 1.0, 0.1);
    let geometry = assemble_layout(&config).expect("layout");
    let labels: Vec<&str> = geometry
        .vertical
        .labels
        .iter()
        .map(|label| label.text.as_str())
        .collect();

    assert_eq!(
        labels,
        vec!["0", "0.1", "0.2", "0.3", "0.4", "0.5", "0.6", "0.7", "0.8", "0.9", "1"]
    );
}

#[test]
fn vertical_ticks_stay_inside_the_frame_when_step_does_not_divide_range() {
    let config = PlotConfig::default().with_y_range(0.0, 5.0, 2.0);
    let geometry = assemble_layout(&config).expect("layout");
    let bounds = geometry.bounding_box;

    assert!(
        geometry
            .vertical
            .ticks
            .iter()
            .all(|tick| tick.position > bounds.y_start && tick.position <= bounds.y_end)
    );
    assert!(geometry.vertical.ticks.iter().filter(|tick| !tick.is_major).all(|tick| {
        (tick.position - bounds.y_start).abs() > 1e-9
    }));
}

#[test]
fn vertical_log_axis_labels_powers_of_ten_bottom_to_top() {
    let config = PlotConfig::default()
        .with_y_range(0.0, 3.0, 1.0)
        .with_log(true);
    let geometry = assemble_layout(&config).expect("log layout");
    let vertical = &geometry.vertical;

    let labels: Vec<&str> = vertical.labels.iter().map(|label| label.text.as_str()).collect();
    assert_eq!(labels, vec!["1", "10", "100", "1000"]);
    assert!(
        vertical
            .labels
            .windows(2)
            .all(|pair| pair[0].position > pair[1].position)
    );
    assert_relative_eq!(vertical.labels[0].position, 310.0, epsilon = 1e-9);
    assert_relative_eq!(vertical.labels[3].position, 25.0, epsilon = 1e-9);
    assert_eq!(vertical.ticks.len(), 13);
}

#[test]
fn vertical_log_axis_uses_exponential_labels_for_large_powers() {
    let config = PlotConfig::default()
        .with_y_range(3.0, 6.0, 1.0)
        .with_log(true);
    let geometry = assemble_layout(&config).expect("log layout");
    let labels: Vec<&str> = geometry
        .vertical
        .labels
        .iter()
        .map(|label| label.text.as_str())
        .collect();

    assert_eq!(labels, vec!["1000", "10000", "1e+05", "1e+06"]);
}

#[test]
fn custom_margins_move_the_bounding_box() {
    let config = PlotConfig::default()
        .with_canvas(600, 400)
        .with_margins(50, 80, 10);
    let geometry = assemble_layout(&config).expect("layout");
    let bounds = geometry.bounding_box;

    assert_eq!((bounds.x_start, bounds.x_end), (80.0, 590.0));
    assert_eq!((bounds.y_start, bounds.y_end), (10.0, 350.0));
}

#[test]
fn tick_lengths_come_from_config() {
    let config = PlotConfig::default().with_tick_lengths(14, 3);
    let geometry = assemble_layout(&config).expect("layout");

    for tick in geometry
        .horizontal
        .ticks
        .iter()
        .chain(&geometry.vertical.ticks)
    {
        assert_eq!(tick.length, if tick.is_major { 14.0 } else { 3.0 });
    }
}

#[test]
fn layout_is_deterministic() {
    let config = PlotConfig::default().with_log(true);
    assert_eq!(
        assemble_layout(&config).expect("first"),
        assemble_layout(&config).expect("second")
    );
}
