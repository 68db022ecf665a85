use proptest::prelude::*;
use svg_plot_gen::PlotConfig;
use svg_plot_gen::api::assemble_layout;

proptest! {
    #[test]
    fn vertical_positions_strictly_decrease_with_value(
        y_first in -1_000.0f64..1_000.0,
        span in 0.5f64..500.0,
        steps in 1u32..40,
        log in any::<bool>(),
        width in 300u32..2_000,
        height in 200u32..1_200,
    ) {
        let (y_first, span) = if log { (y_first / 10.0, span.min(50.0)) } else { (y_first, span) };
        let config = PlotConfig::default()
            .with_canvas(width, height)
            .with_y_range(y_first, y_first + span, span / f64::from(steps))
            .with_log(log);
        let geometry = assemble_layout(&config).expect("valid layout");
        let vertical = &geometry.vertical;

        prop_assert!(vertical.ticks.windows(2).all(|pair| pair[0].position > pair[1].position));
        prop_assert!(vertical.grid_lines.windows(2).all(|pair| pair[0].position > pair[1].position));
        prop_assert!(vertical.labels.windows(2).all(|pair| pair[0].position > pair[1].position));
        prop_assert_eq!(vertical.labels.len(), vertical.grid_lines.len());
        prop_assert_eq!(vertical.labels.len(), vertical.major_tick_count());
    }

    #[test]
    fn vertical_ticks_never_leave_the_frame(
        y_first in -1_000.0f64..1_000.0,
        span in 0.5f64..500.0,
        step_fraction in 0.01f64..1.0,
        log in any::<bool>(),
    ) {
        let (y_first, span) = if log { (y_first / 10.0, span.min(50.0)) } else { (y_first, span) };
        let config = PlotConfig::default()
            .with_y_range(y_first, y_first + span, span * step_fraction)
            .with_log(log);
        let geometry = assemble_layout(&config).expect("valid layout");
        let bounds = geometry.bounding_box;

        for tick in &geometry.vertical.ticks {
            prop_assert!(tick.position >= bounds.y_start - 1e-6);
            prop_assert!(tick.position <= bounds.y_end + 1e-6);
        }
    }

    #[test]
    fn first_and_last_majors_sit_on_the_plot_edges(
        y_first in -100.0f64..100.0,
        steps in 1u32..20,
        step in 0.1f64..10.0,
    ) {
        let config = PlotConfig::default()
            .with_y_range(y_first, y_first + step * f64::from(steps), step);
        let geometry = assemble_layout(&config).expect("valid layout");
        let grid = &geometry.vertical.grid_lines;
        let bounds = geometry.bounding_box;

        let bottom = grid.first().expect("first grid line").position;
        let top = grid.last().expect("last grid line").position;
        prop_assert!((bottom - bounds.y_end).abs() <= 1e-6);
        prop_assert!((top - bounds.y_start).abs() <= 1e-6);
    }

    #[test]
    fn horizontal_axis_shape_is_independent_of_range(
        y_first in -100.0f64..100.0,
        span in 0.5f64..100.0,
        log in any::<bool>(),
        width in 300u32..2_000,
    ) {
        let config = PlotConfig::default()
            .with_canvas(width, 380)
            .with_y_range(y_first, y_first + span, span / 4.0)
            .with_log(log);
        let geometry = assemble_layout(&config).expect("valid layout");

        prop_assert_eq!(geometry.horizontal.ticks.len(), 25);
        prop_assert_eq!(geometry.horizontal.major_tick_count(), 13);
        prop_assert_eq!(geometry.horizontal.labels.len(), 13);
    }
}
