use approx::assert_abs_diff_eq;
use scatter_chart::ChartError;
use scatter_chart::core::{AxisOrientation, NumberAxis};

fn build_axis(orientation: AxisOrientation, length_px: f64) -> NumberAxis {
    let mut axis = NumberAxis::new(-100.0, 100.0, orientation).expect("valid axis");
    axis.set_length_px(length_px);
    axis
}

#[test]
fn horizontal_axis_grows_rightwards() {
    let axis = build_axis(AxisOrientation::Horizontal, 200.0);
    assert_abs_diff_eq!(axis.display_position(-100.0), 0.0);
    assert_abs_diff_eq!(axis.display_position(0.0), 100.0);
    assert_abs_diff_eq!(axis.display_position(100.0), 200.0);
}

#[test]
fn vertical_axis_is_inverted() {
    let axis = build_axis(AxisOrientation::Vertical, 200.0);
    assert_abs_diff_eq!(axis.display_position(100.0), 0.0);
    assert_abs_diff_eq!(axis.display_position(-100.0), 200.0);
    assert_abs_diff_eq!(axis.value_for_display(50.0), 50.0);
}

#[test]
fn data_value_truncates_toward_zero() {
    let axis = build_axis(AxisOrientation::Horizontal, 200.0);
    assert_eq!(axis.data_value(150.7), 50.0);
    assert_eq!(axis.data_value(49.5), -50.0);

    let vertical = build_axis(AxisOrientation::Vertical, 200.0);
    assert_eq!(vertical.data_value(199.9), -99.0);
    assert_eq!(vertical.data_value(0.0), 100.0);
}

#[test]
fn data_value_clamps_to_bounds() {
    let axis = build_axis(AxisOrientation::Horizontal, 200.0);
    assert_eq!(axis.data_value(500.0), 100.0);
    assert_eq!(axis.data_value(-50.0), -100.0);
    assert_eq!(axis.data_value(f64::INFINITY), 100.0);
    assert_eq!(axis.data_value(f64::NEG_INFINITY), -100.0);
}

#[test]
fn nan_pixel_truncates_to_zero_before_clamping() {
    let axis = build_axis(AxisOrientation::Horizontal, 200.0);
    assert_eq!(axis.data_value(f64::NAN), 0.0);

    let shifted = NumberAxis::new(10.0, 20.0, AxisOrientation::Horizontal).expect("valid axis");
    assert_eq!(shifted.data_value(f64::NAN), 10.0);
}

#[test]
fn zero_length_axis_maps_every_pixel_to_lower_bound() {
    let axis = build_axis(AxisOrientation::Vertical, 0.0);
    assert_eq!(axis.value_for_display(123.0), -100.0);
    assert_eq!(axis.data_value(123.0), -100.0);
}

#[test]
fn invalid_lengths_collapse_to_zero() {
    let mut axis = build_axis(AxisOrientation::Horizontal, 200.0);
    axis.set_length_px(-5.0);
    assert_eq!(axis.length_px(), 0.0);
    axis.set_length_px(f64::NAN);
    assert_eq!(axis.length_px(), 0.0);
}

#[test]
fn invalid_bounds_are_rejected() {
    let err = NumberAxis::new(5.0, 5.0, AxisOrientation::Horizontal).expect_err("empty range");
    assert!(matches!(err, ChartError::InvalidAxis { .. }));

    let err = NumberAxis::new(f64::NAN, 5.0, AxisOrientation::Vertical).expect_err("nan bound");
    assert!(matches!(err, ChartError::InvalidAxis { .. }));

    let mut axis = build_axis(AxisOrientation::Horizontal, 200.0);
    assert!(axis.set_bounds(10.0, -10.0).is_err());
    assert_eq!(axis.bounds(), (-100.0, 100.0));
}

#[test]
fn non_positive_tick_unit_is_rejected() {
    let axis = build_axis(AxisOrientation::Horizontal, 200.0);
    assert!(matches!(
        axis.with_tick_unit(0.0),
        Err(ChartError::InvalidData(_))
    ));
    assert!(axis.with_tick_unit(-1.0).is_err());
    assert!(axis.with_tick_unit(f64::INFINITY).is_err());
}

#[test]
fn ticks_cover_the_full_range() {
    let axis = build_axis(AxisOrientation::Horizontal, 200.0)
        .with_tick_unit(10.0)
        .expect("valid tick unit");
    let ticks = axis.ticks();
    assert_eq!(ticks.len(), 21);
    assert_eq!(ticks.first().copied(), Some(-100.0));
    assert_eq!(ticks.last().copied(), Some(100.0));
}

#[test]
fn tiny_tick_unit_is_capped() {
    let axis = build_axis(AxisOrientation::Horizontal, 200.0)
        .with_tick_unit(1e-6)
        .expect("valid tick unit");
    assert_eq!(axis.ticks().len(), 1_000);
}
