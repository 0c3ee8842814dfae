use scatter_chart::ChartError;
use scatter_chart::api::{
    AxisConfig, ChartSnapshot, PlotInsets, ScatterChart, ScatterChartConfig, ScatterStyle,
};
use scatter_chart::core::{DataPoint, Viewport};
use scatter_chart::render::{Color, NullRenderer};

#[test]
fn default_config_matches_editor_demo() {
    let config = ScatterChartConfig::default();
    assert_eq!(config.viewport, Viewport::new(800, 600));
    assert_eq!(config.x_axis, AxisConfig::new("X Axis", -100.0, 100.0, 10.0));
    assert_eq!(config.y_axis, AxisConfig::new("Y Axis", -100.0, 100.0, 10.0));
    assert_eq!(config.style.tooltip_offset_px, 10.0);
    assert_eq!(config.style.marker_stroke_color, Color::rgb(1.0, 0.0, 0.0));
    assert!(config.style.marker_fill_color.is_transparent());
    assert_eq!(config.style.add_point_label, "Add Point");
    assert_eq!(config.style.delete_point_label, "Delete Point");
    config.validate().expect("default config is valid");
}

#[test]
fn config_round_trips_through_json() {
    let config = ScatterChartConfig::default().with_plot_insets(PlotInsets::new(10.0, 4.0, 6.0, 12.0));
    let json = config.to_json_pretty().expect("serialize config");
    let parsed = ScatterChartConfig::from_json_str(&json).expect("parse config");
    assert_eq!(parsed, config);
}

#[test]
fn missing_style_falls_back_to_defaults() {
    let json = r#"{
        "viewport": { "width": 320, "height": 240 },
        "x_axis": { "label": "Time", "lower_bound": 0.0, "upper_bound": 50.0, "tick_unit": 5.0 },
        "y_axis": { "label": "Level", "lower_bound": -1.0, "upper_bound": 1.0, "tick_unit": 0.5 }
    }"#;
    let config = ScatterChartConfig::from_json_str(json).expect("parse config");
    assert_eq!(config.style, ScatterStyle::default());
    assert_eq!(config.x_axis.label, "Time");
}

#[test]
fn partial_style_keeps_unspecified_fields() {
    let json = r#"{
        "viewport": { "width": 320, "height": 240 },
        "x_axis": { "label": "", "lower_bound": 0.0, "upper_bound": 50.0, "tick_unit": 5.0 },
        "y_axis": { "label": "", "lower_bound": 0.0, "upper_bound": 50.0, "tick_unit": 5.0 },
        "style": { "tooltip_offset_px": 16.0, "show_grid": false }
    }"#;
    let config = ScatterChartConfig::from_json_str(json).expect("parse config");
    assert_eq!(config.style.tooltip_offset_px, 16.0);
    assert!(!config.style.show_grid);
    assert_eq!(config.style.menu_item_height_px, ScatterStyle::default().menu_item_height_px);
}

#[test]
fn invalid_axis_is_rejected() {
    let json = r#"{
        "viewport": { "width": 320, "height": 240 },
        "x_axis": { "label": "X", "lower_bound": 5.0, "upper_bound": 5.0, "tick_unit": 1.0 },
        "y_axis": { "label": "Y", "lower_bound": 0.0, "upper_bound": 1.0, "tick_unit": 0.1 }
    }"#;
    let err = ScatterChartConfig::from_json_str(json).expect_err("empty x range");
    assert!(matches!(err, ChartError::InvalidAxis { .. }));
}

#[test]
fn invalid_tick_unit_is_rejected() {
    let mut config = ScatterChartConfig::default();
    config.y_axis.tick_unit = 0.0;
    assert!(matches!(config.validate(), Err(ChartError::InvalidData(_))));
}

#[test]
fn invalid_viewport_and_style_are_rejected() {
    let mut config = ScatterChartConfig::default();
    config.viewport = Viewport::new(0, 600);
    assert!(matches!(
        ScatterChart::new(NullRenderer::default(), config),
        Err(ChartError::InvalidViewport { .. })
    ));

    let mut config = ScatterChartConfig::default();
    config.style.segment_width = -1.0;
    assert!(ScatterChart::new(NullRenderer::default(), config).is_err());

    let mut config = ScatterChartConfig::default();
    config.style.delete_point_label.clear();
    assert!(config.validate().is_err());

    let mut config = ScatterChartConfig::default();
    config.style.plot_insets.left = f64::NAN;
    assert!(config.validate().is_err());
}

#[test]
fn malformed_json_is_reported_as_invalid_data() {
    let err = ScatterChartConfig::from_json_str("{ not json").expect_err("malformed");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn snapshot_captures_points_and_interaction() {
    let mut chart = ScatterChart::new(NullRenderer::default(), ScatterChartConfig::default())
        .expect("chart init");
    chart.extend_points([DataPoint::new(-100.0, 0.0), DataPoint::new(100.0, 0.0)]);
    chart.on_secondary_click_background(400.0, 300.0);

    let snapshot = chart.snapshot();
    assert_eq!(snapshot.points.len(), 2);
    assert_eq!(snapshot.layout.markers.len(), 2);
    assert!(snapshot.interaction.menu().visible);
    assert_eq!(snapshot.x_axis.bounds(), (-100.0, 100.0));

    let json = chart.snapshot_json_pretty().expect("serialize snapshot");
    let parsed = ChartSnapshot::from_json_str(&json).expect("parse snapshot");
    assert_eq!(parsed.points, snapshot.points);
    assert_eq!(parsed.interaction, snapshot.interaction);
    assert_eq!(parsed.viewport, snapshot.viewport);
    assert_eq!(
        parsed.interaction.pending_add(),
        Some(DataPoint::new(-4.0, -5.0))
    );
}
