use serde::{Deserialize, Serialize};

use crate::core::{AxisOrientation, NumberAxis, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Data range, tick spacing and caption of one axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisConfig {
    pub label: String,
    pub lower_bound: f64,
    pub upper_bound: f64,
    pub tick_unit: f64,
}

impl AxisConfig {
    #[must_use]
    pub fn new(label: impl Into<String>, lower_bound: f64, upper_bound: f64, tick_unit: f64) -> Self {
        Self {
            label: label.into(),
            lower_bound,
            upper_bound,
            tick_unit,
        }
    }

    pub fn build_axis(&self, orientation: AxisOrientation) -> ChartResult<NumberAxis> {
        NumberAxis::new(self.lower_bound, self.upper_bound, orientation)?.with_tick_unit(self.tick_unit)
    }
}

/// Space reserved around the plot area, in pixels.
///
/// `left` holds the vertical axis, `bottom` the horizontal one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotInsets {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl PlotInsets {
    #[must_use]
    pub const fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    #[must_use]
    pub const fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    fn validate(self) -> ChartResult<Self> {
        for (name, value) in [
            ("left", self.left),
            ("top", self.top),
            ("right", self.right),
            ("bottom", self.bottom),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "plot inset `{name}` must be finite and >= 0"
                )));
            }
        }
        Ok(self)
    }
}

impl Default for PlotInsets {
    fn default() -> Self {
        Self::new(56.0, 16.0, 20.0, 44.0)
    }
}

/// Visual tuning of the chart. Defaults follow the classic editor look:
/// red hollow markers that fill orange under the pointer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScatterStyle {
    pub plot_insets: PlotInsets,
    pub background_color: Color,
    pub plot_background_color: Color,
    pub show_grid: bool,
    pub grid_color: Color,
    pub axis_color: Color,
    pub axis_line_width: f64,
    pub tick_length_px: f64,
    pub label_font_size_px: f64,
    pub label_color: Color,
    pub segment_color: Color,
    pub segment_width: f64,
    pub marker_stroke_color: Color,
    pub marker_fill_color: Color,
    pub marker_hover_fill_color: Color,
    pub marker_stroke_width: f64,
    pub marker_hit_slop_px: f64,
    pub tooltip_offset_px: f64,
    pub tooltip_font_size_px: f64,
    pub tooltip_padding_px: f64,
    pub tooltip_background_color: Color,
    pub tooltip_text_color: Color,
    pub menu_item_width_px: f64,
    pub menu_item_height_px: f64,
    pub menu_font_size_px: f64,
    pub menu_background_color: Color,
    pub menu_border_color: Color,
    pub menu_text_color: Color,
    pub menu_disabled_text_color: Color,
    pub add_point_label: String,
    pub delete_point_label: String,
}

impl Default for ScatterStyle {
    fn default() -> Self {
        Self {
            plot_insets: PlotInsets::default(),
            background_color: Color::rgb(0.96, 0.96, 0.96),
            plot_background_color: Color::rgb(1.0, 1.0, 1.0),
            show_grid: true,
            grid_color: Color::rgb(0.88, 0.88, 0.88),
            axis_color: Color::rgb(0.25, 0.25, 0.25),
            axis_line_width: 1.0,
            tick_length_px: 5.0,
            label_font_size_px: 10.0,
            label_color: Color::rgb(0.2, 0.2, 0.2),
            segment_color: Color::rgb(0.1, 0.1, 0.1),
            segment_width: 1.5,
            marker_stroke_color: Color::rgb(1.0, 0.0, 0.0),
            marker_fill_color: Color::TRANSPARENT,
            marker_hover_fill_color: Color::rgb(1.0, 0.647, 0.0),
            marker_stroke_width: 1.5,
            marker_hit_slop_px: 2.0,
            tooltip_offset_px: 10.0,
            tooltip_font_size_px: 11.0,
            tooltip_padding_px: 4.0,
            tooltip_background_color: Color::rgba(0.12, 0.12, 0.12, 0.9),
            tooltip_text_color: Color::rgb(1.0, 1.0, 1.0),
            menu_item_width_px: 120.0,
            menu_item_height_px: 24.0,
            menu_font_size_px: 11.0,
            menu_background_color: Color::rgb(0.98, 0.98, 0.98),
            menu_border_color: Color::rgb(0.6, 0.6, 0.6),
            menu_text_color: Color::rgb(0.1, 0.1, 0.1),
            menu_disabled_text_color: Color::rgb(0.65, 0.65, 0.65),
            add_point_label: "Add Point".to_owned(),
            delete_point_label: "Delete Point".to_owned(),
        }
    }
}

impl ScatterStyle {
    pub fn validate(&self) -> ChartResult<()> {
        self.plot_insets.validate()?;

        for (name, value) in [
            ("axis_line_width", self.axis_line_width),
            ("label_font_size_px", self.label_font_size_px),
            ("segment_width", self.segment_width),
            ("tooltip_font_size_px", self.tooltip_font_size_px),
            ("menu_item_width_px", self.menu_item_width_px),
            ("menu_item_height_px", self.menu_item_height_px),
            ("menu_font_size_px", self.menu_font_size_px),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "style `{name}` must be finite and > 0"
                )));
            }
        }

        for (name, value) in [
            ("tick_length_px", self.tick_length_px),
            ("marker_stroke_width", self.marker_stroke_width),
            ("marker_hit_slop_px", self.marker_hit_slop_px),
            ("tooltip_padding_px", self.tooltip_padding_px),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "style `{name}` must be finite and >= 0"
                )));
            }
        }

        if !self.tooltip_offset_px.is_finite() {
            return Err(ChartError::InvalidData(
                "style `tooltip_offset_px` must be finite".to_owned(),
            ));
        }

        for color in [
            self.background_color,
            self.plot_background_color,
            self.grid_color,
            self.axis_color,
            self.label_color,
            self.segment_color,
            self.marker_stroke_color,
            self.marker_fill_color,
            self.marker_hover_fill_color,
            self.tooltip_background_color,
            self.tooltip_text_color,
            self.menu_background_color,
            self.menu_border_color,
            self.menu_text_color,
            self.menu_disabled_text_color,
        ] {
            color.validate()?;
        }

        if self.add_point_label.is_empty() || self.delete_point_label.is_empty() {
            return Err(ChartError::InvalidData(
                "context menu labels must not be empty".to_owned(),
            ));
        }

        Ok(())
    }
}

/// Public chart bootstrap configuration.
///
/// Serializable so host applications can keep chart setups around without
/// inventing their own format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterChartConfig {
    pub viewport: Viewport,
    pub x_axis: AxisConfig,
    pub y_axis: AxisConfig,
    #[serde(default)]
    pub style: ScatterStyle,
}

impl ScatterChartConfig {
    #[must_use]
    pub fn new(viewport: Viewport, x_axis: AxisConfig, y_axis: AxisConfig) -> Self {
        Self {
            viewport,
            x_axis,
            y_axis,
            style: ScatterStyle::default(),
        }
    }

    #[must_use]
    pub fn with_style(mut self, style: ScatterStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn with_plot_insets(mut self, insets: PlotInsets) -> Self {
        self.style.plot_insets = insets;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        self.x_axis.build_axis(AxisOrientation::Horizontal)?;
        self.y_axis.build_axis(AxisOrientation::Vertical)?;
        self.style.validate()
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize chart config: {e}")))
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse chart config: {e}")))?;
        config.validate()?;
        Ok(config)
    }
}

impl Default for ScatterChartConfig {
    fn default() -> Self {
        Self::new(
            Viewport::new(800, 600),
            AxisConfig::new("X Axis", -100.0, 100.0, 10.0),
            AxisConfig::new("Y Axis", -100.0, 100.0, 10.0),
        )
    }
}
