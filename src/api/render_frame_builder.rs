use tracing::trace;

use crate::core::NumberAxis;
use crate::interaction::MenuAction;
use crate::render::{
    CanvasLayerKind, CirclePrimitive, LinePrimitive, RectPrimitive, RenderFrame, Renderer,
    TextHAlign, TextPrimitive,
};

use super::{PlotArea, ScatterChart, ScatterStyle};

/// Average glyph advance relative to the font size, used to size text boxes
/// without a text backend.
const GLYPH_WIDTH_RATIO: f64 = 0.6;
const LABEL_GAP_PX: f64 = 3.0;
const MENU_TEXT_INDENT_PX: f64 = 8.0;

/// Turns the laid out chart state into a backend-agnostic frame.
pub(super) struct RenderFrameBuilder;

impl RenderFrameBuilder {
    pub(super) fn build<R: Renderer>(chart: &ScatterChart<R>) -> RenderFrame {
        let mut frame = RenderFrame::new(chart.viewport);
        let plot_area = chart.layout.plot_area;
        let style = &chart.style;

        Self::push_background(&mut frame, chart, plot_area, style);
        Self::push_axes(&mut frame, chart, plot_area, style);
        Self::push_segments(&mut frame, chart, style);
        Self::push_markers(&mut frame, chart, style);
        Self::push_tooltip(&mut frame, chart, style);
        Self::push_context_menu(&mut frame, chart, style);

        trace!(
            lines = frame.line_count(),
            circles = frame.circle_count(),
            texts = frame.text_count(),
            "build scatter render frame"
        );
        frame
    }

    fn push_background<R: Renderer>(
        frame: &mut RenderFrame,
        chart: &ScatterChart<R>,
        plot_area: PlotArea,
        style: &ScatterStyle,
    ) {
        let layer = frame.layer_mut(CanvasLayerKind::Background);
        layer.rects.push(RectPrimitive::new(
            0.0,
            0.0,
            f64::from(chart.viewport.width),
            f64::from(chart.viewport.height),
            style.background_color,
        ));
        layer.rects.push(RectPrimitive::new(
            plot_area.left,
            plot_area.top,
            plot_area.width,
            plot_area.height,
            style.plot_background_color,
        ));

        if !style.show_grid {
            return;
        }
        for value in chart.x_axis.ticks() {
            let x = plot_area.left + chart.x_axis.display_position(value);
            layer.lines.push(LinePrimitive::new(
                x,
                plot_area.top,
                x,
                plot_area.bottom(),
                1.0,
                style.grid_color,
            ));
        }
        for value in chart.y_axis.ticks() {
            let y = plot_area.top + chart.y_axis.display_position(value);
            layer.lines.push(LinePrimitive::new(
                plot_area.left,
                y,
                plot_area.right(),
                y,
                1.0,
                style.grid_color,
            ));
        }
    }

    fn push_axes<R: Renderer>(
        frame: &mut RenderFrame,
        chart: &ScatterChart<R>,
        plot_area: PlotArea,
        style: &ScatterStyle,
    ) {
        let layer = frame.layer_mut(CanvasLayerKind::Axis);
        let tick = style.tick_length_px;
        let font = style.label_font_size_px;

        layer.lines.push(LinePrimitive::new(
            plot_area.left,
            plot_area.bottom(),
            plot_area.right(),
            plot_area.bottom(),
            style.axis_line_width,
            style.axis_color,
        ));
        layer.lines.push(LinePrimitive::new(
            plot_area.left,
            plot_area.top,
            plot_area.left,
            plot_area.bottom(),
            style.axis_line_width,
            style.axis_color,
        ));

        for value in chart.x_axis.ticks() {
            let x = plot_area.left + chart.x_axis.display_position(value);
            layer.lines.push(LinePrimitive::new(
                x,
                plot_area.bottom(),
                x,
                plot_area.bottom() + tick,
                style.axis_line_width,
                style.axis_color,
            ));
            layer.texts.push(TextPrimitive::new(
                format_tick_label(value, chart.x_axis),
                x,
                plot_area.bottom() + tick + LABEL_GAP_PX,
                font,
                style.label_color,
                TextHAlign::Center,
            ));
        }

        for value in chart.y_axis.ticks() {
            let y = plot_area.top + chart.y_axis.display_position(value);
            layer.lines.push(LinePrimitive::new(
                plot_area.left - tick,
                y,
                plot_area.left,
                y,
                style.axis_line_width,
                style.axis_color,
            ));
            layer.texts.push(TextPrimitive::new(
                format_tick_label(value, chart.y_axis),
                plot_area.left - tick - LABEL_GAP_PX,
                y - font / 2.0,
                font,
                style.label_color,
                TextHAlign::Right,
            ));
        }

        if !chart.x_label.is_empty() {
            layer.texts.push(TextPrimitive::new(
                chart.x_label.clone(),
                plot_area.left + plot_area.width / 2.0,
                (f64::from(chart.viewport.height) - font - LABEL_GAP_PX).max(0.0),
                font,
                style.label_color,
                TextHAlign::Center,
            ));
        }
        if !chart.y_label.is_empty() {
            layer.texts.push(TextPrimitive::new(
                chart.y_label.clone(),
                LABEL_GAP_PX,
                LABEL_GAP_PX,
                font,
                style.label_color,
                TextHAlign::Left,
            ));
        }
    }

    fn push_segments<R: Renderer>(frame: &mut RenderFrame, chart: &ScatterChart<R>, style: &ScatterStyle) {
        let layer = frame.layer_mut(CanvasLayerKind::Series);
        for segment in &chart.layout.segments {
            let line = LinePrimitive::new(
                segment.x1,
                segment.y1,
                segment.x2,
                segment.y2,
                style.segment_width,
                style.segment_color,
            );
            if line.validate().is_err() {
                trace!(from = segment.from.id(), to = segment.to.id(), "skip non-finite segment");
                continue;
            }
            layer.lines.push(line);
        }
    }

    fn push_markers<R: Renderer>(frame: &mut RenderFrame, chart: &ScatterChart<R>, style: &ScatterStyle) {
        let hovered = chart.interaction.hovered();
        let layer = frame.layer_mut(CanvasLayerKind::Markers);
        for marker in &chart.layout.markers {
            if !marker.center_x.is_finite() || !marker.center_y.is_finite() {
                trace!(marker = marker.marker.id(), "skip non-finite marker");
                continue;
            }
            let highlighted =
                hovered == Some(marker.marker) || chart.interaction.is_dragging(marker.marker);
            let fill = if highlighted {
                style.marker_hover_fill_color
            } else {
                style.marker_fill_color
            };
            layer.circles.push(CirclePrimitive::new(
                marker.center_x,
                marker.center_y,
                marker.radius,
                fill,
                style.marker_stroke_width,
                style.marker_stroke_color,
            ));
        }
    }

    fn push_tooltip<R: Renderer>(frame: &mut RenderFrame, chart: &ScatterChart<R>, style: &ScatterStyle) {
        let tooltip = chart.interaction.tooltip();
        if !tooltip.visible || tooltip.text.is_empty() {
            return;
        }

        let font = style.tooltip_font_size_px;
        let padding = style.tooltip_padding_px;
        let width = estimate_text_width_px(&tooltip.text, font) + 2.0 * padding;
        let height = font + 2.0 * padding;
        let layer = frame.layer_mut(CanvasLayerKind::Overlay);
        layer.rects.push(
            RectPrimitive::new(
                tooltip.anchor_x,
                tooltip.anchor_y,
                width,
                height,
                style.tooltip_background_color,
            )
            .with_corner_radius(3.0),
        );
        layer.texts.push(TextPrimitive::new(
            tooltip.text.clone(),
            tooltip.anchor_x + padding,
            tooltip.anchor_y + padding,
            font,
            style.tooltip_text_color,
            TextHAlign::Left,
        ));
    }

    fn push_context_menu<R: Renderer>(
        frame: &mut RenderFrame,
        chart: &ScatterChart<R>,
        style: &ScatterStyle,
    ) {
        let items = chart.context_menu_geometry();
        let layer = frame.layer_mut(CanvasLayerKind::Overlay);
        for item in items {
            layer.rects.push(
                RectPrimitive::new(
                    item.x,
                    item.y,
                    item.width,
                    item.height,
                    style.menu_background_color,
                )
                .with_border(1.0, style.menu_border_color),
            );
            let label = match item.action {
                MenuAction::AddPoint => &style.add_point_label,
                MenuAction::DeletePoint => &style.delete_point_label,
            };
            let color = if item.enabled {
                style.menu_text_color
            } else {
                style.menu_disabled_text_color
            };
            layer.texts.push(TextPrimitive::new(
                label.clone(),
                item.x + MENU_TEXT_INDENT_PX,
                item.y + (item.height - style.menu_font_size_px) / 2.0,
                style.menu_font_size_px,
                color,
                TextHAlign::Left,
            ));
        }
    }
}

/// Whole tick values print without decimals; fractional ticks keep two.
fn format_tick_label(value: f64, axis: NumberAxis) -> String {
    let rounded = value.round();
    if (value - rounded).abs() <= axis.tick_unit() * 1e-6 {
        // `+ 0.0` folds -0 into 0
        format!("{:.0}", rounded + 0.0)
    } else {
        format!("{value:.2}")
    }
}

fn estimate_text_width_px(text: &str, font_size_px: f64) -> f64 {
    text.chars().count() as f64 * font_size_px * GLYPH_WIDTH_RATIO
}
