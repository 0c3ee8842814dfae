use tracing::debug;

use crate::core::{AxisOrientation, EditablePoint, NumberAxis, ScatterSeries, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::interaction::InteractionState;
use crate::render::Renderer;

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

use super::{LayoutSnapshot, RenderFrameBuilder, ScatterChartConfig, ScatterStyle};

/// Editable scatter chart: ordered points joined by segments, edited through
/// pointer gestures.
///
/// `ScatterChart` owns the axes, the point series, the transient gesture
/// state and the renderer. Hosts forward pointer input (either raw through
/// `dispatch_pointer_event` or per gesture) and call `render` when the
/// widget needs repainting.
pub struct ScatterChart<R: Renderer> {
    pub(super) renderer: R,
    pub(super) viewport: Viewport,
    pub(super) x_axis: NumberAxis,
    pub(super) y_axis: NumberAxis,
    pub(super) x_label: String,
    pub(super) y_label: String,
    pub(super) style: ScatterStyle,
    pub(super) series: ScatterSeries,
    pub(super) interaction: InteractionState,
    pub(super) layout: LayoutSnapshot,
    pub(super) layout_requested: bool,
}

impl<R: Renderer> ScatterChart<R> {
    pub fn new(renderer: R, config: ScatterChartConfig) -> ChartResult<Self> {
        config.validate()?;

        let x_axis = config.x_axis.build_axis(AxisOrientation::Horizontal)?;
        let y_axis = config.y_axis.build_axis(AxisOrientation::Vertical)?;
        debug!(
            width = config.viewport.width,
            height = config.viewport.height,
            x_bounds = ?x_axis.bounds(),
            y_bounds = ?y_axis.bounds(),
            "create scatter chart"
        );

        Ok(Self {
            renderer,
            viewport: config.viewport,
            x_axis,
            y_axis,
            x_label: config.x_axis.label,
            y_label: config.y_axis.label,
            style: config.style,
            series: ScatterSeries::new(),
            interaction: InteractionState::default(),
            layout: LayoutSnapshot::default(),
            layout_requested: true,
        })
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn set_viewport(&mut self, viewport: Viewport) -> ChartResult<()> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        if viewport != self.viewport {
            self.viewport = viewport;
            self.request_layout();
        }
        Ok(())
    }

    #[must_use]
    pub fn x_axis(&self) -> NumberAxis {
        self.x_axis
    }

    #[must_use]
    pub fn y_axis(&self) -> NumberAxis {
        self.y_axis
    }

    #[must_use]
    pub fn x_label(&self) -> &str {
        &self.x_label
    }

    #[must_use]
    pub fn y_label(&self) -> &str {
        &self.y_label
    }

    /// Rescales the horizontal axis. Existing points keep their values; the
    /// boundary points are re-pinned by their next drag.
    pub fn set_x_axis_bounds(&mut self, lower_bound: f64, upper_bound: f64) -> ChartResult<()> {
        self.x_axis.set_bounds(lower_bound, upper_bound)?;
        self.request_layout();
        Ok(())
    }

    pub fn set_y_axis_bounds(&mut self, lower_bound: f64, upper_bound: f64) -> ChartResult<()> {
        self.y_axis.set_bounds(lower_bound, upper_bound)?;
        self.request_layout();
        Ok(())
    }

    #[must_use]
    pub fn style(&self) -> &ScatterStyle {
        &self.style
    }

    pub fn set_style(&mut self, style: ScatterStyle) -> ChartResult<()> {
        style.validate()?;
        self.style = style;
        self.request_layout();
        Ok(())
    }

    #[must_use]
    pub fn series(&self) -> &ScatterSeries {
        &self.series
    }

    #[must_use]
    pub fn points(&self) -> &[EditablePoint] {
        self.series.points()
    }

    #[must_use]
    pub fn interaction(&self) -> &InteractionState {
        &self.interaction
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    pub fn render(&mut self) -> ChartResult<()> {
        let frame = self.build_render_frame();
        self.renderer.render(&frame)
    }

    /// Renders the frame into an external cairo context.
    ///
    /// This path is used by GTK draw callbacks while keeping the renderer
    /// implementation decoupled from GTK-specific APIs.
    #[cfg(feature = "cairo-backend")]
    pub fn render_on_cairo_context(&mut self, context: &cairo::Context) -> ChartResult<()>
    where
        R: CairoContextRenderer,
    {
        let frame = self.build_render_frame();
        self.renderer.render_on_cairo_context(context, &frame)
    }

    /// Lays out pending changes and materializes the current scene.
    pub fn build_render_frame(&mut self) -> crate::render::RenderFrame {
        self.ensure_layout();
        RenderFrameBuilder::build(self)
    }
}
