use std::cell::RefCell;
use std::rc::Rc;

use gtk4 as gtk;
use gtk4::prelude::*;
use tracing::warn;

use crate::api::ScatterChart;
use crate::core::Viewport;
use crate::interaction::{PointerButton, PointerEvent};
use crate::render::CairoRenderer;

pub type SharedScatterChart = Rc<RefCell<ScatterChart<CairoRenderer>>>;

const PRIMARY_BUTTON: u32 = 1;
const SECONDARY_BUTTON: u32 = 3;

/// Embeds a `ScatterChart` into a GTK4 `DrawingArea`.
///
/// The adapter wires drawing, resize and pointer controllers; every input is
/// forwarded through `ScatterChart::dispatch_pointer_event` and the area is
/// redrawn when the chart asks for it.
pub struct GtkScatterAdapter {
    chart: SharedScatterChart,
    drawing_area: gtk::DrawingArea,
}

impl GtkScatterAdapter {
    #[must_use]
    pub fn new(chart: ScatterChart<CairoRenderer>) -> Self {
        let viewport = chart.viewport();
        let chart = Rc::new(RefCell::new(chart));
        let drawing_area = gtk::DrawingArea::new();
        drawing_area.set_content_width(i32::try_from(viewport.width).unwrap_or(i32::MAX));
        drawing_area.set_content_height(i32::try_from(viewport.height).unwrap_or(i32::MAX));
        drawing_area.set_hexpand(true);
        drawing_area.set_vexpand(true);
        drawing_area.set_focusable(true);

        attach_draw_func(&drawing_area, Rc::clone(&chart));
        attach_resize(&drawing_area, Rc::clone(&chart));
        attach_motion(&drawing_area, Rc::clone(&chart));
        attach_primary_drag(&drawing_area, Rc::clone(&chart));
        attach_secondary_click(&drawing_area, Rc::clone(&chart));

        Self {
            chart,
            drawing_area,
        }
    }

    #[must_use]
    pub fn chart(&self) -> SharedScatterChart {
        Rc::clone(&self.chart)
    }

    #[must_use]
    pub fn drawing_area(&self) -> &gtk::DrawingArea {
        &self.drawing_area
    }
}

fn viewport_from_size(width: i32, height: i32) -> Option<Viewport> {
    let viewport = Viewport::new(
        u32::try_from(width).ok()?,
        u32::try_from(height).ok()?,
    );
    viewport.is_valid().then_some(viewport)
}

fn attach_draw_func(drawing_area: &gtk::DrawingArea, chart: SharedScatterChart) {
    drawing_area.set_draw_func(move |_, context, width, height| {
        let Ok(mut chart) = chart.try_borrow_mut() else {
            return;
        };
        if let Some(viewport) = viewport_from_size(width, height) {
            if let Err(err) = chart.set_viewport(viewport) {
                warn!(error = %err, "skipping viewport sync before draw");
            }
        }
        if let Err(err) = chart.render_on_cairo_context(context) {
            warn!(error = %err, "failed to render scatter chart");
        }
    });
}

fn attach_resize(drawing_area: &gtk::DrawingArea, chart: SharedScatterChart) {
    drawing_area.connect_resize(move |area, width, height| {
        let Some(viewport) = viewport_from_size(width, height) else {
            return;
        };
        if let Ok(mut chart) = chart.try_borrow_mut() {
            if let Err(err) = chart.set_viewport(viewport) {
                warn!(error = %err, "failed to resize scatter chart");
            }
        }
        area.queue_draw();
    });
}

fn dispatch(drawing_area: &gtk::DrawingArea, chart: &SharedScatterChart, event: PointerEvent) {
    let redraw = chart
        .try_borrow_mut()
        .map(|mut chart| chart.dispatch_pointer_event(event))
        .unwrap_or(false);
    if redraw {
        drawing_area.queue_draw();
    }
}

fn attach_motion(drawing_area: &gtk::DrawingArea, chart: SharedScatterChart) {
    let motion = gtk::EventControllerMotion::new();
    {
        let chart = Rc::clone(&chart);
        let drawing_area = drawing_area.clone();
        motion.connect_motion(move |_, x, y| {
            dispatch(&drawing_area, &chart, PointerEvent::Moved { x, y });
        });
    }
    {
        let drawing_area = drawing_area.clone();
        motion.connect_leave(move |_| {
            dispatch(&drawing_area, &chart, PointerEvent::Left);
        });
    }
    drawing_area.add_controller(motion);
}

fn attach_primary_drag(drawing_area: &gtk::DrawingArea, chart: SharedScatterChart) {
    let drag = gtk::GestureDrag::new();
    drag.set_button(PRIMARY_BUTTON);

    {
        let chart = Rc::clone(&chart);
        let drawing_area = drawing_area.clone();
        drag.connect_drag_begin(move |_, x, y| {
            drawing_area.grab_focus();
            dispatch(
                &drawing_area,
                &chart,
                PointerEvent::Pressed {
                    button: PointerButton::Primary,
                    x,
                    y,
                },
            );
        });
    }

    {
        let chart = Rc::clone(&chart);
        let drawing_area = drawing_area.clone();
        drag.connect_drag_update(move |gesture, offset_x, offset_y| {
            let Some((start_x, start_y)) = gesture.start_point() else {
                return;
            };
            dispatch(
                &drawing_area,
                &chart,
                PointerEvent::Dragged {
                    button: PointerButton::Primary,
                    x: start_x + offset_x,
                    y: start_y + offset_y,
                },
            );
        });
    }

    {
        let drawing_area = drawing_area.clone();
        drag.connect_drag_end(move |gesture, offset_x, offset_y| {
            let (start_x, start_y) = gesture.start_point().unwrap_or((0.0, 0.0));
            dispatch(
                &drawing_area,
                &chart,
                PointerEvent::Released {
                    button: PointerButton::Primary,
                    x: start_x + offset_x,
                    y: start_y + offset_y,
                },
            );
        });
    }

    drawing_area.add_controller(drag);
}

fn attach_secondary_click(drawing_area: &gtk::DrawingArea, chart: SharedScatterChart) {
    let click = gtk::GestureClick::new();
    click.set_button(SECONDARY_BUTTON);
    {
        let drawing_area = drawing_area.clone();
        click.connect_released(move |_, _, x, y| {
            dispatch(
                &drawing_area,
                &chart,
                PointerEvent::Released {
                    button: PointerButton::Secondary,
                    x,
                    y,
                },
            );
        });
    }
    drawing_area.add_controller(click);
}
