use tracing::{debug, trace};

use crate::core::{DataPoint, MarkerHandle};
use crate::interaction::MenuAction;
use crate::render::Renderer;

use super::ScatterChart;

impl<R: Renderer> ScatterChart<R> {
    /// Data coordinates under a widget-local pixel: truncated toward zero and
    /// clamped to the axis bounds.
    pub fn data_value_at(&mut self, x: f64, y: f64) -> DataPoint {
        self.ensure_layout();
        let (local_x, local_y) = self.layout.plot_area.to_local(x, y);
        DataPoint::new(self.x_axis.data_value(local_x), self.y_axis.data_value(local_y))
    }

    /// Secondary click outside every marker: remember where to add and show
    /// only "Add Point".
    pub fn on_secondary_click_background(&mut self, x: f64, y: f64) {
        let value = self.data_value_at(x, y);
        trace!(x = value.x, y = value.y, "open add point menu");
        self.interaction.open_add_menu(value, x, y);
    }

    /// Secondary click on a marker: remember the target and show only
    /// "Delete Point", disabled for the first and last points.
    pub fn on_secondary_click_marker(&mut self, marker: MarkerHandle, x: f64, y: f64) {
        if self.series.index_of(marker).is_none() {
            return;
        }
        let enabled = !self.series.is_boundary(marker);
        trace!(marker = marker.id(), enabled, "open delete point menu");
        self.interaction.open_delete_menu(marker, enabled, x, y);
    }

    /// Primary press on a marker hides the menu, starts the drag and shows
    /// the coordinate tooltip next to the pointer.
    pub fn on_primary_press_marker(&mut self, marker: MarkerHandle, x: f64, y: f64) {
        let Some(point) = self.series.point(marker) else {
            return;
        };
        let offset = self.style.tooltip_offset_px;
        self.interaction
            .start_drag(marker, point.value(), x + offset, y + offset);
        trace!(marker = marker.id(), "start marker drag");
    }

    pub fn on_primary_release_marker(&mut self) {
        self.interaction.end_drag();
    }

    /// Moves the dragged marker to the pointer, honoring the ordering and
    /// boundary policy. Ignored unless `marker` is the one being dragged.
    pub fn on_drag_marker(&mut self, marker: MarkerHandle, x: f64, y: f64) {
        if !self.interaction.is_dragging(marker) {
            return;
        }
        let candidate = self.data_value_at(x, y);
        let Some(committed) = self.series.move_point(marker, candidate, self.x_axis) else {
            return;
        };
        let offset = self.style.tooltip_offset_px;
        self.interaction
            .update_tooltip(committed, x + offset, y + offset);
        trace!(
            marker = marker.id(),
            x = committed.x,
            y = committed.y,
            "drag marker"
        );
        self.request_layout();
    }

    pub fn hide_context_menu(&mut self) {
        self.interaction.hide_menu();
    }

    /// Runs a context menu action. Returns `false` when the item is hidden or
    /// disabled, in which case nothing changes.
    pub fn invoke_menu_action(&mut self, action: MenuAction) -> bool {
        if !self.interaction.menu().is_invokable(action) {
            return false;
        }

        match action {
            MenuAction::AddPoint => {
                if let Some(pending) = self.interaction.pending_add() {
                    let index = self.series.insertion_index_for(pending.x);
                    debug!(index, x = pending.x, y = pending.y, "menu add point");
                    self.insert_point(index, pending.x, pending.y);
                }
            }
            MenuAction::DeletePoint => {
                if let Some(marker) = self.interaction.pending_delete() {
                    debug!(marker = marker.id(), "menu delete point");
                    self.delete_point(marker);
                }
            }
        }

        self.interaction.hide_menu();
        true
    }
}
