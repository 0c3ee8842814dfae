use ordered_float::OrderedFloat;

use crate::core::MarkerHandle;
use crate::interaction::{InteractionMode, PointerButton, PointerEvent};
use crate::render::Renderer;

use super::{MenuItemGeometry, ScatterChart};

impl<R: Renderer> ScatterChart<R> {
    /// Nearest marker whose center lies within its radius plus hit slop.
    pub fn marker_at(&mut self, x: f64, y: f64) -> Option<MarkerHandle> {
        self.ensure_layout();
        let slop = self.style.marker_hit_slop_px;
        self.layout
            .markers
            .iter()
            .map(|geometry| (geometry, geometry.distance_to(x, y)))
            .filter(|(geometry, distance)| *distance <= geometry.radius + slop)
            .min_by_key(|(_, distance)| OrderedFloat(*distance))
            .map(|(geometry, _)| geometry.marker)
    }

    #[must_use]
    pub fn menu_item_at(&self, x: f64, y: f64) -> Option<MenuItemGeometry> {
        self.context_menu_geometry()
            .into_iter()
            .find(|item| item.contains(x, y))
    }

    /// Routes one host pointer event to the matching gesture.
    ///
    /// Returns `true` when the widget should be redrawn.
    pub fn dispatch_pointer_event(&mut self, event: PointerEvent) -> bool {
        match event {
            PointerEvent::Pressed {
                button: PointerButton::Primary,
                x,
                y,
            } => self.dispatch_primary_press(x, y),
            PointerEvent::Released {
                button: PointerButton::Primary,
                ..
            } => {
                if self.interaction.mode() == InteractionMode::Idle {
                    return false;
                }
                self.on_primary_release_marker();
                true
            }
            PointerEvent::Released {
                button: PointerButton::Secondary,
                x,
                y,
            } => {
                match self.marker_at(x, y) {
                    Some(marker) => self.on_secondary_click_marker(marker, x, y),
                    None => self.on_secondary_click_background(x, y),
                }
                true
            }
            PointerEvent::Dragged {
                button: PointerButton::Primary,
                x,
                y,
            } => {
                let InteractionMode::DraggingMarker(marker) = self.interaction.mode() else {
                    return false;
                };
                self.interaction.on_pointer_move(x, y, Some(marker));
                self.on_drag_marker(marker, x, y);
                true
            }
            PointerEvent::Moved { x, y } => {
                let previous = self.interaction.hovered();
                let hovered = match self.interaction.mode() {
                    InteractionMode::DraggingMarker(marker) => Some(marker),
                    InteractionMode::Idle => self.marker_at(x, y),
                };
                self.interaction.on_pointer_move(x, y, hovered);
                previous != hovered
            }
            PointerEvent::Left => {
                let had_hover = self.interaction.hovered().is_some();
                self.interaction.on_pointer_leave();
                had_hover
            }
            PointerEvent::Pressed { .. }
            | PointerEvent::Released { .. }
            | PointerEvent::Dragged { .. } => false,
        }
    }

    fn dispatch_primary_press(&mut self, x: f64, y: f64) -> bool {
        let mut redraw = false;
        if self.interaction.menu().visible {
            if let Some(item) = self.menu_item_at(x, y) {
                if item.enabled {
                    self.invoke_menu_action(item.action);
                }
                return true;
            }
            self.hide_context_menu();
            redraw = true;
        }

        if let Some(marker) = self.marker_at(x, y) {
            self.on_primary_press_marker(marker, x, y);
            redraw = true;
        }
        redraw
    }
}
