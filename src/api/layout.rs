use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{MarkerHandle, Viewport};
use crate::interaction::MenuAction;
use crate::render::Renderer;

use super::{PlotInsets, ScatterChart};

/// Base marker radius before scaling with the plot size.
const MARKER_BASE_RADIUS_PX: f64 = 2.0;
/// Plot pixels per extra pixel of marker radius.
const MARKER_RADIUS_DIVISOR: f64 = 200.0;

/// Plot rectangle inside the widget, in widget-local pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    #[must_use]
    pub fn from_viewport(viewport: Viewport, insets: PlotInsets) -> Self {
        let width = (f64::from(viewport.width) - insets.left - insets.right).max(0.0);
        let height = (f64::from(viewport.height) - insets.top - insets.bottom).max(0.0);
        Self {
            left: insets.left,
            top: insets.top,
            width,
            height,
        }
    }

    #[must_use]
    pub fn right(self) -> f64 {
        self.left + self.width
    }

    #[must_use]
    pub fn bottom(self) -> f64 {
        self.top + self.height
    }

    /// Converts widget-local pixels to plot-local pixels.
    #[must_use]
    pub fn to_local(self, x: f64, y: f64) -> (f64, f64) {
        (x - self.left, y - self.top)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarkerGeometry {
    pub marker: MarkerHandle,
    pub center_x: f64,
    pub center_y: f64,
    pub radius: f64,
}

impl MarkerGeometry {
    #[must_use]
    pub fn distance_to(self, x: f64, y: f64) -> f64 {
        (self.center_x - x).hypot(self.center_y - y)
    }
}

/// Line between two order-adjacent markers at the last layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SegmentGeometry {
    pub from: MarkerHandle,
    pub to: MarkerHandle,
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

/// Result of the last layout pass.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LayoutSnapshot {
    pub plot_area: PlotArea,
    pub marker_radius: f64,
    pub markers: Vec<MarkerGeometry>,
    pub segments: Vec<SegmentGeometry>,
}

/// Hit box of one visible context menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MenuItemGeometry {
    pub action: MenuAction,
    pub enabled: bool,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl MenuItemGeometry {
    #[must_use]
    pub fn contains(self, x: f64, y: f64) -> bool {
        x >= self.x && x <= self.x + self.width && y >= self.y && y <= self.y + self.height
    }
}

/// Marker radius for a plot area: grows with the smaller plot extent.
#[must_use]
pub fn marker_radius_for(plot_area: PlotArea) -> f64 {
    MARKER_BASE_RADIUS_PX + plot_area.width.min(plot_area.height) / MARKER_RADIUS_DIVISOR
}

impl<R: Renderer> ScatterChart<R> {
    /// Marks the current geometry stale; the next hit test or render lays out again.
    pub fn request_layout(&mut self) {
        self.layout_requested = true;
    }

    #[must_use]
    pub fn is_layout_requested(&self) -> bool {
        self.layout_requested
    }

    #[must_use]
    pub fn layout(&self) -> &LayoutSnapshot {
        &self.layout
    }

    #[must_use]
    pub fn marker_geometry(&self, marker: MarkerHandle) -> Option<MarkerGeometry> {
        self.layout
            .markers
            .iter()
            .copied()
            .find(|geometry| geometry.marker == marker)
    }

    /// Recomputes plot area, axis lengths, marker and segment geometry from
    /// the current data and viewport.
    pub fn on_layout(&mut self) {
        let plot_area = PlotArea::from_viewport(self.viewport, self.style.plot_insets);
        self.x_axis.set_length_px(plot_area.width);
        self.y_axis.set_length_px(plot_area.height);

        let radius = marker_radius_for(plot_area);
        let markers: Vec<MarkerGeometry> = self
            .series
            .points()
            .iter()
            .map(|point| MarkerGeometry {
                marker: point.marker,
                center_x: plot_area.left + self.x_axis.display_position(point.x),
                center_y: plot_area.top + self.y_axis.display_position(point.y),
                radius,
            })
            .collect();

        let segments = markers
            .windows(2)
            .map(|pair| SegmentGeometry {
                from: pair[0].marker,
                to: pair[1].marker,
                x1: pair[0].center_x,
                y1: pair[0].center_y,
                x2: pair[1].center_x,
                y2: pair[1].center_y,
            })
            .collect();

        trace!(
            markers = markers.len(),
            plot_width = plot_area.width,
            plot_height = plot_area.height,
            radius,
            "layout scatter chart"
        );

        self.layout = LayoutSnapshot {
            plot_area,
            marker_radius: radius,
            markers,
            segments,
        };
        self.layout_requested = false;
    }

    pub(super) fn ensure_layout(&mut self) {
        if self.layout_requested {
            self.on_layout();
        }
    }

    /// Hit boxes of the visible context menu entries, stacked from the menu
    /// anchor and shifted to stay inside the viewport.
    #[must_use]
    pub fn context_menu_geometry(&self) -> Vec<MenuItemGeometry> {
        let menu = self.interaction.menu();
        if !menu.visible {
            return Vec::new();
        }

        let width = self.style.menu_item_width_px;
        let height = self.style.menu_item_height_px;
        let visible_count = menu.visible_items().count() as f64;
        let max_x = (f64::from(self.viewport.width) - width).max(0.0);
        let max_y = (f64::from(self.viewport.height) - height * visible_count).max(0.0);
        let origin_x = menu.anchor_x.clamp(0.0, max_x);
        let origin_y = menu.anchor_y.clamp(0.0, max_y);

        menu.visible_items()
            .enumerate()
            .map(|(index, item)| MenuItemGeometry {
                action: item.action,
                enabled: item.enabled,
                x: origin_x,
                y: origin_y + (index as f64) * height,
                width,
                height,
            })
            .collect()
    }
}
