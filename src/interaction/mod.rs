use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{DataPoint, MarkerHandle};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
}

/// Raw pointer input in widget-local pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    Pressed { button: PointerButton, x: f64, y: f64 },
    Released { button: PointerButton, x: f64, y: f64 },
    Dragged { button: PointerButton, x: f64, y: f64 },
    Moved { x: f64, y: f64 },
    Left,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InteractionMode {
    Idle,
    /// Primary button is held on a marker.
    DraggingMarker(MarkerHandle),
}

/// Actions offered by the chart context menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MenuAction {
    AddPoint,
    DeletePoint,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItemState {
    pub action: MenuAction,
    pub visible: bool,
    pub enabled: bool,
}

/// Shared context menu holding both actions.
///
/// A gesture shows only the item that applies to it: background clicks show
/// "add", marker clicks show "delete".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContextMenuState {
    pub visible: bool,
    pub anchor_x: f64,
    pub anchor_y: f64,
    pub items: SmallVec<[MenuItemState; 2]>,
}

impl Default for ContextMenuState {
    fn default() -> Self {
        let mut items = SmallVec::new();
        items.push(MenuItemState {
            action: MenuAction::AddPoint,
            visible: false,
            enabled: true,
        });
        items.push(MenuItemState {
            action: MenuAction::DeletePoint,
            visible: false,
            enabled: true,
        });
        Self {
            visible: false,
            anchor_x: 0.0,
            anchor_y: 0.0,
            items,
        }
    }
}

impl ContextMenuState {
    #[must_use]
    pub fn item(&self, action: MenuAction) -> Option<MenuItemState> {
        self.items.iter().copied().find(|item| item.action == action)
    }

    /// True when `action` is shown and can be invoked.
    #[must_use]
    pub fn is_invokable(&self, action: MenuAction) -> bool {
        self.visible
            && self
                .item(action)
                .is_some_and(|item| item.visible && item.enabled)
    }

    pub fn visible_items(&self) -> impl Iterator<Item = MenuItemState> + '_ {
        self.items.iter().copied().filter(|item| item.visible)
    }

    fn show_only(&mut self, action: MenuAction, enabled: bool, anchor_x: f64, anchor_y: f64) {
        for item in &mut self.items {
            item.visible = item.action == action;
            if item.visible {
                item.enabled = enabled;
            }
        }
        self.anchor_x = anchor_x;
        self.anchor_y = anchor_y;
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TooltipState {
    pub visible: bool,
    pub text: String,
    pub anchor_x: f64,
    pub anchor_y: f64,
}

impl TooltipState {
    pub fn show(&mut self, value: DataPoint, anchor_x: f64, anchor_y: f64) {
        self.visible = true;
        self.text = format_coordinates(value);
        self.anchor_x = anchor_x;
        self.anchor_y = anchor_y;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }
}

/// Tooltip label for a point: both coordinates rounded to integers.
#[must_use]
pub fn format_coordinates(value: DataPoint) -> String {
    format!("{}, {}", value.x.round() as i64, value.y.round() as i64)
}

/// Transient gesture state for one chart instance.
///
/// Every field is overwritten by the next gesture; nothing is queued.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteractionState {
    mode: InteractionMode,
    pending_add: Option<DataPoint>,
    pending_delete: Option<MarkerHandle>,
    hovered: Option<MarkerHandle>,
    menu: ContextMenuState,
    tooltip: TooltipState,
    cursor_x: f64,
    cursor_y: f64,
}

impl Default for InteractionState {
    fn default() -> Self {
        Self {
            mode: InteractionMode::Idle,
            pending_add: None,
            pending_delete: None,
            hovered: None,
            menu: ContextMenuState::default(),
            tooltip: TooltipState::default(),
            cursor_x: 0.0,
            cursor_y: 0.0,
        }
    }
}

impl InteractionState {
    #[must_use]
    pub fn mode(&self) -> InteractionMode {
        self.mode
    }

    #[must_use]
    pub fn pending_add(&self) -> Option<DataPoint> {
        self.pending_add
    }

    #[must_use]
    pub fn pending_delete(&self) -> Option<MarkerHandle> {
        self.pending_delete
    }

    #[must_use]
    pub fn hovered(&self) -> Option<MarkerHandle> {
        self.hovered
    }

    #[must_use]
    pub fn menu(&self) -> &ContextMenuState {
        &self.menu
    }

    #[must_use]
    pub fn tooltip(&self) -> &TooltipState {
        &self.tooltip
    }

    #[must_use]
    pub fn cursor(&self) -> (f64, f64) {
        (self.cursor_x, self.cursor_y)
    }

    #[must_use]
    pub fn is_dragging(&self, marker: MarkerHandle) -> bool {
        self.mode == InteractionMode::DraggingMarker(marker)
    }

    pub fn on_pointer_move(&mut self, x: f64, y: f64, hovered: Option<MarkerHandle>) {
        self.cursor_x = x;
        self.cursor_y = y;
        self.hovered = hovered;
    }

    pub fn on_pointer_leave(&mut self) {
        self.hovered = None;
    }

    pub fn open_add_menu(&mut self, value: DataPoint, anchor_x: f64, anchor_y: f64) {
        self.pending_add = Some(value);
        self.menu
            .show_only(MenuAction::AddPoint, true, anchor_x, anchor_y);
    }

    pub fn open_delete_menu(
        &mut self,
        marker: MarkerHandle,
        enabled: bool,
        anchor_x: f64,
        anchor_y: f64,
    ) {
        self.pending_delete = Some(marker);
        self.menu
            .show_only(MenuAction::DeletePoint, enabled, anchor_x, anchor_y);
    }

    pub fn hide_menu(&mut self) {
        self.menu.hide();
    }

    pub fn start_drag(&mut self, marker: MarkerHandle, value: DataPoint, anchor_x: f64, anchor_y: f64) {
        self.menu.hide();
        self.mode = InteractionMode::DraggingMarker(marker);
        self.tooltip.show(value, anchor_x, anchor_y);
    }

    pub fn update_tooltip(&mut self, value: DataPoint, anchor_x: f64, anchor_y: f64) {
        if self.tooltip.visible {
            self.tooltip.show(value, anchor_x, anchor_y);
        }
    }

    pub fn end_drag(&mut self) {
        self.mode = InteractionMode::Idle;
        self.tooltip.hide();
    }

    /// Drops references to a marker that no longer exists.
    pub fn forget_marker(&mut self, marker: MarkerHandle) {
        if self.pending_delete == Some(marker) {
            self.pending_delete = None;
        }
        if self.hovered == Some(marker) {
            self.hovered = None;
        }
        if self.mode == InteractionMode::DraggingMarker(marker) {
            self.end_drag();
        }
    }
}
