use serde::{Deserialize, Serialize};

use crate::core::{EditablePoint, NumberAxis, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::interaction::InteractionState;
use crate::render::Renderer;

use super::{LayoutSnapshot, ScatterChart};

/// Serializable deterministic state dump used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSnapshot {
    pub viewport: Viewport,
    pub x_axis: NumberAxis,
    pub y_axis: NumberAxis,
    pub points: Vec<EditablePoint>,
    pub interaction: InteractionState,
    pub layout: LayoutSnapshot,
}

impl ChartSnapshot {
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize snapshot: {e}")))
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse snapshot: {e}")))
    }
}

impl<R: Renderer> ScatterChart<R> {
    /// Lays out pending changes and captures the current state.
    pub fn snapshot(&mut self) -> ChartSnapshot {
        self.ensure_layout();
        ChartSnapshot {
            viewport: self.viewport,
            x_axis: self.x_axis,
            y_axis: self.y_axis,
            points: self.series.points().to_vec(),
            interaction: self.interaction.clone(),
            layout: self.layout.clone(),
        }
    }

    pub fn snapshot_json_pretty(&mut self) -> ChartResult<String> {
        self.snapshot().to_json_pretty()
    }
}
