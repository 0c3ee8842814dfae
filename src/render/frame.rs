use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};

use super::{CanvasLayerKind, LayerPrimitives};

/// Backend-agnostic scene for one chart draw pass.
///
/// Layers are stored in `CanvasLayerKind::CANONICAL_ORDER`.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    layers: Vec<LayerPrimitives>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            layers: CanvasLayerKind::CANONICAL_ORDER
                .into_iter()
                .map(LayerPrimitives::new)
                .collect(),
        }
    }

    #[must_use]
    pub fn layers(&self) -> &[LayerPrimitives] {
        &self.layers
    }

    #[must_use]
    pub fn layer(&self, kind: CanvasLayerKind) -> &LayerPrimitives {
        let index = layer_index(kind);
        &self.layers[index]
    }

    pub fn layer_mut(&mut self, kind: CanvasLayerKind) -> &mut LayerPrimitives {
        let index = layer_index(kind);
        &mut self.layers[index]
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        for layer in &self.layers {
            layer.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.layers.iter().all(LayerPrimitives::is_empty)
    }

    #[must_use]
    pub fn line_count(&self) -> usize {
        self.layers.iter().map(|layer| layer.lines.len()).sum()
    }

    #[must_use]
    pub fn rect_count(&self) -> usize {
        self.layers.iter().map(|layer| layer.rects.len()).sum()
    }

    #[must_use]
    pub fn circle_count(&self) -> usize {
        self.layers.iter().map(|layer| layer.circles.len()).sum()
    }

    #[must_use]
    pub fn text_count(&self) -> usize {
        self.layers.iter().map(|layer| layer.texts.len()).sum()
    }
}

fn layer_index(kind: CanvasLayerKind) -> usize {
    CanvasLayerKind::CANONICAL_ORDER
        .iter()
        .position(|candidate| *candidate == kind)
        .unwrap_or(0)
}
