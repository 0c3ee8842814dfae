use serde::{Deserialize, Serialize};

use crate::error::ChartResult;

use super::{CirclePrimitive, LinePrimitive, RectPrimitive, TextPrimitive};

/// Canvas layers in paint order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CanvasLayerKind {
    Background,
    Axis,
    Series,
    Markers,
    Overlay,
}

impl CanvasLayerKind {
    pub const CANONICAL_ORDER: [CanvasLayerKind; 5] = [
        CanvasLayerKind::Background,
        CanvasLayerKind::Axis,
        CanvasLayerKind::Series,
        CanvasLayerKind::Markers,
        CanvasLayerKind::Overlay,
    ];
}

/// Primitives of one layer. Within a layer backends paint rects, then lines,
/// then circles, then texts.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerPrimitives {
    pub kind: CanvasLayerKind,
    pub rects: Vec<RectPrimitive>,
    pub lines: Vec<LinePrimitive>,
    pub circles: Vec<CirclePrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl LayerPrimitives {
    #[must_use]
    pub fn new(kind: CanvasLayerKind) -> Self {
        Self {
            kind,
            rects: Vec::new(),
            lines: Vec::new(),
            circles: Vec::new(),
            texts: Vec::new(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rects.is_empty() && self.lines.is_empty() && self.circles.is_empty() && self.texts.is_empty()
    }

    pub fn validate(&self) -> ChartResult<()> {
        for rect in &self.rects {
            rect.validate()?;
        }
        for line in &self.lines {
            line.validate()?;
        }
        for circle in &self.circles {
            circle.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }
        Ok(())
    }
}
