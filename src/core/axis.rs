use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Upper bound on generated ticks so a tiny tick unit cannot flood a frame.
const MAX_TICKS: usize = 1_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AxisOrientation {
    /// Values grow to the right; pixel 0 is the lower bound.
    Horizontal,
    /// Values grow upwards; pixel 0 is the upper bound.
    Vertical,
}

/// Numeric axis mapping a `[lower_bound, upper_bound]` range onto a pixel extent.
///
/// Pixel positions are local to the plot area. The pixel extent is owned by
/// the layout pass (`set_length_px`); until the first layout it is zero and
/// every pixel maps to the lower bound.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NumberAxis {
    lower_bound: f64,
    upper_bound: f64,
    tick_unit: f64,
    orientation: AxisOrientation,
    length_px: f64,
}

impl NumberAxis {
    pub fn new(lower_bound: f64, upper_bound: f64, orientation: AxisOrientation) -> ChartResult<Self> {
        validate_bounds(lower_bound, upper_bound)?;
        let span = upper_bound - lower_bound;
        Ok(Self {
            lower_bound,
            upper_bound,
            tick_unit: span / 10.0,
            orientation,
            length_px: 0.0,
        })
    }

    pub fn with_tick_unit(mut self, tick_unit: f64) -> ChartResult<Self> {
        if !tick_unit.is_finite() || tick_unit <= 0.0 {
            return Err(ChartError::InvalidData(
                "axis tick unit must be finite and > 0".to_owned(),
            ));
        }
        self.tick_unit = tick_unit;
        Ok(self)
    }

    #[must_use]
    pub fn lower_bound(self) -> f64 {
        self.lower_bound
    }

    #[must_use]
    pub fn upper_bound(self) -> f64 {
        self.upper_bound
    }

    #[must_use]
    pub fn bounds(self) -> (f64, f64) {
        (self.lower_bound, self.upper_bound)
    }

    #[must_use]
    pub fn tick_unit(self) -> f64 {
        self.tick_unit
    }

    #[must_use]
    pub fn orientation(self) -> AxisOrientation {
        self.orientation
    }

    #[must_use]
    pub fn length_px(self) -> f64 {
        self.length_px
    }

    /// Replaces the data range. The pixel extent is kept.
    pub fn set_bounds(&mut self, lower_bound: f64, upper_bound: f64) -> ChartResult<()> {
        validate_bounds(lower_bound, upper_bound)?;
        self.lower_bound = lower_bound;
        self.upper_bound = upper_bound;
        Ok(())
    }

    /// Non-finite or negative lengths collapse to zero.
    pub fn set_length_px(&mut self, length_px: f64) {
        self.length_px = if length_px.is_finite() {
            length_px.max(0.0)
        } else {
            0.0
        };
    }

    /// Maps a data value to a plot-local pixel position.
    #[must_use]
    pub fn display_position(self, value: f64) -> f64 {
        let span = self.upper_bound - self.lower_bound;
        let normalized = (value - self.lower_bound) / span;
        match self.orientation {
            AxisOrientation::Horizontal => normalized * self.length_px,
            AxisOrientation::Vertical => (1.0 - normalized) * self.length_px,
        }
    }

    /// Maps a plot-local pixel position back to a data value (unclamped).
    #[must_use]
    pub fn value_for_display(self, pixel: f64) -> f64 {
        if self.length_px <= 0.0 {
            return self.lower_bound;
        }

        let span = self.upper_bound - self.lower_bound;
        let normalized = pixel / self.length_px;
        match self.orientation {
            AxisOrientation::Horizontal => self.lower_bound + normalized * span,
            AxisOrientation::Vertical => self.upper_bound - normalized * span,
        }
    }

    /// Converts a pointer position into an editable data value.
    ///
    /// The mapped value is truncated toward zero and then clamped into the
    /// axis bounds. NaN truncates to 0 before clamping.
    #[must_use]
    pub fn data_value(self, pixel: f64) -> f64 {
        let value = self.value_for_display(pixel);
        let truncated = if value.is_nan() { 0.0 } else { value.trunc() };
        truncated.clamp(self.lower_bound, self.upper_bound)
    }

    /// Tick values from the lower bound up to the upper bound in `tick_unit` steps.
    #[must_use]
    pub fn ticks(self) -> Vec<f64> {
        let span = self.upper_bound - self.lower_bound;
        let epsilon = span * 1e-9;
        let mut ticks = Vec::new();
        let mut index = 0usize;
        while ticks.len() < MAX_TICKS {
            let value = self.lower_bound + (index as f64) * self.tick_unit;
            if value > self.upper_bound + epsilon {
                break;
            }
            ticks.push(value.min(self.upper_bound));
            index += 1;
        }
        ticks
    }
}

fn validate_bounds(lower_bound: f64, upper_bound: f64) -> ChartResult<()> {
    if !lower_bound.is_finite() || !upper_bound.is_finite() || lower_bound >= upper_bound {
        return Err(ChartError::InvalidAxis {
            lower: lower_bound,
            upper: upper_bound,
        });
    }
    Ok(())
}
