pub mod axis;
pub mod series;
pub mod types;

pub use axis::{AxisOrientation, NumberAxis};
pub use series::{EditablePoint, MarkerHandle, ScatterSeries};
pub use types::{DataPoint, Viewport};
