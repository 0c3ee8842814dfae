//! scatter-chart-rs: editable scatter chart with draggable points.
//!
//! The chart keeps an ordered list of points joined by line segments. Points
//! are dragged with the primary button, added or deleted through a context
//! menu, and show their coordinates in a tooltip while dragged. The core is
//! headless; rendering goes through the `Renderer` trait, with an optional
//! Cairo backend and GTK4 adapter.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

#[cfg(feature = "gtk4-adapter")]
pub mod platform_gtk;

pub use api::{ScatterChart, ScatterChartConfig};
pub use error::{ChartError, ChartResult};
