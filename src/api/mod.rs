mod chart;
mod chart_config;
mod interaction_controller;
mod layout;
mod pointer_dispatch;
mod render_frame_builder;
mod series_controller;
mod snapshot;

pub use chart::ScatterChart;
pub use chart_config::{AxisConfig, PlotInsets, ScatterChartConfig, ScatterStyle};
pub use layout::{
    LayoutSnapshot, MarkerGeometry, MenuItemGeometry, PlotArea, SegmentGeometry,
    marker_radius_for,
};
pub use snapshot::ChartSnapshot;

use render_frame_builder::RenderFrameBuilder;
