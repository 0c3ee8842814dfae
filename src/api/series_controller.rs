use tracing::{debug, trace};

use crate::core::{DataPoint, MarkerHandle};
use crate::render::Renderer;

use super::ScatterChart;

impl<R: Renderer> ScatterChart<R> {
    /// Appends a point at the end of the series and attaches its marker.
    ///
    /// No ordering validation is done; callers seeding the chart are expected
    /// to add points in x order.
    pub fn add_point(&mut self, x: f64, y: f64) -> MarkerHandle {
        let marker = self.series.add_point(x, y);
        debug!(x, y, marker = marker.id(), count = self.series.len(), "add point");
        self.request_layout();
        marker
    }

    /// Inserts a point at `index`. An index past the end inserts at the front.
    pub fn insert_point(&mut self, index: usize, x: f64, y: f64) -> MarkerHandle {
        if index > self.series.len() {
            trace!(
                index,
                len = self.series.len(),
                "insert index out of range, using front"
            );
        }
        let marker = self.series.insert_point(index, x, y);
        debug!(
            index,
            x,
            y,
            marker = marker.id(),
            count = self.series.len(),
            "insert point"
        );
        self.request_layout();
        marker
    }

    /// Appends every point in order.
    pub fn extend_points(&mut self, points: impl IntoIterator<Item = DataPoint>) -> Vec<MarkerHandle> {
        points
            .into_iter()
            .map(|point| self.add_point(point.x, point.y))
            .collect()
    }

    /// Removes the point owning `marker` along with its marker and segments.
    ///
    /// Returns the removed value, or `None` for an unknown handle.
    pub fn delete_point(&mut self, marker: MarkerHandle) -> Option<DataPoint> {
        let removed = self.series.delete_point(marker)?;
        self.interaction.forget_marker(marker);
        debug!(
            x = removed.x,
            y = removed.y,
            marker = marker.id(),
            count = self.series.len(),
            "delete point"
        );
        self.request_layout();
        Some(removed.value())
    }
}
