use serde::{Deserialize, Serialize};

use crate::core::{DataPoint, NumberAxis};

/// Opaque handle to the marker owned by one point.
///
/// Handles are allocated on insertion and never reused by the series that
/// issued them, so a stale handle can only miss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MarkerHandle(u64);

impl MarkerHandle {
    #[must_use]
    pub fn id(self) -> u64 {
        self.0
    }
}

/// A point of the editable series together with its marker.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EditablePoint {
    pub x: f64,
    pub y: f64,
    pub marker: MarkerHandle,
}

impl EditablePoint {
    #[must_use]
    pub fn value(self) -> DataPoint {
        DataPoint::new(self.x, self.y)
    }
}

/// Ordered point list backing the interactive scatter chart.
///
/// Points are kept in x order by the editing paths: drags never reorder, and
/// interactive inserts use `insertion_index_for`. Programmatic appends are not
/// validated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScatterSeries {
    points: Vec<EditablePoint>,
    next_marker: u64,
}

impl ScatterSeries {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn points(&self) -> &[EditablePoint] {
        &self.points
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[must_use]
    pub fn values(&self) -> Vec<DataPoint> {
        self.points.iter().map(|point| point.value()).collect()
    }

    /// Appends a point at the end of the order.
    pub fn add_point(&mut self, x: f64, y: f64) -> MarkerHandle {
        self.insert_point(self.points.len(), x, y)
    }

    /// Inserts a point at `index`; an index past the end falls back to 0.
    pub fn insert_point(&mut self, index: usize, x: f64, y: f64) -> MarkerHandle {
        let marker = self.allocate_marker();
        let index = if index > self.points.len() { 0 } else { index };
        self.points.insert(index, EditablePoint { x, y, marker });
        marker
    }

    /// Removes the point owning `marker`. Unknown handles are ignored.
    pub fn delete_point(&mut self, marker: MarkerHandle) -> Option<EditablePoint> {
        let index = self.index_of(marker)?;
        Some(self.points.remove(index))
    }

    #[must_use]
    pub fn index_of(&self, marker: MarkerHandle) -> Option<usize> {
        self.points.iter().position(|point| point.marker == marker)
    }

    #[must_use]
    pub fn point(&self, marker: MarkerHandle) -> Option<EditablePoint> {
        self.points
            .iter()
            .copied()
            .find(|point| point.marker == marker)
    }

    /// Position used by the interactive add action.
    ///
    /// The new point goes right before the first point whose `x` exceeds the
    /// clicked `x`. When no point qualifies the front (index 0) is used.
    #[must_use]
    pub fn insertion_index_for(&self, x: f64) -> usize {
        self.points
            .iter()
            .position(|point| point.x > x)
            .unwrap_or(0)
    }

    /// First and last points pin the curve to the axis extents.
    #[must_use]
    pub fn is_boundary_index(&self, index: usize) -> bool {
        !self.points.is_empty() && (index == 0 || index == self.points.len() - 1)
    }

    #[must_use]
    pub fn is_boundary(&self, marker: MarkerHandle) -> bool {
        self.index_of(marker)
            .is_some_and(|index| self.is_boundary_index(index))
    }

    /// Applies the drag ordering/boundary policy to a candidate position.
    ///
    /// - first point: `x` is forced to the axis lower bound
    /// - last point: `x` is forced to the axis upper bound
    /// - interior point: `x` snaps to `prev.x + 1` / `next.x - 1` when it
    ///   would reach a neighbor
    ///
    /// `y` is returned unchanged.
    #[must_use]
    pub fn constrain_drag(&self, index: usize, candidate: DataPoint, x_axis: NumberAxis) -> DataPoint {
        let last_index = self.points.len().saturating_sub(1);
        let mut x = candidate.x;

        if index == 0 {
            x = x_axis.lower_bound();
        } else if index == last_index {
            x = x_axis.upper_bound();
        } else if let (Some(prev), Some(next)) =
            (self.points.get(index - 1), self.points.get(index + 1))
        {
            if x <= prev.x {
                x = prev.x + 1.0;
            }
            if x >= next.x {
                x = next.x - 1.0;
            }
        }

        DataPoint::new(x, candidate.y)
    }

    /// Constrains `candidate` for the point owning `marker` and commits it.
    ///
    /// Returns the committed value, or `None` when the handle is unknown.
    pub fn move_point(
        &mut self,
        marker: MarkerHandle,
        candidate: DataPoint,
        x_axis: NumberAxis,
    ) -> Option<DataPoint> {
        let index = self.index_of(marker)?;
        let constrained = self.constrain_drag(index, candidate, x_axis);
        let point = &mut self.points[index];
        point.x = constrained.x;
        point.y = constrained.y;
        Some(constrained)
    }

    /// Adjacent point pairs in order; one pair per segment.
    pub fn segments(&self) -> impl Iterator<Item = (EditablePoint, EditablePoint)> + '_ {
        self.points.windows(2).map(|pair| (pair[0], pair[1]))
    }

    fn allocate_marker(&mut self) -> MarkerHandle {
        let marker = MarkerHandle(self.next_marker);
        self.next_marker += 1;
        marker
    }
}
