use scatter_chart::core::{AxisOrientation, DataPoint, NumberAxis, ScatterSeries};
use proptest::prelude::*;

fn x_axis() -> NumberAxis {
    NumberAxis::new(-100.0, 100.0, AxisOrientation::Horizontal).expect("valid axis")
}

fn series_with_gaps(gaps: &[u8]) -> ScatterSeries {
    let mut series = ScatterSeries::new();
    let mut x = -100.0;
    series.add_point(x, 0.0);
    for gap in gaps {
        x += f64::from(*gap);
        series.add_point(x, 0.0);
    }
    series
}

proptest! {
    #[test]
    fn interior_drag_keeps_strict_order(
        gaps in prop::collection::vec(2u8..20, 2..12),
        pick in any::<prop::sample::Index>(),
        candidate_x in -1_000.0f64..1_000.0,
        candidate_y in -100.0f64..100.0
    ) {
        let mut series = series_with_gaps(&gaps);
        let interior = 1 + pick.index(series.len() - 2);
        let marker = series.points()[interior].marker;

        let committed = series
            .move_point(marker, DataPoint::new(candidate_x, candidate_y), x_axis())
            .expect("marker exists");
        let points = series.points();
        prop_assert!(points[interior - 1].x < committed.x);
        prop_assert!(committed.x < points[interior + 1].x);
        prop_assert_eq!(committed.y, candidate_y);
    }

    #[test]
    fn boundary_drag_is_pinned_to_axis_extents(
        gaps in prop::collection::vec(2u8..20, 1..12),
        candidate_x in -1_000.0f64..1_000.0,
        candidate_y in -100.0f64..100.0
    ) {
        let mut series = series_with_gaps(&gaps);
        let first = series.points()[0].marker;
        let last = series.points()[series.len() - 1].marker;
        let axis = x_axis();

        let moved_first = series
            .move_point(first, DataPoint::new(candidate_x, candidate_y), axis)
            .expect("first exists");
        let moved_last = series
            .move_point(last, DataPoint::new(candidate_x, candidate_y), axis)
            .expect("last exists");
        prop_assert_eq!(moved_first.x, axis.lower_bound());
        prop_assert_eq!(moved_last.x, axis.upper_bound());
    }

    #[test]
    fn interactive_adds_keep_points_sorted(
        clicks in prop::collection::vec((-100i32..100, -100i32..=100), 0..40)
    ) {
        let mut series = ScatterSeries::new();
        series.add_point(-100.0, -100.0);
        series.add_point(100.0, 100.0);

        for (x, y) in clicks {
            let (x, y) = (f64::from(x), f64::from(y));
            let index = series.insertion_index_for(x);
            series.insert_point(index, x, y);
        }

        let xs: Vec<f64> = series.points().iter().map(|p| p.x).collect();
        prop_assert!(xs.windows(2).all(|pair| pair[0] <= pair[1]));
        prop_assert_eq!(series.segments().count(), series.len() - 1);
    }

    #[test]
    fn deleting_unknown_handles_changes_nothing(
        gaps in prop::collection::vec(2u8..20, 1..8)
    ) {
        let mut series = series_with_gaps(&gaps);
        let removed = series.points()[0].marker;
        series.delete_point(removed);
        let before = series.clone();

        prop_assert!(series.delete_point(removed).is_none());
        prop_assert_eq!(series, before);
    }
}
