use scatter_chart::core::{AxisOrientation, DataPoint, NumberAxis, ScatterSeries};

fn x_axis() -> NumberAxis {
    NumberAxis::new(-100.0, 100.0, AxisOrientation::Horizontal).expect("valid axis")
}

fn seeded_series() -> ScatterSeries {
    let mut series = ScatterSeries::new();
    series.add_point(-100.0, -100.0);
    series.add_point(0.0, 0.0);
    series.add_point(100.0, 100.0);
    series
}

fn xs(series: &ScatterSeries) -> Vec<f64> {
    series.points().iter().map(|point| point.x).collect()
}

#[test]
fn add_point_appends_with_unique_markers() {
    let series = seeded_series();
    assert_eq!(xs(&series), vec![-100.0, 0.0, 100.0]);

    let markers: Vec<u64> = series.points().iter().map(|p| p.marker.id()).collect();
    assert_eq!(markers, vec![0, 1, 2]);
}

#[test]
fn add_point_does_not_validate_order() {
    let mut series = seeded_series();
    series.add_point(-50.0, 3.0);
    assert_eq!(xs(&series), vec![-100.0, 0.0, 100.0, -50.0]);
}

#[test]
fn insert_point_places_value_at_index() {
    let mut series = seeded_series();
    let marker = series.insert_point(1, -40.0, 7.0);
    assert_eq!(series.index_of(marker), Some(1));
    assert_eq!(series.values()[1], DataPoint::new(-40.0, 7.0));
}

#[test]
fn insert_point_past_end_falls_back_to_front() {
    let mut series = seeded_series();
    let marker = series.insert_point(17, 42.0, 1.0);
    assert_eq!(series.index_of(marker), Some(0));
    assert_eq!(xs(&series), vec![42.0, -100.0, 0.0, 100.0]);

    let at_end = series.insert_point(series.len(), 5.0, 5.0);
    assert_eq!(series.index_of(at_end), Some(series.len() - 1));
}

#[test]
fn delete_point_removes_owner_and_ignores_unknown_handles() {
    let mut series = seeded_series();
    let middle = series.points()[1].marker;

    let removed = series.delete_point(middle).expect("middle exists");
    assert_eq!(removed.value(), DataPoint::new(0.0, 0.0));
    assert_eq!(xs(&series), vec![-100.0, 100.0]);

    assert!(series.delete_point(middle).is_none());
    assert_eq!(series.len(), 2);
}

#[test]
fn markers_are_not_reused_after_delete() {
    let mut series = seeded_series();
    let last = series.points()[2].marker;
    series.delete_point(last);
    let fresh = series.add_point(100.0, 0.0);
    assert_ne!(fresh, last);
}

#[test]
fn insertion_index_targets_first_greater_x() {
    let series = seeded_series();
    assert_eq!(series.insertion_index_for(50.0), 2);
    assert_eq!(series.insertion_index_for(-50.0), 1);
    assert_eq!(series.insertion_index_for(-100.0), 1);
    assert_eq!(series.insertion_index_for(0.0), 2);
}

#[test]
fn insertion_index_falls_back_to_front_when_nothing_is_greater() {
    let series = seeded_series();
    assert_eq!(series.insertion_index_for(100.0), 0);
    assert_eq!(ScatterSeries::new().insertion_index_for(3.0), 0);
}

#[test]
fn boundary_points_are_first_and_last() {
    let series = seeded_series();
    let markers: Vec<_> = series.points().iter().map(|p| p.marker).collect();
    assert!(series.is_boundary(markers[0]));
    assert!(!series.is_boundary(markers[1]));
    assert!(series.is_boundary(markers[2]));
    assert!(!ScatterSeries::new().is_boundary_index(0));
}

#[test]
fn first_and_last_points_are_pinned_to_axis_bounds() {
    let series = seeded_series();
    let axis = x_axis();

    let first = series.constrain_drag(0, DataPoint::new(37.0, 12.0), axis);
    assert_eq!(first, DataPoint::new(-100.0, 12.0));

    let last = series.constrain_drag(2, DataPoint::new(-37.0, -8.0), axis);
    assert_eq!(last, DataPoint::new(100.0, -8.0));
}

#[test]
fn interior_points_cannot_reach_their_neighbors() {
    let series = seeded_series();
    let axis = x_axis();

    assert_eq!(series.constrain_drag(1, DataPoint::new(100.0, 5.0), axis).x, 99.0);
    assert_eq!(series.constrain_drag(1, DataPoint::new(-100.0, 5.0), axis).x, -99.0);
    assert_eq!(series.constrain_drag(1, DataPoint::new(20.0, 5.0), axis).x, 20.0);
}

#[test]
fn interior_rules_apply_in_sequence_when_neighbors_are_adjacent() {
    let mut series = ScatterSeries::new();
    series.add_point(-100.0, 0.0);
    series.add_point(0.0, 0.0);
    series.add_point(0.5, 0.0);
    series.add_point(1.0, 0.0);
    series.add_point(100.0, 0.0);

    let constrained = series.constrain_drag(2, DataPoint::new(-3.0, 0.0), x_axis());
    // prev.x + 1 reaches next.x, so the second rule pulls it back to next.x - 1
    assert_eq!(constrained.x, 0.0);
}

#[test]
fn move_point_commits_constrained_value() {
    let mut series = seeded_series();
    let middle = series.points()[1].marker;
    let committed = series
        .move_point(middle, DataPoint::new(150.0, 30.0), x_axis())
        .expect("middle exists");
    assert_eq!(committed, DataPoint::new(99.0, 30.0));
    assert_eq!(series.values()[1], committed);
}

#[test]
fn segments_join_adjacent_points() {
    let series = seeded_series();
    let pairs: Vec<(f64, f64)> = series.segments().map(|(a, b)| (a.x, b.x)).collect();
    assert_eq!(pairs, vec![(-100.0, 0.0), (0.0, 100.0)]);
    assert_eq!(ScatterSeries::new().segments().count(), 0);
}
