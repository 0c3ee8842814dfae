use criterion::{Criterion, criterion_group, criterion_main};
use scatter_chart::api::{ScatterChart, ScatterChartConfig};
use scatter_chart::core::{AxisOrientation, DataPoint, NumberAxis};
use scatter_chart::interaction::{PointerButton, PointerEvent};
use scatter_chart::render::NullRenderer;
use std::hint::black_box;

fn build_chart(point_count: usize) -> ScatterChart<NullRenderer> {
    let mut chart = ScatterChart::new(NullRenderer::default(), ScatterChartConfig::default())
        .expect("valid chart");
    let step = 200.0 / (point_count.max(2) - 1) as f64;
    chart.extend_points((0..point_count).map(|index| {
        let x = -100.0 + index as f64 * step;
        DataPoint::new(x, (x / 17.0).sin() * 80.0)
    }));
    chart
}

fn bench_data_value_conversion(c: &mut Criterion) {
    let mut axis = NumberAxis::new(-100.0, 100.0, AxisOrientation::Vertical).expect("valid axis");
    axis.set_length_px(540.0);

    c.bench_function("axis_data_value", |b| {
        b.iter(|| axis.data_value(black_box(123.456)))
    });
}

fn bench_layout_1k(c: &mut Criterion) {
    let mut chart = build_chart(1_000);

    c.bench_function("layout_1k_points", |b| {
        b.iter(|| {
            chart.on_layout();
            black_box(chart.layout().markers.len());
        })
    });
}

fn bench_render_1k(c: &mut Criterion) {
    let mut chart = build_chart(1_000);

    c.bench_function("render_frame_1k_points", |b| {
        b.iter(|| {
            chart.request_layout();
            chart.render().expect("render should succeed");
        })
    });
}

fn bench_drag_100(c: &mut Criterion) {
    let mut chart = build_chart(100);
    chart.on_layout();
    let target = chart.layout().markers[50];

    c.bench_function("drag_interior_marker", |b| {
        b.iter(|| {
            chart.dispatch_pointer_event(PointerEvent::Pressed {
                button: PointerButton::Primary,
                x: target.center_x,
                y: target.center_y,
            });
            chart.dispatch_pointer_event(PointerEvent::Dragged {
                button: PointerButton::Primary,
                x: black_box(target.center_x + 3.0),
                y: black_box(target.center_y - 20.0),
            });
            chart.dispatch_pointer_event(PointerEvent::Released {
                button: PointerButton::Primary,
                x: target.center_x,
                y: target.center_y,
            });
        })
    });
}

criterion_group!(
    benches,
    bench_data_value_conversion,
    bench_layout_1k,
    bench_render_1k,
    bench_drag_100
);
criterion_main!(benches);
