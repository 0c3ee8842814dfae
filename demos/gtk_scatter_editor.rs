use scatter_chart::api::{ScatterChart, ScatterChartConfig};
use scatter_chart::core::DataPoint;
use scatter_chart::error::ChartResult;
use scatter_chart::platform_gtk::GtkScatterAdapter;
use scatter_chart::render::CairoRenderer;
use gtk4 as gtk;
use gtk4::prelude::*;

const WINDOW_WIDTH: i32 = 800;
const WINDOW_HEIGHT: i32 = 600;
const MIN_WINDOW_SIZE: i32 = 500;

fn main() {
    let _ = scatter_chart::telemetry::init_default_tracing();

    let app = gtk::Application::builder()
        .application_id("rs.scatter_chart.demos.gtk_scatter_editor")
        .build();
    app.connect_activate(build_ui);
    app.run();
}

fn build_ui(app: &gtk::Application) {
    let chart = match build_chart() {
        Ok(chart) => chart,
        Err(err) => {
            eprintln!("failed to initialize scatter chart: {err}");
            return;
        }
    };

    let adapter = GtkScatterAdapter::new(chart);
    let drawing_area = adapter.drawing_area().clone();
    drawing_area.set_size_request(MIN_WINDOW_SIZE, MIN_WINDOW_SIZE);

    let window = gtk::ApplicationWindow::builder()
        .application(app)
        .title("Custom Scatter Chart Sample")
        .default_width(WINDOW_WIDTH)
        .default_height(WINDOW_HEIGHT)
        .child(&drawing_area)
        .build();
    window.present();
}

fn build_chart() -> ChartResult<ScatterChart<CairoRenderer>> {
    let config = ScatterChartConfig::default();
    let renderer = CairoRenderer::new(
        i32::try_from(config.viewport.width).unwrap_or(WINDOW_WIDTH),
        i32::try_from(config.viewport.height).unwrap_or(WINDOW_HEIGHT),
    )?;
    let mut chart = ScatterChart::new(renderer, config)?;
    chart.extend_points([
        DataPoint::new(-100.0, -100.0),
        DataPoint::new(0.0, 0.0),
        DataPoint::new(100.0, 100.0),
    ]);
    Ok(chart)
}
