use fuel_insight_charts::api::{ChartConfig, ClusterScatterChart, PredictionTrendChart};
use fuel_insight_charts::core::{
    Centroid, ClusterDetail, DataPoint, PredictionInputs, ScatterDataset, TrendRecord,
};
use fuel_insight_charts::platform_gtk::GtkChartAdapter;
use fuel_insight_charts::render::CairoRenderer;
use gtk4 as gtk;
use gtk4::prelude::*;

fn main() {
    let _ = fuel_insight_charts::telemetry::init_default_tracing();

    let app = gtk::Application::builder()
        .application_id("rs.fuel_insight.demos.gtk_cluster_dashboard")
        .build();
    app.connect_activate(build_ui);
    app.run();
}

fn build_ui(app: &gtk::Application) {
    let scatter = match build_scatter_chart() {
        Ok(chart) => chart,
        Err(err) => {
            eprintln!("failed to initialize cluster chart: {err}");
            return;
        }
    };
    let trend = match build_trend_chart() {
        Ok(chart) => chart,
        Err(err) => {
            eprintln!("failed to initialize trend chart: {err}");
            return;
        }
    };

    let scatter_adapter = GtkChartAdapter::new(scatter);
    let trend_adapter = GtkChartAdapter::new(trend);

    let predict_button = gtk::Button::with_label("Predict");
    let reset_button = gtk::Button::with_label("Reset");
    let controls = gtk::Box::new(gtk::Orientation::Horizontal, 8);
    controls.append(&predict_button);
    controls.append(&reset_button);

    {
        let chart = trend_adapter.chart();
        let drawing_area = trend_adapter.drawing_area().clone();
        predict_button.connect_clicked(move |_| {
            if let Ok(mut chart) = chart.try_borrow_mut() {
                let count = chart.records().len() as f64;
                let inputs = PredictionInputs {
                    cylinders: 4 + (count as u32 % 5),
                    ..PredictionInputs::default()
                };
                let record = TrendRecord::from_prediction(&inputs, 20.0 + (count * 1.7).sin() * 6.0);
                if let Err(err) = chart.push_prediction(record) {
                    eprintln!("failed to append prediction: {err}");
                }
            }
            drawing_area.queue_draw();
        });
    }
    {
        let chart = trend_adapter.chart();
        let drawing_area = trend_adapter.drawing_area().clone();
        reset_button.connect_clicked(move |_| {
            if let Ok(mut chart) = chart.try_borrow_mut() {
                if let Err(err) = chart.reset() {
                    eprintln!("failed to reset trend chart: {err}");
                }
            }
            drawing_area.queue_draw();
        });
    }

    let layout = gtk::Box::new(gtk::Orientation::Vertical, 12);
    layout.append(scatter_adapter.drawing_area());
    layout.append(&controls);
    layout.append(trend_adapter.drawing_area());

    let window = gtk::ApplicationWindow::builder()
        .application(app)
        .title("Fuel Insight Dashboard")
        .child(&layout)
        .build();

    // Adapters detach their charts when dropped; keep them alive with the window.
    window.connect_close_request(move |_| {
        scatter_adapter.detach();
        trend_adapter.detach();
        gtk::glib::Propagation::Proceed
    });
    window.present();
}

fn build_scatter_chart()
-> fuel_insight_charts::ChartResult<ClusterScatterChart<CairoRenderer>> {
    let config = ChartConfig::cluster_scatter();
    let renderer = CairoRenderer::new(
        config.viewport.width as i32,
        config.viewport.height as i32,
    )?;
    let mut chart = ClusterScatterChart::new(renderer, config)?;

    let points = (0..90)
        .map(|i| {
            let cluster = i % 3;
            let t = i as f64;
            let (cx, cy) = [(-2.0, 0.5), (0.8, -1.2), (2.5, 1.5)][cluster as usize];
            DataPoint::new(cx + (t * 0.7).sin() * 0.8, cy + (t * 1.3).cos() * 0.6, cluster)
                .with_details(
                    ClusterDetail::new(format!("Vehicle {i}"))
                        .with_combined_fe([30.0, 20.0, 45.0][cluster as usize])
                        .with_cluster(cluster),
                )
        })
        .collect();
    let centroids = vec![
        Centroid::new(-2.0, 0.5, 0),
        Centroid::new(0.8, -1.2, 1),
        Centroid::new(2.5, 1.5, 2),
    ];
    let ticket = chart.issue_request();
    chart.apply_response(ticket, ScatterDataset::new(points, centroids))?;
    Ok(chart)
}

fn build_trend_chart()
-> fuel_insight_charts::ChartResult<PredictionTrendChart<CairoRenderer>> {
    let config = ChartConfig::prediction_trend();
    let renderer = CairoRenderer::new(
        config.viewport.width as i32,
        config.viewport.height as i32,
    )?;
    PredictionTrendChart::new(renderer, config)
}
