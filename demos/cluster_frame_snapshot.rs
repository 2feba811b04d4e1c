use fuel_insight_charts::api::{ChartConfig, ClusterScatterChart};
use fuel_insight_charts::core::ScatterDataset;
use fuel_insight_charts::render::NullRenderer;

const CLUSTER_GRAPH_JSON: &str = r#"{
  "points": [
    {"x": -1.8, "y": 0.4, "cluster": 0, "details": {"Car Model and Year": "Corolla 2021", "Combined FE": 34, "Annual Fuel Cost": 1150, "Distance from Cluster": 0.31, "Cluster": 0}},
    {"x": -1.2, "y": 0.9, "cluster": 0, "details": {"Car Model and Year": "Civic 2020", "Combined FE": 33, "Annual Fuel Cost": 1200, "Distance from Cluster": 0.44, "Cluster": 0}},
    {"x": 0.6, "y": -0.7, "cluster": 1, "details": {"Car Model and Year": "F-150 2019", "Combined FE": 20, "Annual Fuel Cost": 2300, "Distance from Cluster": 0.52, "Cluster": 1}},
    {"x": 1.1, "y": -1.3, "cluster": 1, "details": {"Car Model and Year": "Tahoe 2018", "Combined FE": 18, "Annual Fuel Cost": 2550, "Distance from Cluster": 0.61, "Cluster": 1}},
    {"x": 2.4, "y": 1.7, "cluster": 2, "details": {"Car Model and Year": "Prius 2022", "Combined FE": 52, "Annual Fuel Cost": 800, "Distance from Cluster": 0.22, "Cluster": 2}}
  ],
  "centroids": [
    {"x": -1.5, "y": 0.65, "cluster": 0},
    {"x": 0.85, "y": -1.0, "cluster": 1},
    {"x": 2.4, "y": 1.7, "cluster": 2}
  ]
}"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = fuel_insight_charts::telemetry::init_default_tracing();

    let mut chart = ClusterScatterChart::new(NullRenderer::default(), ChartConfig::cluster_scatter())?;
    let ticket = chart.issue_request();
    chart.apply_response(ticket, ScatterDataset::from_json_str(CLUSTER_GRAPH_JSON)?)?;

    let target = chart
        .current_frame()
        .and_then(|frame| frame.circles.get(2))
        .map(|circle| (circle.cx, circle.cy));
    if let Some((x, y)) = target {
        chart.pointer_move(x, y)?;
        while chart.advance_animations(1.0 / 60.0)? {}
    }

    let frame = chart.build_render_frame()?;
    println!(
        "frame primitives: lines={} circles={} symbols={} texts={} overlay_texts={}",
        frame.lines.len(),
        frame.circles.len(),
        frame.symbols.len(),
        frame.texts.len(),
        frame.overlay.texts.len()
    );
    println!("tooltip:\n{}", chart.tooltip_state().content);
    for entry in chart.legend_entries() {
        println!(
            "cluster {}: {} (avg {} MPG)",
            entry.cluster, entry.insight.description, entry.insight.average_comb_fe
        );
    }
    println!("{}", serde_json::to_string_pretty(&chart.render_stats())?);

    Ok(())
}
