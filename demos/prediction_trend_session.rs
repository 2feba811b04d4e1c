use fuel_insight_charts::api::{ChartConfig, PredictionResponse, PredictionTrendChart};
use fuel_insight_charts::core::PredictionInputs;
use fuel_insight_charts::render::NullRenderer;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = fuel_insight_charts::telemetry::init_default_tracing();

    let mut chart =
        PredictionTrendChart::new(NullRenderer::default(), ChartConfig::prediction_trend())?;

    let sessions = [
        (PredictionInputs::default(), r#"{"predicted_comb_fe": 23.4}"#),
        (
            PredictionInputs {
                engine_displacement_l: 2.0,
                cylinders: 4,
                city_mpg: 30.0,
                highway_mpg: 38.0,
                co2_g_per_mile: 250.0,
            },
            r#"{"predicted_comb_fe": 33.1}"#,
        ),
        (
            PredictionInputs {
                engine_displacement_l: 5.3,
                cylinders: 8,
                city_mpg: 15.0,
                highway_mpg: 21.0,
                co2_g_per_mile: 480.0,
            },
            r#"{"predicted_comb_fe": 17.6}"#,
        ),
    ];

    for (inputs, body) in &sessions {
        println!("request: {}", inputs.to_request_json()?);
        chart.record_prediction(inputs, PredictionResponse::from_json_str(body)?)?;
    }

    let peak = chart
        .current_frame()
        .and_then(|frame| frame.circles.get(1))
        .map(|circle| (circle.cx, circle.cy));
    if let Some((x, y)) = peak {
        chart.pointer_move(x, y)?;
        println!("tooltip:\n{}", chart.tooltip_state().content);
        chart.pointer_leave()?;
    }

    println!("records before reset: {}", chart.records().len());
    chart.reset()?;
    println!(
        "records after reset: {} blank surface: {}",
        chart.records().len(),
        chart.renderer().surface_is_blank()
    );

    Ok(())
}
