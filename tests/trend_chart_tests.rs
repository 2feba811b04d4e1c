use approx::assert_relative_eq;
use fuel_insight_charts::ChartError;
use fuel_insight_charts::api::{ChartConfig, PredictionResponse, PredictionTrendChart, RenderStats};
use fuel_insight_charts::core::{PredictionInputs, TrendRecord};
use fuel_insight_charts::interaction::HoverTransition;
use fuel_insight_charts::render::{Color, MarkerId, NullRenderer, TextHAlign};

fn chart() -> PredictionTrendChart<NullRenderer> {
    PredictionTrendChart::new(NullRenderer::default(), ChartConfig::prediction_trend())
        .expect("chart init")
}

fn chart_with(values: &[f64]) -> PredictionTrendChart<NullRenderer> {
    let mut chart = chart();
    for (index, value) in values.iter().enumerate() {
        chart
            .push_prediction(TrendRecord::new(format!("run {index}"), *value))
            .expect("push prediction");
    }
    chart
}

#[test]
fn two_predictions_draw_line_and_markers() {
    let chart = chart_with(&[20.0, 30.0]);
    let frame = chart.current_frame().expect("frame presented");

    assert_eq!(frame.polylines.len(), 1);
    assert_eq!(frame.circles.len(), 2);

    let first = frame.circles[0];
    let second = frame.circles[1];
    assert_eq!(first.cx, 70.0);
    assert_eq!(second.cx, 570.0);
    assert_relative_eq!(first.cy, 20.0 + 320.0 - 20.0 / 35.0 * 320.0, epsilon = 1e-9);
    assert_relative_eq!(second.cy, 20.0 + 320.0 - 30.0 / 35.0 * 320.0, epsilon = 1e-9);
    assert!(second.cy < first.cy);

    let line = &frame.polylines[0];
    assert_eq!(line.points, vec![(first.cx, first.cy), (second.cx, second.cy)]);
    assert_eq!(line.stroke_width, 2.0);
    assert_eq!(line.color, Color::from_rgb8(0x69, 0xb3, 0xa2));
    assert!(
        frame
            .circles
            .iter()
            .all(|circle| circle.fill_color == Color::from_rgb8(0xff, 0xab, 0x00))
    );
}

#[test]
fn y_axis_tops_out_above_the_peak() {
    let chart = chart_with(&[20.0, 30.0]);
    let projector = chart.projector().expect("projector");
    assert_eq!(projector.y.domain(), (0.0, 35.0));

    let frame = chart.current_frame().expect("frame presented");
    let y_labels: Vec<&str> = frame
        .texts
        .iter()
        .filter(|text| text.h_align == TextHAlign::Right)
        .map(|text| text.text.as_str())
        .collect();
    assert_eq!(y_labels, vec!["0", "5", "10", "15", "20", "25", "30", "35"]);
}

#[test]
fn x_axis_labels_only_whole_prediction_numbers() {
    let chart = chart_with(&[20.0, 30.0]);
    let config = chart.config().clone();
    let frame = chart.current_frame().expect("frame presented");

    let x_labels: Vec<&str> = frame
        .texts
        .iter()
        .filter(|text| text.h_align == TextHAlign::Center)
        .filter(|text| text.text != config.x_axis_title && text.text != config.y_axis_title)
        .map(|text| text.text.as_str())
        .collect();
    assert_eq!(x_labels, vec!["0", "1"]);
}

#[test]
fn single_prediction_sits_mid_plot() {
    let chart = chart_with(&[12.0]);
    let frame = chart.current_frame().expect("frame presented");

    assert_eq!(frame.circles.len(), 1);
    assert_eq!(frame.circles[0].cx, 70.0 + 250.0);
    assert_relative_eq!(
        frame.circles[0].cy,
        20.0 + 320.0 - 12.0 / 17.0 * 320.0,
        epsilon = 1e-9
    );
    assert_eq!(frame.polylines[0].points.len(), 1);
}

#[test]
fn every_push_redraws_the_whole_sequence_once() {
    let chart = chart_with(&[18.0, 22.5, 27.0]);

    assert_eq!(
        chart.render_stats(),
        RenderStats {
            data_redraws: 3,
            ..RenderStats::default()
        }
    );
    assert_eq!(chart.renderer().frames_rendered, 3);
    assert_eq!(chart.renderer().last_circle_count, 3);
    let labels: Vec<&str> = chart.records().iter().map(|r| r.label.as_str()).collect();
    assert_eq!(labels, vec!["run 0", "run 1", "run 2"]);
}

#[test]
fn reset_blanks_surface_including_axes() {
    let mut chart = chart_with(&[20.0, 30.0]);
    chart.reset().expect("reset");

    assert!(chart.records().is_empty());
    assert!(chart.current_frame().is_none());
    assert!(chart.renderer().surface_is_blank());
    assert_eq!(chart.render_stats().clears, 1);
}

#[test]
fn reset_on_empty_chart_still_clears() {
    let mut chart = chart();
    chart.reset().expect("reset");
    chart.reset().expect("reset again");

    assert_eq!(chart.render_stats().clears, 2);
    assert_eq!(chart.render_stats().total_redraws(), 0);
    assert!(chart.renderer().surface_is_blank());
}

#[test]
fn render_without_data_clears_instead_of_drawing_axes() {
    let mut chart = chart();
    chart.render().expect("render");

    assert!(chart.renderer().surface_is_blank());
    assert_eq!(chart.render_stats().clears, 1);
    assert!(chart.build_render_frame().expect("frame").is_empty());
}

#[test]
fn predictions_after_reset_start_from_zero() {
    let mut chart = chart_with(&[20.0, 30.0]);
    chart.reset().expect("reset");
    chart
        .push_prediction(TrendRecord::new("fresh", 40.0))
        .expect("push after reset");

    let frame = chart.current_frame().expect("frame presented");
    assert_eq!(frame.circles.len(), 1);
    assert_eq!(chart.projector().expect("projector").y.domain(), (0.0, 45.0));
}

#[test]
fn non_finite_prediction_is_rejected() {
    let mut chart = chart_with(&[20.0]);
    let err = chart
        .push_prediction(TrendRecord::new("bad", f64::NAN))
        .expect_err("nan must be rejected");

    assert!(matches!(err, ChartError::InvalidData(_)));
    assert_eq!(chart.records().len(), 1);
    assert_eq!(chart.render_stats().data_redraws, 1);
}

#[test]
fn service_response_becomes_labelled_record() {
    let mut chart = chart();
    let inputs = PredictionInputs::default();
    let response =
        PredictionResponse::from_json_str(r#"{"predicted_comb_fe": 24.75}"#).expect("response");
    chart
        .record_prediction(&inputs, response)
        .expect("record prediction");

    assert_eq!(
        chart.records(),
        &[TrendRecord::new(
            "Eng: 3.5, Cyl: 6, City FE: 20, Hwy FE: 28, CO2: 300",
            24.75
        )]
    );
}

#[test]
fn hovering_a_prediction_shows_label_and_value() {
    let mut chart = chart_with(&[20.0, 31.4567]);
    let target = chart.current_frame().expect("frame").circles[1];

    let transition = chart
        .pointer_move(target.cx, target.cy)
        .expect("pointer move");
    assert_eq!(transition, HoverTransition::Entered(MarkerId(1)));
    assert_eq!(
        chart.tooltip_state().content,
        "Input: run 1\nEfficiency: 31.46"
    );
    assert_eq!(chart.hovered_record().map(|r| r.value), Some(31.4567));

    chart.advance_animations(0.2).expect("animate");
    let circle = chart.current_frame().expect("frame").circles[1];
    assert_eq!(circle.radius, 8.0);
    assert_eq!(
        circle.fill_color,
        Color::from_rgb8(0xff, 0xab, 0x00).darker(1.0)
    );
}

#[test]
fn new_prediction_drops_tooltip() {
    let mut chart = chart_with(&[20.0, 30.0]);
    let target = chart.current_frame().expect("frame").circles[0];
    chart.pointer_move(target.cx, target.cy).expect("hover");
    assert!(chart.tooltip_state().visible);

    chart
        .push_prediction(TrendRecord::new("next", 25.0))
        .expect("push");
    assert!(!chart.tooltip_state().visible);
    assert_eq!(chart.hovered_marker(), None);
    assert!(chart.current_frame().expect("frame").overlay.is_empty());
}
