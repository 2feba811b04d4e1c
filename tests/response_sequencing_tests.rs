use fuel_insight_charts::api::{ChartConfig, ClusterScatterChart, ResponseSequencer};
use fuel_insight_charts::core::{DataPoint, ScatterDataset};
use fuel_insight_charts::render::NullRenderer;

fn chart() -> ClusterScatterChart<NullRenderer> {
    ClusterScatterChart::new(NullRenderer::default(), ChartConfig::cluster_scatter())
        .expect("chart init")
}

fn dataset(points: usize) -> ScatterDataset {
    ScatterDataset::new(
        (0..points)
            .map(|index| DataPoint::new(index as f64, index as f64 * 0.5, 0))
            .collect(),
        Vec::new(),
    )
}

#[test]
fn late_response_of_older_request_is_dropped() {
    let mut chart = chart();
    let first = chart.issue_request();
    let second = chart.issue_request();

    assert!(chart.apply_response(second, dataset(4)).expect("apply newer"));
    assert!(!chart.apply_response(first, dataset(9)).expect("apply stale"));

    assert_eq!(chart.dataset().points.len(), 4);
    assert_eq!(chart.render_stats().data_redraws, 1);
}

#[test]
fn responses_in_request_order_are_all_applied() {
    let mut chart = chart();
    let first = chart.issue_request();
    let second = chart.issue_request();

    assert!(chart.apply_response(first, dataset(2)).expect("apply first"));
    assert!(chart.apply_response(second, dataset(3)).expect("apply second"));
    assert_eq!(chart.dataset().points.len(), 3);
    assert_eq!(chart.render_stats().data_redraws, 2);
}

#[test]
fn duplicate_response_is_applied_once() {
    let mut chart = chart();
    let ticket = chart.issue_request();

    assert!(chart.apply_response(ticket, dataset(2)).expect("apply"));
    assert!(!chart.apply_response(ticket, dataset(5)).expect("apply again"));
    assert_eq!(chart.dataset().points.len(), 2);
}

#[test]
fn failed_fetch_shows_empty_axes() {
    let mut chart = chart();
    let ticket = chart.issue_request();

    let applied = chart
        .apply_fetch_result::<String>(ticket, Err("HTTP 500".to_owned()))
        .expect("apply failure");
    assert!(applied);
    assert!(chart.dataset().is_empty());

    let frame = chart.current_frame().expect("frame presented");
    assert!(frame.circles.is_empty());
    assert!(!frame.lines.is_empty());
}

#[test]
fn tickets_from_another_sequencer_are_rejected() {
    let mut foreign = ResponseSequencer::new();
    foreign.issue();
    let foreign_ticket = foreign.issue();

    let mut chart = chart();
    chart.issue_request();
    assert!(
        !chart
            .apply_response(foreign_ticket, dataset(3))
            .expect("apply foreign")
    );
    assert!(chart.current_frame().is_none());
}
