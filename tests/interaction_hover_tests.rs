use fuel_insight_charts::api::{ChartConfig, ClusterScatterChart, scatter_tooltip_content};
use fuel_insight_charts::core::{ClusterDetail, DataPoint, ScatterDataset};
use fuel_insight_charts::interaction::HoverTransition;
use fuel_insight_charts::render::{Color, MarkerId, NullRenderer};

fn hover_chart() -> ClusterScatterChart<NullRenderer> {
    let mut chart =
        ClusterScatterChart::new(NullRenderer::default(), ChartConfig::cluster_scatter())
            .expect("chart init");
    chart
        .set_dataset(ScatterDataset::new(
            vec![
                DataPoint::new(0.0, 0.0, 0).with_details(
                    ClusterDetail::new("Corolla 2021")
                        .with_combined_fe(34.0)
                        .with_annual_fuel_cost(1150.0)
                        .with_distance_from_cluster(0.31)
                        .with_cluster(0),
                ),
                DataPoint::new(5.0, 5.0, 1),
                DataPoint::new(10.0, 0.0, 2),
            ],
            Vec::new(),
        ))
        .expect("set dataset");
    chart
}

fn marker_center(chart: &ClusterScatterChart<NullRenderer>, index: usize) -> (f64, f64) {
    let circle = &chart.current_frame().expect("frame").circles[index];
    (circle.cx, circle.cy)
}

#[test]
fn entering_a_marker_shows_tooltip_at_pointer_offset() {
    let mut chart = hover_chart();
    let (x, y) = marker_center(&chart, 0);

    let transition = chart.pointer_move(x + 1.0, y - 1.0).expect("pointer move");
    assert_eq!(transition, HoverTransition::Entered(MarkerId(0)));

    let tooltip = chart.tooltip_state();
    assert!(tooltip.visible);
    assert_eq!(tooltip.screen_x, x + 1.0 + 10.0);
    assert_eq!(tooltip.screen_y, y - 1.0 - 20.0);
    assert_eq!(
        tooltip.content,
        "Car: Corolla 2021\nCombined FE: 34 MPG\nAnnual Cost: $1150\nCluster: 0\nDistance from Avg: 0.31"
    );
    assert_eq!(chart.hovered_marker(), Some(MarkerId(0)));

    let frame = chart.current_frame().expect("frame");
    assert_eq!(frame.overlay.rects.len(), 1);
    assert_eq!(frame.overlay.texts.len(), 5);
}

#[test]
fn moving_within_marker_only_moves_tooltip() {
    let mut chart = hover_chart();
    let (x, y) = marker_center(&chart, 1);
    chart.pointer_move(x, y).expect("enter");
    let content = chart.tooltip_state().content;

    let transition = chart.pointer_move(x + 2.0, y + 2.0).expect("move");
    assert_eq!(transition, HoverTransition::Moved(MarkerId(1)));

    let tooltip = chart.tooltip_state();
    assert_eq!(tooltip.content, content);
    assert_eq!((tooltip.screen_x, tooltip.screen_y), (x + 12.0, y - 18.0));
    assert_eq!(chart.hovered_marker(), Some(MarkerId(1)));
    assert!(chart.is_animating());
}

#[test]
fn emphasis_animates_to_larger_darker_marker() {
    let mut chart = hover_chart();
    let (x, y) = marker_center(&chart, 2);
    chart.pointer_move(x, y).expect("enter");
    assert!(chart.is_animating());

    assert!(chart.advance_animations(0.1).expect("half step"));
    let half = chart.current_frame().expect("frame").circles[2];
    assert!(half.radius > 5.0 && half.radius < 8.0);

    assert!(chart.advance_animations(0.1).expect("final step"));
    let full = chart.current_frame().expect("frame").circles[2];
    assert_eq!(full.radius, 8.0);
    assert_eq!(full.fill_color, Color::category(2).darker(1.0));
    assert!(!chart.is_animating());
    assert!(!chart.advance_animations(0.1).expect("idle step"));
}

#[test]
fn leaving_hides_tooltip_and_reverts_marker() {
    let mut chart = hover_chart();
    let (x, y) = marker_center(&chart, 0);
    chart.pointer_move(x, y).expect("enter");
    chart.advance_animations(0.2).expect("animate in");

    let transition = chart.pointer_move(x + 200.0, y - 200.0).expect("leave marker");
    assert_eq!(transition, HoverTransition::Left(MarkerId(0)));
    assert!(!chart.tooltip_state().visible);
    assert_eq!(chart.hovered_marker(), None);

    chart.advance_animations(0.2).expect("animate out");
    let circle = chart.current_frame().expect("frame").circles[0];
    assert_eq!(circle.radius, 5.0);
    assert_eq!(circle.fill_color, Color::category(0));
    assert!(chart.emphasized_markers().is_empty());
    assert!(chart.current_frame().expect("frame").overlay.is_empty());
}

#[test]
fn pointer_leaving_surface_resets_hover() {
    let mut chart = hover_chart();
    let (x, y) = marker_center(&chart, 1);
    chart.pointer_move(x, y).expect("enter");

    assert_eq!(
        chart.pointer_leave().expect("leave"),
        HoverTransition::Left(MarkerId(1))
    );
    assert_eq!(chart.pointer_leave().expect("leave again"), HoverTransition::Unchanged);
    assert!(!chart.tooltip_state().visible);
}

#[test]
fn switching_markers_keeps_a_single_emphasis() {
    let mut chart = hover_chart();
    let (x0, y0) = marker_center(&chart, 0);
    let (x2, y2) = marker_center(&chart, 2);

    chart.pointer_move(x0, y0).expect("enter first");
    chart.advance_animations(0.2).expect("animate first");
    let transition = chart.pointer_move(x2, y2).expect("switch");
    assert_eq!(
        transition,
        HoverTransition::Switched {
            from: MarkerId(0),
            to: MarkerId(2)
        }
    );
    assert_eq!(chart.hovered_marker(), Some(MarkerId(2)));

    chart.advance_animations(0.2).expect("settle");
    assert_eq!(chart.emphasized_markers(), vec![MarkerId(2)]);
    assert_eq!(chart.emphasis_level(MarkerId(0)), 0.0);
    assert_eq!(chart.emphasis_level(MarkerId(2)), 1.0);
    let expected = scatter_tooltip_content(&chart.dataset().points[2]);
    assert_eq!(chart.tooltip_state().content, expected);
}

#[test]
fn pointer_over_empty_space_is_ignored() {
    let mut chart = hover_chart();
    let frames_before = chart.renderer().frames_rendered;

    let transition = chart.pointer_move(1.0, 1.0).expect("move");
    assert_eq!(transition, HoverTransition::Unchanged);
    assert_eq!(chart.renderer().frames_rendered, frames_before);
    assert!(!chart.has_tooltip_overlay());
}

#[test]
fn new_dataset_drops_hover_state() {
    let mut chart = hover_chart();
    let (x, y) = marker_center(&chart, 0);
    chart.pointer_move(x, y).expect("enter");

    chart
        .set_dataset(ScatterDataset::new(vec![DataPoint::new(1.0, 1.0, 0)], Vec::new()))
        .expect("replace dataset");
    assert_eq!(chart.hovered_marker(), None);
    assert!(!chart.tooltip_state().visible);
    assert!(chart.emphasized_markers().is_empty());
    assert!(chart.current_frame().expect("frame").overlay.is_empty());
}
