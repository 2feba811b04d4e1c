use approx::assert_relative_eq;
use fuel_insight_charts::api::ChartConfig;
use fuel_insight_charts::core::{
    CoordinateProjector, DataPoint, Margins, PlotArea, ScreenPoint, TREND_Y_HEADROOM,
    TrendRecord, Viewport,
};

#[test]
fn scatter_extent_maps_onto_plot_with_inverted_y() {
    let points = vec![
        DataPoint::new(0.0, 0.0, 0),
        DataPoint::new(5.0, 5.0, 1),
        DataPoint::new(10.0, 0.0, 2),
    ];
    let projector =
        CoordinateProjector::for_scatter(&points, (0.0, 100.0), (100.0, 0.0)).expect("projector");

    assert_eq!(
        projector.project_points(&points),
        vec![
            ScreenPoint::new(0.0, 100.0),
            ScreenPoint::new(50.0, 0.0),
            ScreenPoint::new(100.0, 100.0),
        ]
    );
}

#[test]
fn single_point_lands_on_both_midpoints() {
    let points = vec![DataPoint::new(3.3, -7.1, 4)];
    let projector =
        CoordinateProjector::for_scatter(&points, (0.0, 100.0), (100.0, 0.0)).expect("projector");

    assert_eq!(projector.project(3.3, -7.1), ScreenPoint::new(50.0, 50.0));
}

#[test]
fn trend_domain_adds_headroom_above_peak() {
    let records = vec![TrendRecord::new("a", 20.0), TrendRecord::new("b", 30.0)];
    let projector = CoordinateProjector::for_trend(&records, TREND_Y_HEADROOM, (0.0, 500.0), (320.0, 0.0))
        .expect("projector");

    assert_eq!(projector.x.domain(), (0.0, 1.0));
    assert_eq!(projector.y.domain(), (0.0, 35.0));

    let projected = projector.project_records(&records);
    assert_eq!(projected[0].x, 0.0);
    assert_eq!(projected[1].x, 500.0);
    assert_relative_eq!(projected[0].y, 320.0 - 20.0 / 35.0 * 320.0, epsilon = 1e-9);
    assert_relative_eq!(projected[1].y, 320.0 - 30.0 / 35.0 * 320.0, epsilon = 1e-9);
}

#[test]
fn single_trend_record_is_centered_horizontally() {
    let records = vec![TrendRecord::new("only", 12.0)];
    let projector = CoordinateProjector::for_trend(&records, TREND_Y_HEADROOM, (0.0, 500.0), (320.0, 0.0))
        .expect("projector");

    let point = projector.project_index(0, 12.0);
    assert_eq!(point.x, 250.0);
    assert_relative_eq!(point.y, 320.0 - 12.0 / 17.0 * 320.0, epsilon = 1e-9);
}

#[test]
fn empty_trend_is_degenerate_on_both_axes() {
    let projector = CoordinateProjector::for_trend(&[], TREND_Y_HEADROOM, (0.0, 500.0), (320.0, 0.0))
        .expect("projector");

    assert!(projector.x.is_degenerate());
    assert!(projector.y.is_degenerate());
}

#[test]
fn plot_area_translates_by_left_and_top_margins() {
    let area = PlotArea::new(Viewport::new(800, 600), Margins::new(20.0, 30.0, 50.0, 50.0))
        .expect("plot area");

    assert_eq!(area.inner_width(), 720.0);
    assert_eq!(area.inner_height(), 530.0);
    assert_eq!(area.y_range(), (530.0, 0.0));
    assert_eq!(
        area.to_screen(ScreenPoint::new(0.0, 530.0)),
        ScreenPoint::new(50.0, 550.0)
    );
}

#[test]
fn scatter_projection_in_preset_plot_area() {
    let area = ChartConfig::cluster_scatter()
        .plot_area()
        .expect("plot area");
    let points = vec![DataPoint::new(1.0, 1.0, 0), DataPoint::new(3.0, 2.0, 1)];
    let projector = CoordinateProjector::scatter_in(&points, area).expect("projector");

    let top_right = area.to_screen(projector.project(3.0, 2.0));
    let bottom_left = area.to_screen(projector.project(1.0, 1.0));
    assert_eq!(top_right, ScreenPoint::new(770.0, 20.0));
    assert_eq!(bottom_left, ScreenPoint::new(50.0, 550.0));
}
