use criterion::{Criterion, criterion_group, criterion_main};
use fuel_insight_charts::api::{ChartConfig, ClusterScatterChart};
use fuel_insight_charts::core::{
    ClusterDetail, CoordinateProjector, DataPoint, LinearScale, PlotArea, ScatterDataset,
};
use fuel_insight_charts::render::NullRenderer;
use std::hint::black_box;

fn generated_points(count: usize) -> Vec<DataPoint> {
    (0..count)
        .map(|i| {
            let t = i as f64;
            DataPoint::new((t * 0.37).sin() * 4.0, (t * 0.11).cos() * 3.0, (i % 3) as i32)
                .with_details(ClusterDetail::new(format!("Vehicle {i}")).with_combined_fe(20.0 + t % 25.0))
        })
        .collect()
}

fn bench_linear_scale_round_trip(c: &mut Criterion) {
    let scale = LinearScale::new(-4.0, 4.0, 0.0, 1_920.0).expect("valid scale");

    c.bench_function("linear_scale_round_trip", |b| {
        b.iter(|| {
            let px = scale.domain_to_pixel(black_box(1.234));
            let _ = scale.pixel_to_domain(px);
        })
    });
}

fn bench_scatter_projection_10k(c: &mut Criterion) {
    let config = ChartConfig::cluster_scatter();
    let area: PlotArea = config.plot_area().expect("plot area");
    let points = generated_points(10_000);

    c.bench_function("scatter_projection_10k", |b| {
        b.iter(|| {
            let projector =
                CoordinateProjector::scatter_in(black_box(&points), area).expect("projector");
            let _ = projector.project_points(black_box(&points));
        })
    });
}

fn bench_scatter_frame_build_2k(c: &mut Criterion) {
    let mut chart = ClusterScatterChart::new(NullRenderer::default(), ChartConfig::cluster_scatter())
        .expect("chart init");
    chart
        .set_dataset(ScatterDataset::new(generated_points(2_000), Vec::new()))
        .expect("set dataset");

    c.bench_function("scatter_frame_build_2k", |b| {
        b.iter(|| {
            let _ = chart.build_render_frame().expect("frame should build");
        })
    });
}

criterion_group!(
    benches,
    bench_linear_scale_round_trip,
    bench_scatter_projection_10k,
    bench_scatter_frame_build_2k
);
criterion_main!(benches);
