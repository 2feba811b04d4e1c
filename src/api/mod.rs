mod axis_scene_builder;
mod axis_ticks;
mod chart_config;
mod chart_core;
mod chart_runtime;
mod cluster_scatter_chart;
mod prediction_trend_chart;
mod response_sequencer;
mod scatter_frame_builder;
mod service_contract;
mod tooltip_content;
mod tooltip_scene_builder;
mod trend_frame_builder;

pub use chart_config::{AxisStyle, ChartConfig, SeriesStyle, TooltipStyle};
pub use chart_runtime::{RenderReason, RenderStats};
pub use cluster_scatter_chart::{ClusterLegendEntry, ClusterScatterChart};
pub use prediction_trend_chart::PredictionTrendChart;
pub use response_sequencer::{RequestTicket, ResponseSequencer};
pub use service_contract::{
    CLUSTER_GRAPH_ROUTE, PREDICT_CLUSTER_ROUTE, PREDICT_FUEL_EFFICIENCY_ROUTE, PredictionResponse,
};
pub use tooltip_content::{scatter_tooltip_content, trend_tooltip_content};
