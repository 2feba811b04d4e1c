//! fuel-insight-charts: interactive charts for a fuel-efficiency dashboard.
//!
//! Two charts share one pipeline. Data extents become linear scales, scales
//! project records onto the plot area, and every redraw materializes a full
//! backend-agnostic `RenderFrame` that replaces the previous one on the
//! chart's surface. A hover controller layers tooltips and marker emphasis
//! on top.
//!
//! - [`ClusterScatterChart`]: vehicles on two PCA components, one color per
//!   cluster, centroids as crosses.
//! - [`PredictionTrendChart`]: fuel-efficiency predictions in arrival order.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

#[cfg(feature = "gtk4-adapter")]
pub mod platform_gtk;

pub use api::{ChartConfig, ClusterScatterChart, PredictionTrendChart};
pub use error::{ChartError, ChartResult};
