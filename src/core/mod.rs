pub mod insights;
pub mod projection;
pub mod scale;
pub mod scatter;
pub mod trend;
pub mod types;

pub use insights::{ClusterInsight, ClusterInsightTable, ClusterPrediction};
pub use projection::{CoordinateProjector, TREND_Y_HEADROOM};
pub use scale::{LinearScale, finite_extent};
pub use scatter::{Centroid, ClusterDetail, DataPoint, ScatterDataset};
pub use trend::{BufferSignal, PredictionInputs, TrendBuffer, TrendRecord};
pub use types::{Margins, PlotArea, ScreenPoint, Viewport};
