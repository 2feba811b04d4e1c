//! JSON payloads exchanged with the prediction and clustering service.
//!
//! Transport is the host's concern; these types only decode response bodies
//! and encode request bodies.

use std::fmt::Display;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::{ClusterPrediction, PredictionInputs, ScatterDataset, TrendRecord};
use crate::error::{ChartError, ChartResult};

pub const CLUSTER_GRAPH_ROUTE: &str = "/cluster-graph";
pub const PREDICT_FUEL_EFFICIENCY_ROUTE: &str = "/predict-fuel-efficiency";
pub const PREDICT_CLUSTER_ROUTE: &str = "/predict-cluster";

/// Body of a fuel-efficiency prediction response.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionResponse {
    pub predicted_comb_fe: f64,
}

impl PredictionResponse {
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input).map_err(|e| {
            ChartError::Contract(format!("failed to parse prediction response: {e}"))
        })
    }

    /// Trend record labelled with the inputs that produced this prediction.
    #[must_use]
    pub fn into_record(self, inputs: &PredictionInputs) -> TrendRecord {
        TrendRecord::from_prediction(inputs, self.predicted_comb_fe)
    }
}

impl ScatterDataset {
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::Contract(format!("failed to parse cluster graph: {e}")))
    }

    /// Turns a failed fetch into an empty dataset so the chart still shows
    /// its axes.
    pub fn from_fetch_result<E: Display>(result: Result<Self, E>) -> Self {
        match result {
            Ok(dataset) => dataset,
            Err(err) => {
                warn!(error = %err, "cluster graph fetch failed; showing empty chart");
                Self::empty()
            }
        }
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::Contract(format!("failed to serialize cluster graph: {e}")))
    }
}

impl ClusterPrediction {
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input).map_err(|e| {
            ChartError::Contract(format!("failed to parse cluster prediction: {e}"))
        })
    }
}

impl PredictionInputs {
    /// Request body for the prediction endpoint. Inputs are range-checked
    /// first.
    pub fn to_request_json(&self) -> ChartResult<String> {
        let inputs = self.validate()?;
        serde_json::to_string(&inputs).map_err(|e| {
            ChartError::Contract(format!("failed to serialize prediction request: {e}"))
        })
    }
}
