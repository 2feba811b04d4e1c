use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Per-vehicle display data attached to a scatter point.
///
/// Every field is optional; the chart never computes with these values and
/// renders missing ones as blanks. Keys the chart does not know about are kept
/// in arrival order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ClusterDetail {
    #[serde(
        rename = "Car Model and Year",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub car_model_and_year: Option<String>,
    #[serde(rename = "Combined FE", default, skip_serializing_if = "Option::is_none")]
    pub combined_fe: Option<f64>,
    #[serde(
        rename = "Annual Fuel Cost",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub annual_fuel_cost: Option<f64>,
    #[serde(
        rename = "Distance from Cluster",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub distance_from_cluster: Option<f64>,
    #[serde(rename = "Cluster", default, skip_serializing_if = "Option::is_none")]
    pub cluster: Option<i32>,
    #[serde(flatten)]
    pub extra: IndexMap<String, serde_json::Value>,
}

impl ClusterDetail {
    #[must_use]
    pub fn new(car_model_and_year: impl Into<String>) -> Self {
        Self {
            car_model_and_year: Some(car_model_and_year.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_combined_fe(mut self, mpg: f64) -> Self {
        self.combined_fe = Some(mpg);
        self
    }

    #[must_use]
    pub fn with_annual_fuel_cost(mut self, dollars: f64) -> Self {
        self.annual_fuel_cost = Some(dollars);
        self
    }

    #[must_use]
    pub fn with_distance_from_cluster(mut self, distance: f64) -> Self {
        self.distance_from_cluster = Some(distance);
        self
    }

    #[must_use]
    pub fn with_cluster(mut self, cluster: i32) -> Self {
        self.cluster = Some(cluster);
        self
    }
}

/// One vehicle on the cluster scatter chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub x: f64,
    pub y: f64,
    #[serde(alias = "clusterId")]
    pub cluster: i32,
    #[serde(default, alias = "detail")]
    pub details: ClusterDetail,
}

impl DataPoint {
    #[must_use]
    pub fn new(x: f64, y: f64, cluster: i32) -> Self {
        Self {
            x,
            y,
            cluster,
            details: ClusterDetail::default(),
        }
    }

    #[must_use]
    pub fn with_details(mut self, details: ClusterDetail) -> Self {
        self.details = details;
        self
    }

    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Cluster center; drawn as a cross on top of the points, never hoverable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Centroid {
    pub x: f64,
    pub y: f64,
    #[serde(alias = "clusterId")]
    pub cluster: i32,
}

impl Centroid {
    #[must_use]
    pub fn new(x: f64, y: f64, cluster: i32) -> Self {
        Self { x, y, cluster }
    }

    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Payload of one cluster-graph fetch. Replaced wholesale, never patched.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ScatterDataset {
    #[serde(default)]
    pub points: Vec<DataPoint>,
    #[serde(default)]
    pub centroids: Vec<Centroid>,
}

impl ScatterDataset {
    #[must_use]
    pub fn new(points: Vec<DataPoint>, centroids: Vec<Centroid>) -> Self {
        Self { points, centroids }
    }

    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty() && self.centroids.is_empty()
    }

    /// Drops points and centroids whose coordinates are not finite.
    ///
    /// Returns the number of removed entries.
    pub fn retain_finite(&mut self) -> usize {
        let before = self.points.len() + self.centroids.len();
        self.points.retain(DataPoint::is_finite);
        self.centroids.retain(Centroid::is_finite);
        before - self.points.len() - self.centroids.len()
    }
}
