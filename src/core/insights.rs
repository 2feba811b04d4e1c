use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Display text attached to a cluster id. Never used by rendering math.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterInsight {
    pub description: String,
    pub average_comb_fe: f64,
    pub recommendation: String,
}

impl ClusterInsight {
    #[must_use]
    pub fn new(
        description: impl Into<String>,
        average_comb_fe: f64,
        recommendation: impl Into<String>,
    ) -> Self {
        Self {
            description: description.into(),
            average_comb_fe,
            recommendation: recommendation.into(),
        }
    }
}

/// Fixed `cluster id -> insight` lookup shown beside the scatter chart.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ClusterInsightTable {
    entries: IndexMap<i32, ClusterInsight>,
}

impl ClusterInsightTable {
    /// The three clusters produced by the dashboard's clustering model.
    ///
    /// Each description opens with the name of the cluster's palette color
    /// (`cluster mod 10` into the category-10 palette).
    #[must_use]
    pub fn builtin() -> Self {
        let mut entries = IndexMap::with_capacity(3);
        entries.insert(
            0,
            ClusterInsight::new(
                "Blue, High fuel efficiency vehicles.",
                30.0,
                "Keep tires inflated and perform regular maintenance.",
            ),
        );
        entries.insert(
            1,
            ClusterInsight::new(
                "Orange, Moderate fuel efficiency vehicles.",
                20.0,
                "Consider eco-friendly driving habits.",
            ),
        );
        entries.insert(
            2,
            ClusterInsight::new(
                "Green, Low fuel efficiency vehicles.",
                45.0,
                "Plan short trips efficiently.",
            ),
        );
        Self { entries }
    }

    pub fn insert(&mut self, cluster: i32, insight: ClusterInsight) -> Option<ClusterInsight> {
        self.entries.insert(cluster, insight)
    }

    #[must_use]
    pub fn get(&self, cluster: i32) -> Option<&ClusterInsight> {
        self.entries.get(&cluster)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (i32, &ClusterInsight)> {
        self.entries.iter().map(|(cluster, insight)| (*cluster, insight))
    }
}

/// Response of the cluster-prediction endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterPrediction {
    pub cluster_id: i32,
    pub insights: ClusterInsight,
}
