use std::fmt::Display;

use crate::core::{DataPoint, TrendRecord};

/// Tooltip text for a scatter point, one detail per line.
///
/// Missing detail fields render as blanks; the cluster falls back to the
/// point's own cluster id.
#[must_use]
pub fn scatter_tooltip_content(point: &DataPoint) -> String {
    let details = &point.details;
    let cluster = details.cluster.unwrap_or(point.cluster);
    [
        format!("Car: {}", or_blank(details.car_model_and_year.as_ref())),
        format!("Combined FE: {} MPG", or_blank(details.combined_fe.as_ref())),
        format!("Annual Cost: ${}", or_blank(details.annual_fuel_cost.as_ref())),
        format!("Cluster: {cluster}"),
        format!(
            "Distance from Avg: {}",
            or_blank(details.distance_from_cluster.as_ref())
        ),
    ]
    .join("\n")
}

#[must_use]
pub fn trend_tooltip_content(record: &TrendRecord) -> String {
    format!("Input: {}\nEfficiency: {:.2}", record.label, record.value)
}

fn or_blank<T: Display>(value: Option<&T>) -> String {
    value.map(ToString::to_string).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::{scatter_tooltip_content, trend_tooltip_content};
    use crate::core::{ClusterDetail, DataPoint, TrendRecord};

    #[test]
    fn scatter_content_lists_every_detail() {
        let point = DataPoint::new(0.5, -1.0, 2).with_details(
            ClusterDetail::new("Civic 2020")
                .with_combined_fe(33.0)
                .with_annual_fuel_cost(1250.0)
                .with_distance_from_cluster(0.42)
                .with_cluster(2),
        );
        assert_eq!(
            scatter_tooltip_content(&point),
            "Car: Civic 2020\nCombined FE: 33 MPG\nAnnual Cost: $1250\nCluster: 2\nDistance from Avg: 0.42"
        );
    }

    #[test]
    fn missing_details_render_blank() {
        let point = DataPoint::new(0.0, 0.0, 1);
        assert_eq!(
            scatter_tooltip_content(&point),
            "Car: \nCombined FE:  MPG\nAnnual Cost: $\nCluster: 1\nDistance from Avg: "
        );
    }

    #[test]
    fn trend_content_rounds_efficiency() {
        let record = TrendRecord::new("Eng: 2, Cyl: 4", 31.4567);
        assert_eq!(
            trend_tooltip_content(&record),
            "Input: Eng: 2, Cyl: 4\nEfficiency: 31.46"
        );
    }
}
