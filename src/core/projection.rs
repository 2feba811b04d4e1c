use serde::{Deserialize, Serialize};

use crate::core::{DataPoint, LinearScale, PlotArea, ScreenPoint, TrendRecord, finite_extent};
use crate::error::ChartResult;

/// Default space left above the highest prediction on the trend Y axis.
pub const TREND_Y_HEADROOM: f64 = 5.0;

/// Composes the X and Y scales into one data-to-pixel projection.
///
/// Projected points are plot-local; callers translate them with
/// [`PlotArea::to_screen`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoordinateProjector {
    pub x: LinearScale,
    pub y: LinearScale,
}

impl CoordinateProjector {
    #[must_use]
    pub fn new(x: LinearScale, y: LinearScale) -> Self {
        Self { x, y }
    }

    /// Scatter projection: both domains are the extents of the current points.
    pub fn for_scatter(
        points: &[DataPoint],
        x_range: (f64, f64),
        y_range: (f64, f64),
    ) -> ChartResult<Self> {
        let x = LinearScale::from_values(points.iter().map(|point| point.x), x_range)?;
        let y = LinearScale::from_values(points.iter().map(|point| point.y), y_range)?;
        Ok(Self { x, y })
    }

    /// Trend projection: ordinal X over `[0, n - 1]` and Y over
    /// `[0, max(value) + headroom]`.
    pub fn for_trend(
        records: &[TrendRecord],
        headroom: f64,
        x_range: (f64, f64),
        y_range: (f64, f64),
    ) -> ChartResult<Self> {
        let last_index = records.len().saturating_sub(1) as f64;
        let x = LinearScale::new(0.0, last_index, x_range.0, x_range.1)?;
        let y_top = finite_extent(records.iter().map(|record| record.value))
            .map_or(0.0, |(_, max)| max + headroom);
        let y = LinearScale::new(0.0, y_top, y_range.0, y_range.1)?;
        Ok(Self { x, y })
    }

    pub fn scatter_in(points: &[DataPoint], area: PlotArea) -> ChartResult<Self> {
        Self::for_scatter(points, area.x_range(), area.y_range())
    }

    pub fn trend_in(records: &[TrendRecord], headroom: f64, area: PlotArea) -> ChartResult<Self> {
        Self::for_trend(records, headroom, area.x_range(), area.y_range())
    }

    #[must_use]
    pub fn project(self, x: f64, y: f64) -> ScreenPoint {
        ScreenPoint::new(self.x.domain_to_pixel(x), self.y.domain_to_pixel(y))
    }

    #[must_use]
    pub fn project_index(self, index: usize, value: f64) -> ScreenPoint {
        self.project(index as f64, value)
    }

    /// Projects every point in input order.
    #[must_use]
    pub fn project_points(self, points: &[DataPoint]) -> Vec<ScreenPoint> {
        #[cfg(feature = "parallel-projection")]
        {
            use rayon::prelude::*;

            if points.len() >= PARALLEL_PROJECTION_THRESHOLD {
                return points
                    .par_iter()
                    .map(|point| self.project(point.x, point.y))
                    .collect();
            }
        }

        points
            .iter()
            .map(|point| self.project(point.x, point.y))
            .collect()
    }

    #[must_use]
    pub fn project_records(self, records: &[TrendRecord]) -> Vec<ScreenPoint> {
        records
            .iter()
            .enumerate()
            .map(|(index, record)| self.project_index(index, record.value))
            .collect()
    }
}

#[cfg(feature = "parallel-projection")]
const PARALLEL_PROJECTION_THRESHOLD: usize = 4_096;
