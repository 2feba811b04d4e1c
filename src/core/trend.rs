use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{ChartError, ChartResult};

/// One fuel-efficiency prediction plotted on the trend chart.
///
/// The X position is the record's arrival index, not a field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendRecord {
    pub label: String,
    pub value: f64,
}

impl TrendRecord {
    #[must_use]
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }

    /// Folds the request inputs into the record label.
    #[must_use]
    pub fn from_prediction(inputs: &PredictionInputs, predicted_mpg: f64) -> Self {
        Self::new(inputs.label(), predicted_mpg)
    }
}

/// Regression inputs sent to the prediction service.
///
/// Field names on the wire follow the service's training columns.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionInputs {
    #[serde(rename = "Eng Displ")]
    pub engine_displacement_l: f64,
    #[serde(rename = "# Cyl")]
    pub cylinders: u32,
    #[serde(rename = "City FE (Guide) - Conventional Fuel")]
    pub city_mpg: f64,
    #[serde(rename = "Hwy FE (Guide) - Conventional Fuel")]
    pub highway_mpg: f64,
    #[serde(rename = "Comb CO2 Rounded Adjusted (as shown on FE Label)")]
    pub co2_g_per_mile: f64,
}

pub const ENGINE_DISPLACEMENT_RANGE_L: (f64, f64) = (1.0, 6.0);
pub const CYLINDERS_RANGE: (u32, u32) = (3, 12);
pub const CITY_MPG_RANGE: (f64, f64) = (10.0, 50.0);
pub const HIGHWAY_MPG_RANGE: (f64, f64) = (10.0, 60.0);
pub const CO2_RANGE_G_PER_MILE: (f64, f64) = (100.0, 600.0);

impl Default for PredictionInputs {
    fn default() -> Self {
        Self {
            engine_displacement_l: 3.5,
            cylinders: 6,
            city_mpg: 20.0,
            highway_mpg: 28.0,
            co2_g_per_mile: 300.0,
        }
    }
}

impl PredictionInputs {
    /// Human-readable summary used as the trend record label.
    #[must_use]
    pub fn label(&self) -> String {
        format!(
            "Eng: {}, Cyl: {}, City FE: {}, Hwy FE: {}, CO2: {}",
            self.engine_displacement_l,
            self.cylinders,
            self.city_mpg,
            self.highway_mpg,
            self.co2_g_per_mile
        )
    }

    pub fn validate(self) -> ChartResult<Self> {
        for (name, value, (min, max)) in [
            (
                "engine_displacement_l",
                self.engine_displacement_l,
                ENGINE_DISPLACEMENT_RANGE_L,
            ),
            ("city_mpg", self.city_mpg, CITY_MPG_RANGE),
            ("highway_mpg", self.highway_mpg, HIGHWAY_MPG_RANGE),
            ("co2_g_per_mile", self.co2_g_per_mile, CO2_RANGE_G_PER_MILE),
        ] {
            if !value.is_finite() || !(min..=max).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "prediction input `{name}` must be finite and in [{min}, {max}]"
                )));
            }
        }
        let (min_cyl, max_cyl) = CYLINDERS_RANGE;
        if !(min_cyl..=max_cyl).contains(&self.cylinders) {
            return Err(ChartError::InvalidData(format!(
                "prediction input `cylinders` must be in [{min_cyl}, {max_cyl}]"
            )));
        }
        Ok(self)
    }
}

/// What the owner of a [`TrendBuffer`] must do after a mutation.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BufferSignal {
    /// Re-render the whole accumulated sequence.
    Redraw,
    /// Wipe the drawing surface.
    ClearSurface,
}

/// Append-only, arrival-ordered prediction history.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrendBuffer {
    records: Vec<TrendRecord>,
}

impl TrendBuffer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, record: TrendRecord) -> BufferSignal {
        self.records.push(record);
        trace!(count = self.records.len(), "append trend record");
        BufferSignal::Redraw
    }

    /// Empties the sequence. Signals a clear even when already empty.
    pub fn reset(&mut self) -> BufferSignal {
        trace!(dropped = self.records.len(), "reset trend buffer");
        self.records.clear();
        BufferSignal::ClearSurface
    }

    #[must_use]
    pub fn records(&self) -> &[TrendRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.records.iter().map(|record| record.value)
    }
}
