use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Linear mapping from a data domain onto a pixel range.
///
/// A scale with `domain_start == domain_end` is degenerate: every input maps
/// to the middle of the pixel range and no division is performed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    pub fn new(
        domain_start: f64,
        domain_end: f64,
        range_start: f64,
        range_end: f64,
    ) -> ChartResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() {
            return Err(ChartError::InvalidData(
                "scale domain must be finite".to_owned(),
            ));
        }
        if !range_start.is_finite() || !range_end.is_finite() {
            return Err(ChartError::InvalidData(
                "scale pixel range must be finite".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
            range_start,
            range_end,
        })
    }

    /// Builds a scale over the extent (min/max) of `values`.
    ///
    /// Non-finite values are skipped. An empty or single-valued input yields a
    /// degenerate scale.
    pub fn from_values<I>(values: I, range: (f64, f64)) -> ChartResult<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let (min, max) = finite_extent(values).unwrap_or((0.0, 0.0));
        Self::new(min, max, range.0, range.1)
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.domain_start == self.domain_end
    }

    #[must_use]
    pub fn range_midpoint(self) -> f64 {
        (self.range_start + self.range_end) / 2.0
    }

    #[must_use]
    pub fn domain_to_pixel(self, value: f64) -> f64 {
        if self.is_degenerate() {
            return self.range_midpoint();
        }
        if value == self.domain_end {
            return self.range_end;
        }

        let normalized = if self.has_finite_span() {
            (value - self.domain_start) / (self.domain_end - self.domain_start)
        } else {
            (value / 2.0 - self.domain_start / 2.0)
                / (self.domain_end / 2.0 - self.domain_start / 2.0)
        };
        self.range_start + normalized * (self.range_end - self.range_start)
    }

    /// Inverse mapping. Degenerate scales and zero-width ranges return the
    /// domain start.
    #[must_use]
    pub fn pixel_to_domain(self, pixel: f64) -> f64 {
        let range_span = self.range_end - self.range_start;
        if self.is_degenerate() || range_span == 0.0 {
            return self.domain_start;
        }

        let normalized = (pixel - self.range_start) / range_span;
        if self.has_finite_span() {
            self.domain_start + normalized * (self.domain_end - self.domain_start)
        } else {
            (1.0 - normalized) * self.domain_start + normalized * self.domain_end
        }
    }

    /// Step between "nice" ticks for roughly `count` intervals.
    ///
    /// Steps are 1, 2 or 5 times a power of ten. Returns `None` for degenerate
    /// scales or a zero count.
    #[must_use]
    pub fn tick_step(self, count: usize) -> Option<f64> {
        let (lo, hi) = self.sorted_domain();
        tick_increment(lo, hi, count).map(TickIncrement::step)
    }

    /// Nice tick values inside the domain, ascending.
    ///
    /// Domains too narrow or too wide for a representable nice step fall back
    /// to the two domain bounds. At most `2 * count + 1` ticks are produced.
    #[must_use]
    pub fn ticks(self, count: usize) -> Vec<f64> {
        let (lo, hi) = self.sorted_domain();
        if lo == hi {
            return vec![lo];
        }
        let Some(increment) = tick_increment(lo, hi, count) else {
            return vec![lo, hi];
        };

        let (first, last) = increment.index_bounds(lo, hi);
        if last < first {
            return Vec::new();
        }
        let max_intervals = i64::try_from(count.saturating_mul(2)).unwrap_or(i64::MAX);
        if last.saturating_sub(first) > max_intervals {
            return vec![lo, hi];
        }
        (first..=last).map(|index| increment.value_at(index)).collect()
    }

    fn has_finite_span(self) -> bool {
        (self.domain_end - self.domain_start).is_finite()
    }

    fn sorted_domain(self) -> (f64, f64) {
        if self.domain_start <= self.domain_end {
            (self.domain_start, self.domain_end)
        } else {
            (self.domain_end, self.domain_start)
        }
    }
}

/// Min/max over the finite members of `values`.
pub fn finite_extent<I>(values: I) -> Option<(f64, f64)>
where
    I: IntoIterator<Item = f64>,
{
    values
        .into_iter()
        .filter(|value| value.is_finite())
        .fold(None, |acc, value| match acc {
            None => Some((value, value)),
            Some((min, max)) => Some((min.min(value), max.max(value))),
        })
}

/// Tick spacing kept as an integer ratio to limit float drift.
#[derive(Debug, Clone, Copy, PartialEq)]
enum TickIncrement {
    /// Ticks at `index * step`.
    Multiply(f64),
    /// Ticks at `index / inverse_step`, used for steps below one.
    Divide(f64),
}

impl TickIncrement {
    fn step(self) -> f64 {
        match self {
            Self::Multiply(step) => step,
            Self::Divide(inverse) => 1.0 / inverse,
        }
    }

    fn value_at(self, index: i64) -> f64 {
        match self {
            Self::Multiply(step) => index as f64 * step,
            Self::Divide(inverse) => index as f64 / inverse,
        }
    }

    fn index_bounds(self, lo: f64, hi: f64) -> (i64, i64) {
        let (mut first, mut last) = match self {
            Self::Multiply(step) => ((lo / step).round() as i64, (hi / step).round() as i64),
            Self::Divide(inverse) => ((lo * inverse).round() as i64, (hi * inverse).round() as i64),
        };
        if self.value_at(first) < lo {
            first += 1;
        }
        if self.value_at(last) > hi {
            last -= 1;
        }
        (first, last)
    }
}

fn tick_increment(lo: f64, hi: f64, count: usize) -> Option<TickIncrement> {
    let span = hi - lo;
    if count == 0 || !span.is_finite() || span <= 0.0 {
        return None;
    }

    let raw_step = span / count as f64;
    if !raw_step.is_normal() {
        return None;
    }
    let power = raw_step.log10().floor();
    let error = raw_step / 10f64.powf(power);
    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };

    let increment = if power < 0.0 {
        TickIncrement::Divide(10f64.powf(-power) / factor)
    } else {
        TickIncrement::Multiply(10f64.powf(power) * factor)
    };
    let step = increment.step();
    let magnitude = match increment {
        TickIncrement::Multiply(step) => step,
        TickIncrement::Divide(inverse) => inverse,
    };
    (step.is_normal() && step > 0.0 && magnitude.is_normal() && magnitude > 0.0)
        .then_some(increment)
}

#[cfg(test)]
mod tests {
    use super::{LinearScale, finite_extent};

    #[test]
    fn extent_skips_non_finite_values() {
        let extent = finite_extent([3.0, f64::NAN, -1.0, f64::INFINITY, 7.5]);
        assert_eq!(extent, Some((-1.0, 7.5)));
        assert_eq!(finite_extent(std::iter::empty()), None);
    }

    #[test]
    fn ticks_use_one_two_five_steps() {
        let scale = LinearScale::new(0.0, 10.0, 0.0, 500.0).expect("scale");
        assert_eq!(scale.ticks(10), (0..=10).map(f64::from).collect::<Vec<_>>());
        assert_eq!(scale.ticks(5), vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);

        let small = LinearScale::new(0.0, 1.0, 0.0, 100.0).expect("scale");
        assert_eq!(small.tick_step(10), Some(0.1));
        assert_eq!(small.ticks(10)[3], 0.3);
    }

    #[test]
    fn ticks_stay_inside_reversed_domain() {
        let scale = LinearScale::new(35.0, 0.0, 0.0, 300.0).expect("scale");
        let ticks = scale.ticks(10);
        assert_eq!(ticks.first().copied(), Some(0.0));
        assert_eq!(ticks.last().copied(), Some(35.0));
        assert_eq!(scale.tick_step(10), Some(5.0));
    }

    #[test]
    fn unrepresentable_steps_fall_back_to_bounds() {
        let tiny = LinearScale::new(0.0, 1e-310, 0.0, 100.0).expect("scale");
        assert_eq!(tiny.tick_step(10), None);
        assert_eq!(tiny.ticks(10), vec![0.0, 1e-310]);

        let huge = LinearScale::new(-1e308, 1e308, 0.0, 100.0).expect("scale");
        assert_eq!(huge.tick_step(10), None);
        assert_eq!(huge.ticks(10), vec![-1e308, 1e308]);
        assert_eq!(huge.domain_to_pixel(0.0), 50.0);
        assert_eq!(huge.pixel_to_domain(50.0), 0.0);
    }

    #[test]
    fn degenerate_scale_has_single_tick() {
        let scale = LinearScale::new(7.0, 7.0, 0.0, 100.0).expect("scale");
        assert_eq!(scale.ticks(10), vec![7.0]);
        assert_eq!(scale.tick_step(10), None);
        assert_eq!(scale.pixel_to_domain(12.0), 7.0);
    }
}
