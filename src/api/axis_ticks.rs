use crate::core::LinearScale;

/// How tick values along one axis are chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum AxisTickMode {
    /// Nice 1/2/5 steps anywhere in the domain.
    Continuous,
    /// Record indices: only whole-number ticks are kept.
    Ordinal,
}

/// Tick values and the step used for label precision.
pub(super) fn axis_ticks(
    scale: LinearScale,
    tick_count: usize,
    mode: AxisTickMode,
) -> (Vec<f64>, Option<f64>) {
    let ticks = scale.ticks(tick_count);
    let step = scale.tick_step(tick_count);
    match mode {
        AxisTickMode::Continuous => (ticks, step),
        AxisTickMode::Ordinal => {
            let ticks = ticks
                .into_iter()
                .filter(|tick| tick.fract() == 0.0)
                .collect();
            (ticks, step.map(|step| step.max(1.0)))
        }
    }
}

/// Fraction digits needed to tell ticks `step` apart.
pub(super) fn tick_precision(step: Option<f64>) -> Option<usize> {
    let step = step?.abs();
    if !step.is_finite() || step == 0.0 {
        return None;
    }
    let exponent = step.log10().floor();
    if exponent >= 0.0 {
        Some(0)
    } else {
        Some((-exponent) as usize)
    }
}

pub(super) fn format_tick_label(value: f64, step: Option<f64>) -> String {
    let text = match tick_precision(step) {
        Some(precision) => format!("{value:.precision$}"),
        None => format!("{value}"),
    };
    normalize_negative_zero(text)
}

fn normalize_negative_zero(text: String) -> String {
    let is_negative_zero = text.strip_prefix('-').is_some_and(|rest| {
        rest.chars().all(|ch| ch == '0' || ch == '.')
    });
    if is_negative_zero {
        text[1..].to_owned()
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::{AxisTickMode, axis_ticks, format_tick_label, tick_precision};
    use crate::core::LinearScale;

    #[test]
    fn precision_follows_tick_step() {
        assert_eq!(tick_precision(Some(5.0)), Some(0));
        assert_eq!(tick_precision(Some(0.5)), Some(1));
        assert_eq!(tick_precision(Some(0.02)), Some(2));
        assert_eq!(tick_precision(None), None);
    }

    #[test]
    fn labels_drop_negative_zero() {
        assert_eq!(format_tick_label(-0.0001, Some(0.5)), "0.0");
        assert_eq!(format_tick_label(-1.5, Some(0.5)), "-1.5");
        assert_eq!(format_tick_label(20.0, Some(5.0)), "20");
    }

    #[test]
    fn ordinal_mode_keeps_whole_ticks_only() {
        let scale = LinearScale::new(0.0, 2.0, 0.0, 100.0).expect("scale");
        let (ticks, step) = axis_ticks(scale, 10, AxisTickMode::Ordinal);
        assert_eq!(ticks, vec![0.0, 1.0, 2.0]);
        assert_eq!(step, Some(1.0));
    }
}
