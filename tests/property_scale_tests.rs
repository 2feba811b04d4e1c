use fuel_insight_charts::core::LinearScale;
use proptest::prelude::*;

proptest! {
    #[test]
    fn extent_bounds_hit_range_bounds_property(
        values in prop::collection::vec(-1_000_000.0f64..1_000_000.0, 2..64),
        range_start in -2_000.0f64..2_000.0,
        range_span in 1.0f64..4_000.0
    ) {
        let range_end = range_start + range_span;
        let scale = LinearScale::from_values(values.iter().copied(), (range_start, range_end))
            .expect("valid scale");
        let (min, max) = scale.domain();

        if min < max {
            prop_assert_eq!(scale.domain_to_pixel(min), range_start);
            prop_assert_eq!(scale.domain_to_pixel(max), range_end);
        } else {
            prop_assert_eq!(scale.domain_to_pixel(min), (range_start + range_end) / 2.0);
        }
    }

    #[test]
    fn projected_values_stay_within_range_property(
        values in prop::collection::vec(-1_000.0f64..1_000.0, 1..64),
        height in 1.0f64..2_000.0
    ) {
        let scale = LinearScale::from_values(values.iter().copied(), (height, 0.0))
            .expect("valid scale");

        for value in values {
            let px = scale.domain_to_pixel(value);
            prop_assert!(px.is_finite());
            prop_assert!((-1e-9..=height + 1e-9).contains(&px));
        }
    }

    #[test]
    fn scale_round_trip_property(
        domain_start in -1_000_000.0f64..1_000_000.0,
        domain_span in 0.001f64..1_000_000.0,
        value_factor in 0.0f64..1.0
    ) {
        let domain_end = domain_start + domain_span;
        let value = domain_start + value_factor * domain_span;
        let scale = LinearScale::new(domain_start, domain_end, 0.0, 2_048.0)
            .expect("valid scale");

        let px = scale.domain_to_pixel(value);
        let recovered = scale.pixel_to_domain(px);

        prop_assert!((recovered - value).abs() <= 1e-6 * domain_span.max(1.0));
    }

    #[test]
    fn ticks_are_inside_domain_and_evenly_stepped_property(
        domain_start in -10_000.0f64..10_000.0,
        domain_span in 0.01f64..10_000.0,
        count in 2usize..20
    ) {
        let domain_end = domain_start + domain_span;
        let scale = LinearScale::new(domain_start, domain_end, 0.0, 800.0)
            .expect("valid scale");
        let step = scale.tick_step(count).expect("non-degenerate domain has a step");
        let ticks = scale.ticks(count);

        prop_assert!(!ticks.is_empty());
        for tick in &ticks {
            prop_assert!(*tick >= domain_start && *tick <= domain_end);
        }
        for pair in ticks.windows(2) {
            prop_assert!(((pair[1] - pair[0]) - step).abs() <= step * 1e-6);
        }
    }

    #[test]
    fn ticks_stay_finite_and_bounded_for_extreme_spans_property(
        start_mantissa in -9.0f64..9.0,
        start_exponent in -320i32..=307,
        span_exponent in -323i32..=307,
        span_mantissa in 1.0f64..9.9,
        count in 2usize..20
    ) {
        let domain_start = start_mantissa * 10f64.powi(start_exponent);
        let domain_end = domain_start + span_mantissa * 10f64.powi(span_exponent);
        prop_assume!(domain_start.is_finite() && domain_end.is_finite());
        let scale = LinearScale::new(domain_start, domain_end, 0.0, 800.0)
            .expect("valid scale");
        let ticks = scale.ticks(count);

        prop_assert!(!ticks.is_empty());
        prop_assert!(ticks.len() <= 2 * count + 1);
        for tick in &ticks {
            prop_assert!(tick.is_finite());
            prop_assert!(*tick >= domain_start && *tick <= domain_end);
            let px = scale.domain_to_pixel(*tick);
            prop_assert!(px.is_finite());
            prop_assert!((-1e-6..=800.0 + 1e-6).contains(&px));
        }
    }
}
