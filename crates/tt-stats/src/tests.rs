//! Unit tests for tt-stats.

#[cfg(test)]
mod configure_tests {
    use crate::{HistogramAccumulator, StatsError};

    #[test]
    fn bin_count_is_floor_plus_one() {
        assert_eq!(HistogramAccumulator::new(0.0, 30.0, 1.0).unwrap().bin_count(), 31);
        assert_eq!(HistogramAccumulator::new(0.0, 30.5, 1.0).unwrap().bin_count(), 31);
        assert_eq!(HistogramAccumulator::new(37.0, 37.0, 1.0).unwrap().bin_count(), 1);
        assert_eq!(HistogramAccumulator::new(0.0, 0.5, 1.0).unwrap().bin_count(), 1);
    }

    #[test]
    fn invalid_bin_width() {
        assert_eq!(
            HistogramAccumulator::new(0.0, 10.0, 0.0).unwrap_err(),
            StatsError::InvalidBinWidth(0.0)
        );
        assert!(HistogramAccumulator::new(0.0, 10.0, -1.0).is_err());
        assert!(HistogramAccumulator::new(0.0, 10.0, f64::NAN).is_err());
    }

    #[test]
    fn inverted_range() {
        let err = HistogramAccumulator::new(10.0, 0.0, 1.0).unwrap_err();
        assert!(matches!(err, StatsError::InvalidRange { .. }));
        assert!(!err.is_precondition());
    }

    #[test]
    fn absurd_bin_count_rejected() {
        let err = HistogramAccumulator::new(0.0, 1e12, 1e-6).unwrap_err();
        assert!(matches!(err, StatsError::TooManyBins { .. }), "{err}");
        assert!(!err.is_precondition());
        // A sane width over a huge range is not a bin width problem.
        let err = HistogramAccumulator::new(0.0, 1e9, 1.0).unwrap_err();
        assert!(matches!(err, StatsError::TooManyBins { max, .. } if max == 1 << 24));
        assert!(HistogramAccumulator::new(0.0, 1e6, 1.0).is_ok());
    }

    #[test]
    fn reconfigure_discards_data() {
        let mut h = HistogramAccumulator::new(0.0, 10.0, 1.0).unwrap();
        for v in [1.0, 2.0, 3.0] {
            h.add(v);
        }
        h.configure(0.0, 10.0, 1.0).unwrap();
        assert_eq!(h.total(), 0);
        assert!(h.bins().iter().all(|&c| c == 0));
        assert_eq!(h.sum(), 0.0);
        assert_eq!(h.sum_of_squares(), 0.0);
        assert_eq!(h, HistogramAccumulator::new(0.0, 10.0, 1.0).unwrap());
    }

    #[test]
    fn failed_reconfigure_keeps_state() {
        let mut h = HistogramAccumulator::new(0.0, 10.0, 1.0).unwrap();
        h.add(4.0);
        assert!(h.configure(0.0, 10.0, 0.0).is_err());
        assert_eq!(h.total(), 1);
        assert_eq!(h.bin_count(), 11);
    }

    #[test]
    fn reset_keeps_range() {
        let mut h = HistogramAccumulator::new(5.0, 15.0, 0.5).unwrap();
        h.add(7.0);
        h.reset();
        assert!(h.is_empty());
        assert_eq!(h.bin_count(), 21);
        assert_eq!(h.min_value(), 5.0);
    }
}

#[cfg(test)]
mod add_tests {
    use crate::HistogramAccumulator;

    #[test]
    fn rounds_to_nearest_bin() {
        let h = HistogramAccumulator::new(0.0, 10.0, 1.0).unwrap();
        assert_eq!(h.bin_index(2.4), 2);
        assert_eq!(h.bin_index(2.6), 3);
        assert_eq!(h.bin_index(2.5), 3); // round half away from zero
    }

    #[test]
    fn upper_edge_lands_in_last_bin() {
        let mut h = HistogramAccumulator::new(0.0, 30.0, 1.0).unwrap();
        h.add(30.0);
        assert_eq!(h.bins()[30], 1);
        assert_eq!(h.total(), 1);
    }

    #[test]
    fn out_of_range_saturates() {
        let mut h = HistogramAccumulator::new(0.0, 30.0, 1.0).unwrap();
        h.add(-5.0);
        h.add(1_000.0);
        h.add(f64::INFINITY);
        assert_eq!(h.bins()[0], 1);
        assert_eq!(h.bins()[30], 2);
        assert_eq!(h.total(), 3);
    }

    #[test]
    fn bins_sum_to_total() {
        let mut h = HistogramAccumulator::new(-3.0, 12.0, 0.25).unwrap();
        for i in 0..1_000 {
            h.add((i as f64 * 0.37) % 20.0 - 5.0);
        }
        assert_eq!(h.bins().iter().sum::<u64>(), h.total());
        assert_eq!(h.total(), 1_000);
    }

    #[test]
    fn moments_use_raw_values() {
        let mut h = HistogramAccumulator::new(0.0, 1.0, 1.0).unwrap();
        h.add(10.0); // clamped into the last bin, but counted at face value
        assert_eq!(h.sum(), 10.0);
        assert_eq!(h.sum_of_squares(), 100.0);
    }
}

#[cfg(test)]
mod summarize_tests {
    use rand::SeedableRng;
    use rand::distributions::Distribution;
    use rand::rngs::SmallRng;
    use tt_core::DelayDistribution;

    use crate::{HistogramAccumulator, StatsError};

    #[test]
    fn empty_is_precondition_error() {
        let h = HistogramAccumulator::new(0.0, 10.0, 1.0).unwrap();
        let err = h.summarize().unwrap_err();
        assert_eq!(err, StatsError::NoSamples);
        assert!(err.is_precondition());
        assert!(h.percentile_point(0.5).unwrap_err().is_precondition());
    }

    #[test]
    fn median_is_last_bin_below_half() {
        let mut h = HistogramAccumulator::new(0.0, 4.0, 1.0).unwrap();
        for v in [0.0, 1.0, 2.0, 3.0] {
            h.add(v);
        }
        let s = h.summarize().unwrap();
        // running counts 1, 2, 3, 4: only bin 0 is strictly below 2.
        assert_eq!(s.median, 0.0);
        // 3 < 3.8 but 4 is not.
        assert_eq!(s.percentile_95, 2.0);
        assert_eq!(s.mean, 1.5);
        assert_eq!(s.total, 4);
    }

    #[test]
    fn single_bin_mass_reports_bin_before_it() {
        let mut h = HistogramAccumulator::new(0.0, 10.0, 1.0).unwrap();
        for _ in 0..10 {
            h.add(5.0);
        }
        let s = h.summarize().unwrap();
        assert_eq!(s.median, 4.0);
        assert_eq!(s.percentile_95, 4.0);
        assert_eq!(s.std_dev, 0.0);
    }

    #[test]
    fn mass_in_first_bin_reports_zero_index() {
        let mut h = HistogramAccumulator::new(2.0, 10.0, 2.0).unwrap();
        h.add(2.0);
        let s = h.summarize().unwrap();
        assert_eq!(s.median, 2.0);
        assert_eq!(s.percentile_95, 2.0);
    }

    #[test]
    fn percentile_point_matches_summary() {
        let mut h = HistogramAccumulator::new(0.0, 100.0, 1.0).unwrap();
        for i in 0..=100 {
            h.add(i as f64);
        }
        let s = h.summarize().unwrap();
        assert_eq!(h.percentile_point(0.5).unwrap(), s.median);
        assert_eq!(h.percentile_point(0.95).unwrap(), s.percentile_95);
        assert_eq!(h.percentile_point(1.0).unwrap(), 99.0);
        assert!(matches!(h.percentile_point(0.0), Err(StatsError::InvalidQuantile(_))));
        assert!(h.percentile_point(1.5).is_err());
    }

    #[test]
    fn std_dev_never_negative_under_cancellation() {
        let mut h = HistogramAccumulator::new(0.0, 1.0, 1.0).unwrap();
        for _ in 0..1_000 {
            h.add(1e8 + 0.1);
        }
        let s = h.summarize().unwrap();
        assert!(s.std_dev >= 0.0);
        assert!(!s.std_dev.is_nan());
    }

    #[test]
    fn mean_within_range_when_nothing_clamped() {
        let mut h = HistogramAccumulator::new(10.0, 20.0, 0.5).unwrap();
        for i in 0..200 {
            h.add(10.0 + (i % 21) as f64 * 0.5);
        }
        let s = h.summarize().unwrap();
        assert!(s.mean >= h.min_value() && s.mean <= h.max_value());
        assert!(s.std_dev >= 0.0);
    }

    #[test]
    fn delay_distribution_histogram() {
        let mut h = HistogramAccumulator::new(0.0, 30.0, 1.0).unwrap();
        let d = DelayDistribution::new(0.0, 10.0).unwrap();
        let mut rng = SmallRng::seed_from_u64(42);
        for _ in 0..10_000 {
            h.add(d.sample(&mut rng));
        }
        let s = h.summarize().unwrap();
        assert_eq!(s.total, 10_000);
        let expected_mean = 10.0 * std::f64::consts::PI.sqrt() / 2.0;
        let expected_std = 10.0 * (1.0 - std::f64::consts::FRAC_PI_4).sqrt();
        assert!((s.mean - expected_mean).abs() < 0.3, "mean {}", s.mean);
        assert!((s.std_dev - expected_std).abs() < 0.3, "std {}", s.std_dev);
        // Rayleigh median ≈ 8.33; the binned median sits just below it.
        assert!((6.0..=9.0).contains(&s.median), "median {}", s.median);
        assert!(s.percentile_95 > s.median);
    }

    #[test]
    fn display_format() {
        let mut h = HistogramAccumulator::new(0.0, 4.0, 1.0).unwrap();
        for v in [0.0, 1.0, 2.0, 3.0] {
            h.add(v);
        }
        assert_eq!(
            h.summarize().unwrap().to_string(),
            "Avg: 1.50 Median: 0 T(95): 2 Deviation: 1.12"
        );
    }
}

#[cfg(test)]
mod merge_tests {
    use crate::{HistogramAccumulator, StatsError};

    fn filled(values: &[f64]) -> HistogramAccumulator {
        let mut h = HistogramAccumulator::new(0.0, 50.0, 1.0).unwrap();
        for &v in values {
            h.add(v);
        }
        h
    }

    fn values(seed: u64, n: usize) -> Vec<f64> {
        // Cheap deterministic spread over [-5, 60) to exercise clamping too.
        (0..n)
            .map(|i| ((i as u64 * 2_654_435_761 + seed) % 6_500) as f64 / 100.0 - 5.0)
            .collect()
    }

    #[test]
    fn merge_matches_single_accumulator() {
        let (a, b) = (values(1, 300), values(2, 500));
        let mut merged = filled(&a);
        merged.merge(&filled(&b)).unwrap();

        let all: Vec<f64> = a.iter().chain(&b).copied().collect();
        let direct = filled(&all);
        assert_eq!(merged.bins(), direct.bins());
        assert_eq!(merged.total(), 800);
        assert!((merged.sum() - direct.sum()).abs() < 1e-6);
    }

    #[test]
    fn merge_is_associative() {
        let (a, b, c) = (filled(&values(1, 100)), filled(&values(2, 200)), filled(&values(3, 300)));

        let mut left = a.clone();
        left.merge(&b).unwrap();
        left.merge(&c).unwrap();

        let mut bc = b.clone();
        bc.merge(&c).unwrap();
        let mut right = a.clone();
        right.merge(&bc).unwrap();

        assert_eq!(left.bins(), right.bins());
        assert_eq!(left.total(), right.total());
        assert!((left.sum() - right.sum()).abs() < 1e-9);
        assert!((left.sum_of_squares() - right.sum_of_squares()).abs() < 1e-6);
    }

    #[test]
    fn merge_is_commutative() {
        let (a, b) = (filled(&values(4, 50)), filled(&values(5, 70)));
        let mut ab = a.clone();
        ab.merge(&b).unwrap();
        let mut ba = b.clone();
        ba.merge(&a).unwrap();
        assert_eq!(ab.bins(), ba.bins());
        assert_eq!(ab.total(), ba.total());
    }

    #[test]
    fn empty_like_merges_as_identity() {
        let a = filled(&values(6, 40));
        let mut m = a.empty_like();
        assert!(m.is_empty());
        m.merge(&a).unwrap();
        assert_eq!(m, a);
    }

    #[test]
    fn incompatible_ranges_rejected() {
        let mut a = HistogramAccumulator::new(0.0, 10.0, 1.0).unwrap();
        let b = HistogramAccumulator::new(0.0, 20.0, 1.0).unwrap();
        assert!(matches!(a.merge(&b), Err(StatsError::IncompatibleBins { .. })));
    }
}
