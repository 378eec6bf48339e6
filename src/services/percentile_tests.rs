use proptest::prelude::*;

use crate::api::{AgeBracket, AggregateBucket};
use crate::services::percentile::{
    build_histogram, estimate_percentile, resolve_age_bracket, round2, AGE_BRACKETS, NUM_BINS,
};

fn bucket(min: f64, max: f64, count: i64) -> AggregateBucket {
    AggregateBucket {
        race_id: "r1".to_string(),
        race_year: Some(2025),
        distance: "10k".to_string(),
        gender: "ALL".to_string(),
        age_group_start: 0,
        age_group_end: 99,
        finish_seconds_min: min,
        finish_seconds_max: max,
        count,
    }
}

// ==================== Age brackets ====================

#[test]
fn test_age_brackets_cover_zero_to_99() {
    for age in 0..=99 {
        let bracket = resolve_age_bracket(age);
        assert!(bracket.contains(age), "age {} not in {:?}", age, bracket);
    }
}

#[test]
fn test_age_brackets_are_ordered_and_disjoint() {
    for pair in AGE_BRACKETS.windows(2) {
        assert_eq!(pair[0].end + 1, pair[1].start);
    }
    assert_eq!(AGE_BRACKETS[0], AgeBracket::new(0, 9));
    assert_eq!(AGE_BRACKETS[AGE_BRACKETS.len() - 1], AgeBracket::new(75, 99));
}

#[test]
fn test_resolve_age_bracket_examples() {
    assert_eq!(resolve_age_bracket(5), AgeBracket::new(0, 9));
    assert_eq!(resolve_age_bracket(10), AgeBracket::new(10, 14));
    assert_eq!(resolve_age_bracket(33), AgeBracket::new(30, 34));
    assert_eq!(resolve_age_bracket(74), AgeBracket::new(70, 74));
    assert_eq!(resolve_age_bracket(75), AgeBracket::new(75, 99));
}

#[test]
fn test_resolve_age_bracket_out_of_range_falls_back() {
    assert_eq!(resolve_age_bracket(-1), AgeBracket::new(75, 99));
    assert_eq!(resolve_age_bracket(100), AgeBracket::new(75, 99));
    assert_eq!(resolve_age_bracket(130), AgeBracket::new(75, 99));
}

// ==================== Percentile estimation ====================

#[test]
fn test_percentile_midpoint_of_single_bucket() {
    // 100 participants between 3000s and 3600s; a 3300s finish sits halfway.
    let buckets = vec![bucket(3000.0, 3600.0, 100)];
    assert_eq!(estimate_percentile(3300.0, &buckets), 50.0);
}

#[test]
fn test_percentile_across_adjacent_buckets() {
    // Fully faster than the first bucket, halfway through the second.
    let buckets = vec![bucket(1000.0, 2000.0, 50), bucket(2000.0, 3000.0, 50)];
    assert_eq!(estimate_percentile(2500.0, &buckets), 75.0);
}

#[test]
fn test_percentile_at_bucket_boundaries() {
    let buckets = vec![bucket(1000.0, 2000.0, 40)];
    // At the lower bound nobody is slower than the query.
    assert_eq!(estimate_percentile(1000.0, &buckets), 0.0);
    // At the upper bound everyone in the bucket is faster.
    assert_eq!(estimate_percentile(2000.0, &buckets), 100.0);
    // Beyond the upper bound the percentile saturates.
    assert_eq!(estimate_percentile(9999.0, &buckets), 100.0);
}

#[test]
fn test_percentile_skips_degenerate_buckets() {
    let buckets = vec![
        bucket(1000.0, 2000.0, 40),
        bucket(500.0, 500.0, 1000), // zero width
        bucket(0.0, 10_000.0, 0),   // zero count
        bucket(0.0, 10_000.0, -5),  // negative count
    ];
    assert_eq!(estimate_percentile(2000.0, &buckets), 100.0);
}

#[test]
fn test_percentile_zero_mass_is_zero() {
    assert_eq!(estimate_percentile(1234.0, &[]), 0.0);
    assert_eq!(estimate_percentile(1234.0, &[bucket(100.0, 100.0, 50)]), 0.0);
}

#[test]
fn test_round2_half_away_from_zero() {
    assert_eq!(round2(0.125), 0.13);
    assert_eq!(round2(66.666_666), 66.67);
    assert_eq!(round2(66.664), 66.66);
    assert_eq!(round2(100.0), 100.0);
}

// ==================== Histogram re-binning ====================

#[test]
fn test_histogram_empty_input() {
    let result = build_histogram(1800.0, &[], AgeBracket::new(30, 34));
    assert!(result.bins.is_empty());
    assert_eq!(result.user_percentile, 0.0);
    assert_eq!(result.age_range_start, 30);
    assert_eq!(result.age_range_end, 34);
}

#[test]
fn test_histogram_all_degenerate_input() {
    let buckets = vec![bucket(100.0, 100.0, 50), bucket(0.0, 500.0, 0)];
    let result = build_histogram(1800.0, &buckets, AgeBracket::new(0, 9));
    assert!(result.bins.is_empty());
    assert_eq!(result.user_percentile, 0.0);
}

#[test]
fn test_histogram_shape_single_bucket() {
    // One bucket over [3000, 4500): width 1500, bin size ceil(1500/15) = 100.
    let buckets = vec![bucket(3000.0, 4500.0, 150)];
    let result = build_histogram(3250.0, &buckets, AgeBracket::new(0, 99));

    assert_eq!(result.bins.len(), NUM_BINS);
    assert_eq!(result.bins[0].time_range_start, 3000);
    assert_eq!(result.bins[0].time_range_end, 3100);
    assert_eq!(result.bins[14].time_range_end, 4500);

    // Uniform density: every bin gets an equal share.
    for bin in &result.bins {
        assert_eq!(bin.count, 10);
        assert!((bin.percent - 6.67).abs() < 1e-9);
    }

    // 3250 lands in the third bin.
    let marked: Vec<usize> = result
        .bins
        .iter()
        .enumerate()
        .filter(|(_, b)| b.is_user_bin)
        .map(|(i, _)| i)
        .collect();
    assert_eq!(marked, vec![2]);
}

#[test]
fn test_histogram_bin_width_is_ceiled() {
    // Width 1000 over 15 bins: ceil(66.66) = 67; the last bin overshoots.
    let buckets = vec![bucket(0.0, 1000.0, 30)];
    let result = build_histogram(500.0, &buckets, AgeBracket::new(0, 99));
    assert_eq!(result.bins[0].time_range_end, 67);
    assert_eq!(result.bins[14].time_range_end, 15 * 67);
    assert!(result.bins[14].time_range_end as f64 >= 1000.0);
}

#[test]
fn test_histogram_apportions_partial_overlap() {
    // A second bucket straddles bin boundaries near the top of the range;
    // its mass spills across multiple presentation bins.
    let buckets = vec![bucket(0.0, 150.0, 150), bucket(145.0, 155.0, 20)];
    let result = build_histogram(5.0, &buckets, AgeBracket::new(0, 99));

    // Range is [0, 155), bin size ceil(155/15) = 11.
    assert_eq!(result.bins[0].time_range_end, 11);
    let total_count: i64 = result.bins.iter().map(|b| b.count).sum();
    // All 170 participants are accounted for (up to per-bin rounding).
    assert!((total_count - 170).abs() <= 8, "got {}", total_count);
}

#[test]
fn test_histogram_mass_conservation() {
    let buckets = vec![
        bucket(1800.0, 2400.0, 37),
        bucket(2400.0, 3000.0, 211),
        bucket(3000.0, 3600.0, 95),
    ];
    let result = build_histogram(2500.0, &buckets, AgeBracket::new(0, 99));

    let percent_sum: f64 = result.bins.iter().map(|b| b.percent).sum();
    assert!((percent_sum - 100.0).abs() < 0.15, "got {}", percent_sum);

    let count_sum: i64 = result.bins.iter().map(|b| b.count).sum();
    assert!((count_sum - 343).abs() <= 8, "got {}", count_sum);
}

#[test]
fn test_histogram_user_bin_below_range() {
    let buckets = vec![bucket(3000.0, 4500.0, 100)];
    let result = build_histogram(120.0, &buckets, AgeBracket::new(0, 99));
    let marked: Vec<usize> = result
        .bins
        .iter()
        .enumerate()
        .filter(|(_, b)| b.is_user_bin)
        .map(|(i, _)| i)
        .collect();
    assert_eq!(marked, vec![0]);
}

#[test]
fn test_histogram_user_bin_above_range() {
    let buckets = vec![bucket(3000.0, 4500.0, 100)];
    let result = build_histogram(99_999.0, &buckets, AgeBracket::new(0, 99));
    let marked: Vec<usize> = result
        .bins
        .iter()
        .enumerate()
        .filter(|(_, b)| b.is_user_bin)
        .map(|(i, _)| i)
        .collect();
    assert_eq!(marked, vec![NUM_BINS - 1]);
}

#[test]
fn test_histogram_duplicate_buckets_sum() {
    // Overlapping duplicates are summed unconditionally; data quality is the
    // store's responsibility.
    let buckets = vec![bucket(1000.0, 2000.0, 50), bucket(1000.0, 2000.0, 50)];
    let result = build_histogram(1500.0, &buckets, AgeBracket::new(0, 99));
    assert_eq!(result.user_percentile, 50.0);
    let count_sum: i64 = result.bins.iter().map(|b| b.count).sum();
    assert!((count_sum - 100).abs() <= 8);
}

// ==================== Properties ====================

prop_compose! {
    fn arb_bucket()(min in 0.0_f64..20_000.0, width in 1.0_f64..10_000.0, count in 1_i64..5_000) -> AggregateBucket {
        bucket(min, min + width, count)
    }
}

proptest! {
    #[test]
    fn prop_percentile_is_bounded(
        buckets in prop::collection::vec(arb_bucket(), 1..20),
        v in -1000.0_f64..50_000.0,
    ) {
        let pct = estimate_percentile(v, &buckets);
        prop_assert!((0.0..=100.0).contains(&pct));
    }

    #[test]
    fn prop_percentile_is_monotone_in_query(
        buckets in prop::collection::vec(arb_bucket(), 1..20),
        v in 0.0_f64..30_000.0,
        delta in 0.0_f64..10_000.0,
    ) {
        let lower = estimate_percentile(v, &buckets);
        let upper = estimate_percentile(v + delta, &buckets);
        prop_assert!(upper >= lower);
    }

    #[test]
    fn prop_exactly_one_user_bin(
        buckets in prop::collection::vec(arb_bucket(), 1..20),
        v in -5_000.0_f64..60_000.0,
    ) {
        let result = build_histogram(v, &buckets, AgeBracket::new(0, 99));
        let marked = result.bins.iter().filter(|b| b.is_user_bin).count();
        prop_assert_eq!(marked, 1);
    }

    #[test]
    fn prop_percent_sums_to_100(
        buckets in prop::collection::vec(arb_bucket(), 1..20),
        v in 0.0_f64..30_000.0,
    ) {
        let result = build_histogram(v, &buckets, AgeBracket::new(0, 99));
        let percent_sum: f64 = result.bins.iter().map(|b| b.percent).sum();
        // 15 independent two-decimal roundings accumulate at most 0.075.
        prop_assert!((percent_sum - 100.0).abs() < 0.151, "sum {}", percent_sum);
    }
}
