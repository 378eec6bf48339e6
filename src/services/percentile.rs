//! Core percentile and histogram estimation over aggregate buckets.
//!
//! The functions here consume pre-bucketed count data only, never individual
//! race results. The key modeling assumption throughout is uniform density
//! within each source bucket: mass is apportioned across overlapping ranges
//! by interval-length ratio. The rounded outputs are part of the API
//! contract, so this interpolation rule and the [`round2`] rounding rule
//! must not be substituted.
//!
//! Everything in this module is pure; all degenerate inputs (no buckets,
//! zero total mass, zero-width bucket, non-positive count) produce defined
//! empty or zero results rather than errors.

use crate::api::{AgeBracket, AggregateBucket, HistogramBin, HistogramResult};

/// Number of equal-width presentation bins in a histogram.
pub const NUM_BINS: usize = 15;

/// Fixed, ordered, non-overlapping age brackets: `[0,9]`, 5-year brackets
/// `[10,14]` through `[70,74]`, then `[75,99]`.
pub const AGE_BRACKETS: [AgeBracket; 15] = [
    AgeBracket::new(0, 9),
    AgeBracket::new(10, 14),
    AgeBracket::new(15, 19),
    AgeBracket::new(20, 24),
    AgeBracket::new(25, 29),
    AgeBracket::new(30, 34),
    AgeBracket::new(35, 39),
    AgeBracket::new(40, 44),
    AgeBracket::new(45, 49),
    AgeBracket::new(50, 54),
    AgeBracket::new(55, 59),
    AgeBracket::new(60, 64),
    AgeBracket::new(65, 69),
    AgeBracket::new(70, 74),
    AgeBracket::new(75, 99),
];

/// Resolve an age to its bracket.
///
/// Ages outside 0-99 (including negative ones) fall back to the last
/// bracket, `[75,99]`. Permissive by design: an out-of-range age still gets
/// a comparison group rather than an error.
pub fn resolve_age_bracket(age: i32) -> AgeBracket {
    AGE_BRACKETS
        .iter()
        .copied()
        .find(|bracket| bracket.contains(age))
        .unwrap_or(AGE_BRACKETS[AGE_BRACKETS.len() - 1])
}

/// Round to two decimal places, half away from zero.
///
/// The single rounding rule for all percentage outputs.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Estimate the percentile rank of `record_seconds` within `buckets`.
///
/// Returns the share of participants estimated to be strictly faster than
/// the query value, 0.0 to 100.0, rounded to two decimals. Buckets fully
/// below the query contribute their whole count; buckets straddling it
/// contribute `count * (v - min) / (max - min)`. Zero total mass yields 0.0.
pub fn estimate_percentile(record_seconds: f64, buckets: &[AggregateBucket]) -> f64 {
    let mut total: i64 = 0;
    let mut faster: f64 = 0.0;

    for bucket in buckets.iter().filter(|b| b.is_usable()) {
        total += bucket.count;
        if record_seconds <= bucket.finish_seconds_min {
            continue;
        }
        if record_seconds >= bucket.finish_seconds_max {
            faster += bucket.count as f64;
        } else {
            let portion = (record_seconds - bucket.finish_seconds_min) / bucket.width();
            faster += bucket.count as f64 * portion;
        }
    }

    if total == 0 {
        0.0
    } else {
        round2(faster / total as f64 * 100.0)
    }
}

/// Build the full distribution for one comparison group.
///
/// Re-bins the source buckets into [`NUM_BINS`] equal-width presentation
/// bins spanning the union of all usable bucket ranges, apportioning each
/// bucket's count across overlapping bins by interval-length ratio. The bin
/// width is ceiling-rounded to a whole number of seconds, so the last bin
/// may overshoot the maximum observed time.
///
/// An empty or zero-mass bucket set yields `bins: []` with percentile 0.0;
/// the resolved `age_bracket` is echoed into the result either way.
pub fn build_histogram(
    record_seconds: f64,
    buckets: &[AggregateBucket],
    age_bracket: AgeBracket,
) -> HistogramResult {
    let total: i64 = buckets
        .iter()
        .filter(|b| b.is_usable())
        .map(|b| b.count)
        .sum();
    if total == 0 {
        return HistogramResult {
            bins: Vec::new(),
            user_percentile: 0.0,
            age_range_start: age_bracket.start,
            age_range_end: age_bracket.end,
        };
    }

    let user_percentile = estimate_percentile(record_seconds, buckets);

    let min_time = buckets
        .iter()
        .filter(|b| b.is_usable())
        .map(|b| b.finish_seconds_min)
        .fold(f64::INFINITY, f64::min);
    let max_time = buckets
        .iter()
        .filter(|b| b.is_usable())
        .map(|b| b.finish_seconds_max)
        .fold(f64::NEG_INFINITY, f64::max);
    let bin_size = ((max_time - min_time) / NUM_BINS as f64).ceil();

    let mut bins = Vec::with_capacity(NUM_BINS);
    for i in 0..NUM_BINS {
        let bin_start = min_time + i as f64 * bin_size;
        let bin_end = bin_start + bin_size;

        let mut mass: f64 = 0.0;
        for bucket in buckets.iter().filter(|b| b.is_usable()) {
            let overlap_start = bin_start.max(bucket.finish_seconds_min);
            let overlap_end = bin_end.min(bucket.finish_seconds_max);
            if overlap_start < overlap_end {
                let portion = (overlap_end - overlap_start) / bucket.width();
                mass += bucket.count as f64 * portion;
            }
        }

        let mut is_user_bin = bin_start <= record_seconds && record_seconds < bin_end;
        // The extremal bins absorb out-of-range query values so that exactly
        // one bin is always marked.
        if i == 0 && record_seconds < bin_end {
            is_user_bin = true;
        } else if i == NUM_BINS - 1 && record_seconds >= bin_start {
            is_user_bin = true;
        }

        bins.push(HistogramBin {
            time_range_start: bin_start as i64,
            time_range_end: bin_end as i64,
            percent: round2(mass / total as f64 * 100.0),
            count: mass.round() as i64,
            is_user_bin,
        });
    }

    HistogramResult {
        bins,
        user_percentile,
        age_range_start: age_bracket.start,
        age_range_end: age_bracket.end,
    }
}

#[cfg(test)]
#[path = "percentile_tests.rs"]
mod tests;
