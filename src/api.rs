//! Public API surface for the ranking backend.
//!
//! This file consolidates the value types exchanged between the HTTP layer,
//! the service layer, and the aggregate store. All types derive
//! Serialize/Deserialize for JSON serialization and are immutable once
//! constructed.

use serde::{Deserialize, Serialize};

/// Gender of the requesting athlete.
///
/// Unrecognized values are rejected at deserialization time, before any
/// computation runs.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Store-side gender code used by the aggregate tables.
    pub fn code(&self) -> &'static str {
        match self {
            Gender::Male => "M",
            Gender::Female => "F",
        }
    }
}

/// Store-side gender code for the "all participants" grouping.
pub const GENDER_ALL: &str = "ALL";

/// Inclusive age bracket used to group population statistics.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeBracket {
    pub start: i32,
    pub end: i32,
}

impl AgeBracket {
    pub const fn new(start: i32, end: i32) -> Self {
        AgeBracket { start, end }
    }

    /// Whether `age` falls within this bracket (bounds inclusive).
    pub fn contains(&self, age: i32) -> bool {
        self.start <= age && age <= self.end
    }
}

/// One pre-computed population slice from the aggregate store.
///
/// Carries the number of participants whose finish time falls in
/// `[finish_seconds_min, finish_seconds_max)` for a given distance, gender
/// code, and inclusive age bracket. The catalog keys (`race_id`,
/// `race_year`) identify the upstream source row and are not interpreted by
/// the estimator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AggregateBucket {
    pub race_id: String,
    #[serde(default)]
    pub race_year: Option<i32>,
    pub distance: String,
    pub gender: String,
    pub age_group_start: i32,
    pub age_group_end: i32,
    pub finish_seconds_min: f64,
    pub finish_seconds_max: f64,
    pub count: i64,
}

impl AggregateBucket {
    /// A bucket is usable when it carries positive mass over a positive-width
    /// time interval. Degenerate buckets contribute zero mass everywhere and
    /// are never an error.
    pub fn is_usable(&self) -> bool {
        self.count > 0 && self.finish_seconds_max > self.finish_seconds_min
    }

    /// Width of the finish-time interval in seconds.
    pub fn width(&self) -> f64 {
        self.finish_seconds_max - self.finish_seconds_min
    }
}

/// The caller's query: one race performance plus demographic attributes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingRequest {
    /// Race completion time in seconds.
    pub record_seconds: f64,
    /// Athlete's age at the time of the race.
    pub age: i32,
    /// Athlete's gender.
    pub gender: Gender,
    /// Race-distance identifier (e.g. "10k", "marathon").
    pub distance: String,
    /// Race IDs to compare against. Forwarded to the aggregate store
    /// contract; race-identity filtering is the store's responsibility.
    #[serde(default)]
    pub target_races: Vec<String>,
}

/// One of the 15 equal-width presentation bins of a distribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistogramBin {
    /// Start of the time range in seconds.
    pub time_range_start: i64,
    /// End of the time range in seconds.
    pub time_range_end: i64,
    /// Share of participants in this bin, 0.0 to 100.0, two decimals.
    pub percent: f64,
    /// Estimated participants in this bin, rounded to the nearest integer.
    pub count: i64,
    /// True iff the query value falls in this bin. Exactly one bin is marked
    /// for any non-empty distribution.
    pub is_user_bin: bool,
}

/// Distribution of one comparison group plus the query's rank within it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistogramResult {
    /// Presentation bins; empty when the group carries no mass.
    pub bins: Vec<HistogramBin>,
    /// Estimated percentile of the query value, 0.0 to 100.0, two decimals.
    pub user_percentile: f64,
    /// Start of the age bracket resolved for the by-gender-age grouping.
    pub age_range_start: i32,
    /// End of the age bracket resolved for the by-gender-age grouping.
    pub age_range_end: i32,
}

/// Complete response: the three comparison groups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingResponse {
    /// Compared to all participants.
    pub overall: HistogramResult,
    /// Compared to participants of the same gender.
    pub by_gender: HistogramResult,
    /// Compared to participants of the same gender and age bracket.
    pub by_gender_age: HistogramResult,
}
