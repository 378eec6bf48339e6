//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer that sits between the aggregate
//! store and the HTTP handlers. [`percentile`] holds the pure estimation
//! functions; [`ranking`] orchestrates store fetches and assembles the
//! three-group response.

pub mod percentile;
pub mod ranking;

pub use percentile::{build_histogram, estimate_percentile, resolve_age_bracket};
pub use ranking::compute_ranking;
