//! # FitRank Backend
//!
//! Race-performance ranking engine.
//!
//! This crate computes where a single race finish time ranks against
//! pre-aggregated population statistics, producing percentile estimates and
//! histogram distributions for three comparison groups: all participants,
//! participants of the same gender, and participants of the same gender and
//! age bracket. The backend exposes a REST API via Axum.
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: Data Transfer Objects (DTOs) for requests and responses
//! - [`db`]: Aggregate store access via the Repository pattern
//! - [`services`]: Percentile estimation and response assembly
//! - [`config`]: Server configuration
//! - [`http`]: Axum-based HTTP server and request handlers
//!
//! The estimator consumes pre-bucketed aggregate counts only; it never sees
//! individual race results. All computation is pure and per-request, so any
//! number of requests can run concurrently without locking.

pub mod api;
pub mod config;
pub mod db;
pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
