//! # Trade Statistics Engine
//!
//! This crate turns a sequence of closed trades into a fixed battery of
//! performance statistics. It is the "unbiased judge" of the system.
//!
//! ## Architectural Principles
//!
//! - **Pure Logic:** No I/O and no randomness. It depends only on `core-types`.
//! - **Total Functions:** Nothing here returns an error. Zero denominators resolve
//!   to `f64::INFINITY` and empty inputs to `0.0`, so every sequence, however
//!   degenerate, produces a complete record.
//! - **Stateless Calculation:** Records for different sequences never influence
//!   each other, which lets callers compute them in any order or in parallel.
//!
//! ## Public API
//!
//! - `AnalyticsEngine`: The single-pass aggregator that assembles a record.
//! - `MetricRecord`: The 20 named statistics, in CSV column order.
//! - `metrics`: The independent metric functions over a profit series.

// Declare the modules that constitute this crate.
pub mod engine;
pub mod metrics;
pub mod report;

// Re-export the key components to create a clean, public-facing API.
pub use engine::{AnalyticsEngine, SequenceTotals};
pub use report::{FIELD_NAMES, MetricRecord};
