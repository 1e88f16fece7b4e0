//! # metricly-metrics
//!
//! Business-metric formulas over batches of raw measurements.
//!
//! Each formula takes array-like inputs, validates and totals them with the
//! shared [`reducer`], then returns a guarded ratio:
//!
//! ```
//! use metricly_metrics::{marketing, people, MetricError};
//!
//! assert_eq!(marketing::click_through_rate([5, 15], [1000, 1000]), Ok(0.01));
//! assert_eq!(
//!     people::cost_per_hire([1000], [0]),
//!     Err(MetricError::DivisionGuard("Total hires".to_string())),
//! );
//! ```
//!
//! Formulas are also addressable by name through [`Formula`], for callers
//! that describe metrics as data.

pub mod config;
pub mod formula;
pub mod marketing;
pub mod people;
pub mod ratio;
pub mod reducer;

pub use formula::{Domain, Formula, MetricRequest, MetricResponse};
pub use metricly_common::{ArrayLike, ErrorResponse, MetricError, Result};
pub use reducer::validate_and_sum;
