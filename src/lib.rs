//! Descriptive statistics and normal distribution functions over in-memory numeric collections
//!
//! The crate is a small reusable math utility layer: pure reductions (mean,
//! median, variance, standard deviation, range) plus normal-distribution
//! density, cumulative probability, and reproducible Box-Muller sampling.
//! Every operation is a single-shot computation over its inputs; the only
//! mutable state is the explicitly owned random generator handle.

#![forbid(unsafe_code)]

/// Descriptive statistical reductions over numeric datasets
pub mod analysis;
/// Error types for statistical operations
pub mod error;
/// Mathematical utilities for distribution functions and random sampling
pub mod math;

pub use error::{Result, StatError};
