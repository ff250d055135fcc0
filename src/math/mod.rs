//! Mathematical utilities for the normal distribution

/// Probability density and cumulative distribution functions
pub mod probability;
/// Seeded random sampling via the Box-Muller transform
pub mod sampling;
