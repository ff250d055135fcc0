//! Analysis modules for descriptive statistics over numeric datasets

/// Pure numeric reductions: mean, median, variance, standard deviation, range
pub mod descriptive;
