//! Pure, deterministic numeric reductions over a dataset
//!
//! Every function takes a non-owning slice view, coerces elements to f64
//! before arithmetic, and never mutates or retains the caller's data.
//! Emptiness is always a reportable error, never silently handled.

use crate::error::{Result, empty_input, insufficient_data};
use num_traits::AsPrimitive;

/// Calculate the arithmetic mean of a dataset
///
/// The sum of all values divided by the true element count.
///
/// # Errors
///
/// Returns `StatError::EmptyInput` when `data` is empty
pub fn mean<T>(data: &[T]) -> Result<f64>
where
    T: AsPrimitive<f64>,
{
    if data.is_empty() {
        return Err(empty_input("mean"));
    }

    let sum: f64 = data.iter().map(|x| x.as_()).sum();
    Ok(sum / data.len() as f64)
}

/// Calculate the median of a dataset
///
/// Sorts a copy of the data ascending. For odd lengths, returns the middle
/// element; for even lengths, the midpoint of the two central elements.
///
/// # Errors
///
/// Returns `StatError::EmptyInput` when `data` is empty
pub fn median<T>(data: &[T]) -> Result<f64>
where
    T: AsPrimitive<f64>,
{
    if data.is_empty() {
        return Err(empty_input("median"));
    }

    let mut sorted: Vec<f64> = data.iter().map(|x| x.as_()).collect();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let n = sorted.len();
    let mid = n / 2;

    if n % 2 == 1 {
        Ok(sorted.get(mid).copied().unwrap_or(0.0))
    } else {
        let lower = sorted.get(mid - 1).copied().unwrap_or(0.0);
        let upper = sorted.get(mid).copied().unwrap_or(0.0);
        Ok(f64::midpoint(lower, upper))
    }
}

/// Calculate the variance of a dataset
///
/// Mean of squared deviations from the mean. When `sample` is true the
/// squared-deviation sum is divided by (n - 1), the unbiased sample
/// estimator; when false it is divided by n, the population variance.
/// Population variance of a single value is exactly 0.
///
/// # Errors
///
/// Returns `StatError::EmptyInput` when `data` is empty, and
/// `StatError::InsufficientData` when `sample` is true and fewer than
/// two elements are supplied
pub fn variance<T>(data: &[T], sample: bool) -> Result<f64>
where
    T: AsPrimitive<f64>,
{
    if data.is_empty() {
        return Err(empty_input("variance"));
    }

    let n = data.len();
    if sample && n < 2 {
        return Err(insufficient_data("sample variance", 2, n));
    }

    let data_mean = mean(data)?;
    let sum_squared_deviations: f64 = data
        .iter()
        .map(|x| {
            let deviation = x.as_() - data_mean;
            deviation * deviation
        })
        .sum();

    let divisor = if sample { (n - 1) as f64 } else { n as f64 };
    Ok(sum_squared_deviations / divisor)
}

/// Calculate the standard deviation of a dataset
///
/// The non-negative square root of variance computed with the same
/// `sample` flag.
///
/// # Errors
///
/// Returns `StatError::EmptyInput` when `data` is empty, and
/// `StatError::InsufficientData` when `sample` is true and fewer than
/// two elements are supplied
pub fn std_deviation<T>(data: &[T], sample: bool) -> Result<f64>
where
    T: AsPrimitive<f64>,
{
    if data.is_empty() {
        return Err(empty_input("standard deviation"));
    }

    variance(data, sample).map(f64::sqrt)
}

/// Calculate the range (max - min) of a dataset
///
/// 0 for single-element or constant datasets.
///
/// # Errors
///
/// Returns `StatError::EmptyInput` when `data` is empty
pub fn data_range<T>(data: &[T]) -> Result<f64>
where
    T: AsPrimitive<f64>,
{
    if data.is_empty() {
        return Err(empty_input("range"));
    }

    let (min, max) = data
        .iter()
        .map(|x| x.as_())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), value| {
            (lo.min(value), hi.max(value))
        });

    Ok(max - min)
}
