//! Normal distribution density and cumulative probability
//!
//! The cumulative distribution is expressed through the error function,
//! evaluated with a rational approximation rather than a special-function
//! library dependency.

use crate::error::{Result, invalid_parameter};
use std::f64::consts::{PI, SQRT_2};

/// Error function approximation using Abramowitz and Stegun method
///
/// Expresses the normal cumulative distribution in closed form. The
/// approximation has absolute error below 1.5e-7 and is exactly odd in x,
/// which keeps the CDF symmetry CDF(mu - d) = 1 - CDF(mu + d) exact.
pub fn erf(x: f64) -> f64 {
    let a1 = 0.254_829_592_f64;
    let a2 = -0.284_496_736_f64;
    let a3 = 1.421_413_741_f64;
    let a4 = -1.453_152_027_f64;
    let a5 = 1.061_405_429_f64;
    let p = 0.327_591_1_f64;

    let sign = if x < 0.0 { -1.0 } else { 1.0 };
    let x = x.abs();

    let t = 1.0 / p.mul_add(x, 1.0);
    let y = (((((a5.mul_add(t, a4)).mul_add(t, a3)).mul_add(t, a2)).mul_add(t, a1)) * t)
        .mul_add(-(-x * x).exp(), 1.0);

    sign * y
}

/// Normal (Gaussian) distribution parameterized by mean and standard deviation
///
/// Construction validates the scale parameter once, so every density or
/// cumulative evaluation on an instance has sigma > 0 established.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Normal {
    /// Location parameter (mean)
    mu: f64,
    /// Scale parameter (standard deviation), strictly positive
    sigma: f64,
}

impl Normal {
    /// Create a normal distribution with the given mean and standard deviation
    ///
    /// # Errors
    ///
    /// Returns `StatError::InvalidParameter` when `sigma` is not strictly
    /// positive
    pub fn new(mu: f64, sigma: f64) -> Result<Self> {
        if sigma <= 0.0 {
            return Err(invalid_parameter(
                "sigma",
                &sigma,
                &"standard deviation must be strictly positive",
            ));
        }

        Ok(Self { mu, sigma })
    }

    /// The standard normal distribution N(0, 1)
    pub const fn standard() -> Self {
        Self {
            mu: 0.0,
            sigma: 1.0,
        }
    }

    /// Mean of the distribution
    pub const fn mean(&self) -> f64 {
        self.mu
    }

    /// Standard deviation of the distribution
    pub const fn std_dev(&self) -> f64 {
        self.sigma
    }

    /// Probability density at x
    ///
    /// f(x) = (1 / (sigma * sqrt(2 pi))) * exp(-0.5 * ((x - mu) / sigma)^2)
    pub fn pdf(&self, x: f64) -> f64 {
        let z = (x - self.mu) / self.sigma;
        let coefficient = 1.0 / (self.sigma * (2.0 * PI).sqrt());

        coefficient * (-0.5 * z * z).exp()
    }

    /// Cumulative probability up to x
    ///
    /// CDF(x) = 0.5 * (1 + erf((x - mu) / (sigma * sqrt(2))))
    pub fn cdf(&self, x: f64) -> f64 {
        let z = (x - self.mu) / (self.sigma * SQRT_2);

        0.5 * (1.0 + erf(z))
    }
}

impl Default for Normal {
    fn default() -> Self {
        Self::standard()
    }
}

/// Evaluate the normal probability density function at x
///
/// # Errors
///
/// Returns `StatError::InvalidParameter` when `sigma` is not strictly
/// positive
pub fn normal_pdf(x: f64, mu: f64, sigma: f64) -> Result<f64> {
    Normal::new(mu, sigma).map(|distribution| distribution.pdf(x))
}

/// Evaluate the normal cumulative distribution function at x
///
/// # Errors
///
/// Returns `StatError::InvalidParameter` when `sigma` is not strictly
/// positive
pub fn normal_cdf(x: f64, mu: f64, sigma: f64) -> Result<f64> {
    Normal::new(mu, sigma).map(|distribution| distribution.cdf(x))
}
