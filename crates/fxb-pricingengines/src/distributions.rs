//! Standard normal distribution helpers.

use fxb_core::Real;
use statrs::function::erf::erf;
use std::f64::consts::{PI, SQRT_2};

/// The standard normal cumulative distribution function Φ(x).
#[inline]
pub fn normal_cdf(x: Real) -> Real {
    0.5 * (1.0 + erf(x / SQRT_2))
}

/// The standard normal probability density function.
///
/// `φ(x) = exp(-x²/2) / √(2π)`
#[inline]
pub fn normal_pdf(x: Real) -> Real {
    (-0.5 * x * x).exp() / (2.0 * PI).sqrt()
}
