//! Samplers derived from `uniform` by closed-form transforms.

use crate::dtype::FloatElement;
use crate::error::{Error, Result};
use crate::key::Key;
use crate::sample::uniform;
use crate::special::erf_inv;

/// Sample standard normal values via the inverse error function.
///
/// Draws uniformly from `(-1, 1)` with the lower endpoint nudged to the
/// float just above `-1.0`, keeping the inverse error function's argument
/// strictly inside its domain, then maps through `sqrt(2) * erf_inv(u)`.
pub fn normal<F: FloatElement>(key: Key, shape: &[usize]) -> Result<Vec<F>> {
    let u = uniform(key, shape, F::after_neg_one(), F::one())?;
    Ok(u.into_iter()
        .map(|v| F::from_f64(std::f64::consts::SQRT_2 * erf_inv(v.to_f64())))
        .collect())
}

/// Sample standard exponential values.
///
/// `-ln(1 - u)`: taking `1 - u` moves the argument of `ln` onto `(0, 1]`
/// instead of `[0, 1)`, so `ln(0)` can never occur.
pub fn exponential<F: FloatElement>(key: Key, shape: &[usize]) -> Result<Vec<F>> {
    let u = uniform(key, shape, F::zero(), F::one())?;
    Ok(u.into_iter().map(|v| -((F::one() - v).ln())).collect())
}

/// Sample Bernoulli outcomes with success probability `p`.
///
/// Each element is `true` with probability `p`.
///
/// # Errors
///
/// [`Error::InvalidArgument`] when `p` lies outside `[0, 1]`.
pub fn bernoulli<F: FloatElement>(key: Key, p: F, shape: &[usize]) -> Result<Vec<bool>> {
    if !(p >= F::zero() && p <= F::one()) {
        return Err(Error::invalid_argument(
            "p",
            format!(
                "probability must lie in [0, 1], got {} ({})",
                p.to_f64(),
                F::DTYPE
            ),
        ));
    }
    let u = uniform(key, shape, F::zero(), F::one())?;
    Ok(u.into_iter().map(|v| v < p).collect())
}

/// Sample standard Cauchy values: `tan(pi * (u - 1/2))`.
pub fn cauchy<F: FloatElement>(key: Key, shape: &[usize]) -> Result<Vec<F>> {
    let u = uniform(key, shape, F::zero(), F::one())?;
    Ok(u.into_iter()
        .map(|v| F::from_f64((std::f64::consts::PI * (v.to_f64() - 0.5)).tan()))
        .collect())
}

/// Sample standard Gumbel values: `-ln(-ln(u))`.
pub fn gumbel<F: FloatElement>(key: Key, shape: &[usize]) -> Result<Vec<F>> {
    let u = uniform(key, shape, F::zero(), F::one())?;
    Ok(u.into_iter().map(|v| -((-(v.ln())).ln())).collect())
}

/// Sample standard Laplace values: `sign(u) * ln1p(-|u|)` over `u` drawn
/// from `[-1, 1)`.
pub fn laplace<F: FloatElement>(key: Key, shape: &[usize]) -> Result<Vec<F>> {
    let u = uniform(key, shape, -F::one(), F::one())?;
    Ok(u.into_iter()
        .map(|v| {
            let x = v.to_f64();
            F::from_f64(x.signum() * (-x.abs()).ln_1p())
        })
        .collect())
}

/// Sample Pareto values with shape parameter `b`: `exp(e / b)` over a
/// standard exponential draw `e`.
pub fn pareto<F: FloatElement>(key: Key, b: F, shape: &[usize]) -> Result<Vec<F>> {
    let e = exponential::<F>(key, shape)?;
    Ok(e.into_iter()
        .map(|v| F::from_f64((v / b).to_f64().exp()))
        .collect())
}
