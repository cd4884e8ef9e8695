//! Gamma and beta sampling via the Marsaglia-Tsang squeeze algorithm.

use crate::bits::element_count;
use crate::dtype::FloatElement;
use crate::error::Result;
use crate::key::Key;
use crate::sample::{normal, uniform};

#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Draw one Gamma(alpha) variate from its own key.
///
/// Rejection sampler: the trip count is a random variable, so the loop runs
/// until its acceptance predicate fires (probability-1 termination, ~1.05
/// iterations expected for moderate alpha). Each iteration consumes fresh
/// sub-keys, never raw entropy from a previous round.
fn gamma_one<F: FloatElement>(key: Key, alpha: F) -> Result<F> {
    let zero = F::zero();
    let one = F::one();
    let half = F::from_f64(0.5);
    let third = F::from_f64(1.0 / 3.0);
    let squeeze = F::from_f64(0.0331);

    let (mut key, boost_key) = key.split_pair();

    // Gamma(a) for a < 1 is boosted through Gamma(a + 1) * U^(1/a)
    let (alpha, boost) = if alpha >= one {
        (alpha, one)
    } else {
        let u = uniform(boost_key, &[], zero, one)?[0];
        (alpha + one, u.powf(one / alpha))
    };

    let d = alpha - third;
    let c = third / d.sqrt();

    // V = -1 forces at least one iteration
    let mut x = zero;
    let mut v = -one;
    let mut u = zero;

    // keep looping while the cube is non-positive or the squeeze test and
    // the exact log test both reject
    while v <= zero
        || (u >= one - squeeze * x * x && u.ln() >= x * half + d * (one - v + v.ln()))
    {
        let keys = key.split(3);
        key = keys[0];
        let n = normal::<F>(keys[1], &[])?[0];
        let vlin = one + c * n;
        x = n * n;
        v = vlin * vlin * vlin;
        u = uniform(keys[2], &[], zero, one)?[0];
    }

    let z = d * v * boost;
    // an exact zero would break downstream log/divide consumers
    Ok(if z == zero { F::TINY } else { z })
}

/// Sample one Gamma variate per entry of `alphas`.
///
/// Each element gets its own independently split sub-key, since the
/// rejection loop's length is input-dependent; lanes are therefore fully
/// independent and run in parallel under the `rayon` feature with results
/// identical to the sequential path.
pub fn gamma_each<F: FloatElement>(key: Key, alphas: &[F]) -> Result<Vec<F>> {
    let keys = key.split(alphas.len());

    #[cfg(feature = "rayon")]
    {
        keys.into_par_iter()
            .zip(alphas.par_iter())
            .map(|(k, &a)| gamma_one(k, a))
            .collect()
    }

    #[cfg(not(feature = "rayon"))]
    {
        keys.into_iter()
            .zip(alphas.iter())
            .map(|(k, &a)| gamma_one(k, a))
            .collect()
    }
}

/// Sample Gamma(a) values with the given shape.
///
/// The scalar shape parameter is broadcast to every element; see
/// [`gamma_each`] for per-element parameters.
pub fn gamma<F: FloatElement>(key: Key, a: F, shape: &[usize]) -> Result<Vec<F>> {
    let n = element_count(shape)?;
    gamma_each(key, &vec![a; n])
}

/// Sample Beta(a, b) values as a ratio of two independent Gamma draws.
pub fn beta<F: FloatElement>(key: Key, a: F, b: F, shape: &[usize]) -> Result<Vec<F>> {
    let (key_a, key_b) = key.split_pair();
    let gamma_a = gamma(key_a, a, shape)?;
    let gamma_b = gamma(key_b, b, shape)?;
    Ok(gamma_a
        .into_iter()
        .zip(gamma_b)
        .map(|(x, y)| x / (x + y))
        .collect())
}
