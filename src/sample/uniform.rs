//! Uniform floating-point sampling via direct mantissa randomization.

use crate::bits::random_bits;
use crate::dtype::FloatElement;
use crate::error::Result;
use crate::key::Key;

/// Sample uniform values in `[minval, maxval)`.
///
/// Raw bits of the target float's width are turned into floats by keeping
/// the high mantissa-many bits and pinning the exponent so the bit pattern
/// reads as a value in `[1, 2)`; subtracting `1.0` then gives `[0, 1)`
/// without ever routing through an integer-to-float numeric conversion.
/// The reinterpretation is a same-width bit cast, so the output is
/// bit-identical across platforms.
///
/// Scaling to `[minval, maxval)` happens in the target type's native
/// precision. The final clamp keeps round-off in the scale step from
/// escaping the requested range.
pub fn uniform<F: FloatElement>(
    key: Key,
    shape: &[usize],
    minval: F,
    maxval: F,
) -> Result<Vec<F>> {
    let bits = random_bits::<F::Raw>(key, shape)?;
    let span = maxval - minval;

    Ok(bits
        .into_iter()
        .map(|b| {
            let unit = F::from_bits((b >> (F::BITS - F::MANTISSA_BITS)) | F::ONE_BITS) - F::one();
            let v = unit * span + minval;
            if v < minval {
                minval
            } else {
                v
            }
        })
        .collect())
}
