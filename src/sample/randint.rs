//! Bounded-integer sampling with bias reduction.

use crate::bits::random_bits;
use crate::dtype::{IntElement, RawBits};
use crate::error::Result;
use crate::key::Key;

/// Sample uniform integers in `[minval, maxval)`.
///
/// A degenerate range (`maxval <= minval`) is silently coerced to the unit
/// range at `minval` rather than rejected; every element of the output is
/// then `minval`. This coercion is a deliberate policy to avoid a zero-wide
/// range, not a validation of the caller's bounds.
///
/// A single native-width draw reduced modulo an arbitrary span is biased
/// whenever the span does not divide the word range, so two independent
/// draws are taken from a pair of split keys and recombined through a
/// `2^BITS mod span` multiplier, making the residual bias negligible. The
/// multiplier chain runs in wrapping unsigned arithmetic of the native
/// width.
pub fn randint<I: IntElement>(
    key: Key,
    shape: &[usize],
    minval: I,
    maxval: I,
) -> Result<Vec<I>> {
    let bumped = minval.wrapping_add(I::one());
    let maxval = if bumped > maxval { bumped } else { maxval };

    let (key_hi, key_lo) = key.split_pair();
    let higher_bits = random_bits::<I::Unsigned>(key_hi, shape)?;
    let lower_bits = random_bits::<I::Unsigned>(key_lo, shape)?;

    let zero = I::Unsigned::from_u32(0);
    let span = maxval.to_unsigned().wrapping_sub(minval.to_unsigned());
    // the unit-range bump laps around when minval is the dtype maximum;
    // keep the documented unit-range behavior there too
    let span = if span == zero {
        I::Unsigned::from_u32(1)
    } else {
        span
    };

    let mut multiplier = I::Unsigned::from_u32(1 << 16) % span;
    multiplier = multiplier.wrapping_mul(multiplier) % span;
    if I::BITS == 64 {
        multiplier = multiplier.wrapping_mul(multiplier) % span;
    }

    Ok(higher_bits
        .into_iter()
        .zip(lower_bits)
        .map(|(hi, lo)| {
            let offset = (hi % span)
                .wrapping_mul(multiplier)
                .wrapping_add(lo % span)
                % span;
            minval.wrapping_add(I::from_unsigned(offset))
        })
        .collect())
}
