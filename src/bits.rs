//! Bit extraction: turning a key into a flat array of uniform random words.
//!
//! This is the single point through which all entropy flows into every
//! distribution sampler. Each call builds a fresh counter `0..max_count`,
//! hashes it under the key, and never reuses counter values, which is what
//! gives the derived distributions their independence guarantees.

use crate::dtype::RawBits;
use crate::error::{Error, Result};
use crate::key::Key;
use crate::threefry::threefry_2x32;

/// Number of elements implied by a shape, with overflow checking.
pub(crate) fn element_count(shape: &[usize]) -> Result<usize> {
    shape
        .iter()
        .try_fold(1usize, |acc, &dim| acc.checked_mul(dim))
        .ok_or_else(|| {
            Error::invalid_argument("shape", format!("element count of {:?} overflows usize", shape))
        })
}

/// Sample uniform random words of `U`'s bit width (`u32` or `u64`).
///
/// The output has `product(shape)` elements. A 64-bit word is assembled from
/// two hash words, high half first, both widened before the shift so no bits
/// are truncated.
///
/// # Errors
///
/// [`Error::CounterOverflow`] when the request needs more raw 32-bit words
/// than one hash call can address; split the key and batch smaller calls.
pub fn random_bits<U: RawBits>(key: Key, shape: &[usize]) -> Result<Vec<U>> {
    let n = element_count(shape)?;
    let requested = u64::from(U::BIT_WIDTH / 32) * n as u64;
    if requested >= u64::from(u32::MAX) {
        return Err(Error::CounterOverflow {
            requested,
            max: u64::from(u32::MAX),
        });
    }

    let counts: Vec<u32> = (0..requested as u32).collect();
    let words = threefry_2x32(key.words(), &counts);
    Ok(U::pack_words(words))
}
