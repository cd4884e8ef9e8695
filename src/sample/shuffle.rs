//! Randomized permutation by repeated keyed sorts.

use crate::bits::random_bits;
use crate::error::Result;
use crate::key::Key;

/// Shuffle the elements of a slice uniformly at random.
///
/// Instead of Fisher-Yates, which serializes on element count, each round
/// tags every element with a fresh 32-bit random word and stable-sorts by
/// tag. A single round's tags may collide, so the round count is chosen as
/// `ceil(3 * ln(n) / ln(2^32 - 1))`: once every pair of elements has been
/// assigned distinct tags in some round, the concatenated tag strings are
/// all distinct and the permutation is uniform. This is a documented
/// approximation trade-off, accepted because it vectorizes.
pub fn shuffle<T: Clone>(key: Key, data: &[T]) -> Result<Vec<T>> {
    if data.len() <= 1 {
        return Ok(data.to_vec());
    }

    let exponent = 3.0;
    let num_rounds =
        (exponent * (data.len() as f64).ln() / f64::from(u32::MAX).ln()).ceil() as usize;

    let mut out = data.to_vec();
    let mut key = key;
    for _ in 0..num_rounds {
        let (next_key, subkey) = key.split_pair();
        key = next_key;

        let tags = random_bits::<u32>(subkey, &[out.len()])?;
        let mut order: Vec<usize> = (0..out.len()).collect();
        order.sort_by_key(|&i| tags[i]);
        out = order.iter().map(|&i| out[i].clone()).collect();
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pinned_permutation() {
        let data: Vec<u32> = (0..8).collect();
        let shuffled = shuffle(Key::from_seed(42), &data).unwrap();
        assert_eq!(shuffled, vec![6, 0, 3, 7, 2, 5, 4, 1]);
    }

    #[test]
    fn test_is_permutation() {
        for n in [2usize, 3, 10, 257, 4096] {
            let data: Vec<usize> = (0..n).collect();
            let mut shuffled = shuffle(Key::from_seed(7), &data).unwrap();
            shuffled.sort_unstable();
            assert_eq!(shuffled, data, "not a permutation for n = {}", n);
        }
    }

    #[test]
    fn test_deterministic() {
        let data: Vec<i32> = (0..100).collect();
        let key = Key::from_seed(11);
        assert_eq!(shuffle(key, &data).unwrap(), shuffle(key, &data).unwrap());
    }

    #[test]
    fn test_trivial_lengths() {
        assert_eq!(shuffle::<u8>(Key::from_seed(0), &[]).unwrap(), vec![]);
        assert_eq!(shuffle(Key::from_seed(0), &[9]).unwrap(), vec![9]);
    }

    #[test]
    fn test_moves_elements() {
        let data: Vec<usize> = (0..1000).collect();
        let shuffled = shuffle(Key::from_seed(13), &data).unwrap();
        let fixed = shuffled.iter().zip(&data).filter(|(a, b)| a == b).count();
        // expected number of fixed points is 1
        assert!(fixed < 20, "{} fixed points", fixed);
    }
}
