//! PRNG keys: creation, splitting, and folding in auxiliary data.
//!
//! A [`Key`] is the only state this generator has. Every sampling operation
//! is a pure function of a key and its parameters, which is what makes the
//! generator safe under parallel execution: two workers holding keys from
//! different `split` calls can never interfere with each other.

use crate::threefry::threefry_2x32;
use rand::Rng;

/// An opaque PRNG key identifying one logical random stream.
///
/// A key is exactly two 32-bit unsigned words. Keys have value semantics and
/// are never mutated: every derivation (`split`, `fold_in`) returns new key
/// values, and the derivation graph is a DAG rooted at the original seed.
///
/// # Example
/// ```
/// use splitrand::key::Key;
///
/// let key = Key::from_seed(42);
/// let (key, subkey) = key.split_pair();
/// assert_ne!(key, subkey);
/// ```
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct Key([u32; 2]);

impl Key {
    /// Create a key from an integer seed.
    ///
    /// The seed is bit-decomposed into two 32-bit halves (`seed >> 32` and
    /// `seed & 0xFFFF_FFFF`). The shift is arithmetic, so negative seeds
    /// sign-extend into the high word rather than silently dropping bits.
    pub fn from_seed(seed: i64) -> Self {
        Key([((seed >> 32) & 0xFFFF_FFFF) as u32, (seed & 0xFFFF_FFFF) as u32])
    }

    /// Create a key from operating-system entropy.
    ///
    /// For callers that do not need reproducibility. Everything downstream
    /// of the returned key is still fully deterministic.
    pub fn from_entropy() -> Self {
        let mut rng = rand::rng();
        Key([rng.random(), rng.random()])
    }

    /// Assemble a key directly from its two raw words.
    pub const fn from_raw(hi: u32, lo: u32) -> Self {
        Key([hi, lo])
    }

    /// The two raw words of the key.
    pub const fn words(self) -> [u32; 2] {
        self.0
    }

    /// Split this key into `num` new keys.
    ///
    /// Hashes the counter `0..2*num` under this key and pairs up the output
    /// words. Any two keys obtained by splitting are treated as statistically
    /// independent streams, and re-splitting the same key always reproduces
    /// the same children. `num == 0` yields an empty vector.
    ///
    /// # Panics
    ///
    /// Panics if `2 * num` exceeds the 32-bit counter range; no realistic
    /// split is anywhere near that large.
    pub fn split(self, num: usize) -> Vec<Key> {
        let count = num
            .checked_mul(2)
            .and_then(|c| u32::try_from(c).ok())
            .expect("split count exceeds the 32-bit counter range");
        let counts: Vec<u32> = (0..count).collect();
        let words = threefry_2x32(self.0, &counts);
        words
            .chunks_exact(2)
            .map(|pair| Key([pair[0], pair[1]]))
            .collect()
    }

    /// Split into exactly two keys, returned as a pair.
    ///
    /// Convenience for the pervasive carry-and-consume pattern: keep the
    /// first key for further derivation, spend the second on a sampling call.
    pub fn split_pair(self) -> (Key, Key) {
        let keys = self.split(2);
        (keys[0], keys[1])
    }

    /// Fold integer data into this key, producing a new decorrelated key.
    ///
    /// Useful for deriving a per-iteration key from a loop index without
    /// consuming a `split`. The result is a deterministic function of both
    /// inputs: `key.fold_in(i)` hashes `key` over the two words of
    /// `Key::from_seed(i)` used as the counter.
    pub fn fold_in(self, data: i64) -> Key {
        let words = threefry_2x32(self.0, &Key::from_seed(data).0);
        Key([words[0], words[1]])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_seed_decomposition() {
        assert_eq!(Key::from_seed(42).words(), [0, 42]);
        assert_eq!(Key::from_seed((1 << 40) + 5).words(), [0x100, 5]);
        // negative seeds sign-extend into the high word
        assert_eq!(Key::from_seed(-1).words(), [0xFFFF_FFFF, 0xFFFF_FFFF]);
    }

    #[test]
    fn test_from_seed_deterministic() {
        assert_eq!(Key::from_seed(123), Key::from_seed(123));
    }

    #[test]
    fn test_split_reference_children() {
        let children = Key::from_seed(42).split(2);
        assert_eq!(children[0].words(), [2465931498, 3679230171]);
        assert_eq!(children[1].words(), [255383827, 267815257]);
    }

    #[test]
    fn test_split_three() {
        let children = Key::from_seed(42).split(3);
        assert_eq!(children[0].words(), [3134548294, 3733159049]);
        assert_eq!(children[1].words(), [3746501087, 894150801]);
        assert_eq!(children[2].words(), [801545058, 2363201431]);
    }

    #[test]
    fn test_split_reproducible_and_distinct() {
        let key = Key::from_seed(7);
        let a = key.split(16);
        let b = key.split(16);
        assert_eq!(a, b);
        for i in 0..a.len() {
            for j in (i + 1)..a.len() {
                assert_ne!(a[i], a[j], "children {} and {} collide", i, j);
            }
        }
    }

    #[test]
    fn test_split_zero_is_empty() {
        assert!(Key::from_seed(0).split(0).is_empty());
    }

    #[test]
    fn test_split_pair_matches_split() {
        let key = Key::from_seed(99);
        let (a, b) = key.split_pair();
        let children = key.split(2);
        assert_eq!((a, b), (children[0], children[1]));
    }

    #[test]
    fn test_fold_in_reference() {
        let folded = Key::from_seed(42).fold_in(7);
        assert_eq!(folded.words(), [2547012911, 1371500959]);
    }

    #[test]
    fn test_fold_in_decorrelates() {
        let key = Key::from_seed(5);
        assert_ne!(key.fold_in(0), key);
        assert_ne!(key.fold_in(1), key.fold_in(2));
        assert_eq!(key.fold_in(3), key.fold_in(3));
    }

    #[test]
    fn test_from_entropy_varies() {
        assert_ne!(Key::from_entropy(), Key::from_entropy());
    }
}
