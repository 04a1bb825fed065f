//! The fixed set of characters a password is drawn from.

use rand::seq::SliceRandom;
use rand::Rng;

pub const LETTERS: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &str = "0123456789";
pub const PUNCTUATION: &str = "!#$%&()*+-=?@_";

/// Ordered characters eligible for a password: letters, digits, then punctuation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterPool {
    chars: Vec<char>,
}

impl CharacterPool {
    pub fn standard() -> Self {
        let chars = LETTERS.chars().chain(DIGITS.chars()).chain(PUNCTUATION.chars());
        Self {
            chars: chars.collect(),
        }
    }

    /// Returns a uniformly random permutation of the pool.
    ///
    /// A single Fisher-Yates pass is already uniform over all orderings, so
    /// the pool is shuffled exactly once.
    pub fn shuffled<R: Rng + ?Sized>(mut self, rng: &mut R) -> Self {
        self.chars.shuffle(rng);
        self
    }

    pub fn as_slice(&self) -> &[char] {
        &self.chars
    }

    #[cfg(test)]
    pub(crate) fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sorted(chars: &[char]) -> Vec<char> {
        let mut v = chars.to_vec();
        v.sort_unstable();
        v
    }

    #[test]
    fn test_standard_pool_size() {
        let pool = CharacterPool::standard();
        assert_eq!(pool.as_slice().len(), 52 + 10 + 14);
    }

    #[test]
    fn test_standard_pool_classes() {
        let pool = CharacterPool::standard();
        assert!(('a'..='z').all(|c| pool.contains(c)));
        assert!(('A'..='Z').all(|c| pool.contains(c)));
        assert!(('0'..='9').all(|c| pool.contains(c)));
        assert!(PUNCTUATION.chars().all(|c| pool.contains(c)));
        assert!(!pool.contains(' '));
        assert!(!pool.contains('^'));
    }

    #[test]
    fn test_standard_pool_has_no_duplicates() {
        let pool = CharacterPool::standard();
        let mut chars = sorted(pool.as_slice());
        chars.dedup();
        assert_eq!(chars.len(), pool.as_slice().len());
    }

    #[test]
    fn test_shuffle_is_a_permutation() {
        let mut rng = StdRng::seed_from_u64(7);
        let pool = CharacterPool::standard();
        let shuffled = pool.clone().shuffled(&mut rng);
        assert_eq!(sorted(shuffled.as_slice()), sorted(pool.as_slice()));
    }

    #[test]
    fn test_shuffle_changes_order() {
        let mut rng = StdRng::seed_from_u64(42);
        let shuffled = CharacterPool::standard().shuffled(&mut rng);
        assert_ne!(shuffled, CharacterPool::standard());
    }

    #[test]
    fn test_shuffle_is_reproducible_with_seed() {
        let a = CharacterPool::standard().shuffled(&mut StdRng::seed_from_u64(99));
        let b = CharacterPool::standard().shuffled(&mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }
}
