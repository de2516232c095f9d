//! Seeded deterministic randomness.
//!
//! Every random decision in the engine flows through [`GameRng`], which
//! lives inside the game state and is only reachable through `&mut self`.
//! There is no ambient randomness anywhere: the same root seed and the
//! same sequence of operations always reproduce the same game.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Deterministic RNG backing a single game instance.
///
/// ChaCha8 keeps the state small and serializable, so a snapshot of the
/// model carries its generator state with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRng {
    seed: u64,
    inner: ChaCha8Rng,
}

impl GameRng {
    /// Create a generator from a root seed.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// The root seed this generator was created from
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform value in `0..bound`
    pub fn gen_index(&mut self, bound: usize) -> usize {
        self.inner.gen_range(0..bound)
    }

    /// Fisher-Yates shuffle of a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }

    /// Remove and return up to `n` uniformly chosen items from `items`.
    ///
    /// The remainder stays in `items` (its order is not preserved).
    /// Returns fewer than `n` items when the source runs out.
    pub fn sample_without_replacement<T>(&mut self, n: usize, items: &mut Vec<T>) -> Vec<T> {
        let mut taken = Vec::with_capacity(n.min(items.len()));
        for _ in 0..n {
            if items.is_empty() {
                break;
            }
            let idx = self.gen_index(items.len());
            taken.push(items.swap_remove(idx));
        }
        taken
    }

    /// Thread the generator through `count` steps of a fold.
    ///
    /// Each step receives its 1-based index, the running accumulator, and
    /// the generator, and returns the next accumulator.
    pub fn apply_n_times<T, F>(&mut self, count: usize, init: T, mut step: F) -> T
    where
        F: FnMut(usize, T, &mut GameRng) -> T,
    {
        let mut acc = init;
        for i in 1..=count {
            acc = step(i, acc, self);
        }
        acc
    }

    /// Draw a fresh root seed for a follow-up game instance.
    pub fn derive_seed(&mut self) -> u64 {
        self.inner.gen()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_stream() {
        let mut a = GameRng::new(42);
        let mut b = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(a.gen_index(1000), b.gen_index(1000));
        }
    }

    #[test]
    fn test_different_seeds_diverge() {
        let mut a = GameRng::new(1);
        let mut b = GameRng::new(2);

        let seq_a: Vec<_> = (0..10).map(|_| a.gen_index(1000)).collect();
        let seq_b: Vec<_> = (0..10).map(|_| b.gen_index(1000)).collect();
        assert_ne!(seq_a, seq_b);
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let mut rng = GameRng::new(7);
        let mut data = vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
        rng.shuffle(&mut data);

        let mut sorted = data.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
    }

    #[test]
    fn test_shuffle_deterministic() {
        let mut a = GameRng::new(99);
        let mut b = GameRng::new(99);
        let mut da: Vec<_> = (0..20).collect();
        let mut db: Vec<_> = (0..20).collect();

        a.shuffle(&mut da);
        b.shuffle(&mut db);
        assert_eq!(da, db);
    }

    #[test]
    fn test_sample_without_replacement_partitions() {
        let mut rng = GameRng::new(3);
        let mut items = vec![10, 20, 30, 40, 50];
        let taken = rng.sample_without_replacement(3, &mut items);

        assert_eq!(taken.len(), 3);
        assert_eq!(items.len(), 2);

        let mut all: Vec<_> = taken.iter().chain(items.iter()).copied().collect();
        all.sort_unstable();
        assert_eq!(all, vec![10, 20, 30, 40, 50]);
    }

    #[test]
    fn test_sample_without_replacement_underflow() {
        let mut rng = GameRng::new(3);
        let mut items = vec![1, 2];
        let taken = rng.sample_without_replacement(5, &mut items);

        assert_eq!(taken.len(), 2);
        assert!(items.is_empty());
    }

    #[test]
    fn test_apply_n_times_indices_and_threading() {
        let mut rng = GameRng::new(11);
        let indices = rng.apply_n_times(4, Vec::new(), |i, mut acc, _rng| {
            acc.push(i);
            acc
        });
        assert_eq!(indices, vec![1, 2, 3, 4]);

        // The generator is threaded through the steps: two identically
        // seeded runs produce identical draws.
        let mut a = GameRng::new(11);
        let mut b = GameRng::new(11);
        let draws_a = a.apply_n_times(5, Vec::new(), |_, mut acc, rng| {
            acc.push(rng.gen_index(100));
            acc
        });
        let draws_b = b.apply_n_times(5, Vec::new(), |_, mut acc, rng| {
            acc.push(rng.gen_index(100));
            acc
        });
        assert_eq!(draws_a, draws_b);
    }

    #[test]
    fn test_serde_round_trip_preserves_stream() {
        let mut rng = GameRng::new(42);
        for _ in 0..50 {
            rng.gen_index(1000);
        }

        let json = serde_json::to_string(&rng).unwrap();
        let mut restored: GameRng = serde_json::from_str(&json).unwrap();

        for _ in 0..10 {
            assert_eq!(rng.gen_index(1000), restored.gen_index(1000));
        }
    }
}
