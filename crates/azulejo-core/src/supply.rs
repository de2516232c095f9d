//! Tile distribution: factory stores, the center pool, and the bag.
//!
//! This module contains:
//! - The nine factory stores and their round-start population
//! - The shared center pool with the first-player token
//! - The tile bag and its refill-from-discard policy

use crate::rng::GameRng;
use crate::tile::{full_supply, Tile};
use serde::{Deserialize, Serialize};

/// Number of factory stores (fixed for the two-player game)
pub const NUM_STORES: usize = 9;

/// Tiles drawn into each store at round start
pub const STORE_CAPACITY: usize = 4;

/// One factory store: up to four tiles, kept in canonical order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Store {
    pub tiles: Vec<Tile>,
}

impl Store {
    /// Take every tile of the chosen glaze, emptying the store.
    ///
    /// Returns `(matching, rest)` where `rest` is bound for the center
    /// pool, or `None` (store untouched) if the glaze is not present.
    pub fn take(&mut self, tile: Tile) -> Option<(Vec<Tile>, Vec<Tile>)> {
        if !self.tiles.contains(&tile) {
            return None;
        }
        let (matching, rest) = std::mem::take(&mut self.tiles)
            .into_iter()
            .partition(|t| *t == tile);
        Some((matching, rest))
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}

/// The shared center pool: leftover tiles plus the first-player token.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pool {
    /// Tiles passed over during drafting, in canonical order
    pub tiles: Vec<Tile>,
    /// Whether the first-player token is still unclaimed this round
    pub has_token: bool,
}

impl Pool {
    /// Merge leftover store tiles into the pool, restoring canonical order.
    pub fn merge(&mut self, extra: Vec<Tile>) {
        self.tiles.extend(extra);
        self.tiles.sort();
    }

    /// Take every tile of the chosen glaze, or `None` if absent.
    pub fn take(&mut self, tile: Tile) -> Option<Vec<Tile>> {
        if !self.tiles.contains(&tile) {
            return None;
        }
        let (matching, rest) = std::mem::take(&mut self.tiles)
            .into_iter()
            .partition(|t| *t == tile);
        self.tiles = rest;
        Some(matching)
    }

    /// Whether the pool holds no tiles (the token alone does not count)
    pub fn is_empty_of_tiles(&self) -> bool {
        self.tiles.is_empty()
    }
}

/// The draw pile. Tiles leave through [`TileBag::draw`] and come back
/// only via the discard pile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileBag {
    pub tiles: Vec<Tile>,
}

impl TileBag {
    /// The full 100-tile supply, shuffled.
    pub fn full(rng: &mut GameRng) -> Self {
        let mut tiles = full_supply();
        rng.shuffle(&mut tiles);
        TileBag { tiles }
    }

    /// Draw up to `n` tiles without replacement.
    ///
    /// When the bag runs dry mid-draw the discard pile becomes the new
    /// bag and drawing continues; if both are empty the draw comes up
    /// short. One refill per draw suffices: a draw is at most 4 tiles.
    pub fn draw(&mut self, n: usize, discard: &mut Vec<Tile>, rng: &mut GameRng) -> Vec<Tile> {
        let mut drawn = rng.sample_without_replacement(n, &mut self.tiles);
        if drawn.len() < n && !discard.is_empty() {
            self.tiles.append(discard);
            let remainder = n - drawn.len();
            drawn.extend(rng.sample_without_replacement(remainder, &mut self.tiles));
        }
        drawn
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}

/// Populate all nine stores for a new round.
///
/// Each store draws four tiles from the bag (refilling from the discard
/// pile when the bag underflows) and is sorted into canonical order.
pub fn fill_stores(
    bag: &mut TileBag,
    discard: &mut Vec<Tile>,
    rng: &mut GameRng,
) -> [Store; NUM_STORES] {
    rng.apply_n_times(
        NUM_STORES,
        std::array::from_fn(|_| Store::default()),
        |i, mut stores: [Store; NUM_STORES], rng| {
            let mut tiles = bag.draw(STORE_CAPACITY, discard, rng);
            tiles.sort();
            stores[i - 1] = Store { tiles };
            stores
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_take_partitions_by_glaze() {
        let mut store = Store {
            tiles: vec![Tile::Azure, Tile::Azure, Tile::Ochre, Tile::Ivory],
        };

        let (matching, rest) = store.take(Tile::Azure).unwrap();
        assert_eq!(matching, vec![Tile::Azure, Tile::Azure]);
        assert_eq!(rest, vec![Tile::Ochre, Tile::Ivory]);
        assert!(store.is_empty());
    }

    #[test]
    fn test_store_take_absent_glaze_untouched() {
        let mut store = Store {
            tiles: vec![Tile::Azure, Tile::Ochre],
        };
        let before = store.clone();

        assert!(store.take(Tile::Crimson).is_none());
        assert_eq!(store, before);
    }

    #[test]
    fn test_pool_merge_keeps_canonical_order() {
        let mut pool = Pool {
            tiles: vec![Tile::Ochre, Tile::Ivory],
            has_token: true,
        };
        pool.merge(vec![Tile::Azure, Tile::Ebony]);

        assert_eq!(
            pool.tiles,
            vec![Tile::Azure, Tile::Ochre, Tile::Ebony, Tile::Ivory]
        );
    }

    #[test]
    fn test_pool_take() {
        let mut pool = Pool {
            tiles: vec![Tile::Azure, Tile::Azure, Tile::Crimson],
            has_token: false,
        };

        assert_eq!(
            pool.take(Tile::Azure),
            Some(vec![Tile::Azure, Tile::Azure])
        );
        assert_eq!(pool.tiles, vec![Tile::Crimson]);
        assert!(pool.take(Tile::Ivory).is_none());
    }

    #[test]
    fn test_fill_stores_bounds_and_order() {
        let mut rng = GameRng::new(42);
        let mut bag = TileBag::full(&mut rng);
        let mut discard = Vec::new();

        let stores = fill_stores(&mut bag, &mut discard, &mut rng);

        for store in &stores {
            assert_eq!(store.tiles.len(), STORE_CAPACITY);
            let mut sorted = store.tiles.clone();
            sorted.sort();
            assert_eq!(store.tiles, sorted, "store contents must be canonical");
        }
        assert_eq!(bag.len(), 100 - NUM_STORES * STORE_CAPACITY);
    }

    #[test]
    fn test_fill_stores_deterministic() {
        let mut rng_a = GameRng::new(7);
        let mut bag_a = TileBag::full(&mut rng_a);
        let mut rng_b = GameRng::new(7);
        let mut bag_b = TileBag::full(&mut rng_b);
        let mut none = Vec::new();

        let stores_a = fill_stores(&mut bag_a, &mut none, &mut rng_a);
        let mut none_b = Vec::new();
        let stores_b = fill_stores(&mut bag_b, &mut none_b, &mut rng_b);

        assert_eq!(stores_a, stores_b);
        assert_eq!(bag_a, bag_b);
    }

    #[test]
    fn test_draw_refills_from_discard() {
        let mut rng = GameRng::new(1);
        let mut bag = TileBag {
            tiles: vec![Tile::Azure],
        };
        let mut discard = vec![Tile::Ochre, Tile::Crimson, Tile::Ebony];

        let drawn = bag.draw(4, &mut discard, &mut rng);

        assert_eq!(drawn.len(), 4);
        assert!(discard.is_empty());
        assert!(bag.is_empty());
    }

    #[test]
    fn test_draw_short_when_supply_exhausted() {
        let mut rng = GameRng::new(1);
        let mut bag = TileBag {
            tiles: vec![Tile::Ivory, Tile::Ivory],
        };
        let mut discard = Vec::new();

        let drawn = bag.draw(4, &mut discard, &mut rng);
        assert_eq!(drawn, vec![Tile::Ivory, Tile::Ivory]);
    }
}
