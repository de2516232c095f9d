//! Tile types and the fixed game supply.
//!
//! This module contains:
//! - The five tile glazes and their canonical ordering
//! - Conversion between tiles and their numeric offsets
//! - Construction of the full 100-tile supply

use serde::{Deserialize, Serialize};

/// Number of distinct tile glazes
pub const TILE_KINDS: usize = 5;

/// Copies of each glaze in the supply
pub const TILES_PER_KIND: usize = 20;

/// Total tiles in play across the whole game
pub const TILE_SUPPLY: usize = TILE_KINDS * TILES_PER_KIND;

/// Tile glazes - traditional azulejo ceramic colors.
///
/// Declaration order is the canonical tile ordering: stores and the
/// center pool are always kept sorted by it so rendered state is stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Tile {
    /// Cobalt blue, the classic azulejo glaze
    Azure,
    /// Yellow ochre
    Ochre,
    /// Deep red
    Crimson,
    /// Near-black manganese
    Ebony,
    /// Off-white tin glaze
    Ivory,
}

impl Tile {
    /// All glazes in canonical order
    pub const ALL: [Tile; TILE_KINDS] = [
        Tile::Azure,
        Tile::Ochre,
        Tile::Crimson,
        Tile::Ebony,
        Tile::Ivory,
    ];

    /// Numeric offset of this glaze in canonical order (0..5)
    pub fn offset(self) -> usize {
        self as usize
    }

    /// Inverse of [`Tile::offset`]
    pub fn from_offset(offset: usize) -> Option<Tile> {
        Tile::ALL.get(offset).copied()
    }
}

/// Build the full unshuffled supply: 20 tiles of each glaze, canonical order.
pub fn full_supply() -> Vec<Tile> {
    let mut tiles = Vec::with_capacity(TILE_SUPPLY);
    for tile in Tile::ALL {
        tiles.extend(std::iter::repeat(tile).take(TILES_PER_KIND));
    }
    tiles
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_round_trip() {
        for tile in Tile::ALL {
            assert_eq!(Tile::from_offset(tile.offset()), Some(tile));
        }
        assert_eq!(Tile::from_offset(TILE_KINDS), None);
    }

    #[test]
    fn test_canonical_order_matches_declaration() {
        let mut sorted = vec![Tile::Ivory, Tile::Azure, Tile::Ebony, Tile::Ochre];
        sorted.sort();
        assert_eq!(
            sorted,
            vec![Tile::Azure, Tile::Ochre, Tile::Ebony, Tile::Ivory]
        );
    }

    #[test]
    fn test_full_supply_composition() {
        let supply = full_supply();
        assert_eq!(supply.len(), TILE_SUPPLY);

        for tile in Tile::ALL {
            let count = supply.iter().filter(|t| **t == tile).count();
            assert_eq!(count, TILES_PER_KIND);
        }
    }
}
