//! Player state: board halves, penalties, score, and held tiles.

use crate::board::{StagingArea, Wall};
use crate::tile::Tile;
use serde::{Deserialize, Serialize};

/// Player identifier: index into the game's player list
pub type PlayerId = u8;

/// Maximum penalty tiles a player can hold per round
pub const NEGATIVES_CAPACITY: usize = 7;

/// Escalating penalty per occupied negative slot
pub const NEGATIVE_PENALTY: [i32; NEGATIVES_CAPACITY] = [-1, -1, -2, -2, -2, -3, -3];

/// A single player's state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Player ID (0 or 1)
    pub id: PlayerId,
    /// Display name
    pub name: String,
    /// The 5x5 scoring wall
    pub wall: Wall,
    /// The five staging rows
    pub staging: StagingArea,
    /// Penalty tiles accumulated this round (max 7)
    pub negatives: Vec<Tile>,
    /// Cumulative score; never drops below zero
    pub score: i32,
    /// Tiles drafted this turn, pending a placement decision
    pub to_place: Vec<Tile>,
    /// Whether this player starts the next round
    pub is_first_player: bool,
}

impl Player {
    /// Create a new player with empty board halves
    pub fn new(id: PlayerId, name: String) -> Self {
        Self {
            id,
            name,
            wall: Wall::new(),
            staging: StagingArea::new(),
            negatives: Vec::new(),
            score: 0,
            to_place: Vec::new(),
            is_first_player: false,
        }
    }

    /// Penalty owed for the current negative row (always <= 0)
    pub fn penalty(&self) -> i32 {
        NEGATIVE_PENALTY[..self.negatives.len()].iter().sum()
    }

    /// Add a penalty tile; overflow past the seventh slot is discarded.
    pub fn add_negative(&mut self, tile: Tile, discard: &mut Vec<Tile>) {
        if self.negatives.len() < NEGATIVES_CAPACITY {
            self.negatives.push(tile);
        } else {
            discard.push(tile);
        }
    }

    /// Tiles currently in this player's possession
    pub fn tile_count(&self) -> usize {
        self.to_place.len()
            + self.negatives.len()
            + self.staging.tile_count()
            + self.wall.tile_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_penalty_escalates() {
        let mut player = Player::new(0, "Ines".to_string());
        let mut discard = Vec::new();

        assert_eq!(player.penalty(), 0);

        player.add_negative(Tile::Azure, &mut discard);
        assert_eq!(player.penalty(), -1);

        player.add_negative(Tile::Azure, &mut discard);
        player.add_negative(Tile::Ochre, &mut discard);
        assert_eq!(player.penalty(), -4); // -1 -1 -2

        for _ in 0..4 {
            player.add_negative(Tile::Ivory, &mut discard);
        }
        assert_eq!(player.negatives.len(), NEGATIVES_CAPACITY);
        assert_eq!(player.penalty(), -14); // full table
    }

    #[test]
    fn test_negative_overflow_goes_to_discard() {
        let mut player = Player::new(1, "Duarte".to_string());
        let mut discard = Vec::new();

        for _ in 0..9 {
            player.add_negative(Tile::Crimson, &mut discard);
        }

        assert_eq!(player.negatives.len(), NEGATIVES_CAPACITY);
        assert_eq!(discard.len(), 2);
    }

    #[test]
    fn test_tile_count_sums_all_containers() {
        let mut player = Player::new(0, "Ines".to_string());
        let mut discard = Vec::new();

        player.to_place = vec![Tile::Azure, Tile::Azure];
        player.add_negative(Tile::Ochre, &mut discard);
        player.staging.add(2, Tile::Ivory, 2);
        player.wall.set(0, 0, Tile::Azure);

        assert_eq!(player.tile_count(), 6);
    }
}
