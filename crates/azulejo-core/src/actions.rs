//! Game actions that players can take.
//!
//! This module defines all possible actions in the game and the events
//! that result from those actions.

use crate::player::PlayerId;
use crate::tile::Tile;
use serde::{Deserialize, Serialize};

/// Where drafted tiles came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DraftSource {
    /// A factory store, by index
    Store(usize),
    /// The shared center pool
    Pool,
}

/// All possible actions a player can take
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameAction {
    /// Tear down the current game and start a fresh one with a new seed
    NewGame,

    // ==================== Drafting ====================
    /// Take all tiles of one glaze from a store; the rest go to the pool
    SelectFromStore { store: usize, tile: Tile },
    /// Take all tiles of one glaze from the center pool
    SelectFromPool { tile: Tile },

    // ==================== Placement ====================
    /// Move the held tiles into a staging row; overflow becomes penalties
    PlaceInRow { row: usize },
    /// Send every held tile straight to the penalty row
    DiscardHeld,
}

/// Events that occur as a result of actions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A fresh game was initialized
    GameStarted { seed: u64, first_player: PlayerId },

    /// Tiles of one glaze were drafted
    TilesDrafted {
        player: PlayerId,
        source: DraftSource,
        tile: Tile,
        count: usize,
    },

    /// The first-player token left the pool
    FirstPlayerTokenTaken { player: PlayerId },

    /// Held tiles went into a staging row
    TilesPlaced {
        player: PlayerId,
        row: usize,
        placed: usize,
        overflowed: usize,
    },

    /// Held tiles went straight to the penalty row
    HeldDiscarded { player: PlayerId, count: usize },

    /// The turn passed to the other player
    TurnPassed {
        player: PlayerId,
        next_player: PlayerId,
    },

    /// A completed staging row moved a tile onto the wall
    WallTilePlaced {
        player: PlayerId,
        row: usize,
        col: usize,
        tile: Tile,
        points: i32,
    },

    /// Round-end penalty was deducted from a player's score
    PenaltyApplied { player: PlayerId, penalty: i32 },

    /// A round finished and the next one was set up
    RoundCompleted {
        round: u32,
        next_starter: PlayerId,
    },

    /// The game reached its terminal state
    GameEnded {
        winner: PlayerId,
        scores: Vec<i32>,
    },
}
