//! Azulejo - a two-player tile-drafting game engine
//!
//! This crate provides the core game logic for Azulejo, including:
//! - Tile glazes and the fixed 100-tile supply
//! - The 5x5 scoring wall and triangular staging area
//! - Factory stores, the center pool, and the tile bag
//! - The draft/placement state machine with full rule enforcement
//!
//! # Architecture
//!
//! The engine is a pure state machine: a [`GameState`] snapshot plus
//! [`GameState::apply_action`]. Every random decision flows through a
//! seeded generator carried inside the state, so the same seed and the
//! same action sequence always reproduce the same game. The rendering
//! layer is an external collaborator that reads snapshots (or their JSON
//! form) and submits [`GameAction`]s.
//!
//! # Modules
//!
//! - [`tile`]: Tile glazes and the fixed supply
//! - [`board`]: The scoring wall and staging rows
//! - [`rng`]: Seeded deterministic randomness
//! - [`supply`]: Factory stores, center pool, and the bag
//! - [`player`]: Per-player state and penalties
//! - [`actions`]: The action and event vocabulary
//! - [`game`]: The game state machine

pub mod actions;
pub mod board;
pub mod game;
pub mod player;
pub mod rng;
pub mod supply;
pub mod tile;

// Re-export commonly used types
pub use actions::{DraftSource, GameAction, GameEvent};
pub use board::{
    index_to_point, point_to_index, wall_column, StagingArea, StagingRow, Wall, BOARD_WIDTH,
};
pub use game::{round_is_drained, GameError, GamePhase, GameState, NUM_PLAYERS};
pub use player::{Player, PlayerId, NEGATIVES_CAPACITY, NEGATIVE_PENALTY};
pub use rng::GameRng;
pub use supply::{fill_stores, Pool, Store, TileBag, NUM_STORES, STORE_CAPACITY};
pub use tile::{full_supply, Tile, TILES_PER_KIND, TILE_KINDS, TILE_SUPPLY};
