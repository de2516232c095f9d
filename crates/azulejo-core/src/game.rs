//! Core game state machine.
//!
//! This module contains the main `GameState` struct and all game logic:
//! draft validation and partition, placement and overflow, round
//! resolution with wall tiling and scoring, and end-of-game detection.

use crate::actions::{DraftSource, GameAction, GameEvent};
use crate::board::{wall_column, BOARD_WIDTH};
use crate::player::{Player, PlayerId};
use crate::rng::GameRng;
use crate::supply::{fill_stores, Pool, Store, TileBag, NUM_STORES};
use crate::tile::{Tile, TILE_SUPPLY};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of players (the engine models the two-player game)
pub const NUM_PLAYERS: usize = 2;

/// Bonus per complete horizontal wall row at game end
const ROW_BONUS: i32 = 2;

/// Bonus per complete vertical wall column at game end
const COL_BONUS: i32 = 7;

/// Bonus per glaze with all five tiles on the wall at game end
const SET_BONUS: i32 = 10;

/// Game phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// The current player must draft from a store or the pool
    AwaitingDraft,
    /// The current player holds drafted tiles and must place them
    AwaitingPlacement,
    /// Terminal; only `NewGame` is accepted
    GameOver { winner: PlayerId },
}

/// Errors that can occur when applying actions
#[derive(Debug, Clone, Error, Serialize, Deserialize)]
pub enum GameError {
    #[error("Not your turn")]
    NotPlayersTurn,

    #[error("Selected store or tile glaze is not available")]
    InvalidSelection,

    #[error("Cannot place held tiles there")]
    InvalidPlacement,

    #[error("Game is over")]
    GameOver,
}

/// The complete game state.
///
/// This is the single model snapshot the presentation layer renders.
/// Every mutation goes through [`GameState::apply_action`], which either
/// applies fully or rejects before touching anything.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Both players, indexed by `PlayerId`
    pub players: Vec<Player>,
    /// The nine factory stores
    pub stores: [Store; NUM_STORES],
    /// The shared center pool
    pub pool: Pool,
    /// The draw pile
    pub bag: TileBag,
    /// Tiles removed from play until the bag needs them back
    pub discard: Vec<Tile>,
    /// Whose turn it is
    pub current_player: PlayerId,
    /// Current game phase
    pub phase: GamePhase,
    /// Round number (starts at 1)
    pub round: u32,
    /// Root seed this game was created from
    seed: u64,
    /// Deterministic generator threaded through every random decision
    rng: GameRng,
}

impl GameState {
    /// Create a new game, deterministically derived from `seed`.
    ///
    /// Shuffles the full 100-tile bag, fills the nine stores, puts the
    /// first-player token in the (otherwise empty) pool, and randomly
    /// assigns the starting player.
    pub fn new(seed: u64, names: [String; NUM_PLAYERS]) -> Self {
        let mut rng = GameRng::new(seed);
        let mut bag = TileBag::full(&mut rng);
        let mut discard = Vec::new();
        let stores = fill_stores(&mut bag, &mut discard, &mut rng);

        let mut players: Vec<Player> = names
            .into_iter()
            .enumerate()
            .map(|(i, name)| Player::new(i as PlayerId, name))
            .collect();

        let first = rng.gen_index(NUM_PLAYERS) as PlayerId;
        players[first as usize].is_first_player = true;

        Self {
            players,
            stores,
            pool: Pool {
                tiles: Vec::new(),
                has_token: true,
            },
            bag,
            discard,
            current_player: first,
            phase: GamePhase::AwaitingDraft,
            round: 1,
            seed,
            rng,
        }
    }

    /// The root seed this game was created from
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Get a player by ID
    pub fn get_player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id as usize)
    }

    /// Check if the game is finished
    pub fn is_finished(&self) -> bool {
        matches!(self.phase, GamePhase::GameOver { .. })
    }

    /// Get the winner if the game is finished
    pub fn get_winner(&self) -> Option<PlayerId> {
        if let GamePhase::GameOver { winner } = self.phase {
            Some(winner)
        } else {
            None
        }
    }

    /// Serialize the full model snapshot for the presentation layer.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Total tiles across every container; always [`TILE_SUPPLY`].
    pub fn total_tile_count(&self) -> usize {
        self.bag.len()
            + self.discard.len()
            + self.stores.iter().map(|s| s.tiles.len()).sum::<usize>()
            + self.pool.tiles.len()
            + self.players.iter().map(|p| p.tile_count()).sum::<usize>()
    }

    /// Get all currently valid actions for a player
    pub fn valid_actions(&self, player: PlayerId) -> Vec<GameAction> {
        let mut actions = Vec::new();

        match self.phase {
            GamePhase::GameOver { .. } => {
                actions.push(GameAction::NewGame);
            }

            GamePhase::AwaitingDraft => {
                if player != self.current_player {
                    return actions;
                }

                for (idx, store) in self.stores.iter().enumerate() {
                    for tile in Tile::ALL {
                        if store.tiles.contains(&tile) {
                            actions.push(GameAction::SelectFromStore { store: idx, tile });
                        }
                    }
                }
                for tile in Tile::ALL {
                    if self.pool.tiles.contains(&tile) {
                        actions.push(GameAction::SelectFromPool { tile });
                    }
                }
            }

            GamePhase::AwaitingPlacement => {
                if player != self.current_player {
                    return actions;
                }

                if let Some(&tile) = self
                    .players
                    .get(player as usize)
                    .and_then(|p| p.to_place.first())
                {
                    for row in 0..BOARD_WIDTH {
                        if self.placement_is_legal(player, row, tile) {
                            actions.push(GameAction::PlaceInRow { row });
                        }
                    }
                    actions.push(GameAction::DiscardHeld);
                }
            }
        }

        actions
    }

    /// Whether the held glaze may go into the given staging row
    fn placement_is_legal(&self, player: PlayerId, row: usize, tile: Tile) -> bool {
        let p = &self.players[player as usize];
        let col = wall_column(row, tile);
        p.wall.get(col, row).is_none() && p.staging.accepts(row, tile)
    }

    /// Apply an action to the game state.
    ///
    /// On error the model is unchanged; validation happens before any
    /// mutation. Returns the events the action produced.
    pub fn apply_action(
        &mut self,
        player: PlayerId,
        action: GameAction,
    ) -> Result<Vec<GameEvent>, GameError> {
        if let GameAction::NewGame = action {
            return Ok(self.restart());
        }

        if self.is_finished() {
            return Err(GameError::GameOver);
        }
        if player != self.current_player {
            return Err(GameError::NotPlayersTurn);
        }

        let mut events = Vec::new();

        match action {
            GameAction::NewGame => unreachable!("handled above"),

            // ==================== Drafting ====================
            GameAction::SelectFromStore { store, tile } => {
                if self.phase != GamePhase::AwaitingDraft {
                    return Err(GameError::InvalidSelection);
                }
                if store >= NUM_STORES {
                    return Err(GameError::InvalidSelection);
                }

                let (matching, rest) = self.stores[store]
                    .take(tile)
                    .ok_or(GameError::InvalidSelection)?;

                events.push(GameEvent::TilesDrafted {
                    player,
                    source: DraftSource::Store(store),
                    tile,
                    count: matching.len(),
                });

                self.players[player as usize].to_place = matching;
                self.pool.merge(rest);
                self.phase = GamePhase::AwaitingPlacement;
            }

            GameAction::SelectFromPool { tile } => {
                if self.phase != GamePhase::AwaitingDraft {
                    return Err(GameError::InvalidSelection);
                }

                let matching = self.pool.take(tile).ok_or(GameError::InvalidSelection)?;

                events.push(GameEvent::TilesDrafted {
                    player,
                    source: DraftSource::Pool,
                    tile,
                    count: matching.len(),
                });

                // First pool draw of the round claims the token: the
                // claimant starts the next round.
                if self.pool.has_token {
                    self.pool.has_token = false;
                    for p in &mut self.players {
                        p.is_first_player = p.id == player;
                    }
                    events.push(GameEvent::FirstPlayerTokenTaken { player });
                }

                self.players[player as usize].to_place = matching;
                self.phase = GamePhase::AwaitingPlacement;
            }

            // ==================== Placement ====================
            GameAction::PlaceInRow { row } => {
                if self.phase != GamePhase::AwaitingPlacement {
                    return Err(GameError::InvalidPlacement);
                }
                if row >= BOARD_WIDTH {
                    return Err(GameError::InvalidPlacement);
                }

                let Some(&tile) = self.players[player as usize].to_place.first() else {
                    tracing::warn!(player, "placement requested with no held tiles");
                    return Ok(events);
                };
                if !self.placement_is_legal(player, row, tile) {
                    return Err(GameError::InvalidPlacement);
                }

                let held = std::mem::take(&mut self.players[player as usize].to_place);
                let placed = self.players[player as usize].staging.add(row, tile, held.len());
                for &overflow in &held[placed..] {
                    self.players[player as usize].add_negative(overflow, &mut self.discard);
                }

                events.push(GameEvent::TilesPlaced {
                    player,
                    row,
                    placed,
                    overflowed: held.len() - placed,
                });

                self.finish_turn(&mut events);
            }

            GameAction::DiscardHeld => {
                if self.phase != GamePhase::AwaitingPlacement {
                    return Err(GameError::InvalidPlacement);
                }

                let held = std::mem::take(&mut self.players[player as usize].to_place);
                if held.is_empty() {
                    tracing::warn!(player, "discard requested with no held tiles");
                    return Ok(events);
                }
                let count = held.len();
                for &tile in &held {
                    self.players[player as usize].add_negative(tile, &mut self.discard);
                }

                events.push(GameEvent::HeldDiscarded { player, count });

                self.finish_turn(&mut events);
            }
        }

        debug_assert_eq!(self.total_tile_count(), TILE_SUPPLY);
        Ok(events)
    }

    /// Tear down and rebuild from a fresh seed drawn off the old stream.
    fn restart(&mut self) -> Vec<GameEvent> {
        let seed = self.rng.derive_seed();
        let names = [
            self.players[0].name.clone(),
            self.players[1].name.clone(),
        ];
        *self = GameState::new(seed, names);

        vec![GameEvent::GameStarted {
            seed,
            first_player: self.current_player,
        }]
    }

    /// After a placement resolves: end the round if the supply is drained,
    /// otherwise alternate the turn.
    fn finish_turn(&mut self, events: &mut Vec<GameEvent>) {
        if round_is_drained(&self.stores, &self.pool) {
            self.resolve_round(events);
        } else {
            let next = (self.current_player + 1) % NUM_PLAYERS as PlayerId;
            events.push(GameEvent::TurnPassed {
                player: self.current_player,
                next_player: next,
            });
            self.current_player = next;
            self.phase = GamePhase::AwaitingDraft;
        }
    }

    /// Round resolution: wall tiling, scoring, penalties, and either the
    /// next round's setup or the terminal state.
    fn resolve_round(&mut self, events: &mut Vec<GameEvent>) {
        for idx in 0..self.players.len() {
            // Completed staging rows tile the wall; leftovers are discarded.
            for row in 0..BOARD_WIDTH {
                if !self.players[idx].staging.is_full(row) {
                    continue;
                }
                let Some((tile, count)) = self.players[idx].staging.clear(row) else {
                    continue;
                };
                let col = wall_column(row, tile);

                if !self.players[idx].wall.set(col, row, tile) {
                    // Placement validation makes this unreachable.
                    tracing::warn!(player = idx, row, col, "wall cell already occupied");
                    self.discard
                        .extend(std::iter::repeat(tile).take(count as usize));
                    continue;
                }

                let points = self.players[idx].wall.placement_score(col, row);
                self.players[idx].score += points;
                self.discard
                    .extend(std::iter::repeat(tile).take(count as usize - 1));

                events.push(GameEvent::WallTilePlaced {
                    player: idx as PlayerId,
                    row,
                    col,
                    tile,
                    points,
                });
            }

            // Penalty row: deduct, floor the score at zero, discard tiles.
            let penalty = self.players[idx].penalty();
            if penalty != 0 {
                self.players[idx].score += penalty;
                events.push(GameEvent::PenaltyApplied {
                    player: idx as PlayerId,
                    penalty,
                });
            }
            self.players[idx].score = self.players[idx].score.max(0);
            let mut negatives = std::mem::take(&mut self.players[idx].negatives);
            self.discard.append(&mut negatives);
        }

        let game_over = self.players.iter().any(|p| p.wall.complete_rows() > 0);
        if game_over {
            self.apply_final_bonuses();
            let winner = self.compute_winner();
            self.phase = GamePhase::GameOver { winner };
            events.push(GameEvent::GameEnded {
                winner,
                scores: self.players.iter().map(|p| p.score).collect(),
            });
            return;
        }

        let completed = self.round;
        self.round += 1;
        self.stores = fill_stores(&mut self.bag, &mut self.discard, &mut self.rng);
        self.pool.has_token = true;

        let starter = match self.players.iter().find(|p| p.is_first_player) {
            Some(p) => p.id,
            None => {
                // Setup guarantees exactly one holder; degrade to the
                // current player rather than crash.
                tracing::warn!("no first-player token holder found");
                self.current_player
            }
        };
        self.current_player = starter;
        self.phase = GamePhase::AwaitingDraft;

        events.push(GameEvent::RoundCompleted {
            round: completed,
            next_starter: starter,
        });
    }

    /// End-of-game bonuses for complete rows, columns, and glaze sets.
    fn apply_final_bonuses(&mut self) {
        for p in &mut self.players {
            p.score += p.wall.complete_rows() as i32 * ROW_BONUS;
            p.score += p.wall.complete_cols() as i32 * COL_BONUS;
            for tile in Tile::ALL {
                if p.wall.has_full_set(tile) {
                    p.score += SET_BONUS;
                }
            }
        }
    }

    /// Highest score wins; ties go to more complete rows, then lower id.
    fn compute_winner(&self) -> PlayerId {
        self.players
            .iter()
            .max_by(|a, b| {
                a.score
                    .cmp(&b.score)
                    .then(a.wall.complete_rows().cmp(&b.wall.complete_rows()))
                    .then(b.id.cmp(&a.id))
            })
            .map(|p| p.id)
            .unwrap_or_else(|| {
                tracing::warn!("winner requested with no players");
                0
            })
    }
}

/// Convenience check used by the controller and tests: the round ends only
/// when every store and the pool hold zero tiles.
pub fn round_is_drained(stores: &[Store], pool: &Pool) -> bool {
    stores.iter().all(|s| s.is_empty()) && pool.is_empty_of_tiles()
}
