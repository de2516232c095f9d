//! The 5x5 scoring wall and the triangular staging area.
//!
//! This module contains:
//! - The flat-index addressing scheme for the wall grid
//! - The diagonal destination-column rule for wall tiling
//! - Adjacency scoring for placed tiles
//! - Staging rows of increasing capacity (1..=5)

use crate::tile::Tile;
use serde::{Deserialize, Serialize};

/// Wall side length; the grid is always 5x5
pub const BOARD_WIDTH: usize = 5;

/// Number of cells on the wall
pub const BOARD_CELLS: usize = BOARD_WIDTH * BOARD_WIDTH;

/// Map a (column, row) pair to a flat cell index.
pub fn point_to_index(width: usize, col: usize, row: usize) -> usize {
    row * width + col
}

/// Map a flat cell index back to its (column, row) pair.
///
/// Pure bijection with [`point_to_index`] for any in-range input.
pub fn index_to_point(width: usize, index: usize) -> (usize, usize) {
    (index % width, index / width)
}

/// Destination column for a glaze placed in a given wall row.
///
/// The wall follows the diagonal azulejo pattern: each row shifts the
/// glaze sequence one column right, so `col = (row + offset) mod 5` and
/// every row and every column holds each glaze exactly once.
pub fn wall_column(row: usize, tile: Tile) -> usize {
    (row + tile.offset()) % BOARD_WIDTH
}

/// A player's scoring wall: 5x5 grid of cells, each empty or holding a tile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wall {
    cells: [Option<Tile>; BOARD_CELLS],
}

impl Default for Wall {
    fn default() -> Self {
        Wall {
            cells: [None; BOARD_CELLS],
        }
    }
}

impl Wall {
    /// Create an empty wall
    pub fn new() -> Self {
        Self::default()
    }

    /// Cell at (column, row)
    pub fn get(&self, col: usize, row: usize) -> Option<Tile> {
        self.cells[point_to_index(BOARD_WIDTH, col, row)]
    }

    /// Place a tile at (column, row). Returns false if the cell was occupied.
    pub fn set(&mut self, col: usize, row: usize, tile: Tile) -> bool {
        let cell = &mut self.cells[point_to_index(BOARD_WIDTH, col, row)];
        if cell.is_some() {
            return false;
        }
        *cell = Some(tile);
        true
    }

    /// Number of tiles on the wall
    pub fn tile_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Whether a horizontal row is completely tiled
    pub fn is_row_complete(&self, row: usize) -> bool {
        (0..BOARD_WIDTH).all(|col| self.get(col, row).is_some())
    }

    /// Whether a vertical column is completely tiled
    pub fn is_col_complete(&self, col: usize) -> bool {
        (0..BOARD_WIDTH).all(|row| self.get(col, row).is_some())
    }

    /// Number of completely tiled horizontal rows
    pub fn complete_rows(&self) -> usize {
        (0..BOARD_WIDTH).filter(|&r| self.is_row_complete(r)).count()
    }

    /// Number of completely tiled vertical columns
    pub fn complete_cols(&self) -> usize {
        (0..BOARD_WIDTH).filter(|&c| self.is_col_complete(c)).count()
    }

    /// Whether all five tiles of a glaze are on the wall
    pub fn has_full_set(&self, tile: Tile) -> bool {
        self.cells.iter().filter(|c| **c == Some(tile)).count() == BOARD_WIDTH
    }

    /// Points awarded for the tile at (column, row).
    ///
    /// An isolated tile scores 1. Otherwise the horizontal and vertical
    /// contiguous runs through the cell are summed, each counted only
    /// when longer than the tile itself.
    pub fn placement_score(&self, col: usize, row: usize) -> i32 {
        let mut horiz = 1;
        let mut c = col;
        while c > 0 && self.get(c - 1, row).is_some() {
            c -= 1;
            horiz += 1;
        }
        c = col;
        while c + 1 < BOARD_WIDTH && self.get(c + 1, row).is_some() {
            c += 1;
            horiz += 1;
        }

        let mut vert = 1;
        let mut r = row;
        while r > 0 && self.get(col, r - 1).is_some() {
            r -= 1;
            vert += 1;
        }
        r = row;
        while r + 1 < BOARD_WIDTH && self.get(col, r + 1).is_some() {
            r += 1;
            vert += 1;
        }

        if horiz == 1 && vert == 1 {
            1
        } else {
            let h = if horiz > 1 { horiz } else { 0 };
            let v = if vert > 1 { vert } else { 0 };
            h + v
        }
    }
}

/// One staging row: holds up to `row + 1` tiles of a single glaze.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StagingRow {
    /// Glaze held by the row; `None` iff the row is empty
    pub tile: Option<Tile>,
    /// Tiles currently in the row
    pub count: u8,
}

/// The five staging rows of capacities 1,2,3,4,5.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StagingArea {
    pub rows: [StagingRow; BOARD_WIDTH],
}

impl StagingArea {
    /// Create an empty staging area
    pub fn new() -> Self {
        Self::default()
    }

    /// Capacity of a staging row
    pub fn capacity(row: usize) -> u8 {
        row as u8 + 1
    }

    /// Whether a row can accept tiles of the given glaze.
    ///
    /// A row accepts a glaze when it is empty or already holds that glaze
    /// and still has free capacity. The wall constraint is checked by the
    /// caller, which owns both halves of the player board.
    pub fn accepts(&self, row: usize, tile: Tile) -> bool {
        let line = &self.rows[row];
        if line.count >= Self::capacity(row) {
            return false;
        }
        match line.tile {
            None => true,
            Some(existing) => existing == tile,
        }
    }

    /// Whether a row is at capacity
    pub fn is_full(&self, row: usize) -> bool {
        self.rows[row].count == Self::capacity(row)
    }

    /// Add up to `n` tiles of a glaze to a row; returns how many fit.
    ///
    /// Caller must have checked [`StagingArea::accepts`] first.
    pub fn add(&mut self, row: usize, tile: Tile, n: usize) -> usize {
        debug_assert!(self.accepts(row, tile));
        let line = &mut self.rows[row];
        if line.tile.is_none() {
            line.tile = Some(tile);
        }
        let space = (Self::capacity(row) - line.count) as usize;
        let placed = space.min(n);
        line.count += placed as u8;
        placed
    }

    /// Empty a row, returning its glaze and tile count.
    pub fn clear(&mut self, row: usize) -> Option<(Tile, u8)> {
        let line = &mut self.rows[row];
        let cleared = line.tile.map(|t| (t, line.count));
        line.tile = None;
        line.count = 0;
        cleared
    }

    /// Total tiles across all rows
    pub fn tile_count(&self) -> usize {
        self.rows.iter().map(|r| r.count as usize).sum()
    }

    /// Right-aligned cell view of a row for rendering.
    ///
    /// Row `r` yields `r + 1` cells; occupied cells sit at the right end,
    /// matching the diagonal staging pattern of the physical board.
    pub fn cells(&self, row: usize) -> Vec<Option<Tile>> {
        let cap = Self::capacity(row) as usize;
        let line = &self.rows[row];
        let mut cells = vec![None; cap];
        for cell in cells.iter_mut().skip(cap - line.count as usize) {
            *cell = line.tile;
        }
        cells
    }
}
