#![no_std]

extern crate alloc;

use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use engine::*;
pub use error::*;
pub use generator::*;
pub use input::*;
pub use tile::*;
pub use types::*;
pub use view::*;

mod engine;
mod error;
mod generator;
mod input;
mod tile;
mod types;
mod view;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Grid size as `(rows, cols)`.
    pub size: Coord2,
    pub mines: CellCount,
}

impl GameConfig {
    /// The classic beginner board every game is played on.
    pub const REFERENCE: Self = Self::new_unchecked((8, 8), 10);

    pub const fn new_unchecked(size: Coord2, mines: CellCount) -> Self {
        Self { size, mines }
    }

    pub fn new(size: Coord2, mines: CellCount) -> Result<Self> {
        let config = Self::new_unchecked(size, mines);
        config.validate()?;
        Ok(config)
    }

    pub const fn rows(&self) -> Coord {
        self.size.0
    }

    pub const fn cols(&self) -> Coord {
        self.size.1
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }

    /// At least one row and column, and at least one safe cell.
    pub fn validate(&self) -> Result<()> {
        if self.size.0 == 0 || self.size.1 == 0 {
            return Err(GameError::InvalidDimensions);
        }
        if self.mines >= self.total_cells() {
            return Err(GameError::TooManyMines);
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::REFERENCE
    }
}

/// Frozen mine placement together with the adjacency count of every cell.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MineLayout {
    mine_mask: Array2<bool>,
    adjacency: Array2<u8>,
    mine_count: CellCount,
}

impl MineLayout {
    pub fn from_mine_mask(mine_mask: Array2<bool>) -> Result<Self> {
        let (rows, cols) = mine_mask.dim();
        let size = (
            Coord::try_from(rows).map_err(|_| GameError::InvalidDimensions)?,
            Coord::try_from(cols).map_err(|_| GameError::InvalidDimensions)?,
        );
        let mine_count = mine_mask.iter().filter(|&&is_mine| is_mine).count();
        let mine_count = CellCount::try_from(mine_count).map_err(|_| GameError::TooManyMines)?;
        GameConfig::new_unchecked(size, mine_count).validate()?;

        let mut adjacency: Array2<u8> = Array2::default(size.to_nd_index());
        for ((row, col), _) in mine_mask.indexed_iter().filter(|&(_, &is_mine)| is_mine) {
            let mine = (row as Coord, col as Coord);
            for pos in mine_mask.iter_neighbors(mine) {
                if !mine_mask[pos.to_nd_index()] {
                    adjacency[pos.to_nd_index()] += 1;
                }
            }
        }

        Ok(Self {
            mine_mask,
            adjacency,
            mine_count,
        })
    }

    /// Builds a layout with mines exactly at `mine_coords`. Duplicates collapse into one mine.
    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        if size.0 == 0 || size.1 == 0 {
            return Err(GameError::InvalidDimensions);
        }

        let mut mine_mask: Array2<bool> = Array2::default(size.to_nd_index());
        for &coords in mine_coords {
            if coords.0 >= size.0 || coords.1 >= size.1 {
                return Err(GameError::OutOfBounds);
            }
            mine_mask[coords.to_nd_index()] = true;
        }

        Self::from_mine_mask(mine_mask)
    }

    pub fn game_config(&self) -> GameConfig {
        GameConfig::new_unchecked(self.size(), self.mine_count)
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let (rows, cols) = self.size();
        if coords.0 < rows && coords.1 < cols {
            Ok(coords)
        } else {
            Err(GameError::OutOfBounds)
        }
    }

    pub fn size(&self) -> Coord2 {
        grid_size(&self.mine_mask)
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }

    pub fn total_cells(&self) -> CellCount {
        let (rows, cols) = self.size();
        mult(rows, cols)
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self[coords]
    }

    /// Mine neighbors of `coords`. Meaningless for a mine cell, which reads as 0.
    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        self.adjacency[coords.to_nd_index()]
    }

    /// What revealing `coords` uncovers.
    pub fn value_at(&self, coords: Coord2) -> CellValue {
        if self[coords] {
            CellValue::Mine
        } else {
            CellValue::Count(self.adjacent_mine_count(coords))
        }
    }

    pub fn iter_mines(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.mine_mask
            .indexed_iter()
            .filter(|&(_, &is_mine)| is_mine)
            .map(|((row, col), _)| (row as Coord, col as Coord))
    }

    pub fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        self.mine_mask.iter_neighbors(coords)
    }
}

impl Index<Coord2> for MineLayout {
    type Output = bool;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.mine_mask[coords.to_nd_index()]
    }
}

/// Accepted move, as returned by [`RevealEngine::reveal`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    Continue,
    Won,
    Lost,
}

impl MoveOutcome {
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Result of resolving one player move. Rejected moves carry the reason and leave the game untouched.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveResult {
    Invalid(GameError),
    Continue,
    Won,
    Lost,
}

impl MoveResult {
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl From<Result<MoveOutcome>> for MoveResult {
    fn from(result: Result<MoveOutcome>) -> Self {
        match result {
            Ok(MoveOutcome::Continue) => Self::Continue,
            Ok(MoveOutcome::Won) => Self::Won,
            Ok(MoveOutcome::Lost) => Self::Lost,
            Err(err) => Self::Invalid(err),
        }
    }
}
