use alloc::vec::Vec;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    InProgress,
    Won,
    Lost,
}

impl Outcome {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for Outcome {
    fn default() -> Self {
        Self::InProgress
    }
}

/// A single game: the frozen layout plus everything the player has uncovered so far.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RevealEngine {
    mine_layout: MineLayout,
    board: Array2<Visibility>,
    hidden_count: CellCount,
    turn: u32,
    outcome: Outcome,
    triggered_mine: Option<Coord2>,
}

impl RevealEngine {
    pub fn new(mine_layout: MineLayout) -> Self {
        let size = mine_layout.size();
        Self {
            hidden_count: mine_layout.total_cells(),
            mine_layout,
            board: Array2::default(size.to_nd_index()),
            turn: 1,
            outcome: Default::default(),
            triggered_mine: None,
        }
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn is_finished(&self) -> bool {
        self.outcome.is_finished()
    }

    /// Starts at 1 and advances once per accepted move that does not end the game.
    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn size(&self) -> Coord2 {
        self.mine_layout.size()
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_layout.mine_count()
    }

    pub fn hidden_count(&self) -> CellCount {
        self.hidden_count
    }

    pub fn cell_at(&self, coords: Coord2) -> Visibility {
        self.board[coords.to_nd_index()]
    }

    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    pub fn view(&self) -> BoardView {
        BoardView::from_engine(self)
    }

    /// Total form of [`Self::reveal`]: rejected moves come back as `MoveResult::Invalid`.
    pub fn resolve_move(&mut self, coords: Coord2) -> MoveResult {
        self.reveal(coords).into()
    }

    pub fn reveal(&mut self, coords: Coord2) -> Result<MoveOutcome> {
        self.check_not_finished()?;
        let coords = self.mine_layout.validate_coords(coords)?;
        if !self.cell_at(coords).is_hidden() {
            return Err(GameError::AlreadyRevealed);
        }

        let value = self.reveal_single_cell(coords);
        match value {
            CellValue::Mine => {
                self.triggered_mine = Some(coords);
                self.end_game(Outcome::Lost);
                return Ok(MoveOutcome::Lost);
            }
            CellValue::Count(0) => self.cascade(coords),
            CellValue::Count(_) => {}
        }

        if self.hidden_count == self.mine_layout.mine_count() {
            self.end_game(Outcome::Won);
            Ok(MoveOutcome::Won)
        } else {
            self.turn += 1;
            Ok(MoveOutcome::Continue)
        }
    }

    fn reveal_single_cell(&mut self, coords: Coord2) -> CellValue {
        let value = self.mine_layout.value_at(coords);
        self.board[coords.to_nd_index()] = Visibility::Revealed(value);
        self.hidden_count -= 1;
        value
    }

    /// Opens the connected zero region around `start`, which must already be revealed as 0,
    /// together with its numbered border.
    fn cascade(&mut self, start: Coord2) {
        let hidden_before = self.hidden_count;
        let mut to_visit = Vec::from([start]);

        while let Some(visit_coords) = to_visit.pop() {
            for pos in self.mine_layout.iter_neighbors(visit_coords) {
                if !self.cell_at(pos).is_hidden() {
                    continue;
                }

                let value = self.reveal_single_cell(pos);
                debug_assert_ne!(value, CellValue::Mine, "zero cell next to a mine");
                if value == CellValue::Count(0) {
                    to_visit.push(pos);
                }
            }
        }

        log::trace!(
            "Cascade from {:?} revealed {} cells",
            start,
            hidden_before - self.hidden_count
        );
    }

    fn end_game(&mut self, outcome: Outcome) {
        if self.outcome.is_finished() {
            return;
        }

        log::debug!("Game ended on turn {}: {:?}", self.turn, outcome);
        self.outcome = outcome;
    }

    fn check_not_finished(&self) -> Result<()> {
        if self.outcome.is_finished() {
            Err(GameError::GameOver)
        } else {
            Ok(())
        }
    }
}
