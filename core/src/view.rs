use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

pub const FOG_GLYPH: char = '#';
pub const MINE_GLYPH: char = '*';

impl Visibility {
    pub const fn glyph(self) -> char {
        match self {
            Visibility::Hidden => FOG_GLYPH,
            Visibility::Revealed(CellValue::Mine) => MINE_GLYPH,
            Visibility::Revealed(CellValue::Count(count)) => (b'0' + count) as char,
        }
    }
}

/// Everything a renderer needs to draw the board, detached from the engine.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardView {
    pub size: Coord2,
    pub mine_count: CellCount,
    pub turn: u32,
    pub outcome: Outcome,
    pub cells: Array2<Visibility>,
}

impl BoardView {
    pub fn new(
        size: Coord2,
        mine_count: CellCount,
        turn: u32,
        outcome: Outcome,
        cells: Array2<Visibility>,
    ) -> Result<Self> {
        let view = Self {
            size,
            mine_count,
            turn,
            outcome,
            cells,
        };
        view.validate()?;
        Ok(view)
    }

    pub fn from_engine(engine: &RevealEngine) -> Self {
        let size = engine.size();
        let mut cells: Array2<Visibility> = Array2::default(size.to_nd_index());

        let (rows, cols) = size;
        for row in 0..rows {
            for col in 0..cols {
                cells[(row, col).to_nd_index()] = engine.cell_at((row, col));
            }
        }

        Self {
            size,
            mine_count: engine.mine_count(),
            turn: engine.turn(),
            outcome: engine.outcome(),
            cells,
        }
    }

    pub fn validate(&self) -> Result<()> {
        let expected = (self.size.0 as usize, self.size.1 as usize);
        if self.cells.dim() != expected {
            return Err(GameError::InvalidDimensions);
        }

        GameConfig::new_unchecked(self.size, self.mine_count).validate()
    }

    pub fn glyph_at(&self, coords: Coord2) -> char {
        self.cells[coords.to_nd_index()].glyph()
    }

    /// Glyphs of one row, left to right.
    pub fn row_glyphs(&self, row: Coord) -> impl Iterator<Item = char> + '_ {
        self.cells.row(row.into()).into_iter().map(|cell| cell.glyph())
    }

    pub fn hidden_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_hidden()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::String;

    #[test]
    fn glyphs_cover_fog_mines_and_digits() {
        assert_eq!(Visibility::Hidden.glyph(), '#');
        assert_eq!(Visibility::Revealed(CellValue::Mine).glyph(), '*');
        assert_eq!(Visibility::Revealed(CellValue::Count(0)).glyph(), '0');
        assert_eq!(Visibility::Revealed(CellValue::Count(8)).glyph(), '8');
    }

    #[test]
    fn view_tracks_engine_progress() {
        let layout = MineLayout::from_mine_coords((3, 4), &[(0, 3), (2, 3)]).unwrap();
        let mut engine = RevealEngine::new(layout);
        engine.resolve_move((0, 0));

        let view = engine.view();

        assert_eq!(view.size, (3, 4));
        assert_eq!(view.mine_count, 2);
        assert_eq!(view.turn, 2);
        assert_eq!(view.outcome, Outcome::InProgress);
        assert_eq!(view.row_glyphs(0).collect::<String>(), "001#");
        assert_eq!(view.row_glyphs(1).collect::<String>(), "002#");
        assert_eq!(view.row_glyphs(2).collect::<String>(), "001#");
        assert_eq!(view.hidden_count(), 3);
    }

    #[test]
    fn lost_view_shows_the_triggered_mine_only() {
        let layout = MineLayout::from_mine_coords((2, 2), &[(0, 0), (1, 1)]).unwrap();
        let mut engine = RevealEngine::new(layout);
        engine.resolve_move((1, 1));

        let view = engine.view();

        assert_eq!(view.outcome, Outcome::Lost);
        assert_eq!(view.glyph_at((1, 1)), '*');
        assert_eq!(view.glyph_at((0, 0)), '#');
    }

    #[test]
    fn new_rejects_mismatched_cells() {
        let cells: Array2<Visibility> = Array2::default([2, 2]);

        assert_eq!(
            BoardView::new((3, 3), 1, 1, Outcome::InProgress, cells.clone()),
            Err(GameError::InvalidDimensions)
        );
        assert_eq!(
            BoardView::new((2, 2), 4, 1, Outcome::InProgress, cells.clone()),
            Err(GameError::TooManyMines)
        );
        assert!(BoardView::new((2, 2), 1, 1, Outcome::InProgress, cells).is_ok());
    }
}
