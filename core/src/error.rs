use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameError {
    #[error("Coordinates are outside the board")]
    OutOfBounds,
    #[error("Cell has already been revealed")]
    AlreadyRevealed,
    #[error("Game already ended, no new moves are accepted")]
    GameOver,
    #[error("Too many mines, at least one cell must stay safe")]
    TooManyMines,
    #[error("Board needs at least one row and one column")]
    InvalidDimensions,
}

pub type Result<T> = core::result::Result<T, GameError>;
