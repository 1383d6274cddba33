use crate::*;

/// Parses one typed axis value. Anything that is not a plain non-negative integer
/// that fits a [`Coord`] counts as off the board.
pub fn parse_axis(text: &str) -> Result<Coord> {
    text.trim().parse().map_err(|_| GameError::OutOfBounds)
}

/// Parses the row and column answers of a move prompt.
pub fn parse_coords(row: &str, col: &str) -> Result<Coord2> {
    Ok((parse_axis(row)?, parse_axis(col)?))
}
