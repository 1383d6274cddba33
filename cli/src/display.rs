use fogsweep_core::{BoardView, Coord2, GameError};
use std::io::{self, Write};

/// `= = = ...` rule as wide as the board plus its row labels.
pub(crate) fn separator(cols: u8) -> String {
    vec!["="; usize::from(cols) + 1].join(" ")
}

pub(crate) fn write_board<W: Write>(out: &mut W, view: &BoardView) -> io::Result<()> {
    let (rows, cols) = view.size;
    let rule = separator(cols);

    writeln!(out, "{rule}")?;
    writeln!(out, "Turn: {}", view.turn)?;
    writeln!(out, "{rule}")?;

    let header: Vec<String> = (0..cols).map(|col| col.to_string()).collect();
    writeln!(out, "  {}", header.join(" "))?;

    for row in 0..rows {
        let glyphs: Vec<String> = view.row_glyphs(row).map(String::from).collect();
        writeln!(out, "{row} {}", glyphs.join(" "))?;
    }
    Ok(())
}

/// Player-facing explanation for a rejected move.
pub(crate) fn describe_error(err: GameError, (rows, cols): Coord2) -> String {
    match err {
        GameError::OutOfBounds => format!(
            "Invalid input, please provide the row between 0-{} and the col between 0-{}",
            rows.saturating_sub(1),
            cols.saturating_sub(1)
        ),
        GameError::AlreadyRevealed => "This cell has already been selected".to_string(),
        other => other.to_string(),
    }
}
