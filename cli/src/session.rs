use crate::display::{describe_error, separator, write_board};
use anyhow::{Context, Result};
use fogsweep_core::{MoveResult, Outcome, RevealEngine, parse_coords};
use std::io::{BufRead, Write};

/// One game played over a line-based text stream.
pub(crate) struct Session<R, W> {
    engine: RevealEngine,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub(crate) fn new(engine: RevealEngine, input: R, output: W) -> Self {
        Self {
            engine,
            input,
            output,
        }
    }

    /// Prompts for moves until the game ends or input runs out.
    pub(crate) fn run(mut self) -> Result<Outcome> {
        let rule = separator(self.engine.size().1);
        self.show_board()?;

        loop {
            writeln!(self.output, "{rule}")?;
            let Some(row) = self.prompt("row")? else {
                break;
            };
            let Some(col) = self.prompt("col")? else {
                break;
            };

            let result = match parse_coords(&row, &col) {
                Ok(coords) => self.engine.resolve_move(coords),
                Err(err) => MoveResult::Invalid(err),
            };
            log::debug!("Move ({}, {}): {:?}", row.trim(), col.trim(), result);

            self.show_board()?;
            match result {
                MoveResult::Continue => {}
                MoveResult::Invalid(err) => {
                    let message = describe_error(err, self.engine.size());
                    writeln!(self.output, "{rule}")?;
                    writeln!(self.output, "(!) {message}")?;
                }
                MoveResult::Won => {
                    writeln!(self.output, "{rule}")?;
                    writeln!(self.output, "You win!")?;
                    break;
                }
                MoveResult::Lost => {
                    writeln!(self.output, "{rule}")?;
                    writeln!(self.output, "You lost...")?;
                    break;
                }
            }
        }

        self.output.flush().context("Could not flush output")?;
        Ok(self.engine.outcome())
    }

    fn show_board(&mut self) -> Result<()> {
        write_board(&mut self.output, &self.engine.view()).context("Could not draw board")
    }

    /// `None` once input is exhausted.
    fn prompt(&mut self, axis: &str) -> Result<Option<String>> {
        writeln!(self.output, "Please, type the {axis} to reveal the next cell:")?;
        self.output.flush().context("Could not flush output")?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Could not read move")?;
        if read == 0 {
            log::info!("Input closed before the game ended");
            return Ok(None);
        }
        Ok(Some(line))
    }
}
