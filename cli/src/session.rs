use std::io::{BufRead, Write};

use anyhow::Result;
use sweeper_core::*;

use crate::command::{Input, parse_input};
use crate::render::render;

const INSTRUCTIONS: &str = "\
**********
INSTRUCTIONS:
If you think a cell is safe, use \"free\" to explore it.
If you think a cell is a mine, use \"mine\" to mark it; marking a marked cell again removes the mark.
Enter the ROW number first, then the COLUMN number.
Valid moves look like \"3 4 free\" or \"3 4 mine\".
Type \"\\help\" to see this again, type \"\\exit\" to leave the game.";

/// Terminal front end: asks for the board setup, then feeds player commands to a [`Game`].
#[derive(Debug)]
pub struct Session<R, W> {
    input: R,
    output: W,
    json: bool,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, json: bool) -> Self {
        Self {
            input,
            output,
            json,
        }
    }

    /// Completes a configuration from whatever was given up front, asking for the rest.
    /// Values given up front that the board rejects are reported and asked for again.
    pub fn ask_config(
        &mut self,
        size: Option<Coord2>,
        mines: Option<CellCount>,
    ) -> Result<Option<GameConfig>> {
        let size = match size {
            Some((height, width)) if height > 0 && width > 0 => (height, width),
            given => {
                if given.is_some() {
                    writeln!(self.output, "The height and width should be bigger than 0!")?;
                }
                match self.ask_size()? {
                    Some(size) => size,
                    None => return Ok(None),
                }
            }
        };

        if let Some(mines) = mines {
            match GameConfig::new(size.0, size.1, mines) {
                Ok(config) => return Ok(Some(config)),
                Err(err) => writeln!(self.output, "{err}")?,
            }
        }
        self.ask_mines(size)
    }

    /// Asks for the board size until it gets two positive numbers. `None` when input runs out.
    pub fn ask_size(&mut self) -> Result<Option<Coord2>> {
        loop {
            writeln!(self.output, "How big should the field be? height width:")?;
            writeln!(self.output, "(two positive integers separated by a space)")?;
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };

            let numbers: Vec<_> = line.split_whitespace().map(str::parse::<Coord>).collect();
            match numbers.as_slice() {
                [Ok(0), Ok(_)] | [Ok(_), Ok(0)] => {
                    writeln!(self.output, "The height and width should be bigger than 0!")?;
                }
                [Ok(height), Ok(width)] => return Ok(Some((*height, *width))),
                _ => writeln!(self.output, "Invalid input, please try again")?,
            }
        }
    }

    /// Asks for the mine count until it fits the board. `None` when input runs out.
    pub fn ask_mines(&mut self, (height, width): Coord2) -> Result<Option<GameConfig>> {
        loop {
            writeln!(self.output, "How many mines do you want on the field?")?;
            writeln!(self.output, "(a positive integer)")?;
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };

            let Ok(mines) = line.trim().parse::<CellCount>() else {
                writeln!(self.output, "Invalid input, please try again")?;
                continue;
            };
            match GameConfig::new(height, width, mines) {
                Ok(config) => return Ok(Some(config)),
                Err(err) => writeln!(self.output, "{err}")?,
            }
        }
    }

    /// Runs the command loop until the game ends, the player exits, or input runs out.
    pub fn play(&mut self, game: &mut Game) -> Result<GameState> {
        writeln!(self.output, "{INSTRUCTIONS}")?;
        self.show(game)?;

        while !game.is_finished() {
            writeln!(self.output, "Set/unset mine marks or claim a cell as free:")?;
            let Some(line) = self.read_line()? else {
                break;
            };

            let command = match parse_input(&line, game.size()) {
                Ok(Input::Move(command)) => command,
                Ok(Input::Help) => {
                    writeln!(self.output, "{INSTRUCTIONS}")?;
                    continue;
                }
                Ok(Input::Exit) => break,
                Err(err) => {
                    writeln!(self.output, "{err}")?;
                    continue;
                }
            };

            match game.apply(command) {
                Ok(state) => {
                    log::debug!("{:?} -> {:?}", command, state);
                    self.show(game)?;
                }
                Err(GameError::InvalidMove(err)) => {
                    log::debug!("Rejected {:?}: {}", command, err);
                    writeln!(self.output, "{}", move_error_message(err))?;
                }
                Err(err) => return Err(err.into()),
            }
        }

        match game.state() {
            GameState::Won => writeln!(self.output, "Congratulations! You found all the mines!")?,
            GameState::Lost => writeln!(self.output, "You stepped on a mine, you lose!")?,
            GameState::InProgress => writeln!(self.output, "Bye!")?,
        }
        self.output.flush()?;
        Ok(game.state())
    }

    fn show(&mut self, game: &Game) -> Result<()> {
        let snapshot = game.snapshot();
        if self.json {
            serde_json::to_writer(&mut self.output, &snapshot)?;
            writeln!(self.output)?;
        } else {
            write!(self.output, "{}", render(&snapshot))?;
            writeln!(self.output, "Mines left: {}", snapshot.mines_left)?;
        }
        Ok(())
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

fn move_error_message(err: MoveError) -> String {
    match err {
        MoveError::AlreadyExplored(_) => "Cannot free or mark an explored cell!".to_owned(),
        MoveError::Marked(_) => "Cannot free a marked cell, unmark it first!".to_owned(),
        other => other.to_string(),
    }
}
