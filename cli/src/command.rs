use sweeper_core::{Command, Coord, Coord2};
use thiserror::Error;

/// One line of player input.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Input {
    Move(Command),
    Help,
    Exit,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Expected \"ROW COLUMN free\" or \"ROW COLUMN mine\"")]
    Malformed,
    #[error("\"{0}\" is not a row or column number")]
    NotANumber(String),
    #[error("Unknown operation \"{0}\", use \"free\" or \"mine\"")]
    UnknownAction(String),
    #[error("The field does not have cell {0} {1}, try again")]
    OutOfRange(u32, u32),
}

/// Parses `ROW COLUMN ACTION` with 1-based coordinates, or one of the `\help` and `\exit`
/// keywords, into a command for a board of the given size.
pub fn parse_input(line: &str, size: Coord2) -> Result<Input, ParseError> {
    let line = line.trim();
    match line {
        "\\help" => return Ok(Input::Help),
        "\\exit" => return Ok(Input::Exit),
        _ => {}
    }

    let mut tokens = line.split_whitespace();
    let (Some(row), Some(col), Some(action), None) =
        (tokens.next(), tokens.next(), tokens.next(), tokens.next())
    else {
        return Err(ParseError::Malformed);
    };

    let row = parse_number(row)?;
    let col = parse_number(col)?;
    let coords = match (to_index(row, size.0), to_index(col, size.1)) {
        (Some(row), Some(col)) => (row, col),
        _ => return Err(ParseError::OutOfRange(row, col)),
    };

    let command = match action {
        "free" => Command::reveal(coords),
        "mine" => Command::mark(coords),
        other => return Err(ParseError::UnknownAction(other.to_owned())),
    };
    Ok(Input::Move(command))
}

fn parse_number(token: &str) -> Result<u32, ParseError> {
    token
        .parse()
        .map_err(|_| ParseError::NotANumber(token.to_owned()))
}

/// Converts a 1-based position into a 0-based index below `len`.
fn to_index(position: u32, len: Coord) -> Option<Coord> {
    let index = Coord::try_from(position.checked_sub(1)?).ok()?;
    (index < len).then_some(index)
}
