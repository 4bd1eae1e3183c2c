use std::fmt;

use crate::board::{Board, LayoutError, Move, MoveParseError, Square, SquareError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Click(Square),
    Move(Move),
    Board,
    Layout,
    Load(Board),
    Reset,
    Help,
    Quit,
}

/// Error type for command line parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// First word is not a known command
    Unknown(String),
    /// A required argument is missing
    MissingArgument { command: &'static str },
    InvalidSquare(SquareError),
    InvalidMove(MoveParseError),
    InvalidLayout(LayoutError),
    /// Unrecognised program flag
    UnknownFlag(String),
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::Unknown(text) => write!(f, "Unknown command '{text}'"),
            CommandError::MissingArgument { command } => {
                write!(f, "Missing argument for '{command}'")
            }
            CommandError::InvalidSquare(e) => write!(f, "{e}"),
            CommandError::InvalidMove(e) => write!(f, "{e}"),
            CommandError::InvalidLayout(e) => write!(f, "{e}"),
            CommandError::UnknownFlag(flag) => write!(f, "Unknown flag '{flag}'"),
        }
    }
}

impl std::error::Error for CommandError {}

impl From<SquareError> for CommandError {
    fn from(e: SquareError) -> Self {
        CommandError::InvalidSquare(e)
    }
}

impl From<MoveParseError> for CommandError {
    fn from(e: MoveParseError) -> Self {
        CommandError::InvalidMove(e)
    }
}

impl From<LayoutError> for CommandError {
    fn from(e: LayoutError) -> Self {
        CommandError::InvalidLayout(e)
    }
}

/// Parse one input line. Blank lines yield `Ok(None)`.
pub fn parse_command(line: &str) -> Result<Option<Command>, CommandError> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let Some(&head) = parts.first() else {
        return Ok(None);
    };
    let arg = |i: usize, command: &'static str| {
        parts
            .get(i)
            .copied()
            .ok_or(CommandError::MissingArgument { command })
    };

    let cmd = match head {
        "board" => Command::Board,
        "layout" => Command::Layout,
        "reset" => Command::Reset,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        "load" => Command::Load(Board::try_from_layout(arg(1, "load")?)?),
        "move" => {
            let from: Square = arg(1, "move")?.parse()?;
            match parts.get(2) {
                Some(to) => Command::Move(Move::new(from, to.parse()?)),
                None => return Err(CommandError::MissingArgument { command: "move" }),
            }
        }
        token if token.len() == 2 => Command::Click(token.parse()?),
        token if token.len() == 4 => Command::Move(token.parse()?),
        _ => return Err(CommandError::Unknown(line.trim().to_string())),
    };

    Ok(Some(cmd))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_line() {
        assert_eq!(parse_command("   "), Ok(None));
    }

    #[test]
    fn test_click() {
        assert_eq!(parse_command("e2"), Ok(Some(Command::Click(Square(6, 4)))));
        assert!(matches!(
            parse_command("z9"),
            Err(CommandError::InvalidSquare(_))
        ));
    }

    #[test]
    fn test_moves() {
        let expected = Command::Move(Move::new(Square(6, 4), Square(4, 4)));
        assert_eq!(parse_command("e2e4"), Ok(Some(expected.clone())));
        assert_eq!(parse_command("move e2 e4"), Ok(Some(expected)));
        assert_eq!(
            parse_command("move e2"),
            Err(CommandError::MissingArgument { command: "move" })
        );
    }

    #[test]
    fn test_keywords() {
        assert_eq!(parse_command("board"), Ok(Some(Command::Board)));
        assert_eq!(parse_command("reset"), Ok(Some(Command::Reset)));
        assert_eq!(parse_command("quit"), Ok(Some(Command::Quit)));
        assert_eq!(parse_command("?"), Ok(Some(Command::Help)));
    }

    #[test]
    fn test_load() {
        let cmd = parse_command("load 8/8/8/8/8/8/8/R6K").unwrap();
        match cmd {
            Some(Command::Load(board)) => assert_eq!(board.piece_count(), 2),
            other => panic!("unexpected {other:?}"),
        }
        assert!(matches!(
            parse_command("load 8/8"),
            Err(CommandError::InvalidLayout(LayoutError::WrongRowCount { found: 2 }))
        ));
        assert_eq!(
            parse_command("load"),
            Err(CommandError::MissingArgument { command: "load" })
        );
    }

    #[test]
    fn test_unknown() {
        assert_eq!(
            parse_command("castle now"),
            Err(CommandError::Unknown("castle now".to_string()))
        );
    }
}
