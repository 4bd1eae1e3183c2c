//! Line-oriented terminal front end.
//!
//! Each input line is either a click on a square (`e2`), a whole move
//! (`e2e4` or `move e2 e4`), or a keyword command. Output is plain text.

use std::io::{self, BufRead, Write};

use crate::board::{MoveValidator, PawnStepRule, Square};
use crate::session::{ClickOutcome, GameSession};

pub mod command;

pub use command::{parse_command, Command, CommandError};

const HELP: &str = "\
commands:
  <square>          click a square, e.g. e2 (select, then destination)
  <from><to>        move directly, e.g. e2e4
  move <from> <to>  same as above
  board             show the board
  layout            print the board in layout notation
  load <layout>     replace the board, e.g. load 8/8/8/8/8/8/8/R6K
  reset             restore the initial position
  quit              leave";

/// Front end settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    pub pawn_step_rule: PawnStepRule,
    /// List legal destinations when a piece is selected
    pub show_targets: bool,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            pawn_step_rule: PawnStepRule::Standard,
            show_targets: true,
        }
    }
}

impl Options {
    /// Build options from program arguments (without the program name).
    pub fn from_args<I, S>(args: I) -> Result<Self, CommandError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut options = Options::default();
        for arg in args {
            match arg.as_ref() {
                "--legacy-pawns" => options.pawn_step_rule = PawnStepRule::Legacy,
                "--no-targets" => options.show_targets = false,
                other => return Err(CommandError::UnknownFlag(other.to_string())),
            }
        }
        Ok(options)
    }
}

/// Run the command loop until `quit` or end of input.
pub fn run<R: BufRead, W: Write>(input: R, mut output: W, options: Options) -> io::Result<()> {
    let validator = MoveValidator::new().with_pawn_step_rule(options.pawn_step_rule);
    let mut session = GameSession::with_validator(validator);
    write!(output, "{}", session.board())?;

    for line in input.lines() {
        let line = line?;
        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                writeln!(output, "error: {e}")?;
                continue;
            }
        };

        match command {
            Command::Quit => break,
            Command::Help => writeln!(output, "{HELP}")?,
            Command::Board => write!(output, "{}", session.board())?,
            Command::Layout => writeln!(output, "{}", session.board().to_layout())?,
            Command::Reset => {
                session.reset();
                write!(output, "{}", session.board())?;
            }
            Command::Load(board) => {
                session.load(board);
                write!(output, "{}", session.board())?;
            }
            Command::Move(mv) => match session.submit(mv) {
                Ok(_) => write!(output, "{}", session.board())?,
                Err(reason) => writeln!(output, "illegal {mv}: {reason}")?,
            },
            Command::Click(square) => match session.click(square) {
                ClickOutcome::Ignored => writeln!(output, "{square} is empty")?,
                ClickOutcome::Selected { square, targets } => {
                    if options.show_targets {
                        writeln!(output, "selected {square}: {}", join(&targets))?;
                    } else {
                        writeln!(output, "selected {square}")?;
                    }
                }
                ClickOutcome::Moved { .. } => write!(output, "{}", session.board())?,
                ClickOutcome::Rejected { mv, reason } => {
                    writeln!(output, "illegal {mv}: {reason}")?;
                }
            },
        }
    }
    output.flush()
}

fn join(squares: &[Square]) -> String {
    if squares.is_empty() {
        return "no moves".to_string();
    }
    squares
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
