//! A two-player chess board with simplified move legality checks.
//!
//! The [`board`] module holds the board, its types and the stateless
//! [`MoveValidator`]. [`session::GameSession`] drives the two-click move
//! entry on top of it, and [`cli`] is a terminal front end for the session.

#[doc(hidden)]
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {{
        #[cfg(feature = "logging")]
        ::log::debug!($($arg)*);
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! log_trace {
    ($($arg:tt)*) => {{
        #[cfg(feature = "logging")]
        ::log::trace!($($arg)*);
    }};
}

pub mod board;
pub mod cli;
pub mod session;

pub use board::{is_legal, Board, Color, IllegalMove, Move, MoveValidator, PawnStepRule, Piece, Square};
pub use session::{ClickOutcome, GameSession};
