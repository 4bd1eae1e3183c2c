//! Board representation and move legality.
//!
//! The board is an 8x8 grid with row 0 at the top (Black's side). Legality
//! checks follow plain movement patterns plus path blocking; see
//! [`MoveValidator`].
//!
//! # Example
//! ```
//! use chess_board::board::{is_legal, Board, Square};
//!
//! let board = Board::new();
//! // Knight b1 to c3
//! assert!(is_legal(&board, Square(7, 1), Square(5, 2)));
//! // Rook a1 is boxed in
//! assert!(!is_legal(&board, Square(7, 0), Square(4, 0)));
//! ```

mod builder;
mod display;
mod error;
mod layout;
mod leapers;
pub mod prelude;
mod state;
mod types;
mod validate;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use error::{IllegalMove, LayoutError, MoveParseError, SquareError};
pub use layout::START_LAYOUT;
pub use state::Board;
pub use types::{Color, Move, Piece, Square};
pub use validate::{is_legal, MoveValidator, PawnStepRule};
