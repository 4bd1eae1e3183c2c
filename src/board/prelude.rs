//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! # Example
//! ```
//! use chess_board::board::prelude::*;
//!
//! let board = Board::new();
//! assert!(is_legal(&board, Square(6, 0), Square(4, 0)));
//! ```

pub use super::{
    is_legal, Board, BoardBuilder, Color, IllegalMove, LayoutError, Move, MoveParseError,
    MoveValidator, PawnStepRule, Piece, Square, SquareError,
};
