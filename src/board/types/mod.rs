//! Core board types.
//!
//! - `Piece` and `Color` - piece kinds and sides
//! - `Square` - (row, col) board coordinate
//! - `Move` - a (from, to) square pair

mod moves;
mod piece;
mod square;

pub use moves::Move;
pub use piece::{Color, Piece};
pub use square::Square;
