//! Error types for board operations.

use std::fmt;

use super::{Piece, Square};

/// Error type for layout string parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// Layout does not have exactly 8 rows
    WrongRowCount { found: usize },
    /// Invalid piece character in a row
    InvalidPiece { char: char },
    /// Too many columns in a row
    TooManyCols { row: usize, cols: usize },
    /// Row describes fewer than 8 columns
    TooFewCols { row: usize, cols: usize },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::WrongRowCount { found } => {
                write!(f, "Layout must have 8 rows, found {found}")
            }
            LayoutError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in layout")
            }
            LayoutError::TooManyCols { row, cols } => {
                write!(f, "Too many columns ({cols}) in row {row}")
            }
            LayoutError::TooFewCols { row, cols } => {
                write!(f, "Too few columns ({cols}) in row {row}")
            }
        }
    }
}

impl std::error::Error for LayoutError {}

/// Error type for move parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    /// Move string has invalid length (must be 4 characters)
    InvalidLength { len: usize },
    /// Invalid square notation in move
    InvalidSquare { notation: String },
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::InvalidLength { len } => {
                write!(f, "Move must be 4 characters, found {len}")
            }
            MoveParseError::InvalidSquare { notation } => {
                write!(f, "Invalid square notation in '{notation}'")
            }
        }
    }
}

impl std::error::Error for MoveParseError {}

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Row out of bounds (must be 0-7)
    RowOutOfBounds { row: usize },
    /// Column out of bounds (must be 0-7)
    ColOutOfBounds { col: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RowOutOfBounds { row } => {
                write!(f, "Row {row} out of bounds (must be 0-7)")
            }
            SquareError::ColOutOfBounds { col } => {
                write!(f, "Column {col} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Why a proposed move was refused.
///
/// Variants are reported in the order the checks run: null move, empty
/// source, own capture, then the moving piece's own rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IllegalMove {
    /// Source and destination are the same empty square
    NullMove,
    /// Nothing stands on the source square
    EmptySource(Square),
    /// Destination holds a piece of the mover's own color
    OwnCapture(Square),
    /// The move does not fit the piece's movement pattern
    PieceRule(Piece),
    /// A piece stands between source and destination
    Blocked(Square),
}

impl fmt::Display for IllegalMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IllegalMove::NullMove => write!(f, "Move goes nowhere"),
            IllegalMove::EmptySource(sq) => write!(f, "No piece on {sq}"),
            IllegalMove::OwnCapture(sq) => write!(f, "Cannot capture own piece on {sq}"),
            IllegalMove::PieceRule(piece) => write!(f, "A {piece} cannot move that way"),
            IllegalMove::Blocked(sq) => write!(f, "Path blocked at {sq}"),
        }
    }
}

impl std::error::Error for IllegalMove {}
