//! Text piece-placement notation.
//!
//! The placement field of FEN: eight `/`-separated rows, top row first,
//! uppercase for White, lowercase for Black, digits for runs of empty squares.

use std::fmt::Write as _;
use std::str::FromStr;

use super::error::LayoutError;
use super::{Board, Color, Piece, Square};

/// Layout string of the standard initial position.
pub const START_LAYOUT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

impl Board {
    /// Parse a board from layout notation.
    pub fn try_from_layout(layout: &str) -> Result<Self, LayoutError> {
        let rows: Vec<&str> = layout.trim().split('/').collect();
        if rows.len() != 8 {
            return Err(LayoutError::WrongRowCount { found: rows.len() });
        }

        let mut board = Board::empty();
        for (row, row_str) in rows.iter().enumerate() {
            let mut col = 0;
            for c in row_str.chars() {
                if let Some(run) = c.to_digit(10) {
                    col += run as usize;
                } else {
                    let piece = Piece::from_char(c).ok_or(LayoutError::InvalidPiece { char: c })?;
                    let color = if c.is_ascii_uppercase() {
                        Color::White
                    } else {
                        Color::Black
                    };
                    if col >= 8 {
                        return Err(LayoutError::TooManyCols { row, cols: col + 1 });
                    }
                    board.set_piece(Square(row, col), color, piece);
                    col += 1;
                }
                if col > 8 {
                    return Err(LayoutError::TooManyCols { row, cols: col });
                }
            }
            if col < 8 {
                return Err(LayoutError::TooFewCols { row, cols: col });
            }
        }
        Ok(board)
    }

    /// Canonical layout notation for this board.
    #[must_use]
    pub fn to_layout(&self) -> String {
        let mut out = String::with_capacity(64);
        for row in 0..8 {
            if row > 0 {
                out.push('/');
            }
            let mut run = 0;
            for col in 0..8 {
                match self.piece_at(Square(row, col)) {
                    Some((color, piece)) => {
                        if run > 0 {
                            let _ = write!(out, "{run}");
                            run = 0;
                        }
                        out.push(piece.to_layout_char(color));
                    }
                    None => run += 1,
                }
            }
            if run > 0 {
                let _ = write!(out, "{run}");
            }
        }
        out
    }
}

impl FromStr for Board {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::try_from_layout(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_layout_matches_new() {
        assert_eq!(Board::try_from_layout(START_LAYOUT), Ok(Board::new()));
        assert_eq!(Board::new().to_layout(), START_LAYOUT);
    }

    #[test]
    fn test_sparse_layout() {
        let board: Board = "8/8/8/3q4/8/8/8/R6K".parse().unwrap();
        assert_eq!(board.piece_count(), 3);
        assert_eq!(board.piece_at(Square(3, 3)), Some((Color::Black, Piece::Queen)));
        assert_eq!(board.piece_at(Square(7, 0)), Some((Color::White, Piece::Rook)));
        assert_eq!(board.piece_at(Square(7, 7)), Some((Color::White, Piece::King)));
        assert_eq!(board.to_layout(), "8/8/8/3q4/8/8/8/R6K");
    }

    #[test]
    fn test_wrong_row_count() {
        assert_eq!(
            Board::try_from_layout("8/8/8"),
            Err(LayoutError::WrongRowCount { found: 3 })
        );
    }

    #[test]
    fn test_invalid_piece() {
        assert_eq!(
            Board::try_from_layout("8/8/8/8/8/8/8/7x"),
            Err(LayoutError::InvalidPiece { char: 'x' })
        );
    }

    #[test]
    fn test_row_overflow() {
        assert_eq!(
            Board::try_from_layout("8/8/8/8/8/8/8/8R"),
            Err(LayoutError::TooManyCols { row: 7, cols: 9 })
        );
        assert_eq!(
            Board::try_from_layout("8/8/8/8/8/8/8/R8"),
            Err(LayoutError::TooManyCols { row: 7, cols: 9 })
        );
    }

    #[test]
    fn test_row_underfill() {
        assert_eq!(
            Board::try_from_layout("8/8/8/8/8/8/8/7"),
            Err(LayoutError::TooFewCols { row: 7, cols: 7 })
        );
    }
}
