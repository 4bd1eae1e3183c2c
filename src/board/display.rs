//! Glyph rendering of a board.

use std::fmt;

use super::{Board, Square};

impl Board {
    /// Glyph for a square: the piece symbol or `.` when empty.
    #[must_use]
    pub fn glyph_at(&self, sq: Square) -> char {
        self.piece_at(sq)
            .map_or('.', |(color, piece)| piece.glyph(color))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..8 {
            write!(f, "{} ", 8 - row)?;
            for col in 0..8 {
                write!(f, " {}", self.glyph_at(Square(row, col)))?;
            }
            writeln!(f)?;
        }
        write!(f, "  ")?;
        for file in 'a'..='h' {
            write!(f, " {file}")?;
        }
        writeln!(f)
    }
}
