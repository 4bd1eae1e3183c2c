#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Color, Move, Piece, Square};

/// Back row piece order, a-file to h-file.
pub(crate) const BACK_ROW: [Piece; 8] = [
    Piece::Rook,
    Piece::Knight,
    Piece::Bishop,
    Piece::Queen,
    Piece::King,
    Piece::Bishop,
    Piece::Knight,
    Piece::Rook,
];

/// An 8x8 grid holding at most one piece per square, row 0 at the top.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Board {
    pub(crate) squares: [[Option<(Color, Piece)>; 8]; 8],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// The standard initial position: Black on rows 0-1, White on rows 6-7.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        for (col, &piece) in BACK_ROW.iter().enumerate() {
            for color in Color::BOTH {
                board.set_piece(Square(color.back_row(), col), color, piece);
                board.set_piece(Square(color.pawn_home_row(), col), color, Piece::Pawn);
            }
        }
        board
    }

    #[must_use]
    pub const fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
        }
    }

    /// Color and kind of the piece on `sq`, if any.
    #[inline]
    #[must_use]
    pub const fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        self.squares[sq.0][sq.1]
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self, sq: Square) -> bool {
        self.squares[sq.0][sq.1].is_none()
    }

    #[inline]
    #[must_use]
    pub const fn color_at(&self, sq: Square) -> Option<Color> {
        match self.squares[sq.0][sq.1] {
            Some((color, _)) => Some(color),
            None => None,
        }
    }

    /// Place a piece, replacing whatever stood there.
    pub fn set_piece(&mut self, sq: Square, color: Color, piece: Piece) {
        self.squares[sq.0][sq.1] = Some((color, piece));
    }

    /// Empty a square, returning what stood there.
    pub fn clear_square(&mut self, sq: Square) -> Option<(Color, Piece)> {
        self.squares[sq.0][sq.1].take()
    }

    /// Copy the piece on `mv.from` to `mv.to` and empty the source.
    ///
    /// No legality check is made here; callers validate first. Returns the
    /// piece that was standing on the destination.
    pub fn relocate(&mut self, mv: Move) -> Option<(Color, Piece)> {
        let moving = self.clear_square(mv.from);
        std::mem::replace(&mut self.squares[mv.to.0][mv.to.1], moving)
    }

    /// All occupied squares in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Color, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|(c, p)| (sq, c, p)))
    }

    /// Number of pieces on the board.
    #[must_use]
    pub fn piece_count(&self) -> usize {
        self.squares.iter().flatten().filter(|s| s.is_some()).count()
    }
}
