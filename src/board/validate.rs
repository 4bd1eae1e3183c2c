//! Move legality under simplified movement rules.
//!
//! The validator inspects a board snapshot and a proposed `(from, to)` pair
//! and decides whether the piece on `from` may go to `to`. There is no
//! notion of check, castling, en passant, promotion or side to move.
//! Validation never mutates the board.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::error::IllegalMove;
use super::leapers::{king_reaches, knight_reaches};
use super::{Board, Color, Move, Piece, Square};

/// How single pawn steps from the home row are treated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PawnStepRule {
    /// A pawn may always take a single step forward onto an empty square.
    #[default]
    Standard,
    /// A single step starting on row 1 or row 6 is refused, whichever side
    /// the pawn belongs to. Double steps are unaffected.
    Legacy,
}

/// Stateless legality checker.
///
/// # Example
/// ```
/// use chess_board::board::{Board, MoveValidator, Square};
///
/// let board = Board::new();
/// let validator = MoveValidator::new();
/// assert!(validator.is_legal(&board, Square(6, 4), Square(4, 4)));
/// assert!(!validator.is_legal(&board, Square(6, 4), Square(3, 4)));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoveValidator {
    pawn_step: PawnStepRule,
}

impl MoveValidator {
    #[must_use]
    pub const fn new() -> Self {
        MoveValidator {
            pawn_step: PawnStepRule::Standard,
        }
    }

    #[must_use]
    pub const fn with_pawn_step_rule(mut self, rule: PawnStepRule) -> Self {
        self.pawn_step = rule;
        self
    }

    #[inline]
    #[must_use]
    pub const fn pawn_step_rule(&self) -> PawnStepRule {
        self.pawn_step
    }

    /// Boolean legality verdict for moving the piece on `from` to `to`.
    #[inline]
    #[must_use]
    pub fn is_legal(&self, board: &Board, from: Square, to: Square) -> bool {
        self.check(board, Move::new(from, to)).is_ok()
    }

    /// Validate a move, reporting the first rule it breaks.
    pub fn check(&self, board: &Board, mv: Move) -> Result<(), IllegalMove> {
        let target = board.piece_at(mv.to);
        if mv.is_null() && target.is_none() {
            return Err(IllegalMove::NullMove);
        }
        let (color, piece) = board
            .piece_at(mv.from)
            .ok_or(IllegalMove::EmptySource(mv.from))?;
        if matches!(target, Some((target_color, _)) if target_color == color) {
            return Err(IllegalMove::OwnCapture(mv.to));
        }

        match piece {
            Piece::Pawn => self.check_pawn(board, color, mv),
            Piece::Knight => shape(knight_reaches(mv.from, mv.to), piece),
            Piece::Bishop | Piece::Rook | Piece::Queen => {
                let fits = (piece.moves_straight() && is_straight(mv))
                    || (piece.moves_diagonally() && is_diagonal(mv));
                shape(fits, piece)?;
                path_clear(board, mv)
            }
            Piece::King => shape(king_reaches(mv.from, mv.to), piece),
        }
    }

    /// Every square the piece on `from` may legally move to, row-major.
    #[must_use]
    pub fn destinations(&self, board: &Board, from: Square) -> Vec<Square> {
        if board.is_empty(from) {
            return Vec::new();
        }
        Square::all()
            .filter(|&to| self.is_legal(board, from, to))
            .collect()
    }

    fn check_pawn(&self, board: &Board, color: Color, mv: Move) -> Result<(), IllegalMove> {
        let dir = color.pawn_direction();
        let (d_row, d_col) = mv.from.delta(mv.to);
        let target_empty = board.is_empty(mv.to);

        if d_col == 0 && target_empty {
            if d_row == dir && self.single_step_allowed(mv.from) {
                return Ok(());
            }
            // The square passed over is not inspected.
            if d_row == 2 * dir && mv.from.row() == color.pawn_home_row() {
                return Ok(());
            }
        }
        if d_col.abs() == 1 && d_row == dir && !target_empty {
            return Ok(());
        }
        Err(IllegalMove::PieceRule(Piece::Pawn))
    }

    fn single_step_allowed(&self, from: Square) -> bool {
        match self.pawn_step {
            PawnStepRule::Standard => true,
            PawnStepRule::Legacy => from.row() != 1 && from.row() != 6,
        }
    }
}

/// Legality verdict using the standard rules.
#[must_use]
pub fn is_legal(board: &Board, from: Square, to: Square) -> bool {
    MoveValidator::new().is_legal(board, from, to)
}

#[inline]
fn shape(ok: bool, piece: Piece) -> Result<(), IllegalMove> {
    if ok {
        Ok(())
    } else {
        Err(IllegalMove::PieceRule(piece))
    }
}

#[inline]
fn is_straight(mv: Move) -> bool {
    (mv.from.row() == mv.to.row()) != (mv.from.col() == mv.to.col())
}

#[inline]
fn is_diagonal(mv: Move) -> bool {
    let (d_row, d_col) = mv.from.delta(mv.to);
    d_row != 0 && d_row.abs() == d_col.abs()
}

/// Walk from source toward destination by unit steps; the first occupied
/// square strictly between them blocks the move. The destination itself is
/// not inspected.
fn path_clear(board: &Board, mv: Move) -> Result<(), IllegalMove> {
    let (d_row, d_col) = mv.from.delta(mv.to);
    let (step_row, step_col) = (d_row.signum(), d_col.signum());
    let mut sq = mv.from;
    while let Some(next) = sq.offset(step_row, step_col) {
        if next == mv.to {
            return Ok(());
        }
        if !board.is_empty(next) {
            return Err(IllegalMove::Blocked(next));
        }
        sq = next;
    }
    Ok(())
}
