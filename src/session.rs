//! Two-click move entry on top of a board.
//!
//! A `GameSession` owns the board and a pending selection. The first click
//! on an occupied square selects it; the next click proposes a destination,
//! which is validated and, if legal, applied. The selection is dropped after
//! every second click. Whose turn it is is never checked.

use crate::board::{Board, Color, IllegalMove, Move, MoveValidator, Piece, Square};

/// What a click did to the session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    /// First click on an empty square; nothing happened
    Ignored,
    /// A piece was selected; `targets` are its legal destinations
    Selected { square: Square, targets: Vec<Square> },
    /// The selected piece moved
    Moved {
        mv: Move,
        captured: Option<(Color, Piece)>,
    },
    /// The proposed move was refused and the board left untouched
    Rejected { mv: Move, reason: IllegalMove },
}

#[derive(Clone, Debug, Default)]
pub struct GameSession {
    board: Board,
    selection: Option<Square>,
    validator: MoveValidator,
}

impl GameSession {
    /// New session on the standard initial position.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_validator(validator: MoveValidator) -> Self {
        GameSession {
            validator,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn from_board(board: Board) -> Self {
        GameSession {
            board,
            ..Self::default()
        }
    }

    #[inline]
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    #[must_use]
    pub fn selection(&self) -> Option<Square> {
        self.selection
    }

    #[inline]
    #[must_use]
    pub fn validator(&self) -> MoveValidator {
        self.validator
    }

    /// Restore the initial position and drop any selection.
    pub fn reset(&mut self) {
        self.load(Board::new());
    }

    /// Replace the board and drop any selection.
    pub fn load(&mut self, board: Board) {
        self.board = board;
        self.selection = None;
        crate::log_debug!("board loaded: {}", self.board.to_layout());
    }

    /// Feed one click on `square` into the selection protocol.
    pub fn click(&mut self, square: Square) -> ClickOutcome {
        match self.selection.take() {
            None => {
                if self.board.is_empty(square) {
                    crate::log_trace!("click on empty {square} ignored");
                    return ClickOutcome::Ignored;
                }
                self.selection = Some(square);
                let targets = self.validator.destinations(&self.board, square);
                crate::log_debug!("selected {square} ({} targets)", targets.len());
                ClickOutcome::Selected { square, targets }
            }
            Some(from) => {
                let mv = Move::new(from, square);
                match self.submit(mv) {
                    Ok(captured) => ClickOutcome::Moved { mv, captured },
                    Err(reason) => ClickOutcome::Rejected { mv, reason },
                }
            }
        }
    }

    /// Validate and apply one move, clearing any pending selection.
    ///
    /// Returns the captured piece, if any.
    pub fn submit(&mut self, mv: Move) -> Result<Option<(Color, Piece)>, IllegalMove> {
        self.selection = None;
        if let Err(reason) = self.validator.check(&self.board, mv) {
            crate::log_debug!("rejected {mv}: {reason}");
            return Err(reason);
        }
        let captured = self.board.relocate(mv);
        crate::log_debug!("applied {mv}");
        Ok(captured)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::PawnStepRule;

    #[test]
    fn test_first_click_on_empty_square_is_ignored() {
        let mut session = GameSession::new();
        assert_eq!(session.click(Square(4, 4)), ClickOutcome::Ignored);
        assert_eq!(session.selection(), None);
    }

    #[test]
    fn test_select_then_move() {
        let mut session = GameSession::new();
        match session.click(Square(6, 4)) {
            ClickOutcome::Selected { square, targets } => {
                assert_eq!(square, Square(6, 4));
                assert_eq!(targets, vec![Square(4, 4), Square(5, 4)]);
            }
            other => panic!("expected selection, got {other:?}"),
        }
        assert_eq!(session.selection(), Some(Square(6, 4)));

        let outcome = session.click(Square(4, 4));
        assert_eq!(
            outcome,
            ClickOutcome::Moved {
                mv: Move::new(Square(6, 4), Square(4, 4)),
                captured: None
            }
        );
        assert_eq!(session.selection(), None);
        assert!(session.board().is_empty(Square(6, 4)));
        assert_eq!(
            session.board().piece_at(Square(4, 4)),
            Some((Color::White, Piece::Pawn))
        );
    }

    #[test]
    fn test_illegal_second_click_clears_selection() {
        let mut session = GameSession::new();
        session.click(Square(7, 0));
        let outcome = session.click(Square(4, 0));
        assert_eq!(
            outcome,
            ClickOutcome::Rejected {
                mv: Move::new(Square(7, 0), Square(4, 0)),
                reason: IllegalMove::Blocked(Square(6, 0))
            }
        );
        assert_eq!(session.selection(), None);
        assert_eq!(session.board(), &Board::new());
    }

    #[test]
    fn test_second_click_on_same_square_deselects() {
        let mut session = GameSession::new();
        session.click(Square(7, 1));
        let outcome = session.click(Square(7, 1));
        assert!(matches!(outcome, ClickOutcome::Rejected { .. }));
        assert_eq!(session.selection(), None);
    }

    #[test]
    fn test_second_click_on_empty_square_with_nothing_legal() {
        let mut session = GameSession::new();
        session.click(Square(7, 1));
        let outcome = session.click(Square(3, 3));
        assert_eq!(
            outcome,
            ClickOutcome::Rejected {
                mv: Move::new(Square(7, 1), Square(3, 3)),
                reason: IllegalMove::PieceRule(Piece::Knight)
            }
        );
    }

    #[test]
    fn test_capture_reports_victim() {
        let board = Board::try_from_layout("8/8/8/3p4/4P3/8/8/8").unwrap();
        let mut session = GameSession::from_board(board);
        let captured = session.submit(Move::new(Square(4, 4), Square(3, 3)));
        assert_eq!(captured, Ok(Some((Color::Black, Piece::Pawn))));
        assert_eq!(session.board().piece_count(), 1);
    }

    #[test]
    fn test_submit_clears_selection() {
        let mut session = GameSession::new();
        session.click(Square(6, 0));
        assert!(session.submit(Move::new(Square(1, 0), Square(2, 0))).is_ok());
        assert_eq!(session.selection(), None);
    }

    #[test]
    fn test_same_side_may_move_twice() {
        let mut session = GameSession::new();
        assert!(session.submit("e2e4".parse().unwrap()).is_ok());
        assert!(session.submit("d2d4".parse().unwrap()).is_ok());
    }

    #[test]
    fn test_reset_restores_initial_position() {
        let mut session = GameSession::new();
        session.submit("g1f3".parse().unwrap()).unwrap();
        session.click(Square(6, 0));
        session.reset();
        assert_eq!(session.board(), &Board::new());
        assert_eq!(session.selection(), None);
    }

    #[test]
    fn test_session_uses_configured_rule() {
        let validator = MoveValidator::new().with_pawn_step_rule(PawnStepRule::Legacy);
        let mut session = GameSession::with_validator(validator);
        assert_eq!(
            session.submit("e2e3".parse().unwrap()),
            Err(IllegalMove::PieceRule(Piece::Pawn))
        );
        assert_eq!(session.validator(), validator);
    }
}
