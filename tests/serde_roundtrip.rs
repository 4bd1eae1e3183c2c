#![cfg(feature = "serde")]

use chess_board::board::{Board, Move, MoveValidator, PawnStepRule, Square};

#[test]
fn board_survives_json() {
    let mut board = Board::new();
    board.relocate("e2e4".parse().unwrap());
    let json = serde_json::to_string(&board).unwrap();
    let back: Board = serde_json::from_str(&json).unwrap();
    assert_eq!(back, board);
}

#[test]
fn move_and_validator_survive_json() {
    let mv = Move::new(Square(7, 1), Square(5, 2));
    let json = serde_json::to_string(&mv).unwrap();
    assert_eq!(serde_json::from_str::<Move>(&json).unwrap(), mv);

    let validator = MoveValidator::new().with_pawn_step_rule(PawnStepRule::Legacy);
    let json = serde_json::to_string(&validator).unwrap();
    let back: MoveValidator = serde_json::from_str(&json).unwrap();
    assert_eq!(back.pawn_step_rule(), PawnStepRule::Legacy);
}
