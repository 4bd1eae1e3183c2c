//! Precomputed reach tables for the leaping pieces (knight, king).
//!
//! Bit `i` of `TABLE[sq]` is set when the piece on `sq` can land on the
//! square with index `i` in one move on an empty board.

use once_cell::sync::Lazy;

use super::Square;

const KNIGHT_DELTAS: [(isize, isize); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

const KING_DELTAS: [(isize, isize); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

fn reach_table(deltas: &[(isize, isize)]) -> [u64; 64] {
    let mut table = [0u64; 64];
    for (idx, slot) in table.iter_mut().enumerate() {
        let from = Square::from_index(idx);
        *slot = deltas
            .iter()
            .filter_map(|&(dr, dc)| from.offset(dr, dc))
            .fold(0u64, |mask, to| mask | (1u64 << to.as_index()));
    }
    table
}

pub(crate) static KNIGHT_REACH: Lazy<[u64; 64]> = Lazy::new(|| reach_table(&KNIGHT_DELTAS));

pub(crate) static KING_REACH: Lazy<[u64; 64]> = Lazy::new(|| reach_table(&KING_DELTAS));

#[inline]
pub(crate) fn knight_reaches(from: Square, to: Square) -> bool {
    KNIGHT_REACH[from.as_index()] & (1u64 << to.as_index()) != 0
}

#[inline]
pub(crate) fn king_reaches(from: Square, to: Square) -> bool {
    KING_REACH[from.as_index()] & (1u64 << to.as_index()) != 0
}
