//! Knight move generation.

use arrayvec::ArrayVec;

use crate::board::{Offset, Square, KNIGHT_OFFSETS};

/// Maximum number of knight moves from any square, used for stack-allocating
/// a vector to hold moves.
pub const MAX_MOVES: usize = 8;

pub type OffsetVec = ArrayVec<Offset, MAX_MOVES>;

/// Returns the knight offsets that keep a knight on `square` inside an
/// N×N board, where N is `board_size`.
///
/// Offsets are produced in the order of [`KNIGHT_OFFSETS`]. The square itself
/// does not need to be on the board. A non-positive `board_size` yields no
/// moves. Offsets whose target coordinates would overflow `i32` are skipped.
///
/// # Examples
///
/// ```
/// # use knight_paths_core::{board::{Offset, Square}, move_gen::possible_moves};
/// assert_eq!(
///     possible_moves(Square::new(0, 0), 8).as_slice(),
///     &[Offset::new(2, 1), Offset::new(1, 2)],
/// );
/// assert!(possible_moves(Square::new(0, 0), 1).is_empty());
/// ```
pub fn possible_moves(square: Square, board_size: i32) -> OffsetVec {
    let on_board = |value: i32| (0..board_size).contains(&value);

    KNIGHT_OFFSETS
        .iter()
        .copied()
        .filter(|&offset| {
            square
                .checked_offset_by(offset)
                .is_some_and(|target| on_board(target.row) && on_board(target.col))
        })
        .collect()
}

/// Returns the squares reached by [`possible_moves`], in the same order.
pub fn knight_destinations(square: Square, board_size: i32) -> impl Iterator<Item = Square> {
    possible_moves(square, board_size)
        .into_iter()
        .filter_map(move |offset| square.checked_offset_by(offset))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test_utils::assert_in_any_order;
    use pretty_assertions::assert_eq;

    fn offsets(pairs: &[(i32, i32)]) -> Vec<Offset> {
        pairs.iter().map(|&(r, c)| Offset::new(r, c)).collect()
    }

    #[test]
    fn corner_moves() {
        assert_eq!(
            possible_moves(Square::new(0, 0), 8).to_vec(),
            offsets(&[(2, 1), (1, 2)])
        );
        assert_eq!(
            possible_moves(Square::new(7, 7), 8).to_vec(),
            offsets(&[(-2, -1), (-1, -2)])
        );
    }

    #[test]
    fn centre_has_all_moves_in_canonical_order() {
        assert_eq!(
            possible_moves(Square::new(3, 3), 8).to_vec(),
            KNIGHT_OFFSETS.to_vec()
        );
    }

    #[test]
    fn small_boards() {
        assert_eq!(
            possible_moves(Square::new(1, 1), 4).to_vec(),
            offsets(&[(2, 1), (1, 2), (-1, 2), (2, -1)])
        );
        assert!(possible_moves(Square::new(0, 0), 2).is_empty());
        assert!(possible_moves(Square::new(1, 1), 3).is_empty());
        assert!(possible_moves(Square::new(0, 0), 1).is_empty());
    }

    #[test]
    fn non_positive_board_has_no_moves() {
        assert!(possible_moves(Square::new(0, 0), 0).is_empty());
        assert!(possible_moves(Square::new(0, 0), -5).is_empty());
    }

    #[test]
    fn off_board_square_can_move_back_on() {
        assert_eq!(
            possible_moves(Square::new(-1, 0), 8).to_vec(),
            offsets(&[(2, 1), (1, 2)])
        );
    }

    #[test]
    fn coordinates_near_overflow() {
        let n = i32::MAX;
        assert_eq!(
            possible_moves(Square::new(n - 1, 0), n).to_vec(),
            offsets(&[(-1, 2), (-2, 1)])
        );
        assert_eq!(
            possible_moves(Square::new(n, n), n).to_vec(),
            offsets(&[(-2, -1), (-1, -2)])
        );
        assert!(possible_moves(Square::new(n, n), 8).is_empty());
        assert!(possible_moves(Square::new(i32::MIN, i32::MIN), 8).is_empty());
    }

    #[test]
    fn destinations_match_offsets() {
        assert_in_any_order(
            knight_destinations(Square::new(3, 3), 8),
            [
                Square::new(5, 4),
                Square::new(4, 5),
                Square::new(2, 5),
                Square::new(1, 4),
                Square::new(1, 2),
                Square::new(2, 1),
                Square::new(4, 1),
                Square::new(5, 2),
            ],
        );
    }
}
