use std::fmt::Debug;

use pretty_assertions::assert_eq;
use rand::Rng;

use crate::{
    board::{BoardSize, Square, KNIGHT_OFFSETS},
    path_finder::SearchRequest,
};

pub fn assert_in_any_order<T: Eq + Ord + Debug>(
    values: impl IntoIterator<Item = T>,
    expected: impl IntoIterator<Item = T>,
) {
    let mut values = values.into_iter().collect::<Vec<_>>();
    values.sort();

    let mut expected = expected.into_iter().collect::<Vec<_>>();
    expected.sort();

    assert_eq!(values, expected);
}

/// Reference enumeration that tries every sequence of up to `max_moves`
/// knight offsets from the start, unfiltered, and keeps those that stay on
/// the board and first touch the destination on their final square.
pub fn brute_force_paths(request: &SearchRequest) -> Vec<Vec<Square>> {
    let board_size = BoardSize::new(request.board_size).unwrap();
    let mut paths = vec![];

    for moves in 0..=request.max_moves as u32 {
        for code in 0..8usize.pow(moves) {
            let mut squares = vec![request.start];
            let mut remaining = code;
            for _ in 0..moves {
                let last = *squares.last().unwrap();
                squares.push(last + KNIGHT_OFFSETS[remaining % 8]);
                remaining /= 8;
            }

            let (last, before) = squares.split_last().unwrap();
            if *last == request.destination
                && !before.contains(&request.destination)
                && squares.iter().all(|&s| board_size.contains(s))
            {
                paths.push(squares);
            }
        }
    }

    paths
}

/// A valid request on a board of at most 6×6 with a budget of at most four
/// moves.
pub fn random_request(rng: &mut impl Rng) -> SearchRequest {
    let board_size = rng.gen_range(1..=6);
    let mut square = || Square::new(rng.gen_range(0..board_size), rng.gen_range(0..board_size));
    let start = square();
    let destination = square();
    let max_moves = rng.gen_range(0..=4);
    SearchRequest::new(start, destination, max_moves, board_size)
}
