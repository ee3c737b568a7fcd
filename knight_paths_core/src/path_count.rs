//! Counting knight paths without materialising them.
//!
//! Counts follow the same traversal and stopping rule as
//! [`PathFinder`](crate::path_finder::PathFinder) and charge the node budget
//! of [`SearchLimits`] for the same nodes.

use crate::{
    board::Square,
    move_gen::knight_destinations,
    path_finder::{PathFinderError, SearchLimits, SearchRequest},
};

/// Counts the paths [`find_paths`](crate::path_finder::find_paths) would
/// return for `request`, without building them.
pub fn count_paths(
    request: &SearchRequest,
    limits: &SearchLimits,
) -> Result<u64, PathFinderError> {
    let board_size = request.validate()?;
    let mut counter = Counter::new(request, board_size.get(), limits);
    counter.count_from(request.start, request.max_moves as usize)
}

/// Splits the path count by first move.
///
/// Returns one entry per on-board knight move from the start, in generation
/// order, holding the square moved to and the number of paths that begin
/// with that move. When the start is also the destination, the only path is
/// the trivial one and the list is empty.
pub fn divide(
    request: &SearchRequest,
    limits: &SearchLimits,
) -> Result<Vec<(Square, u64)>, PathFinderError> {
    let board_size = request.validate()?;
    let max_moves = request.max_moves as usize;

    let mut counter = Counter::new(request, board_size.get(), limits);
    counter.visit()?;

    if request.start == request.destination || max_moves == 0 {
        return Ok(vec![]);
    }

    let mut counts = vec![];
    for next in knight_destinations(request.start, board_size.get()) {
        counts.push((next, counter.count_from(next, max_moves - 1)?));
    }
    Ok(counts)
}

struct Counter {
    destination: Square,
    board_size: i32,
    node_budget: u64,
    nodes: u64,
}

impl Counter {
    fn new(request: &SearchRequest, board_size: i32, limits: &SearchLimits) -> Self {
        Self {
            destination: request.destination,
            board_size,
            node_budget: limits.node_budget,
            nodes: 0,
        }
    }

    fn visit(&mut self) -> Result<(), PathFinderError> {
        self.nodes += 1;
        if self.nodes > self.node_budget {
            Err(PathFinderError::NodeBudgetExceeded(self.node_budget))
        } else {
            Ok(())
        }
    }

    fn count_from(&mut self, current: Square, moves_left: usize) -> Result<u64, PathFinderError> {
        self.visit()?;

        if current == self.destination {
            return Ok(1);
        }

        if moves_left == 0 {
            return Ok(0);
        }

        let mut total = 0;
        for next in knight_destinations(current, self.board_size) {
            total += self.count_from(next, moves_left - 1)?;
        }
        Ok(total)
    }
}
