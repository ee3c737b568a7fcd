//! Bounded depth-first enumeration of knight paths.
//!
//! The search starts from a single-square path and repeatedly extends it by
//! every on-board knight move, in the order given by
//! [`KNIGHT_OFFSETS`](crate::board::KNIGHT_OFFSETS). A branch is recorded and
//! stops extending as soon as it lands on the destination. A branch that
//! exhausts its move budget without reaching the destination is dropped.
//! Squares may be revisited, since the budget counts moves rather than
//! distinct squares.

use std::fmt::Display;

use log::{debug, trace};
use thiserror::Error;

use crate::{
    board::{BoardSize, Square},
    move_gen::knight_destinations,
};

/// Longest path buffer reserved up front. Deeper paths grow it on demand.
const MAX_RESERVED_PATH_LEN: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathFinderError {
    #[error("Board size must be positive, got {0}")]
    InvalidBoardSize(i32),
    #[error("Square {square} is outside the {board_size}x{board_size} board")]
    OutOfBounds { square: Square, board_size: i32 },
    #[error("Move budget must not be negative, got {0}")]
    InvalidMoveBudget(i32),
    #[error("Search exceeded its budget of {0} nodes")]
    NodeBudgetExceeded(u64),
}

/// Arguments to a path search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchRequest {
    pub start: Square,
    pub destination: Square,
    pub max_moves: i32,
    pub board_size: i32,
}

impl SearchRequest {
    pub fn new(start: Square, destination: Square, max_moves: i32, board_size: i32) -> Self {
        Self {
            start,
            destination,
            max_moves,
            board_size,
        }
    }

    /// Checks the request, returning the validated board size.
    ///
    /// The board size is checked first, then the start and destination
    /// squares, then the move budget.
    pub fn validate(&self) -> Result<BoardSize, PathFinderError> {
        let board_size = BoardSize::new(self.board_size)
            .ok_or(PathFinderError::InvalidBoardSize(self.board_size))?;

        for square in [self.start, self.destination] {
            if !board_size.contains(square) {
                return Err(PathFinderError::OutOfBounds {
                    square,
                    board_size: self.board_size,
                });
            }
        }

        if self.max_moves < 0 {
            return Err(PathFinderError::InvalidMoveBudget(self.max_moves));
        }

        Ok(board_size)
    }
}

/// Resource limits applied to a search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchLimits {
    /// Maximum number of search nodes (partial paths) to visit before giving
    /// up with [`PathFinderError::NodeBudgetExceeded`].
    pub node_budget: u64,
}

impl SearchLimits {
    pub fn unlimited() -> Self {
        Self {
            node_budget: u64::MAX,
        }
    }

    pub fn with_node_budget(node_budget: u64) -> Self {
        Self { node_budget }
    }
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self::unlimited()
    }
}

/// A sequence of squares joined by knight moves.
///
/// Never empty: the first square is where the search started.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Path(Vec<Square>);

impl Path {
    /// Panics if `squares` is empty.
    pub fn new(squares: Vec<Square>) -> Self {
        assert!(!squares.is_empty(), "a path visits at least one square");
        Self(squares)
    }

    pub fn squares(&self) -> &[Square] {
        &self.0
    }

    /// Number of moves taken, one less than the number of squares.
    pub fn moves(&self) -> usize {
        self.0.len() - 1
    }

    pub fn start(&self) -> Square {
        self.0[0]
    }

    pub fn end(&self) -> Square {
        self.0[self.0.len() - 1]
    }

    /// Whether every consecutive pair of squares is one knight move apart.
    pub fn is_knight_path(&self) -> bool {
        self.0
            .windows(2)
            .all(|pair| pair[0].offset_to(pair[1]).is_knight_move())
    }
}

impl Display for Path {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, square) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            square.fmt(f)?;
        }
        Ok(())
    }
}

/// Runs a [`SearchRequest`] under a set of [`SearchLimits`].
#[derive(Debug, Clone)]
pub struct PathFinder {
    request: SearchRequest,
    limits: SearchLimits,
}

impl PathFinder {
    pub fn new(request: SearchRequest) -> Self {
        Self {
            request,
            limits: SearchLimits::unlimited(),
        }
    }

    pub fn with_limits(mut self, limits: SearchLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Enumerates every path from the start to the destination using at most
    /// `max_moves` knight moves, in depth-first discovery order.
    ///
    /// Nothing is returned on error, including when the node budget runs out
    /// part way through.
    pub fn run(&self) -> Result<Vec<Path>, PathFinderError> {
        let board_size = self.request.validate()?;
        let SearchRequest {
            start,
            destination,
            max_moves,
            ..
        } = self.request;

        debug!(
            "Searching {start} -> {destination} within {max_moves} moves on a {0}x{0} board",
            board_size.get()
        );

        let max_moves = max_moves as usize;
        let mut search = Search {
            destination,
            max_moves,
            board_size,
            node_budget: self.limits.node_budget,
            nodes: 0,
            path: Vec::with_capacity(max_moves.min(MAX_RESERVED_PATH_LEN) + 1),
            paths: Vec::new(),
        };

        search.path.push(start);
        search.backtrack(start)?;

        debug!(
            "Found {} paths after visiting {} nodes",
            search.paths.len(),
            search.nodes
        );

        Ok(search.paths)
    }
}

struct Search {
    destination: Square,
    max_moves: usize,
    board_size: BoardSize,
    node_budget: u64,
    nodes: u64,
    path: Vec<Square>,
    paths: Vec<Path>,
}

impl Search {
    fn backtrack(&mut self, current: Square) -> Result<(), PathFinderError> {
        self.nodes += 1;
        if self.nodes > self.node_budget {
            return Err(PathFinderError::NodeBudgetExceeded(self.node_budget));
        }

        let moves_taken = self.path.len() - 1;

        if current == self.destination && moves_taken <= self.max_moves {
            let path = Path(self.path.clone());
            trace!("Reached destination: {path}");
            self.paths.push(path);
            return Ok(());
        }

        if moves_taken >= self.max_moves {
            return Ok(());
        }

        for next in knight_destinations(current, self.board_size.get()) {
            self.path.push(next);
            let result = self.backtrack(next);
            self.path.pop();
            result?;
        }

        Ok(())
    }
}

/// Enumerates every knight path from `start` to `destination` on an N×N
/// board using at most `max_moves` moves.
///
/// # Examples
///
/// ```
/// # use knight_paths_core::{board::Square, path_finder::find_paths};
/// let paths = find_paths(Square::new(0, 0), Square::new(2, 1), 1, 8).unwrap();
/// assert_eq!(paths.len(), 1);
/// assert_eq!(paths[0].squares(), &[Square::new(0, 0), Square::new(2, 1)]);
/// ```
pub fn find_paths(
    start: Square,
    destination: Square,
    max_moves: i32,
    board_size: i32,
) -> Result<Vec<Path>, PathFinderError> {
    PathFinder::new(SearchRequest::new(start, destination, max_moves, board_size)).run()
}
