use std::{
    collections::BTreeSet,
    fmt::{Debug, Display},
    str::FromStr,
};

use thiserror::Error;

use super::{BoardSize, Square};
use crate::path_finder::Path;

/// Set of marked squares on an N×N board, used to show which squares a
/// collection of paths passes through.
///
/// Renders as one line per row, row 0 first, with `#` for marked squares and
/// `.` for unmarked squares. The same drawing can be parsed back:
///
/// ```
/// # use knight_paths_core::board::{HighlightGrid, Square};
/// let grid: HighlightGrid = "
///     ## . .
///     . . .
///     . # .
/// ".parse().unwrap();
/// assert!(grid.get(Square::new(0, 0)));
/// assert!(grid.get(Square::new(2, 1)));
/// assert_eq!(grid.count(), 2);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct HighlightGrid {
    size: BoardSize,
    marked: BTreeSet<Square>,
}

impl HighlightGrid {
    pub fn new(size: BoardSize) -> Self {
        Self {
            size,
            marked: BTreeSet::new(),
        }
    }

    /// Marks every square visited by any of `paths`.
    ///
    /// Squares outside the board are ignored.
    pub fn from_paths<'a>(size: BoardSize, paths: impl IntoIterator<Item = &'a Path>) -> Self {
        let mut grid = Self::new(size);
        for path in paths {
            for &square in path.squares() {
                grid.set(square);
            }
        }
        grid
    }

    pub fn size(&self) -> BoardSize {
        self.size
    }

    pub fn get(&self, square: Square) -> bool {
        self.marked.contains(&square)
    }

    /// Marks `square`. Squares outside the board are ignored.
    pub fn set(&mut self, square: Square) {
        if self.size.contains(square) {
            self.marked.insert(square);
        }
    }

    pub fn reset(&mut self, square: Square) {
        self.marked.remove(&square);
    }

    /// Number of marked squares.
    pub fn count(&self) -> usize {
        self.marked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.marked.is_empty()
    }

    /// Marked squares in row-major order.
    pub fn marked_squares(&self) -> impl Iterator<Item = Square> + '_ {
        self.marked.iter().copied()
    }
}

impl Display for HighlightGrid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let size = self.size.get();
        for row in 0..size {
            for col in 0..size {
                if col > 0 {
                    f.write_str(" ")?;
                }
                f.write_str(if self.get(Square::new(row, col)) {
                    "#"
                } else {
                    "."
                })?;
            }
            if row + 1 < size {
                f.write_str("\n")?;
            }
        }
        Ok(())
    }
}

impl Debug for HighlightGrid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        f.write_str("HighlightGrid(\n")?;
        for line in self.to_string().lines() {
            f.write_str("    ")?;
            f.write_str(line)?;
            f.write_str("\n")?;
        }
        f.write_str(")")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseHighlightGridError {
    #[error("Grid is empty")]
    Empty,
    #[error("Row {row} has {found} cells, expected {expected}")]
    NotSquare {
        row: usize,
        found: usize,
        expected: usize,
    },
    #[error("Invalid cell {0}")]
    InvalidCell(char),
}

impl FromStr for HighlightGrid {
    type Err = ParseHighlightGridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows = s
            .lines()
            .map(|line| {
                line.chars()
                    .filter(|c| !c.is_whitespace())
                    .map(|c| match c {
                        '#' => Ok(true),
                        '.' => Ok(false),
                        other => Err(ParseHighlightGridError::InvalidCell(other)),
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .filter(|row| !matches!(row, Ok(cells) if cells.is_empty()))
            .collect::<Result<Vec<_>, _>>()?;

        let expected = rows.len();
        let size = BoardSize::new(expected as i32).ok_or(ParseHighlightGridError::Empty)?;

        let mut grid = Self::new(size);
        for (row, row_cells) in rows.into_iter().enumerate() {
            if row_cells.len() != expected {
                return Err(ParseHighlightGridError::NotSquare {
                    row,
                    found: row_cells.len(),
                    expected,
                });
            }
            for (col, marked) in row_cells.into_iter().enumerate() {
                if marked {
                    grid.set(Square::new(row as i32, col as i32));
                }
            }
        }

        Ok(grid)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn set_and_reset() {
        let mut grid = HighlightGrid::new(BoardSize::new(3).unwrap());
        assert!(grid.is_empty());

        grid.set(Square::new(1, 2));
        grid.set(Square::new(1, 2));
        grid.set(Square::new(5, 5));
        assert!(grid.get(Square::new(1, 2)));
        assert!(!grid.get(Square::new(2, 1)));
        assert!(!grid.get(Square::new(5, 5)));
        assert_eq!(grid.count(), 1);

        grid.reset(Square::new(1, 2));
        assert!(grid.is_empty());
    }

    #[test]
    fn largest_board() {
        let n = i32::MAX;
        let mut grid = HighlightGrid::new(BoardSize::new(n).unwrap());
        grid.set(Square::new(n - 1, n - 1));
        grid.set(Square::new(n - 1, 0));
        grid.set(Square::new(n, 0));

        assert!(grid.get(Square::new(n - 1, n - 1)));
        assert!(!grid.get(Square::new(n - 2, n - 1)));
        assert_eq!(
            grid.marked_squares().collect::<Vec<_>>(),
            vec![Square::new(n - 1, 0), Square::new(n - 1, n - 1)]
        );
    }

    #[test]
    fn display_matches_drawing() {
        let mut grid = HighlightGrid::new(BoardSize::new(3).unwrap());
        grid.set(Square::new(0, 0));
        grid.set(Square::new(2, 1));
        assert_eq!(grid.to_string(), "# . .\n. . .\n. # .");
    }

    #[test]
    fn from_paths_marks_every_visited_square() {
        let paths = [
            Path::new(vec![Square::new(0, 0), Square::new(2, 1)]),
            Path::new(vec![
                Square::new(0, 0),
                Square::new(1, 2),
                Square::new(3, 3),
                Square::new(2, 1),
            ]),
        ];

        assert_eq!(
            HighlightGrid::from_paths(BoardSize::new(4).unwrap(), &paths),
            "
                # . . .
                . . # .
                . # . .
                . . . #
            "
            .parse()
            .unwrap()
        );
    }

    #[test]
    fn marked_squares_in_row_major_order() {
        let grid: HighlightGrid = "
            . #
            # #
        "
        .parse()
        .unwrap();
        assert_eq!(
            grid.marked_squares().collect::<Vec<_>>(),
            vec![Square::new(0, 1), Square::new(1, 0), Square::new(1, 1)]
        );
    }

    #[test]
    fn parse_errors() {
        assert_eq!(
            HighlightGrid::from_str("  \n  "),
            Err(ParseHighlightGridError::Empty)
        );
        assert_eq!(
            HighlightGrid::from_str("# .\n."),
            Err(ParseHighlightGridError::NotSquare {
                row: 1,
                found: 1,
                expected: 2
            })
        );
        assert_eq!(
            HighlightGrid::from_str("# x\n. ."),
            Err(ParseHighlightGridError::InvalidCell('x'))
        );
    }
}
