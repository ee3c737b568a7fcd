use std::{fmt::Display, ops::Add, str::FromStr};

use thiserror::Error;

use super::Offset;

/// A board position given as a 0-indexed `(row, col)` pair.
///
/// Squares are not tied to any particular board size, so a `Square` may lie
/// off the board. Use [`BoardSize::contains`](super::BoardSize::contains) to
/// check.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Square {
    pub row: i32,
    pub col: i32,
}

impl Square {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Returns the square reached by applying `offset` to this square.
    pub const fn offset_by(self, offset: Offset) -> Self {
        Self {
            row: self.row + offset.d_row,
            col: self.col + offset.d_col,
        }
    }

    /// Like [`Square::offset_by`], but returns `None` if either coordinate
    /// overflows.
    pub const fn checked_offset_by(self, offset: Offset) -> Option<Self> {
        match (
            self.row.checked_add(offset.d_row),
            self.col.checked_add(offset.d_col),
        ) {
            (Some(row), Some(col)) => Some(Self { row, col }),
            _ => None,
        }
    }

    /// Returns the offset leading from `self` to `other`.
    pub const fn offset_to(self, other: Square) -> Offset {
        Offset::new(other.row - self.row, other.col - self.col)
    }
}

impl Add<Offset> for Square {
    type Output = Square;

    fn add(self, rhs: Offset) -> Square {
        self.offset_by(rhs)
    }
}

impl From<(i32, i32)> for Square {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseSquareError {
    #[error("Expected a square of the form `row,col`")]
    MissingSeparator,
    #[error("Invalid coordinate {0}")]
    InvalidCoordinate(String),
}

/// Parses a square written as `row,col`, optionally wrapped in parentheses.
///
/// ```
/// # use knight_paths_core::board::Square;
/// assert_eq!("2,1".parse(), Ok(Square::new(2, 1)));
/// assert_eq!("(0, 7)".parse(), Ok(Square::new(0, 7)));
/// ```
impl FromStr for Square {
    type Err = ParseSquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s
            .strip_prefix('(')
            .and_then(|inner| inner.strip_suffix(')'))
            .unwrap_or(s);

        let (row, col) = s
            .split_once(',')
            .ok_or(ParseSquareError::MissingSeparator)?;

        let parse_coordinate = |value: &str| {
            let value = value.trim();
            value
                .parse::<i32>()
                .map_err(|_| ParseSquareError::InvalidCoordinate(value.to_string()))
        };

        Ok(Self::new(parse_coordinate(row)?, parse_coordinate(col)?))
    }
}
