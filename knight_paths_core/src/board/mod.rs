//! Squares, offsets and board geometry.

mod board_size;
mod highlight_grid;
mod offset;
mod square;

pub use board_size::BoardSize;
pub use highlight_grid::{HighlightGrid, ParseHighlightGridError};
pub use offset::{Offset, KNIGHT_OFFSETS};
pub use square::{ParseSquareError, Square};
