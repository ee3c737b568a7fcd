use super::Square;

/// Side length of a square board.
///
/// Always positive. Squares on the board have both coordinates in
/// `0..size`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BoardSize(i32);

impl BoardSize {
    pub const STANDARD: Self = Self(8);

    pub const fn new(size: i32) -> Option<Self> {
        if size <= 0 {
            None
        } else {
            Some(Self(size))
        }
    }

    pub const fn get(self) -> i32 {
        self.0
    }

    pub const fn contains(self, square: Square) -> bool {
        square.row >= 0 && square.row < self.0 && square.col >= 0 && square.col < self.0
    }

    /// Number of squares on the board.
    pub const fn area(self) -> usize {
        (self.0 as usize) * (self.0 as usize)
    }

    /// All squares on the board in row-major order.
    pub fn squares(self) -> impl Iterator<Item = Square> {
        let size = self.0;
        (0..size).flat_map(move |row| (0..size).map(move |col| Square::new(row, col)))
    }
}

impl Default for BoardSize {
    fn default() -> Self {
        Self::STANDARD
    }
}
