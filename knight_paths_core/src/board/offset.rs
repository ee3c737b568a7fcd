/// A relative step between two squares.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Offset {
    pub d_row: i32,
    pub d_col: i32,
}

impl Offset {
    pub const fn new(d_row: i32, d_col: i32) -> Self {
        Self { d_row, d_col }
    }

    /// Whether this offset is one of the eight knight jumps.
    pub const fn is_knight_move(self) -> bool {
        let (a, b) = (self.d_row.abs(), self.d_col.abs());
        (a == 1 && b == 2) || (a == 2 && b == 1)
    }
}

/// The eight knight jumps, in the order moves are generated.
///
/// Search results are ordered by this table, so it must not be reordered.
pub const KNIGHT_OFFSETS: [Offset; 8] = [
    Offset::new(2, 1),
    Offset::new(1, 2),
    Offset::new(-1, 2),
    Offset::new(-2, 1),
    Offset::new(-2, -1),
    Offset::new(-1, -2),
    Offset::new(1, -2),
    Offset::new(2, -1),
];
