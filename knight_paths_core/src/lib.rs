//! Enumeration of knight move sequences between two squares of an N×N board.

pub mod board;
pub mod move_gen;
pub mod path_count;
pub mod path_finder;

#[cfg(test)]
mod test_utils;
