use serde::{Deserialize, Serialize};
use std::fmt;

/// Index of a file letter, `'a'..='h'` -> `0..=7`. Anything else is `-1`.
#[must_use]
pub fn file_index(c: char) -> i32 {
    match c {
        'a'..='h' => i32::from(c as u8 - b'a'),
        _ => -1,
    }
}

/// Index of a rank digit, `'1'..='8'` -> `0..=7`. Anything else is `-1`.
#[must_use]
pub fn rank_index(c: char) -> i32 {
    match c {
        '1'..='8' => i32::from(c as u8 - b'1'),
        _ => -1,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Square {
    file: u8,
    rank: u8,
}

impl Square {
    #[must_use]
    pub const fn new(file: u8, rank: u8) -> Option<Self> {
        if file < 8 && rank < 8 {
            Some(Self { file, rank })
        } else {
            None
        }
    }

    /// Parses the first two characters of `text` (`"e2"`, or the head of `"e2e4"`).
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        let mut chars = text.chars();
        let file = u8::try_from(file_index(chars.next()?)).ok()?;
        let rank = u8::try_from(rank_index(chars.next()?)).ok()?;
        Self::new(file, rank)
    }

    pub const fn file(self) -> u8 {
        self.file
    }

    pub const fn rank(self) -> u8 {
        self.rank
    }

    pub fn all() -> impl Iterator<Item = Self> {
        (0..8u8).flat_map(|rank| (0..8u8).map(move |file| Self { file, rank }))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            char::from(b'a' + self.file),
            char::from(b'1' + self.rank)
        )
    }
}

/// 1-based `(column, row)` of a square counted from the visual top-left corner
/// of the board. White sits at the bottom unless `reversed`.
#[must_use]
pub const fn square_to_board_coords(square: Square, reversed: bool) -> (u8, u8) {
    let coords = (square.file + 1, 8 - square.rank);
    if reversed {
        mirror(coords)
    } else {
        coords
    }
}

/// Rotates 1-based board coordinates by half a turn.
#[must_use]
pub const fn mirror((col, row): (u8, u8)) -> (u8, u8) {
    (9 - col, 9 - row)
}

/// Side of one square in pixels for a canvas of the given client width.
/// The board widget draws a one pixel border on both sides.
#[must_use]
pub fn square_size(client_width: f64) -> f64 {
    ((client_width - 2.0) / 8.0).max(0.0)
}

/// Pixel center of 1-based board coordinates, which may be fractional.
#[must_use]
pub fn cell_center(col: f64, row: f64, square_size: f64) -> (f64, f64) {
    ((col - 0.5) * square_size, (row - 0.5) * square_size)
}

/// Top-left pixel of a square's outline, nudged one pixel onto the border.
#[must_use]
pub fn square_origin(square: Square, reversed: bool, square_size: f64) -> (f64, f64) {
    let (col, row) = square_to_board_coords(square, reversed);
    (
        f64::from(col - 1).mul_add(square_size, -1.0),
        f64::from(row - 1).mul_add(square_size, -1.0),
    )
}
