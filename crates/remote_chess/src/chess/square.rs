//! Board coordinates.

use super::{BOARD_SIZE, ChessParseError};
use serde::{Deserialize, Serialize};
use std::fmt;

const FILES: &[u8; 8] = b"abcdefgh";

/// One of the 64 board positions, addressed as zero-indexed `(row, col)`.
///
/// Row 0 is the back rank nearest the automated opponent, so `(6, 4)` is
/// `e2` and `(0, 4)` is `e8`. On the wire a square is the two-element
/// array `[row, col]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "[u8; 2]", into = "[u8; 2]")]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Creates a square, or `None` when either coordinate is off the board.
    pub fn new(row: u8, col: u8) -> Option<Self> {
        (row < BOARD_SIZE && col < BOARD_SIZE).then_some(Self { row, col })
    }

    /// Creates a square, pulling out-of-range coordinates onto the last rank or file.
    pub const fn clamped(row: u8, col: u8) -> Self {
        let max = BOARD_SIZE - 1;
        Self {
            row: if row > max { max } else { row },
            col: if col > max { max } else { col },
        }
    }

    /// Zero-indexed row, 0 nearest the opponent.
    pub fn row(self) -> u8 {
        self.row
    }

    /// Zero-indexed column, 0 on the a-file.
    pub fn col(self) -> u8 {
        self.col
    }

    /// Row-major index in `0..64`.
    pub fn index(self) -> usize {
        usize::from(self.row) * usize::from(BOARD_SIZE) + usize::from(self.col)
    }

    /// Whether the square is shaded light (`(row + col)` even).
    pub fn is_light(self) -> bool {
        (self.row + self.col) % 2 == 0
    }

    /// The square shifted by the given deltas, if it stays on the board.
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        let row = u8::try_from(i16::from(self.row) + i16::from(d_row)).ok()?;
        let col = u8::try_from(i16::from(self.col) + i16::from(d_col)).ok()?;
        Self::new(row, col)
    }

    /// Every square in row-major order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Self { row, col }))
    }
}

/// Algebraic notation, e.g. `e2`.
impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = char::from(FILES[usize::from(self.col)]);
        write!(f, "{}{}", file, BOARD_SIZE - self.row)
    }
}

impl TryFrom<[u8; 2]> for Square {
    type Error = ChessParseError;

    fn try_from([row, col]: [u8; 2]) -> Result<Self, Self::Error> {
        Self::new(row, col).ok_or(ChessParseError::SquareOutOfRange { row, col })
    }
}

impl From<Square> for [u8; 2] {
    fn from(square: Square) -> Self {
        [square.row, square.col]
    }
}
