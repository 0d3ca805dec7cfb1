//! Decoding errors for chess wire values.

use derive_more::{Display, Error};

/// A value received from the service that does not describe a chess position.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ChessParseError {
    /// Row or column outside `0..8`.
    #[display("square ({row}, {col}) is off the board")]
    SquareOutOfRange {
        /// Reported row.
        row: u8,
        /// Reported column.
        col: u8,
    },
    /// A piece symbol outside the service alphabet.
    #[display("unknown piece symbol {_0:?}")]
    UnknownSymbol(#[error(not(source))] String),
    /// A board grid that is not 8 rows of 8 cells.
    #[display("board must be 8x8: {_0}")]
    BadShape(#[error(not(source))] String),
}
