//! Chess value types exchanged with the game service.
//!
//! These types carry no rules. Legality, evaluation and the opponent's
//! decisions all live in the remote service; the client only needs to name
//! squares, decode piece symbols and hold the board the service reports.

mod board;
mod error;
mod moves;
mod piece;
mod square;

pub use board::BoardSnapshot;
pub use error::ChessParseError;
pub use moves::Move;
pub use piece::{PieceCode, Role, Side};
pub use square::Square;

/// Number of ranks and files on the board.
pub const BOARD_SIZE: u8 = 8;
