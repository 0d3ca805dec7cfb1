//! Typed access to the remote game service.
//!
//! [`GameService`] is the seam between the session controller and the
//! network: four operations, each returning an application-level outcome or
//! a [`ClientError`] for transport failures. [`RestGameClient`] implements it
//! over HTTP.

mod error;
mod rest;
mod wire;

pub use error::{ClientError, ClientErrorKind};
pub use rest::RestGameClient;

use crate::chess::{BoardSnapshot, Move};

/// Result of submitting the player's move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Move accepted; the opponent is now to move.
    Accepted,
    /// Move accepted and it ended the game.
    Checkmate {
        /// Server-supplied message, if any.
        message: Option<String>,
    },
    /// Move refused by the service (illegal move or any non-success status).
    Rejected {
        /// Server-supplied reason, if any.
        reason: Option<String>,
    },
}

/// Result of asking for the opponent's move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpponentOutcome {
    /// The opponent moved.
    Moved(Move),
    /// The opponent has not decided yet.
    NotReady,
    /// The opponent's reply ended the game.
    Terminal {
        /// The final move, when the service reports one.
        mv: Option<Move>,
        /// Server-supplied message, if any.
        message: Option<String>,
    },
}

/// Result of asking for a fresh game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResetOutcome {
    /// The service started a new game.
    Reset,
    /// The service refused.
    Refused {
        /// Server-supplied reason, if any.
        reason: Option<String>,
    },
}

/// The four remote operations of the game service.
///
/// Implementations never mutate session state; they only translate requests
/// and responses. Transport failures are reported as `Err`, distinct from
/// the application-level outcomes.
#[async_trait::async_trait]
pub trait GameService: Send + Sync {
    /// Fetches the authoritative board.
    async fn fetch_state(&self) -> Result<BoardSnapshot, ClientError>;

    /// Submits the player's move.
    async fn submit_move(&self, mv: Move) -> Result<MoveOutcome, ClientError>;

    /// Asks whether the opponent has moved.
    async fn fetch_opponent_move(&self) -> Result<OpponentOutcome, ClientError>;

    /// Asks for a fresh game.
    async fn reset_game(&self) -> Result<ResetOutcome, ClientError>;
}
