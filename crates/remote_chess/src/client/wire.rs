//! Response bodies of the game service.

use super::{ClientError, MoveOutcome, OpponentOutcome, ResetOutcome};
use crate::chess::{BoardSnapshot, Move};
use serde::Deserialize;
use tracing::debug;

const STATUS_SUCCESS: &str = "success";
const STATUS_CHECKMATE: &str = "checkmate";

/// Body of `GET /state`.
#[derive(Debug, Deserialize)]
pub(super) struct StateResponse {
    pub board: Option<BoardSnapshot>,
    pub error: Option<String>,
}

/// Body shared by `/move`, `/get_ai_move` and `/reset`.
#[derive(Debug, Deserialize)]
pub(super) struct StatusResponse {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default, rename = "move")]
    pub mv: Option<Move>,
    #[serde(default)]
    pub checkmate: Option<bool>,
}

impl StatusResponse {
    fn is_terminal(&self) -> bool {
        self.status == STATUS_CHECKMATE || self.checkmate.unwrap_or(false)
    }

    pub fn into_move_outcome(self) -> MoveOutcome {
        if self.is_terminal() {
            MoveOutcome::Checkmate {
                message: self.message,
            }
        } else if self.status == STATUS_SUCCESS {
            MoveOutcome::Accepted
        } else {
            MoveOutcome::Rejected {
                reason: self.message,
            }
        }
    }

    /// The terminal flag is checked before the routine success branch so a
    /// final move is never mistaken for an ordinary reply.
    pub fn into_opponent_outcome(self) -> Result<OpponentOutcome, ClientError> {
        if self.is_terminal() {
            return Ok(OpponentOutcome::Terminal {
                mv: self.mv,
                message: self.message,
            });
        }
        if self.status != STATUS_SUCCESS {
            debug!(status = %self.status, message = ?self.message, "Opponent move not ready");
            return Ok(OpponentOutcome::NotReady);
        }
        self.mv
            .map(OpponentOutcome::Moved)
            .ok_or_else(|| ClientError::malformed("success status without a move"))
    }

    pub fn into_reset_outcome(self) -> ResetOutcome {
        if self.status == STATUS_SUCCESS {
            ResetOutcome::Reset
        } else {
            ResetOutcome::Refused {
                reason: self.message,
            }
        }
    }
}
