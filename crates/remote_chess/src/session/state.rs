//! Turn states.

use serde::{Deserialize, Serialize};

/// Whose turn it is.
///
/// Only the session controller changes this, and every change clears any
/// pending selection.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::Display,
)]
pub enum TurnState {
    /// The local player may select squares.
    #[default]
    #[strum(to_string = "Your move")]
    PlayerTurn,
    /// Waiting for the automated opponent.
    #[strum(to_string = "Opponent is thinking")]
    OpponentTurn,
    /// The game has ended; only a reset leaves this state.
    #[strum(to_string = "Game over")]
    GameOver,
}

impl TurnState {
    /// Whether the player may start or finish a selection.
    pub fn accepts_selection(self) -> bool {
        matches!(self, TurnState::PlayerTurn)
    }
}
