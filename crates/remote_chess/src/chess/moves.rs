//! Moves as pairs of squares.

use super::Square;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A move from one square to another.
///
/// Built by the controller from two selections and sent to the service
/// unchanged. The wire form is `{ "from": [row, col], "to": [row, col] }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// Source square.
    pub from: Square,
    /// Destination square.
    pub to: Square,
}

/// Renders as `e2 ➡️ e4`.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ➡️ {}", self.from, self.to)
    }
}
