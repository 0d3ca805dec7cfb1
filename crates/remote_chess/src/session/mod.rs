//! Turn tracking and synchronization with the game service.

mod controller;
mod retry;
mod state;

pub use controller::{PollRequest, PollResponse, SessionController};
pub use retry::{PollTicket, RetryPolicy};
pub use state::TurnState;
