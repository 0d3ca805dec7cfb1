//! Opponent-poll scheduling.

use std::time::Duration;

/// Identifies one opponent-move request.
///
/// `generation` is the session generation at the time the poll chain began;
/// a reset moves the session to a new generation, which makes every older
/// ticket stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PollTicket {
    /// Session generation the poll belongs to.
    pub generation: u64,
    /// 1-based attempt number within the current turn.
    pub attempt: u32,
}

/// Fixed-interval retry policy for the opponent poll.
///
/// The first poll is issued immediately; each "not ready" answer schedules
/// exactly one more after `interval`. With no `max_attempts` the chain only
/// ends on an answer or a transport failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    interval: Duration,
    max_attempts: Option<u32>,
}

impl RetryPolicy {
    /// Reference polling delay.
    pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(1000);

    /// Creates a policy.
    pub fn new(interval: Duration, max_attempts: Option<u32>) -> Self {
        Self {
            interval,
            max_attempts,
        }
    }

    /// Polls forever at `interval`.
    pub fn unbounded(interval: Duration) -> Self {
        Self::new(interval, None)
    }

    /// Delay between attempts.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Attempt bound, if any.
    pub fn max_attempts(&self) -> Option<u32> {
        self.max_attempts
    }

    /// Ticket for the first poll of a turn.
    pub fn first(&self, generation: u64) -> PollTicket {
        PollTicket {
            generation,
            attempt: 1,
        }
    }

    /// Ticket for the attempt after `ticket`, unless the bound is reached.
    pub fn next(&self, ticket: PollTicket) -> Option<PollTicket> {
        if self.max_attempts.is_some_and(|max| ticket.attempt >= max) {
            return None;
        }
        Some(PollTicket {
            attempt: ticket.attempt.saturating_add(1),
            ..ticket
        })
    }

    /// How long to wait before issuing `ticket`.
    pub fn delay_before(&self, ticket: PollTicket) -> Duration {
        if ticket.attempt <= 1 {
            Duration::ZERO
        } else {
            self.interval
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::unbounded(Self::DEFAULT_INTERVAL)
    }
}
