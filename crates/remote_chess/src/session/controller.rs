//! The session controller: sole owner of turn state.

use super::{PollTicket, RetryPolicy, TurnState};
use crate::chess::{BoardSnapshot, Move, Square};
use crate::client::{ClientError, GameService, MoveOutcome, OpponentOutcome, ResetOutcome};
use crate::view::{BoardGeometry, BoardView, LogKind, MoveLog};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info, instrument, warn};

/// A pending opponent-move request, detached from the controller.
///
/// Holding the request outside the controller lets the event loop keep
/// handling input (including a reset) while the request waits for its
/// delay or for the network. Feed the result back through
/// [`SessionController::apply_poll`].
pub struct PollRequest {
    service: Arc<dyn GameService>,
    ticket: PollTicket,
    delay: Duration,
}

impl PollRequest {
    /// Ticket identifying this request.
    pub fn ticket(&self) -> PollTicket {
        self.ticket
    }

    /// Delay observed before the request is sent.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Waits out the delay, then asks the service for the opponent's move.
    #[instrument(skip(self), fields(generation = self.ticket.generation, attempt = self.ticket.attempt))]
    pub async fn send(self) -> PollResponse {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        debug!("Polling for opponent move");
        let result = self.service.fetch_opponent_move().await;
        PollResponse {
            ticket: self.ticket,
            result,
        }
    }
}

/// Answer to a [`PollRequest`].
#[derive(Debug)]
pub struct PollResponse {
    /// Ticket of the request that produced this answer.
    pub ticket: PollTicket,
    /// What the service said.
    pub result: Result<OpponentOutcome, ClientError>,
}

/// Owns the session: turn state, pending selection, the authoritative
/// snapshot, and the board and log views it drives.
///
/// Every mutation goes through one of the named operations below, and each
/// runs to completion before the next event is handled.
pub struct SessionController {
    service: Arc<dyn GameService>,
    policy: RetryPolicy,
    turn: TurnState,
    selection: Option<Square>,
    snapshot: BoardSnapshot,
    board: BoardView,
    log: MoveLog,
    notice: Option<String>,
    generation: u64,
    armed: Option<PollTicket>,
    in_flight: Option<PollTicket>,
}

impl SessionController {
    /// Creates a controller in [`TurnState::PlayerTurn`] with an empty board.
    pub fn new(service: Arc<dyn GameService>, policy: RetryPolicy) -> Self {
        info!(interval = ?policy.interval(), max_attempts = ?policy.max_attempts(), "Creating session controller");
        Self {
            service,
            policy,
            turn: TurnState::PlayerTurn,
            selection: None,
            snapshot: BoardSnapshot::empty(),
            board: BoardView::new(),
            log: MoveLog::new(),
            notice: None,
            generation: 0,
            armed: None,
            in_flight: None,
        }
    }

    /// Current turn.
    pub fn turn(&self) -> TurnState {
        self.turn
    }

    /// First half of an in-progress move, if any.
    pub fn selection(&self) -> Option<Square> {
        self.selection
    }

    /// Last board fetched from the service.
    pub fn snapshot(&self) -> &BoardSnapshot {
        &self.snapshot
    }

    /// Board as currently drawn.
    pub fn board(&self) -> &BoardView {
        &self.board
    }

    /// User-facing log.
    pub fn log(&self) -> &MoveLog {
        &self.log
    }

    /// Latest message for the status line.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Session generation; incremented by every successful reset.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether an opponent poll is scheduled or in flight.
    pub fn is_polling(&self) -> bool {
        self.armed.is_some() || self.in_flight.is_some()
    }

    /// Records where the board is drawn, for click hit testing.
    pub fn set_board_geometry(&mut self, geometry: BoardGeometry) {
        self.board.set_geometry(geometry);
    }

    /// Scrolls the log towards older entries.
    pub fn scroll_log_up(&mut self, lines: usize) {
        self.log.scroll_up(lines);
    }

    /// Scrolls the log towards the newest entry.
    pub fn scroll_log_down(&mut self, lines: usize) {
        self.log.scroll_down(lines);
    }

    /// Fetches the initial board.
    #[instrument(skip(self))]
    pub async fn start(&mut self) {
        info!("Starting session");
        if self.refresh_snapshot().await {
            self.log.append(LogKind::Info, "Connected. Your move.");
        }
    }

    /// Handles a click on `square`.
    ///
    /// Outside the player's turn the click is refused locally without any
    /// request. Otherwise the first click is remembered and the second
    /// completes a move, which is submitted.
    #[instrument(skip(self, square), fields(square = %square, turn = %self.turn))]
    pub async fn select_square(&mut self, square: Square) {
        if !self.turn.accepts_selection() {
            self.refuse_selection();
            return;
        }

        match self.selection.take() {
            Some(from) => self.submit_move(Move::new(from, square)).await,
            None => {
                debug!("First square selected");
                self.notice = None;
                self.selection = Some(square);
            }
        }
    }

    /// Drops a pending selection without submitting anything.
    pub fn cancel_selection(&mut self) {
        if self.selection.take().is_some() {
            debug!("Selection cancelled");
        }
    }

    /// Sends a move to the service and applies the outcome.
    #[instrument(skip(self, mv), fields(mv = %mv))]
    pub async fn submit_move(&mut self, mv: Move) {
        if !self.turn.accepts_selection() {
            self.refuse_selection();
            return;
        }
        self.selection = None;

        match self.service.submit_move(mv).await {
            Ok(MoveOutcome::Accepted) => {
                info!("Move accepted");
                self.notice = None;
                self.board.apply_visual_move(mv);
                self.log
                    .append(LogKind::PlayerMove, format!("Player move: {}", mv));
                self.transition(TurnState::OpponentTurn);
                self.armed = Some(self.policy.first(self.generation));
                self.refresh_snapshot().await;
            }
            Ok(MoveOutcome::Checkmate { message }) => {
                info!(message = ?message, "Move ended the game");
                self.board.apply_visual_move(mv);
                self.log
                    .append(LogKind::PlayerMove, format!("Player move: {}", mv));
                let message = message.unwrap_or_else(|| "Checkmate! You win.".to_string());
                self.enter_game_over(message);
            }
            Ok(MoveOutcome::Rejected { reason }) => {
                warn!(reason = ?reason, "Move rejected");
                let text = match &reason {
                    Some(reason) => format!("Move {} rejected: {}", mv, reason),
                    None => format!("Move {} rejected", mv),
                };
                self.log.append(LogKind::Warning, text);
                self.notice = Some(reason.unwrap_or_else(|| "Invalid move".to_string()));
            }
            Err(e) => {
                error!(error = %e, "Move request failed");
                self.report_failure(format!("Could not submit move {}: {}", mv, e.kind));
            }
        }
    }

    /// Takes the scheduled opponent poll, if one is due and none is in flight.
    pub fn begin_poll(&mut self) -> Option<PollRequest> {
        if self.in_flight.is_some() {
            return None;
        }
        let ticket = self.armed.take()?;
        self.in_flight = Some(ticket);
        Some(PollRequest {
            service: Arc::clone(&self.service),
            ticket,
            delay: self.policy.delay_before(ticket),
        })
    }

    /// Applies the answer to an opponent poll.
    ///
    /// Answers from before a reset, or arriving when the controller is no
    /// longer waiting for the opponent, are discarded.
    #[instrument(skip(self, response), fields(generation = response.ticket.generation, attempt = response.ticket.attempt))]
    pub async fn apply_poll(&mut self, response: PollResponse) {
        let ticket = response.ticket;
        if self.in_flight != Some(ticket) {
            debug!(current_generation = self.generation, "Discarding stale poll response");
            return;
        }
        self.in_flight = None;
        if ticket.generation != self.generation || self.turn != TurnState::OpponentTurn {
            debug!(turn = %self.turn, "Discarding poll response outside opponent turn");
            return;
        }

        match response.result {
            Ok(OpponentOutcome::Moved(mv)) => {
                info!(mv = %mv, "Opponent moved");
                self.board.apply_visual_move(mv);
                self.log
                    .append(LogKind::OpponentMove, format!("Opponent move: {}", mv));
                self.transition(TurnState::PlayerTurn);
                self.refresh_snapshot().await;
            }
            Ok(OpponentOutcome::Terminal { mv, message }) => {
                info!(mv = ?mv, message = ?message, "Opponent ended the game");
                if let Some(mv) = mv {
                    self.board.apply_visual_move(mv);
                    self.log
                        .append(LogKind::OpponentMove, format!("Opponent move: {}", mv));
                }
                let message =
                    message.unwrap_or_else(|| "Checkmate! The opponent wins.".to_string());
                self.enter_game_over(message);
            }
            Ok(OpponentOutcome::NotReady) => match self.policy.next(ticket) {
                Some(next) => {
                    debug!(next_attempt = next.attempt, delay = ?self.policy.interval(), "Opponent not ready, retrying");
                    self.armed = Some(next);
                }
                None => {
                    warn!(attempts = ticket.attempt, "Opponent poll bound reached");
                    self.report_failure(format!(
                        "Opponent did not move after {} attempts. Reset to start a new game.",
                        ticket.attempt
                    ));
                }
            },
            Err(e) => {
                error!(error = %e, "Opponent poll failed");
                self.report_failure(format!(
                    "Lost contact while waiting for the opponent: {}. Reset to continue.",
                    e.kind
                ));
            }
        }
    }

    /// Runs one poll cycle: waits for the scheduled delay, asks for the
    /// opponent's move and applies the answer.
    ///
    /// Returns `false` when no poll was scheduled.
    pub async fn poll_opponent_move(&mut self) -> bool {
        let Some(request) = self.begin_poll() else {
            return false;
        };
        let response = request.send().await;
        self.apply_poll(response).await;
        true
    }

    /// Polls sequentially until the opponent answers, the bound is reached
    /// or a transport failure stops the chain.
    #[instrument(skip(self))]
    pub async fn await_opponent(&mut self) {
        while self.poll_opponent_move().await {}
    }

    /// Asks the service for a new game and, on success, starts over.
    ///
    /// A refused or failed reset leaves the session as it was.
    #[instrument(skip(self), fields(turn = %self.turn, generation = self.generation))]
    pub async fn reset_session(&mut self) {
        match self.service.reset_game().await {
            Ok(ResetOutcome::Reset) => {
                self.generation += 1;
                info!(generation = self.generation, "Session reset");
                self.armed = None;
                self.in_flight = None;
                self.selection = None;
                self.notice = None;
                self.log.clear();
                self.turn = TurnState::PlayerTurn;
                // The previous game's pieces must not survive a failed refresh.
                self.snapshot = BoardSnapshot::empty();
                self.board.render(&self.snapshot);
                self.board.enable_interaction();
                self.refresh_snapshot().await;
            }
            Ok(ResetOutcome::Refused { reason }) => {
                warn!(reason = ?reason, "Reset refused");
                let text = match &reason {
                    Some(reason) => format!("Reset refused: {}", reason),
                    None => "Reset refused".to_string(),
                };
                self.log.append(LogKind::Warning, text);
                self.notice = Some(reason.unwrap_or_else(|| "Reset refused".to_string()));
            }
            Err(e) => {
                error!(error = %e, "Reset request failed");
                self.report_failure(format!("Could not reset: {}", e.kind));
            }
        }
    }

    /// Stops the board from originating selections. Idempotent.
    pub fn disable_interaction(&mut self) {
        self.board.disable_interaction();
    }

    fn transition(&mut self, to: TurnState) {
        if self.turn != to {
            info!(from = %self.turn, to = %to, "Turn changed");
            self.turn = to;
            self.selection = None;
        }
    }

    fn enter_game_over(&mut self, message: String) {
        self.armed = None;
        self.log.append(LogKind::GameOver, message.clone());
        self.notice = Some(message);
        self.transition(TurnState::GameOver);
        self.disable_interaction();
    }

    fn refuse_selection(&mut self) {
        match self.turn {
            TurnState::GameOver => {
                debug!("Selection ignored after game over");
                self.log
                    .append(LogKind::Info, "The game is over. Press r for a new game.");
            }
            _ => {
                warn!(turn = %self.turn, "Selection refused outside player turn");
                self.log
                    .append(LogKind::Warning, "Not your turn: waiting for the opponent.");
            }
        }
    }

    fn report_failure(&mut self, text: String) {
        self.log.append(LogKind::Error, text.clone());
        self.notice = Some(text);
    }

    /// Replaces the snapshot with the service's board. Returns whether it succeeded.
    async fn refresh_snapshot(&mut self) -> bool {
        match self.service.fetch_state().await {
            Ok(snapshot) => {
                self.board.render(&snapshot);
                self.snapshot = snapshot;
                true
            }
            Err(e) => {
                warn!(error = %e, "Board refresh failed");
                self.report_failure(format!("Could not refresh the board: {}", e.kind));
                false
            }
        }
    }
}
