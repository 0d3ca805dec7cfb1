//! Terminal front end.
//!
//! One cooperative task drives everything: terminal events and the
//! detached opponent poll are awaited together with `tokio::select!`, and
//! each result is handed to the [`SessionController`] to completion before
//! the next one is looked at.

mod input;
mod ui;

pub use input::{Action, key_action, mouse_action, move_cursor};

use crate::chess::Square;
use crate::client::RestGameClient;
use crate::config::ClientConfig;
use crate::session::{PollResponse, SessionController};
use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event, EventStream},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::{FutureExt, StreamExt, future::BoxFuture};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::sync::Arc;
use tracing::{debug, error, info, instrument};

type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Whether the event loop keeps going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Runs the terminal client until the user quits.
#[instrument(skip_all, fields(server_url = %config.server_url()))]
pub async fn run_tui(config: ClientConfig) -> Result<()> {
    info!("Starting terminal client");

    let client = RestGameClient::from_config(&config)?;
    let mut session = SessionController::new(Arc::new(client), config.retry_policy());

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let res = run_session(&mut terminal, &mut session).await;

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Session loop error");
    }
    res
}

/// Draws, then waits for whichever comes first: a terminal event or the
/// in-flight opponent poll.
async fn run_session(terminal: &mut Tui, session: &mut SessionController) -> Result<()> {
    let mut events = EventStream::new();
    let mut cursor = Square::clamped(6, 4);
    let mut in_flight: Option<BoxFuture<'static, PollResponse>> = None;

    redraw(terminal, session, cursor)?;
    session.start().await;

    loop {
        redraw(terminal, session, cursor)?;

        if in_flight.is_none() {
            in_flight = session.begin_poll().map(|request| request.send().boxed());
        }

        tokio::select! {
            response = next_poll(&mut in_flight) => {
                in_flight = None;
                session.apply_poll(response).await;
            }
            event = events.next() => match event {
                Some(Ok(event)) => {
                    if handle_event(event, session, &mut cursor).await == Flow::Quit {
                        info!("User quit");
                        return Ok(());
                    }
                }
                Some(Err(e)) => return Err(e.into()),
                None => return Ok(()),
            },
        }
    }
}

/// Resolves with the in-flight poll, or never when there is none.
async fn next_poll(in_flight: &mut Option<BoxFuture<'static, PollResponse>>) -> PollResponse {
    match in_flight {
        Some(poll) => poll.await,
        None => std::future::pending().await,
    }
}

fn redraw(terminal: &mut Tui, session: &mut SessionController, cursor: Square) -> Result<()> {
    let view: &SessionController = session;
    let mut geometry = None;
    terminal.draw(|frame| geometry = Some(ui::draw(frame, view, cursor)))?;
    if let Some(geometry) = geometry {
        session.set_board_geometry(geometry);
    }
    Ok(())
}

async fn handle_event(event: Event, session: &mut SessionController, cursor: &mut Square) -> Flow {
    let action = match event {
        Event::Key(key) => key_action(key),
        Event::Mouse(mouse) => mouse_action(mouse),
        _ => None,
    };
    let Some(action) = action else {
        return Flow::Continue;
    };
    debug!(?action, "Input action");

    match action {
        Action::Quit => return Flow::Quit,
        Action::Reset => session.reset_session().await,
        Action::SelectCursor => session.select_square(*cursor).await,
        Action::Click { x, y } => {
            if let Some(square) = session.board().square_at(x, y) {
                *cursor = square;
                session.select_square(square).await;
            } else if let Some(square) = session.board().geometry().square_at(x, y) {
                // A disabled board originates nothing, but the session still
                // answers the click with its refusal.
                session.select_square(square).await;
            }
        }
        Action::CancelSelection => session.cancel_selection(),
        Action::MoveCursor(d_row, d_col) => *cursor = move_cursor(*cursor, d_row, d_col),
        Action::ScrollLogUp(lines) => session.scroll_log_up(lines),
        Action::ScrollLogDown(lines) => session.scroll_log_down(lines),
    }
    Flow::Continue
}
