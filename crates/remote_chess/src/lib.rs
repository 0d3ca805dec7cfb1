//! Remote Chess - terminal client for a chess service with an automated opponent
//!
//! The service owns the rules and the opponent. This crate owns the session:
//! whose turn it is, the player's pending selection, submitting moves,
//! waiting for the opponent's reply, and keeping the drawn board in step with
//! the service's board.
//!
//! # Architecture
//!
//! - **chess**: squares, piece codes, board snapshots and moves
//! - **client**: the [`GameService`] trait and its HTTP implementation
//! - **view**: [`BoardView`] and [`MoveLog`], driven by the controller
//! - **session**: [`SessionController`], the turn state machine
//! - **tui**: ratatui front end
//!
//! # Example
//!
//! ```no_run
//! use remote_chess::{ClientConfig, RestGameClient, SessionController, Square};
//! use std::sync::Arc;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = ClientConfig::default();
//! let client = RestGameClient::from_config(&config)?;
//! let mut session = SessionController::new(Arc::new(client), config.retry_policy());
//!
//! session.start().await;
//! session.select_square(Square::new(6, 4).unwrap()).await;
//! session.select_square(Square::new(4, 4).unwrap()).await;
//! session.await_opponent().await;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod chess;
mod client;
mod config;
mod session;
mod tui;
mod view;

// Crate-level exports - Chess types
pub use chess::{BOARD_SIZE, BoardSnapshot, ChessParseError, Move, PieceCode, Role, Side, Square};

// Crate-level exports - Game service client
pub use client::{
    ClientError, ClientErrorKind, GameService, MoveOutcome, OpponentOutcome, ResetOutcome,
    RestGameClient,
};

// Crate-level exports - Configuration
pub use config::{ClientConfig, ConfigError, EndpointPaths, SERVER_URL_ENV};

// Crate-level exports - Session
pub use session::{PollRequest, PollResponse, PollTicket, RetryPolicy, SessionController, TurnState};

// Crate-level exports - Views
pub use view::{BoardGeometry, BoardView, Cell, LogEntry, LogKind, MoveLog, Shade, glyph};

// Crate-level exports - Terminal UI
pub use tui::run_tui;
