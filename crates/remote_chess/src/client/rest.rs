//! HTTP implementation of [`GameService`].

use super::wire::{StateResponse, StatusResponse};
use super::{
    ClientError, ClientErrorKind, GameService, MoveOutcome, OpponentOutcome, ResetOutcome,
};
use crate::chess::{BoardSnapshot, Move};
use crate::config::{ClientConfig, EndpointPaths};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::{debug, info, instrument, warn};

/// Longest slice of a response body quoted in an error.
const MAX_DETAIL_LEN: usize = 200;

/// Game service client speaking JSON over HTTP.
#[derive(Debug, Clone)]
pub struct RestGameClient {
    base_url: String,
    client: reqwest::Client,
    endpoints: EndpointPaths,
}

impl RestGameClient {
    /// Creates a client from configuration.
    #[instrument(skip_all, fields(server_url = %config.server_url()))]
    pub fn from_config(config: &ClientConfig) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()?;
        info!("Created game service client");
        Ok(Self {
            base_url: config.server_url().trim_end_matches('/').to_string(),
            client,
            endpoints: config.endpoints().clone(),
        })
    }

    /// Creates a client for `base_url` with default settings.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        Self::from_config(&ClientConfig::default().with_server_url(base_url))
    }

    /// Base URL of the service.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Reads the body and decodes it as `T`.
    ///
    /// A body that decodes is returned whatever the HTTP status, because the
    /// service reports move and reset rejections as JSON on error statuses
    /// too. Callers decide what a non-2xx status means for their endpoint.
    async fn decode<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<(StatusCode, T), ClientError> {
        let status = response.status();
        let body = response.text().await?;
        debug!(status = %status, body = %body, "Service response");

        match serde_json::from_str::<T>(&body) {
            Ok(value) => Ok((status, value)),
            Err(e) if status.is_success() => Err(ClientError::malformed(e.to_string())),
            Err(_) => Err(ClientError::new(ClientErrorKind::Status {
                code: status.as_u16(),
                detail: truncate(&body),
            })),
        }
    }
}

fn truncate(body: &str) -> String {
    match body.char_indices().nth(MAX_DETAIL_LEN) {
        Some((end, _)) => format!("{}…", &body[..end]),
        None => body.to_string(),
    }
}

#[async_trait::async_trait]
impl GameService for RestGameClient {
    #[instrument(skip(self))]
    async fn fetch_state(&self) -> Result<BoardSnapshot, ClientError> {
        let response = self.client.get(self.url(self.endpoints.state())).send().await?;
        let (status, body) = Self::decode::<StateResponse>(response).await?;

        match body.board {
            Some(board) => {
                debug!(pieces = board.piece_count(), "Fetched board state");
                Ok(board)
            }
            None if status.is_success() => {
                Err(ClientError::malformed("state response has no board"))
            }
            None => {
                let detail = body.error.unwrap_or_else(|| "no board".to_string());
                warn!(status = %status, detail = %detail, "State request failed");
                Err(ClientError::new(ClientErrorKind::Status {
                    code: status.as_u16(),
                    detail,
                }))
            }
        }
    }

    #[instrument(skip(self, mv), fields(mv = %mv))]
    async fn submit_move(&self, mv: Move) -> Result<MoveOutcome, ClientError> {
        info!("Submitting move");
        let response = self
            .client
            .post(self.url(self.endpoints.submit_move()))
            .json(&mv)
            .send()
            .await?;
        let (_, body) = Self::decode::<StatusResponse>(response).await?;
        let outcome = body.into_move_outcome();
        debug!(?outcome, "Move outcome");
        Ok(outcome)
    }

    #[instrument(skip(self))]
    async fn fetch_opponent_move(&self) -> Result<OpponentOutcome, ClientError> {
        let response = self
            .client
            .get(self.url(self.endpoints.opponent_move()))
            .send()
            .await?;
        let (status, body) = Self::decode::<StatusResponse>(response).await?;
        // Only a 2xx reply can mean "not ready"; anything else stops the poll chain.
        if !status.is_success() {
            let detail = body.message.unwrap_or(body.status);
            warn!(status = %status, detail = %detail, "Opponent move request failed");
            return Err(ClientError::new(ClientErrorKind::Status {
                code: status.as_u16(),
                detail,
            }));
        }
        let outcome = body.into_opponent_outcome()?;
        debug!(?outcome, "Opponent outcome");
        Ok(outcome)
    }

    #[instrument(skip(self))]
    async fn reset_game(&self) -> Result<ResetOutcome, ClientError> {
        info!("Requesting new game");
        let response = self
            .client
            .post(self.url(self.endpoints.reset()))
            .send()
            .await?;
        let (_, body) = Self::decode::<StatusResponse>(response).await?;
        Ok(body.into_reset_outcome())
    }
}
