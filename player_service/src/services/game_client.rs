//! HTTP client for the game (resolution) service

use async_trait::async_trait;
use reqwest::Client;

use shared::{Choice, ComputeRequest, ComputeResponse, Outcome};

use crate::error::{PlayerError, PlayerResult};
use crate::traits::GameClient;

#[derive(Debug, Clone)]
pub struct HttpGameClient {
    client: Client,
    url: String,
}

impl HttpGameClient {
    pub fn new(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

#[async_trait]
impl GameClient for HttpGameClient {
    async fn compute(&self, player: Choice, computer: Choice) -> PlayerResult<Outcome> {
        let request = ComputeRequest {
            player_choice: Some(player),
            computer_choice: Some(computer),
        };

        let response = self
            .client
            .post(&self.url)
            .json(&request)
            .send()
            .await?
            .error_for_status()?;

        // An empty or unparseable body is as unusable as a transport failure
        let body: ComputeResponse =
            response
                .json()
                .await
                .map_err(|e| PlayerError::InvalidResponse {
                    message: format!("game service returned an unreadable result: {e}"),
                })?;

        Ok(body.result)
    }
}
