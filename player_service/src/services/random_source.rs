//! HTTP client for the remote randomness source

use async_trait::async_trait;
use reqwest::Client;

use shared::RandomNumberResponse;

use crate::error::PlayerResult;
use crate::traits::RandomSource;

/// Calls the external random-number endpoint.
///
/// Range checking happens in the orchestrator; this client only fetches and
/// decodes the body.
#[derive(Debug, Clone)]
pub struct HttpRandomSource {
    client: Client,
    url: String,
}

impl HttpRandomSource {
    pub fn new(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

#[async_trait]
impl RandomSource for HttpRandomSource {
    async fn random_number(&self) -> PlayerResult<i64> {
        let response = self.client.get(&self.url).send().await?.error_for_status()?;
        let body: RandomNumberResponse = response.json().await?;
        Ok(body.random_number)
    }
}
