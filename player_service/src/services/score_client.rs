//! HTTP client for the score ledger service

use async_trait::async_trait;
use reqwest::Client;

use shared::ScoreEntry;

use crate::error::PlayerResult;
use crate::traits::ScoreClient;

#[derive(Debug, Clone)]
pub struct HttpScoreClient {
    client: Client,
    url: String,
}

impl HttpScoreClient {
    pub fn new(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

#[async_trait]
impl ScoreClient for HttpScoreClient {
    async fn record(&self, entry: ScoreEntry) -> PlayerResult<()> {
        self.client
            .post(&self.url)
            .json(&entry)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}
