//! HTTP client for the remote feed endpoints
//!
//! `HttpFeedSource` implements [`FeedSource`] over reqwest. Every failure is
//! mapped onto the three-way `FeedError` taxonomy: transport, status, decode.

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use serde::de::DeserializeOwned;
use txfeed_config::UpstreamConfig;
use txfeed_core::{
    FeedError, FeedSource, SimulateRequest, SummaryRequest, SummaryResponse, TransactionList,
};

/// Feed source backed by the configured remote functions
pub struct HttpFeedSource {
    http_client: HttpClient,
    upstream: UpstreamConfig,
}

impl HttpFeedSource {
    /// Create a new client for the given upstream
    pub fn new(upstream: UpstreamConfig) -> Self {
        Self::with_client(HttpClient::new(), upstream)
    }

    /// Create a client reusing an existing reqwest client
    pub fn with_client(http_client: HttpClient, upstream: UpstreamConfig) -> Self {
        Self {
            http_client,
            upstream,
        }
    }

    /// Send a request and return the response if its status is 2xx
    async fn send(
        &self,
        request: reqwest::RequestBuilder,
        url: &str,
    ) -> Result<reqwest::Response, FeedError> {
        let response = request.send().await.map_err(|e| FeedError::Transport {
            message: format!("{}: {}", url, e),
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            log::debug!("{} returned {}: {}", url, status, body);
            return Err(FeedError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response)
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, FeedError> {
        let body = response.text().await.map_err(|e| FeedError::Transport {
            message: format!("Failed to read body: {}", e),
        })?;

        serde_json::from_str(&body).map_err(|e| FeedError::Decode {
            message: e.to_string(),
        })
    }
}

#[async_trait]
impl FeedSource for HttpFeedSource {
    async fn fetch_transactions(&self) -> Result<TransactionList, FeedError> {
        let url = self.upstream.transactions_url();
        log::debug!("GET {}", url);
        let response = self.send(self.http_client.get(&url), &url).await?;
        Self::decode(response).await
    }

    async fn create_transaction(&self, request: &SimulateRequest) -> Result<(), FeedError> {
        let url = self.upstream.create_url();
        log::debug!("POST {}", url);
        self.send(self.http_client.post(&url).json(request), &url).await?;
        Ok(())
    }

    async fn generate_summary(
        &self,
        request: &SummaryRequest,
    ) -> Result<SummaryResponse, FeedError> {
        let url = self.upstream.summary_url();
        log::debug!("POST {}", url);
        let response = self.send(self.http_client.post(&url).json(request), &url).await?;
        Self::decode(response).await
    }
}
