//! Remote data source seam

use crate::error::FeedError;
use crate::models::{SimulateRequest, SummaryRequest, SummaryResponse, TransactionList};
use async_trait::async_trait;
use std::sync::Arc;

/// The three remote operations backing the feed
#[async_trait]
pub trait FeedSource: Send + Sync {
    /// GET the transaction list
    async fn fetch_transactions(&self) -> Result<TransactionList, FeedError>;

    /// POST a simulate request; the response body is ignored
    async fn create_transaction(&self, request: &SimulateRequest) -> Result<(), FeedError>;

    /// POST a summary request
    async fn generate_summary(
        &self,
        request: &SummaryRequest,
    ) -> Result<SummaryResponse, FeedError>;
}

/// Shared source reference
pub type SourceRef = Arc<dyn FeedSource>;
