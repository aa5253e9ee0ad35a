//! Transaction feed controller
//!
//! Owns the data source, the feed settings and the two action controls.
//! Fetching returns an explicit `Result`; the fallback to synthetic data is
//! applied here, by the caller of [`FeedController::load_feed`].

use crate::controls::ActionControl;
use crate::counter::CounterDisplay;
use crate::error::FeedError;
use crate::mock::mock_transactions_now;
use crate::models::{Notification, SimulateRequest, SummaryRequest, Transaction, TransactionList};
use crate::render::render_transactions;
use crate::source::SourceRef;
use serde::{Deserialize, Serialize};
use txfeed_config::FeedConfig;

pub const SUMMARY_TITLE: &str = "AI Summary";

pub const SUMMARY_UNAVAILABLE: &str = "AI summary not available. See console for details.";

/// Where the rendered rows came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedOrigin {
    Remote,
    Fallback,
}

/// Result of one fetch-and-render pass
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedView {
    pub origin: FeedOrigin,
    /// Rows as rendered, already capped at the render limit
    pub transactions: Vec<Transaction>,
    #[serde(skip)]
    pub rows_html: String,
    pub counter: CounterDisplay,
}

pub struct FeedController {
    source: SourceRef,
    settings: FeedConfig,
    simulate: ActionControl,
    summary: ActionControl,
}

impl FeedController {
    pub fn new(source: SourceRef, settings: FeedConfig) -> Self {
        Self {
            source,
            settings,
            simulate: ActionControl::simulate(),
            summary: ActionControl::summary(),
        }
    }

    pub fn simulate_control(&self) -> &ActionControl {
        &self.simulate
    }

    pub fn summary_control(&self) -> &ActionControl {
        &self.summary
    }

    /// Fetch the remote list without any fallback
    pub async fn load_feed(&self) -> Result<TransactionList, FeedError> {
        self.source.fetch_transactions().await
    }

    /// Synthetic list used when the remote list is unavailable
    pub fn fallback_list(&self) -> TransactionList {
        let transactions = mock_transactions_now(self.settings.fallback_count);
        let total = CounterDisplay::fallback(transactions.len()).total;
        TransactionList { transactions, total }
    }

    /// Fetch the list and render it, substituting mock data on any failure
    pub async fn fetch_and_render(&self) -> FeedView {
        match self.load_feed().await {
            Ok(list) => {
                log::debug!(
                    "Fetched {} transactions (total {})",
                    list.transactions.len(),
                    list.total
                );
                self.view(list, FeedOrigin::Remote)
            }
            Err(e) => {
                log::warn!("Fetch error, using fallback: {}", e);
                self.view(self.fallback_list(), FeedOrigin::Fallback)
            }
        }
    }

    /// Simulate a transaction and refresh the feed on success.
    ///
    /// Failures are logged and returned; no fallback row is created.
    pub async fn simulate(&self) -> Result<FeedView, FeedError> {
        let _busy = self.simulate.try_begin()?;

        if let Err(e) = self.source.create_transaction(&SimulateRequest::default()).await {
            log::error!("Simulate failed: {}", e);
            return Err(e);
        }

        log::info!("Simulated transaction, refreshing feed");
        Ok(self.fetch_and_render().await)
    }

    /// Request a summary and turn the outcome into a notification.
    ///
    /// Only a refused trigger is returned as an error; remote failures become
    /// the fixed error notification.
    pub async fn generate_summary(&self) -> Result<Notification, FeedError> {
        let _busy = self.summary.try_begin()?;

        match self.source.generate_summary(&SummaryRequest::default()).await {
            Ok(response) => Ok(Notification::info(SUMMARY_TITLE, response.text())),
            Err(e) => {
                log::error!("AI summary failed: {}", e);
                Ok(Notification::error(SUMMARY_TITLE, SUMMARY_UNAVAILABLE))
            }
        }
    }

    fn view(&self, list: TransactionList, origin: FeedOrigin) -> FeedView {
        let limit = self.settings.render_limit;
        let rows_html = render_transactions(&list.transactions, limit);
        let mut transactions = list.transactions;
        transactions.truncate(limit);

        FeedView {
            origin,
            transactions,
            rows_html,
            counter: CounterDisplay::new(list.total),
        }
    }
}
