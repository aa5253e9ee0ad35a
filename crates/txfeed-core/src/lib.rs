//! Core feed model, rendering and action controller
//!
//! - models: wire types for the three remote endpoints and notifications
//! - mock: synthetic transactions for the fallback path
//! - counter: counter text and progress bar width
//! - render: HTML rows for the feed container
//! - controls: idle/busy state of the two actions
//! - source: the `FeedSource` trait implemented by the HTTP client
//! - controller: `FeedController`, tying the pieces together

pub mod controller;
pub mod controls;
pub mod counter;
pub mod error;
pub mod mock;
pub mod models;
pub mod render;
pub mod source;

pub use controller::{FeedController, FeedOrigin, FeedView, SUMMARY_TITLE, SUMMARY_UNAVAILABLE};
pub use controls::{ActionControl, BusyGuard, ControlState};
pub use counter::{format_counter, progress_percent, CounterDisplay};
pub use error::{ErrorCode, ErrorSeverity, FeedError};
pub use mock::{generate_mock_transactions, mock_transactions_now, DEFAULT_MOCK_COUNT};
pub use models::{
    Notification, NotificationLevel, SimulateRequest, SummaryRequest, SummaryResponse, Transaction,
    TransactionList,
};
pub use render::{
    render_transactions, render_transactions_in, DEFAULT_RENDER_LIMIT, EMPTY_FEED_MESSAGE,
};
pub use source::{FeedSource, SourceRef};
