//! Action routes - simulate a transaction, request a summary
//!
//! Both respond with the button in its idle state. Results travel as
//! out-of-band swaps: a refreshed feed for simulate, a toast for summary.

pub mod api;

pub use api::{htmx_simulate, htmx_summary};
