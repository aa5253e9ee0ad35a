//! Feed routes - page, rows fragment, JSON view
//!
//! Structure:
//! - api.rs: JSON API and HTMX endpoints
//! - page.rs: Full page rendering

pub mod api;
pub mod page;

pub use api::{api_feed, htmx_feed};
pub use page::page_index;
