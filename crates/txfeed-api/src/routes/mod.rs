//! Route modules for the API server
//!
//! - feed: feed page, feed fragment, JSON view
//! - actions: simulate and summary actions
//!
//! Each module follows a consistent structure:
//! - mod.rs: Module declaration and exports
//! - api.rs: JSON API and HTMX endpoints
//! - page.rs: full page rendering

pub mod actions;
pub mod feed;

#[cfg(test)]
mod tests;
