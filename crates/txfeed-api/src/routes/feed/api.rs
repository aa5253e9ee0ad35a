//! Feed endpoints - JSON view and HTMX fragment
//!
//! Both run a full fetch-and-render pass; a failing upstream yields the
//! fallback view rather than an error.

use crate::AppState;
use axum::extract::State;
use axum::response::Html;
use axum::Json;
use txfeed_core::FeedView;

/// Current feed as JSON (rows HTML omitted)
pub async fn api_feed(State(state): State<AppState>) -> Json<FeedView> {
    Json(state.controller.fetch_and_render().await)
}

/// HTMX: feed rows for the list container, plus the counter out of band
pub async fn htmx_feed(State(state): State<AppState>) -> Html<String> {
    let view = state.controller.fetch_and_render().await;
    log::debug!("Rendered {} rows ({:?})", view.transactions.len(), view.origin);
    Html(crate::render_feed_fragment(&view))
}
