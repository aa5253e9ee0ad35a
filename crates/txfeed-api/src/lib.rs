//! HTTP server with HTMX support
//!
//! Routes are organized into modules:
//! - routes::feed: page, feed fragment and JSON view
//! - routes::actions: simulate and summary buttons

pub mod error;
pub mod routes;

use anyhow::Context;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use txfeed_config::Config;
use txfeed_core::{
    ActionControl, CounterDisplay, FeedController, FeedView, Notification, NotificationLevel,
};
use txfeed_utils::escape_html;

pub use error::ApiError;

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub controller: Arc<FeedController>,
    pub config: Config,
}

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    use routes::actions::{htmx_simulate, htmx_summary};
    use routes::feed::{api_feed, htmx_feed, page_index};

    Router::new()
        // API endpoints
        .route("/api/health", get(health_check))
        .route("/api/feed", get(api_feed))
        // Page
        .route("/", get(page_index))
        // HTMX partials
        .route("/feed", get(htmx_feed))
        .route("/actions/simulate", post(htmx_simulate))
        .route("/actions/summary", post(htmx_summary))
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

// ==================== Template Functions ====================

pub const FEED_CONTAINER_ID: &str = "tx-list";
pub const COUNTER_ID: &str = "tx-counter";
pub const NOTIFICATIONS_ID: &str = "notifications";

/// Base HTML template
pub fn base_html(title: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{} - txfeed</title>
    <script src="https://unpkg.com/htmx.org@1.9.10"></script>
    <script src="https://cdn.tailwindcss.com"></script>
    <style>
        .tx-item {{ display: flex; justify-content: space-between; padding: 0.75rem; }}
        .tx-item {{ border-bottom: 1px solid #f3f4f6; }}
        .meta {{ color: #6b7280; font-size: 0.875rem; }}
        .muted {{ color: #9ca3af; text-align: center; }}
        .busy-label {{ display: none; }}
        .htmx-request .busy-label {{ display: inline; }}
        .htmx-request .idle-label {{ display: none; }}
        button[disabled] {{ opacity: 0.6; cursor: not-allowed; }}
    </style>
</head>
<body class="bg-gray-50 text-gray-900">
    {}
</body>
</html>"#,
        title, content
    )
}

/// Action button, always rendered idle
///
/// Control state is shared by every tab. HTMX disables the button and shows
/// the busy label only in the tab whose request is in flight.
pub fn render_button(control: &ActionControl, route: &str, style: &str) -> String {
    format!(
        r#"<button id='{name}-btn' hx-post='{route}' hx-target='this' hx-swap='outerHTML'
    hx-disabled-elt='this' class='px-4 py-2 rounded-lg {style}'>
    <span class='idle-label'>{label}</span><span class='busy-label'>{busy}</span>
</button>"#,
        name = control.name(),
        route = route,
        style = style,
        label = control.idle_label(),
        busy = control.busy_label(),
    )
}

pub fn simulate_button(controller: &FeedController) -> String {
    render_button(
        controller.simulate_control(),
        "/actions/simulate",
        "bg-indigo-600 text-white hover:bg-indigo-700",
    )
}

pub fn summary_button(controller: &FeedController) -> String {
    render_button(
        controller.summary_control(),
        "/actions/summary",
        "bg-white border text-gray-700 hover:bg-gray-50",
    )
}

/// Counter and progress bar; `oob` marks it for an out-of-band swap
pub fn render_counter(counter: &CounterDisplay, oob: bool) -> String {
    format!(
        r#"<div id='{}'{} class='mb-6 p-4 bg-white rounded-xl shadow-sm'>
    <p class='text-sm text-gray-500'>Transaction volume</p>
    <p id='txCount' class='text-3xl font-bold'>{}</p>
    <div class='w-full bg-gray-100 rounded h-2 mt-2'>
        <div id='txProgress' class='bg-indigo-500 h-2 rounded' style='width: {}%'></div>
    </div>
</div>"#,
        COUNTER_ID,
        if oob { " hx-swap-oob='true'" } else { "" },
        counter.display,
        counter.percent
    )
}

/// Feed rows plus the out-of-band counter, for swapping into the feed container
pub fn render_feed_fragment(view: &FeedView) -> String {
    format!("{}\n{}", view.rows_html, render_counter(&view.counter, true))
}

/// Dismissable toast replacing the blocking alert
pub fn render_notification(notification: &Notification) -> String {
    let tone = match notification.level {
        NotificationLevel::Info => "border-indigo-200 bg-white",
        NotificationLevel::Error => "border-red-200 bg-red-50 text-red-800",
    };
    format!(
        r#"<div class='toast w-80 p-4 border rounded-lg shadow-lg {}' role='status'>
    <div class='flex items-center justify-between mb-1'>
        <strong>{}</strong>
        <button onclick='this.closest(".toast").remove()'
            class='text-gray-400 hover:text-gray-600'>&times;</button>
    </div>
    <p class='text-sm whitespace-pre-wrap'>{}</p>
</div>"#,
        tone,
        escape_html(&notification.title),
        escape_html(&notification.message)
    )
}

/// Start the HTTP server
///
/// Binds to the configured address and serves until Ctrl-C.
pub async fn start_server(config: Config, controller: Arc<FeedController>) -> anyhow::Result<()> {
    let addr = config.bind_addr();
    let state = AppState { controller, config };

    let router = create_router(state);

    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    log::info!("Starting txfeed server on http://{}", addr);
    log::info!("Available routes:");
    log::info!("  - / (Feed page)");
    log::info!("  - /feed, /actions/* (HTMX fragments)");
    log::info!("  - /api/* (JSON endpoints)");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    log::info!("Server stopped gracefully");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for shutdown signal: {}", e);
    }
}
