//! Feed page rendering

use crate::{AppState, FEED_CONTAINER_ID, NOTIFICATIONS_ID};
use axum::extract::State;
use axum::response::Html;
use chrono::Datelike;
use txfeed_core::CounterDisplay;

/// Main page. The list container loads its rows via `/feed` on page load.
pub async fn page_index(State(state): State<AppState>) -> Html<String> {
    let controller = &state.controller;
    let year = chrono::Local::now().year();

    let inner_content = format!(
        r#"<div class='max-w-3xl mx-auto p-6'>
    <header class='mb-6'>
        <h1 class='text-2xl font-bold text-indigo-600'>Transaction Feed</h1>
        <p class='text-gray-500'>Simulated cross-border payments, latest {limit} shown</p>
    </header>
    {counter}
    <div class='flex gap-3 mb-6'>
        {simulate}
        {summary}
    </div>
    <div id='{notifications}' class='fixed top-4 right-4 space-y-2 z-50'></div>
    <div id='{feed}' class='bg-white rounded-xl shadow-sm p-4'
        hx-get='/feed' hx-trigger='load' hx-swap='innerHTML'>
        <p class='muted'>Loading...</p>
    </div>
    <footer class='mt-8 text-sm text-gray-400'>
        &copy; <span id='year'>{year}</span> txfeed demo
    </footer>
</div>"#,
        limit = state.config.feed.render_limit,
        counter = crate::render_counter(&CounterDisplay::new(0.0), false),
        simulate = crate::simulate_button(controller),
        summary = crate::summary_button(controller),
        notifications = NOTIFICATIONS_ID,
        feed = FEED_CONTAINER_ID,
        year = year,
    );

    Html(crate::base_html("Feed", &inner_content))
}
