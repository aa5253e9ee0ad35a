//! Action endpoints (HTMX)

use crate::{ApiError, AppState, FEED_CONTAINER_ID, NOTIFICATIONS_ID};
use axum::extract::State;
use axum::response::Html;

/// HTMX: simulate a transaction.
///
/// On success the feed container and counter are refreshed out of band.
/// Upstream failures only reset the button.
pub async fn htmx_simulate(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let controller = &state.controller;
    let result = controller.simulate().await;

    let mut html = crate::simulate_button(controller);
    match result {
        Ok(view) => {
            html.push_str(&format!(
                "\n<div id='{}' hx-swap-oob='innerHTML'>{}</div>\n{}",
                FEED_CONTAINER_ID,
                view.rows_html,
                crate::render_counter(&view.counter, true)
            ));
        }
        Err(e) if e.is_busy() => return Err(e.into()),
        Err(_) => {}
    }

    Ok(Html(html))
}

/// HTMX: request a summary; the outcome is prepended to the notification region
pub async fn htmx_summary(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let controller = &state.controller;
    let notification = controller.generate_summary().await?;

    Ok(Html(format!(
        "{}\n<div hx-swap-oob='afterbegin:#{}'>{}</div>",
        crate::summary_button(controller),
        NOTIFICATIONS_ID,
        crate::render_notification(&notification)
    )))
}
