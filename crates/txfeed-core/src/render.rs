//! HTML rendering for feed rows

use crate::models::Transaction;
use chrono::{Local, TimeZone};
use std::fmt::Display;
use txfeed_utils::escape_html;

/// Rows shown per render unless configured otherwise
pub const DEFAULT_RENDER_LIMIT: usize = 12;

pub const EMPTY_FEED_MESSAGE: &str =
    "No transactions yet. Click simulate to generate demo transactions.";

const INVALID_TIME: &str = "Invalid Date";

/// Render up to `limit` rows using the server's local time zone
pub fn render_transactions(transactions: &[Transaction], limit: usize) -> String {
    render_transactions_in(transactions, limit, &Local)
}

/// Render up to `limit` rows, formatting times in `tz`.
///
/// The output replaces the whole list container; an empty slice yields only
/// the placeholder paragraph.
pub fn render_transactions_in<Tz>(transactions: &[Transaction], limit: usize, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    if transactions.is_empty() {
        return format!("<p class=\"muted\">{}</p>", EMPTY_FEED_MESSAGE);
    }

    transactions
        .iter()
        .take(limit)
        .map(|tx| render_row(tx, tz))
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_row<Tz>(tx: &Transaction, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    format!(
        r#"<div class="tx-item">
  <div>
    <div><strong>{} → {}</strong></div>
    <div class="meta">{} • {}</div>
  </div>
  <div class="meta">{}</div>
</div>"#,
        escape_html(&tx.from_country),
        escape_html(&tx.to_country),
        escape_html(&tx.amount),
        escape_html(tx.merchant_or_default()),
        format_time_of_day(tx.timestamp, tz)
    )
}

/// Time of day for an epoch-millisecond timestamp, e.g. "3:04:05 PM"
pub fn format_time_of_day<Tz>(timestamp: Option<i64>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    timestamp
        .and_then(|ms| tz.timestamp_millis_opt(ms).single())
        .map(|dt| dt.format("%-I:%M:%S %p").to_string())
        .unwrap_or_else(|| INVALID_TIME.to_string())
}
