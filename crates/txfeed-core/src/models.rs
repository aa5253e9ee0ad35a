//! Wire and view models for the transaction feed

use serde::{Deserialize, Deserializer, Serialize};

/// Context tag sent with every summary request
pub const SUMMARY_CONTEXT: &str = "recent_transactions_summary";

/// Merchant label used when a transaction has none
pub const DEFAULT_MERCHANT: &str = "Merchant";

/// Placeholder shown when the summary endpoint returns no text
pub const NO_SUMMARY: &str = "No summary available.";

/// A single simulated money-movement record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    #[serde(default, deserialize_with = "text_or_number")]
    pub id: String,
    #[serde(default, deserialize_with = "text_or_number")]
    pub from_country: String,
    #[serde(default, deserialize_with = "text_or_number")]
    pub to_country: String,
    /// Pre-formatted currency amount (e.g. "₹1250")
    #[serde(default, deserialize_with = "text_or_number")]
    pub amount: String,
    #[serde(
        default,
        deserialize_with = "optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub merchant: Option<String>,
    /// Epoch milliseconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
}

impl Transaction {
    /// Merchant name, falling back to the generic label when absent or empty
    pub fn merchant_or_default(&self) -> &str {
        match self.merchant.as_deref() {
            Some(m) if !m.is_empty() => m,
            _ => DEFAULT_MERCHANT,
        }
    }
}

/// Response of the transaction list endpoint
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TransactionList {
    #[serde(default, deserialize_with = "null_as_default")]
    pub transactions: Vec<Transaction>,
    /// Opaque display value, not checked against the list
    #[serde(default, deserialize_with = "null_as_default")]
    pub total: f64,
}

/// Body of the create-transaction request
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulateRequest {
    pub simulate: bool,
}

impl Default for SimulateRequest {
    fn default() -> Self {
        Self { simulate: true }
    }
}

/// Body of the summary request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryRequest {
    pub context: String,
}

impl Default for SummaryRequest {
    fn default() -> Self {
        Self {
            context: SUMMARY_CONTEXT.to_string(),
        }
    }
}

/// Response of the summary endpoint
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SummaryResponse {
    #[serde(default)]
    pub summary: Option<String>,
}

impl SummaryResponse {
    /// Summary text, or the placeholder when missing or empty
    pub fn text(&self) -> &str {
        match self.summary.as_deref() {
            Some(s) if !s.is_empty() => s,
            _ => NO_SUMMARY,
        }
    }
}

/// Notification level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
    Info,
    Error,
}

/// Non-blocking message shown to the user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub level: NotificationLevel,
    pub title: String,
    pub message: String,
}

impl Notification {
    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Info,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            title: title.into(),
            message: message.into(),
        }
    }
}

// Text fields arrive as strings from the real endpoint but some deployments send
// bare numbers or null. One odd record must not fail the whole list.
fn text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(optional_text(deserializer)?.unwrap_or_default())
}

fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Null => None,
        serde_json::Value::String(s) => Some(s),
        other => Some(other.to_string()),
    })
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transaction_wire_names() {
        let tx: Transaction = serde_json::from_str(
            r#"{"id":"tx_1","fromCountry":"India","toCountry":"UK","amount":"₹120",
                "merchant":"Taxi","timestamp":1700000000000}"#,
        )
        .unwrap();
        assert_eq!(tx.from_country, "India");
        assert_eq!(tx.to_country, "UK");
        assert_eq!(tx.merchant_or_default(), "Taxi");
        assert_eq!(tx.timestamp, Some(1_700_000_000_000));

        let json = serde_json::to_value(&tx).unwrap();
        assert_eq!(json["fromCountry"], "India");
    }

    #[test]
    fn test_transaction_loose_fields() {
        let tx: Transaction =
            serde_json::from_str(r#"{"amount": 1250.5, "merchant": ""}"#).unwrap();
        assert_eq!(tx.amount, "1250.5");
        assert_eq!(tx.from_country, "");
        assert_eq!(tx.merchant_or_default(), DEFAULT_MERCHANT);
        assert!(tx.timestamp.is_none());
    }

    #[test]
    fn test_odd_record_does_not_fail_list() {
        let list: TransactionList = serde_json::from_str(
            r#"{"transactions": [
                {"id": 42, "fromCountry": null, "toCountry": "UK",
                 "amount": "₹60", "merchant": 7},
                {"id": "tx_2", "fromCountry": "Japan", "toCountry": "India", "merchant": null}
            ], "total": 5}"#,
        )
        .unwrap();

        assert_eq!(list.transactions.len(), 2);
        let odd = &list.transactions[0];
        assert_eq!(odd.id, "42");
        assert_eq!(odd.from_country, "");
        assert_eq!(odd.to_country, "UK");
        assert_eq!(odd.merchant_or_default(), "7");
        assert_eq!(list.transactions[1].merchant, None);
        assert_eq!(list.transactions[1].merchant_or_default(), DEFAULT_MERCHANT);
    }

    #[test]
    fn test_list_nulls() {
        let list: TransactionList =
            serde_json::from_str(r#"{"transactions": null, "total": null}"#).unwrap();
        assert!(list.transactions.is_empty());
        assert_eq!(list.total, 0.0);

        let list: TransactionList = serde_json::from_str("{}").unwrap();
        assert!(list.transactions.is_empty());
    }

    #[test]
    fn test_request_bodies() {
        assert_eq!(
            serde_json::to_string(&SimulateRequest::default()).unwrap(),
            r#"{"simulate":true}"#
        );
        assert_eq!(
            serde_json::to_string(&SummaryRequest::default()).unwrap(),
            r#"{"context":"recent_transactions_summary"}"#
        );
    }

    #[test]
    fn test_summary_text() {
        let empty = SummaryResponse { summary: Some(String::new()) };
        assert_eq!(empty.text(), NO_SUMMARY);
        assert_eq!(SummaryResponse::default().text(), NO_SUMMARY);

        let filled: SummaryResponse =
            serde_json::from_str(r#"{"summary":"Volume is up."}"#).unwrap();
        assert_eq!(filled.text(), "Volume is up.");
    }
}
