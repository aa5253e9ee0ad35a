//! Local synthetic transactions used when the list endpoint is unavailable

use crate::models::Transaction;
use rand::seq::SliceRandom;
use rand::Rng;
use txfeed_utils::generate_id;

pub const COUNTRIES: [&str; 7] = ["India", "USA", "UK", "Germany", "Japan", "Australia", "Canada"];

pub const MERCHANTS: [&str; 5] = ["Coffee Shop", "Online Store", "Taxi", "Bookstore", "Grocery"];

/// Count produced when the caller does not ask for a specific number
pub const DEFAULT_MOCK_COUNT: usize = 6;

/// Gap between consecutive mock timestamps
pub const MOCK_STEP_MS: i64 = 60_000;

const MIN_AMOUNT: u32 = 50;
const MAX_AMOUNT: u32 = 4549;

/// Generate `n` synthetic transactions, newest first, ending at `now_ms`.
///
/// Origin and destination are drawn independently, so self-transfers happen.
pub fn generate_mock_transactions<R: Rng + ?Sized>(
    rng: &mut R,
    n: usize,
    now_ms: i64,
) -> Vec<Transaction> {
    (0..n)
        .map(|i| Transaction {
            id: generate_id(rng, "tx_", 7),
            from_country: pick(rng, &COUNTRIES),
            to_country: pick(rng, &COUNTRIES),
            amount: format!("₹{}", rng.gen_range(MIN_AMOUNT..=MAX_AMOUNT)),
            merchant: Some(pick(rng, &MERCHANTS)),
            timestamp: Some(now_ms - i as i64 * MOCK_STEP_MS),
        })
        .collect()
}

/// Generate `n` transactions from the thread RNG and the wall clock
pub fn mock_transactions_now(n: usize) -> Vec<Transaction> {
    let now_ms = chrono::Utc::now().timestamp_millis();
    generate_mock_transactions(&mut rand::thread_rng(), n, now_ms)
}

fn pick<R: Rng + ?Sized>(rng: &mut R, items: &[&str]) -> String {
    items.choose(rng).copied().unwrap_or_default().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generates_requested_count() {
        let mut rng = StdRng::seed_from_u64(42);
        let now = 1_700_000_000_000;
        let txs = generate_mock_transactions(&mut rng, 4, now);

        assert_eq!(txs.len(), 4);
        for tx in &txs {
            assert!(!tx.id.is_empty());
            assert!(tx.id.starts_with("tx_"));
            assert!(COUNTRIES.contains(&tx.from_country.as_str()));
            assert!(COUNTRIES.contains(&tx.to_country.as_str()));
            assert!(MERCHANTS.contains(&tx.merchant_or_default()));
        }
    }

    #[test]
    fn test_timestamps_step_back_one_minute() {
        let mut rng = StdRng::seed_from_u64(1);
        let now = 1_700_000_000_000;
        let txs = generate_mock_transactions(&mut rng, DEFAULT_MOCK_COUNT, now);

        assert_eq!(txs.len(), DEFAULT_MOCK_COUNT);
        assert_eq!(txs[0].timestamp, Some(now));
        for pair in txs.windows(2) {
            let (a, b) = (pair[0].timestamp.unwrap(), pair[1].timestamp.unwrap());
            assert_eq!(a - b, MOCK_STEP_MS);
        }
    }

    #[test]
    fn test_amount_range() {
        let mut rng = StdRng::seed_from_u64(9);
        for tx in generate_mock_transactions(&mut rng, 200, 0) {
            let value: u32 = tx.amount.trim_start_matches('₹').parse().unwrap();
            assert!((MIN_AMOUNT..=MAX_AMOUNT).contains(&value));
            assert!(tx.amount.starts_with('₹'));
        }
    }

    #[test]
    fn test_zero_count() {
        let mut rng = StdRng::seed_from_u64(3);
        assert!(generate_mock_transactions(&mut rng, 0, 0).is_empty());
    }
}
