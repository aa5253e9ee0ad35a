use crate::{create_router, AppState};
use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use std::sync::Arc;
use tokio::sync::Notify;
use tower::ServiceExt;
use txfeed_config::Config;
use txfeed_core::{
    FeedController, FeedError, FeedSource, SimulateRequest, SummaryRequest, SummaryResponse,
    Transaction, TransactionList, SUMMARY_UNAVAILABLE,
};

struct StubSource {
    healthy: bool,
    /// Holds `create_transaction` until notified
    gate: Option<Arc<Notify>>,
}

fn down() -> FeedError {
    FeedError::Transport {
        message: "connection refused".to_string(),
    }
}

#[async_trait]
impl FeedSource for StubSource {
    async fn fetch_transactions(&self) -> Result<TransactionList, FeedError> {
        if !self.healthy {
            return Err(down());
        }
        Ok(TransactionList {
            transactions: vec![Transaction {
                id: "tx_1".to_string(),
                from_country: "Germany".to_string(),
                to_country: "Australia".to_string(),
                amount: "₹1200".to_string(),
                merchant: None,
                timestamp: Some(1_700_000_000_000),
            }],
            total: 50_000_000.0,
        })
    }

    async fn create_transaction(&self, _request: &SimulateRequest) -> Result<(), FeedError> {
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        if self.healthy {
            Ok(())
        } else {
            Err(down())
        }
    }

    async fn generate_summary(
        &self,
        _request: &SummaryRequest,
    ) -> Result<SummaryResponse, FeedError> {
        if self.healthy {
            Ok(SummaryResponse {
                summary: Some("Steady volume.".to_string()),
            })
        } else {
            Err(down())
        }
    }
}

fn controller(source: StubSource) -> Arc<FeedController> {
    Arc::new(FeedController::new(Arc::new(source), Config::default().feed))
}

fn router_for(controller: Arc<FeedController>) -> Router {
    create_router(AppState {
        controller,
        config: Config::default(),
    })
}

fn router(healthy: bool) -> Router {
    router_for(controller(StubSource {
        healthy,
        gate: None,
    }))
}

async fn call(router: Router, method: &str, uri: &str) -> (StatusCode, String) {
    let response = router
        .oneshot(Request::builder().method(method).uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn test_health() {
    let (status, body) = call(router(true), "GET", "/api/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "OK");
}

#[tokio::test]
async fn test_index_page() {
    let (status, body) = call(router(true), "GET", "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("hx-get='/feed'"));
    assert!(body.contains("Simulate Transaction"));
    assert!(body.contains("Generate Summary (AI)"));
    assert!(body.contains("id='year'"));
}

#[tokio::test]
async fn test_feed_fragment_remote() {
    let (status, body) = call(router(true), "GET", "/feed").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.matches("class=\"tx-item\"").count(), 1);
    assert!(body.contains("Germany → Australia"));
    assert!(body.contains("₹1200 • Merchant"));
    assert!(body.contains("width: 5%"));
}

#[tokio::test]
async fn test_feed_fragment_fallback() {
    let (status, body) = call(router(false), "GET", "/feed").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.matches("class=\"tx-item\"").count(), 4);
    assert!(body.contains(">4.8B<"));
}

#[tokio::test]
async fn test_api_feed_json() {
    let (status, body) = call(router(false), "GET", "/api/feed").await;
    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["origin"], "fallback");
    assert_eq!(json["transactions"].as_array().unwrap().len(), 4);
    assert_eq!(json["counter"]["percent"], 80);
}

#[tokio::test]
async fn test_simulate_refreshes_feed() {
    let (status, body) = call(router(true), "POST", "/actions/simulate").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<span class='idle-label'>Simulate Transaction</span>"));
    assert!(body.contains("id='tx-list' hx-swap-oob='innerHTML'"));
    assert!(body.contains("Germany → Australia"));
}

#[tokio::test]
async fn test_simulate_failure_only_resets_button() {
    let (status, body) = call(router(false), "POST", "/actions/simulate").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<span class='idle-label'>Simulate Transaction</span>"));
    assert!(!body.contains("hx-swap-oob"));
    assert!(!body.contains(" disabled"));
}

#[tokio::test]
async fn test_summary_success() {
    let (status, body) = call(router(true), "POST", "/actions/summary").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("afterbegin:#notifications"));
    assert!(body.contains("Steady volume."));
}

#[tokio::test]
async fn test_summary_failure_shows_fallback_text() {
    let (status, body) = call(router(false), "POST", "/actions/summary").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(SUMMARY_UNAVAILABLE));
    assert!(body.contains("<span class='idle-label'>Generate Summary (AI)</span>"));
    assert!(!body.contains(" disabled"));
}

#[tokio::test]
async fn test_page_during_pending_simulate_keeps_buttons_usable() {
    let gate = Arc::new(Notify::new());
    let controller = controller(StubSource {
        healthy: true,
        gate: Some(gate.clone()),
    });
    let app = router_for(controller.clone());

    let pending = tokio::spawn(call(app.clone(), "POST", "/actions/simulate"));
    while controller.simulate_control().is_enabled() {
        tokio::task::yield_now().await;
    }

    // Another tab loads the page while the first request is in flight
    let (status, page) = call(app.clone(), "GET", "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(page.contains("<span class='idle-label'>Simulate Transaction</span>"));
    assert!(!page.contains(" disabled"));

    // and its click is refused without swapping anything
    let (status, _) = call(app.clone(), "POST", "/actions/simulate").await;
    assert_eq!(status, StatusCode::CONFLICT);

    gate.notify_one();
    let (status, body) = pending.await.unwrap();
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<span class='idle-label'>Simulate Transaction</span>"));
    assert!(body.contains("id='tx-list' hx-swap-oob='innerHTML'"));
    assert!(controller.simulate_control().is_enabled());
}
