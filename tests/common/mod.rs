//! Common test utilities

use std::collections::HashSet;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};

/// Recorded state of the mock ledger service
#[derive(Default)]
pub struct MockLedgerState {
    pub ledgers: Mutex<HashSet<String>>,
    /// (ledger, request body) in arrival order
    pub transactions: Mutex<Vec<(String, Value)>>,
    /// Transaction references answered with 400
    pub rejected_references: Mutex<HashSet<String>>,
    /// Transaction requests still to be answered with 429
    pub throttled_requests: AtomicU32,
    /// Every create-transaction request received, throttled ones included
    pub transaction_hits: AtomicU32,
}

impl MockLedgerState {
    /// Answer the next `count` transaction requests with 429
    pub fn throttle(&self, count: u32) {
        self.throttled_requests.store(count, Ordering::SeqCst);
    }

    pub fn hits(&self) -> u32 {
        self.transaction_hits.load(Ordering::SeqCst)
    }

    pub fn posted_references(&self, ledger: &str) -> Vec<String> {
        self.transactions
            .lock()
            .unwrap()
            .iter()
            .filter(|(l, _)| l == ledger)
            .map(|(_, body)| body["reference"].as_str().unwrap_or_default().to_string())
            .collect()
    }
}

/// A running mock ledger and the base URL of its v2 API
pub struct MockLedger {
    pub base_url: String,
    pub state: Arc<MockLedgerState>,
}

async fn info() -> Json<Value> {
    Json(json!({ "server": "mock-ledger", "version": "v2" }))
}

async fn create_ledger(
    State(state): State<Arc<MockLedgerState>>,
    Path(ledger): Path<String>,
    Json(_body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let mut ledgers = state.ledgers.lock().unwrap();
    if !ledgers.insert(ledger.clone()) {
        return (
            StatusCode::CONFLICT,
            Json(json!({
                "errorCode": "LEDGER_ALREADY_EXISTS",
                "errorMessage": format!("ledger {ledger} already exists"),
            })),
        );
    }
    (StatusCode::CREATED, Json(json!({ "name": ledger })))
}

async fn create_transaction(
    State(state): State<Arc<MockLedgerState>>,
    Path(ledger): Path<String>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    state.transaction_hits.fetch_add(1, Ordering::SeqCst);
    let throttled = state
        .throttled_requests
        .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
        .is_ok();
    if throttled {
        return (
            StatusCode::TOO_MANY_REQUESTS,
            Json(json!({ "errorCode": "TOO_MANY_REQUESTS", "errorMessage": "slow down" })),
        );
    }

    if !state.ledgers.lock().unwrap().contains(&ledger) {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({ "errorCode": "NOT_FOUND", "errorMessage": "ledger not found" })),
        );
    }

    let reference = body["reference"].as_str().unwrap_or_default().to_string();
    if state.rejected_references.lock().unwrap().contains(&reference) {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "errorCode": "VALIDATION", "errorMessage": format!("rejected {reference}") })),
        );
    }

    state.transactions.lock().unwrap().push((ledger, body.clone()));
    (StatusCode::OK, Json(json!({ "data": body })))
}

/// Start a mock ledger on an ephemeral local port
pub async fn spawn_mock_ledger() -> MockLedger {
    let state = Arc::new(MockLedgerState::default());

    let app = Router::new()
        .route("/v2/_/info", get(info))
        .route("/v2/:ledger", post(create_ledger))
        .route("/v2/:ledger/transactions", post(create_transaction))
        .with_state(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind mock ledger");
    let addr = listener.local_addr().expect("Failed to read local addr");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Mock ledger crashed");
    });

    MockLedger {
        base_url: format!("http://{addr}/v2"),
        state,
    }
}
