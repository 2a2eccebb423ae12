//! Mock Prediction Service
//!
//! An axum server bound to an ephemeral localhost port that answers
//! `POST /api/predict` with scripted replies. Every request body and its
//! `x-request-id` header are recorded so tests can assert on the wire format.
//!
//! ```rust,ignore
//! let server = MockPredictionServer::start(MockReply::ok(PredictionFixtures::high_risk_json())).await?;
//! let adapter = HttpPredictionAdapter::new(PredictionClientConfig::new(server.base_url()))?;
//! ```

use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use std::collections::VecDeque;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tower_http::trace::TraceLayer;

/// One scripted answer
#[derive(Debug, Clone, PartialEq)]
pub enum MockReply {
    /// JSON body with the given status
    Json { status: u16, body: Value },
    /// Arbitrary text body with the given status
    Text { status: u16, body: String },
}

impl MockReply {
    /// `200 OK` with a JSON body
    pub fn ok(body: Value) -> Self {
        MockReply::Json { status: 200, body }
    }

    /// JSON body with an error status
    pub fn error(status: u16, body: Value) -> Self {
        MockReply::Json { status, body }
    }

    pub fn text(status: u16, body: impl Into<String>) -> Self {
        MockReply::Text { status, body: body.into() }
    }
}

impl IntoResponse for MockReply {
    fn into_response(self) -> Response {
        let status_of = |code| StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        match self {
            MockReply::Json { status, body } => (status_of(status), Json(body)).into_response(),
            MockReply::Text { status, body } => {
                (status_of(status), [(header::CONTENT_TYPE, "text/plain")], body).into_response()
            }
        }
    }
}

/// A request seen by the mock service
#[derive(Debug, Clone, PartialEq)]
pub struct ReceivedRequest {
    /// Parsed JSON body, `Value::Null` when the body was not JSON
    pub body: Value,
    pub request_id: Option<String>,
    pub content_type: Option<String>,
}

/// Shared state behind the mock router
#[derive(Debug, Clone)]
pub struct MockState {
    replies: Arc<Mutex<VecDeque<MockReply>>>,
    fallback: MockReply,
    received: Arc<Mutex<Vec<ReceivedRequest>>>,
}

impl MockState {
    /// State answering every request with `fallback` unless a reply is queued
    pub fn new(fallback: MockReply) -> Self {
        Self {
            replies: Arc::new(Mutex::new(VecDeque::new())),
            fallback,
            received: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn enqueue(&self, reply: MockReply) {
        self.replies.lock().expect("replies lock").push_back(reply);
    }

    pub fn received(&self) -> Vec<ReceivedRequest> {
        self.received.lock().expect("received lock").clone()
    }
}

/// Creates the mock router
pub fn mock_router(state: MockState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/predict", post(predict))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}

async fn predict(State(state): State<MockState>, headers: HeaderMap, body: Bytes) -> MockReply {
    let text_header = |name: &str| {
        headers
            .get(name)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string)
    };

    let request = ReceivedRequest {
        body: serde_json::from_slice(&body).unwrap_or(Value::Null),
        request_id: text_header("x-request-id"),
        content_type: text_header(header::CONTENT_TYPE.as_str()),
    };
    tracing::debug!(?request.request_id, "mock prediction request");
    state.received.lock().expect("received lock").push(request);

    let queued = state.replies.lock().expect("replies lock").pop_front();
    queued.unwrap_or_else(|| state.fallback.clone())
}

/// A running mock prediction service. The server stops when this is dropped.
#[derive(Debug)]
pub struct MockPredictionServer {
    addr: SocketAddr,
    state: MockState,
    handle: JoinHandle<()>,
}

impl MockPredictionServer {
    /// Binds `127.0.0.1:0` and starts serving in the background
    pub async fn start(fallback: MockReply) -> std::io::Result<Self> {
        let state = MockState::new(fallback);
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let app = mock_router(state.clone());

        let handle = tokio::spawn(async move {
            if let Err(err) = axum::serve(listener, app).await {
                tracing::error!(error = %err, "mock prediction server stopped");
            }
        });

        Ok(Self { addr, state, handle })
    }

    /// Base URL to configure clients with, e.g. `http://127.0.0.1:41234`
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn enqueue(&self, reply: MockReply) {
        self.state.enqueue(reply);
    }

    pub fn received(&self) -> Vec<ReceivedRequest> {
        self.state.received()
    }
}

impl Drop for MockPredictionServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Base URL of a localhost port with nothing listening on it
pub fn unreachable_base_url() -> std::io::Result<String> {
    let listener = std::net::TcpListener::bind("127.0.0.1:0")?;
    let addr = listener.local_addr()?;
    drop(listener);
    Ok(format!("http://{addr}"))
}
