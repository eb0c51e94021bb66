//! Test helpers for integration tests
//!
//! Provides a stub REST server that records every request and answers with
//! canned responses, plus client constructors pointed at it.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Once};

use anyhow::Result;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Router;
use parking_lot::Mutex;
use poorroom_client::ApiClient;
use poorroom_common::{ClientConfig, TracingConfig};
use poorroom_query::QueryContext;
use serde_json::Value;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Bearer token every test client sends
pub const TEST_TOKEN: &str = "test-token";

static TRACING: Once = Once::new();

/// Install a test subscriber once per process
pub fn init_test_tracing() {
    TRACING.call_once(|| {
        let _ = poorroom_common::try_init_tracing_with_config(TracingConfig::default());
    });
}

/// A request as the stub server saw it
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub query: Option<String>,
    pub authorization: Option<String>,
    pub content_type: Option<String>,
    pub body: Bytes,
}

impl RecordedRequest {
    /// Body parsed as JSON, `Null` when empty
    pub fn json(&self) -> Value {
        if self.body.is_empty() {
            return Value::Null;
        }
        serde_json::from_slice(&self.body).unwrap_or(Value::Null)
    }
}

#[derive(Debug, Clone)]
struct CannedResponse {
    status: StatusCode,
    body: String,
}

#[derive(Default)]
struct StubState {
    routes: Mutex<HashMap<(Method, String), CannedResponse>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

async fn record_and_reply(
    State(state): State<Arc<StubState>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let header_value = |name: header::HeaderName| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };

    let path = uri.path().to_string();
    state.requests.lock().push(RecordedRequest {
        method: method.clone(),
        path: path.clone(),
        query: uri.query().map(str::to_string),
        authorization: header_value(header::AUTHORIZATION),
        content_type: header_value(header::CONTENT_TYPE),
        body,
    });

    let canned = state.routes.lock().get(&(method, path)).cloned();
    match canned {
        Some(reply) => (
            reply.status,
            [(header::CONTENT_TYPE, "application/json")],
            reply.body,
        )
            .into_response(),
        None => (StatusCode::NOT_FOUND, "no stub for this route").into_response(),
    }
}

/// Stub API server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    state: Arc<StubState>,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a stub server on an ephemeral port
    pub async fn start() -> Result<Self> {
        init_test_tracing();

        let state = Arc::new(StubState::default());
        let app = Router::new()
            .fallback(record_and_reply)
            .with_state(Arc::clone(&state));

        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        Ok(Self {
            addr,
            state,
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Answer `method path` with a JSON body
    pub fn respond(&self, method: Method, path: &str, status: u16, body: &Value) {
        self.respond_raw(method, path, status, &body.to_string());
    }

    /// Answer `method path` with a raw body
    pub fn respond_raw(&self, method: Method, path: &str, status: u16, body: &str) {
        let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        self.state.routes.lock().insert(
            (method, path.to_string()),
            CannedResponse {
                status,
                body: body.to_string(),
            },
        );
    }

    /// Every request received so far, in order
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().clone()
    }

    /// Requests received for one route
    pub fn requests_to(&self, method: &Method, path: &str) -> Vec<RecordedRequest> {
        self.requests()
            .into_iter()
            .filter(|r| &r.method == method && r.path == path)
            .collect()
    }

    /// Client config pointed at this server
    pub fn config(&self) -> Result<ClientConfig> {
        Ok(ClientConfig::new(&self.base_url())?.with_access_token(TEST_TOKEN))
    }

    pub fn api(&self) -> Result<ApiClient> {
        Ok(ApiClient::from_config(&self.config()?)?)
    }

    pub fn context(&self) -> Result<QueryContext> {
        Ok(QueryContext::from_config(&self.config()?)?)
    }
}

/// Config pointed at a loopback port nothing listens on
pub fn unreachable_config() -> Result<ClientConfig> {
    Ok(ClientConfig::new("http://127.0.0.1:9")?)
}
