//! Fake completion endpoints served by axum on a random local port.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::Router;
use parking_lot::Mutex;
use tokio::net::TcpListener;

/// Canned response of a fake endpoint.
#[derive(Clone)]
pub(crate) struct Canned {
    pub status: u16,
    pub body: String,
}

impl Canned {
    pub fn json(status: u16, body: serde_json::Value) -> Self {
        Self {
            status,
            body: body.to_string(),
        }
    }

    pub fn raw(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
        }
    }
}

#[derive(Clone)]
struct FakeState {
    responses: Arc<Mutex<Vec<Canned>>>,
    requests: Arc<Mutex<Vec<serde_json::Value>>>,
}

/// Handle to a running fake endpoint.
pub(crate) struct FakeEndpoint {
    pub url: String,
    requests: Arc<Mutex<Vec<serde_json::Value>>>,
}

impl FakeEndpoint {
    /// Request bodies received so far, parsed as JSON.
    pub fn requests(&self) -> Vec<serde_json::Value> {
        self.requests.lock().clone()
    }
}

async fn handle(State(state): State<FakeState>, body: String) -> (StatusCode, String) {
    let parsed = serde_json::from_str(&body).unwrap_or(serde_json::Value::Null);
    state.requests.lock().push(parsed);

    let canned = {
        let mut responses = state.responses.lock();
        if responses.len() > 1 {
            responses.remove(0)
        } else {
            responses
                .first()
                .cloned()
                .unwrap_or_else(|| Canned::raw(500, ""))
        }
    };
    let status = StatusCode::from_u16(canned.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, canned.body)
}

/// Serve `responses` in order on `POST /generate`; the last one repeats.
pub(crate) async fn spawn_endpoint(responses: Vec<Canned>) -> FakeEndpoint {
    let requests = Arc::new(Mutex::new(Vec::new()));
    let state = FakeState {
        responses: Arc::new(Mutex::new(responses)),
        requests: requests.clone(),
    };
    let app = Router::new()
        .route("/generate", post(handle))
        .with_state(state);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    FakeEndpoint {
        url: format!("http://{addr}/generate"),
        requests,
    }
}

/// A URL nothing listens on.
pub(crate) async fn dead_endpoint() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/generate")
}
