//! Fake CMS API server for integration tests.
//!
//! Spins up a minimal `axum` HTTP server on a random TCP port bound to
//! 127.0.0.1. Every path answers from a table of canned responses keyed by
//! path (query string ignored); unknown paths answer `404`. The server also
//! counts hits per path and records the last `Authorization` header so
//! harnesses can assert on caching and auth.
//!
//! # Example
//!
//! ```rust,no_run
//! let cms = FakeCms::start().await.unwrap();
//! cms.respond("/api/menus", 200, envelope(menus_fixture())).await;
//! let cfg = config_for(&cms.base_url());
//! ```

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode, Uri},
    response::IntoResponse,
    Router,
};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

#[derive(Default)]
struct CmsState {
    responses: HashMap<String, (StatusCode, String)>,
    hits: HashMap<String, usize>,
    last_authorization: Option<String>,
}

/// Handle to the running fake CMS.
pub struct FakeCms {
    addr: SocketAddr,
    state: Arc<Mutex<CmsState>>,
}

impl FakeCms {
    /// Start the server on a random port. Returns once it is listening.
    pub async fn start() -> std::io::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let state = Arc::new(Mutex::new(CmsState::default()));

        let app = Router::new().fallback(serve_canned).with_state(state.clone());

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        // Give the task a moment to register.
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;

        Ok(Self { addr, state })
    }

    /// Base URL for the API (e.g. `http://127.0.0.1:PORT`).
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Answer `path` with `status` and a JSON body.
    pub async fn respond(&self, path: &str, status: u16, body: serde_json::Value) {
        self.respond_raw(path, status, &body.to_string()).await;
    }

    /// Answer `path` with `status` and an arbitrary body.
    pub async fn respond_raw(&self, path: &str, status: u16, body: &str) {
        let status = StatusCode::from_u16(status).expect("valid status code");
        self.state
            .lock()
            .await
            .responses
            .insert(path.to_string(), (status, body.to_string()));
    }

    /// Number of requests received for `path`.
    pub async fn hits(&self, path: &str) -> usize {
        self.state.lock().await.hits.get(path).copied().unwrap_or(0)
    }

    pub async fn last_authorization(&self) -> Option<String> {
        self.state.lock().await.last_authorization.clone()
    }
}

async fn serve_canned(
    State(state): State<Arc<Mutex<CmsState>>>,
    uri: Uri,
    headers: HeaderMap,
) -> impl IntoResponse {
    let mut state = state.lock().await;
    let path = uri.path().to_string();
    *state.hits.entry(path.clone()).or_default() += 1;
    state.last_authorization = headers
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    match state.responses.get(&path) {
        Some((status, body)) => (
            *status,
            [(axum::http::header::CONTENT_TYPE, "application/json")],
            body.clone(),
        ),
        None => (
            StatusCode::NOT_FOUND,
            [(axum::http::header::CONTENT_TYPE, "application/json")],
            r#"{"data":null,"error":{"status":404}}"#.to_string(),
        ),
    }
}
