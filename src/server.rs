//! HTTP surface: normalized view-models as JSON.
//!
//! | Route | Body |
//! |-------|------|
//! | `GET /healthz` | `ok` |
//! | `GET /api/layout` | menus + footer + `fetchedAt` |
//! | `GET /api/menus` | menus only |
//! | `GET /api/footer` | `{contactInfo, socialInfo}` |
//! | `POST /api/preview/menus` | normalize a posted raw menus payload |
//! | `POST /api/preview/footer` | normalize a posted raw footer payload |
//!
//! The `GET` routes never fail: upstream trouble shows up as empty widgets.
//! Preview routes reject payloads of the wrong shape with `422`.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::Value;
use tokio::net::TcpListener;

use portal_content::{unwrap_data, LayoutCache, LayoutContent};
use portal_core::{FooterView, MenuEntry, NormalizeError};

type SharedCache = Arc<LayoutCache>;

pub fn router(cache: SharedCache) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/api/layout", get(layout))
        .route("/api/menus", get(menus))
        .route("/api/footer", get(footer))
        .route("/api/preview/menus", post(preview_menus))
        .route("/api/preview/footer", post(preview_footer))
        .with_state(cache)
}

/// Bind `addr` and serve until Ctrl-C.
pub async fn serve(cache: SharedCache, addr: &str) -> anyhow::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(addr = %listener.local_addr()?, "portal listening");
    axum::serve(listener, router(cache))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("portal stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for Ctrl-C");
    }
}

// ---------------------------------------------------------------------------
// Route handlers
// ---------------------------------------------------------------------------

async fn healthz() -> &'static str {
    "ok"
}

async fn layout(State(cache): State<SharedCache>) -> Json<LayoutContent> {
    Json(cache.get().await.as_ref().clone())
}

async fn menus(State(cache): State<SharedCache>) -> Json<Vec<MenuEntry>> {
    Json(cache.get().await.menus.clone())
}

async fn footer(State(cache): State<SharedCache>) -> Json<FooterView> {
    Json(cache.get().await.footer.clone())
}

async fn preview_menus(
    State(cache): State<SharedCache>,
    Json(body): Json<Value>,
) -> Result<Json<Vec<MenuEntry>>, ApiError> {
    let data = unwrap_data(body);
    let menus = cache.loader().menu_normalizer().normalize_value(&data)?;
    Ok(Json(menus))
}

async fn preview_footer(
    State(cache): State<SharedCache>,
    Json(body): Json<Value>,
) -> Result<Json<FooterView>, ApiError> {
    let data = unwrap_data(body);
    let footer = cache.loader().footer_normalizer().normalize_value(&data)?;
    Ok(Json(footer))
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// `{ "code", "message" }` error body.
#[derive(Debug)]
pub struct ApiError(NormalizeError);

impl From<NormalizeError> for ApiError {
    fn from(value: NormalizeError) -> Self {
        Self(value)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.0 {
            NormalizeError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::UNPROCESSABLE_ENTITY,
        };
        tracing::debug!(code = self.0.code(), error = %self.0, "preview rejected");
        let body = serde_json::json!({
            "code": self.0.code(),
            "message": self.0.to_string(),
        });
        (status, Json(body)).into_response()
    }
}
