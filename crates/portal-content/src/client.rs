//! HTTP client for the headless CMS.
//!
//! Every endpoint answers with a `{ data, meta }` envelope; callers only ever
//! see `data`.

use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::Value;

use portal_core::config::CmsConfig;

use crate::error::{ContentError, ContentResult};

/// Response wrapper used by every CMS endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope {
    #[serde(default)]
    pub data: Value,
    #[serde(default)]
    pub meta: Option<Value>,
}

/// Return the `data` member of an envelope, or the value itself when it is
/// not wrapped. Used for payloads read from files or posted by editors.
pub fn unwrap_data(value: Value) -> Value {
    match value {
        Value::Object(mut map) if map.contains_key("data") => {
            map.remove("data").unwrap_or(Value::Null)
        }
        other => other,
    }
}

#[derive(Debug, Clone)]
pub struct CmsClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
    menus_path: String,
    footer_path: String,
}

impl CmsClient {
    pub fn new(cfg: &CmsConfig) -> ContentResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(cfg.timeout())
            .build()
            .map_err(|err| ContentError::Network(err.to_string()))?;
        Ok(Self {
            http,
            base_url: cfg.base_url.trim_end_matches('/').to_string(),
            token: Some(cfg.token.clone()).filter(|t| !t.is_empty()),
            menus_path: cfg.menus_path.clone(),
            footer_path: cfg.footer_path.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `data` of the menus endpoint (expected: an array of menu records).
    pub async fn fetch_menus(&self) -> ContentResult<Value> {
        self.fetch_data(&self.menus_path).await
    }

    /// `data` of the footer endpoint (expected: a record, or `null`).
    pub async fn fetch_footer(&self) -> ContentResult<Value> {
        self.fetch_data(&self.footer_path).await
    }

    /// GET `path` relative to the content host and unwrap the envelope.
    pub async fn fetch_data(&self, path: &str) -> ContentResult<Value> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%url, "fetching CMS content");

        let mut request = self.http.get(&url);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }
        let response = request.send().await?;

        match response.status() {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                return Err(ContentError::Unauthorized)
            }
            status if !status.is_success() => {
                let body = response.text().await.unwrap_or_default();
                return Err(ContentError::Status {
                    status: status.as_u16(),
                    body,
                });
            }
            _ => {}
        }

        let envelope: Envelope = response
            .json()
            .await
            .map_err(|err| ContentError::Envelope(err.to_string()))?;
        Ok(envelope.data)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
