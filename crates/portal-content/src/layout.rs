//! Layout content: the menus and footer every page renders.
//!
//! [`LayoutLoader`] is the caller the normalizers rely on for failure
//! handling. A failed or malformed menus fetch renders no menu; a failed
//! footer fetch renders no footer. Neither aborts the other.
//!
//! [`LayoutCache`] holds the last loaded layout and reloads it once it is
//! older than the revalidation interval.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};
use serde::Serialize;
use tokio::sync::{Mutex, RwLock};

use portal_core::config::Config;
use portal_core::{FooterNormalizer, FooterView, MenuEntry, MenuNormalizer};

use crate::client::CmsClient;
use crate::error::ContentResult;

/// Normalized content shared by every page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutContent {
    pub menus: Vec<MenuEntry>,
    #[serde(flatten)]
    pub footer: FooterView,
    pub fetched_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct LayoutLoader {
    client: CmsClient,
    menus: MenuNormalizer,
    footer: FooterNormalizer,
}

impl LayoutLoader {
    pub fn new(client: CmsClient, menus: MenuNormalizer, footer: FooterNormalizer) -> Self {
        Self {
            client,
            menus,
            footer,
        }
    }

    /// Menu icons are resolved against the same host the content comes from.
    pub fn from_config(cfg: &Config) -> ContentResult<Self> {
        let client = CmsClient::new(&cfg.cms)?;
        let menus = MenuNormalizer::new(client.base_url());
        let footer = FooterNormalizer::from_config(&cfg.footer)?;
        Ok(Self::new(client, menus, footer))
    }

    pub fn menu_normalizer(&self) -> &MenuNormalizer {
        &self.menus
    }

    pub fn footer_normalizer(&self) -> &FooterNormalizer {
        &self.footer
    }

    pub async fn load_menus(&self) -> Vec<MenuEntry> {
        let data = match self.client.fetch_menus().await {
            Ok(data) => data,
            Err(err) => {
                tracing::warn!(code = err.code(), error = %err, "menus unavailable; rendering none");
                return Vec::new();
            }
        };
        self.menus.normalize_value(&data).unwrap_or_else(|err| {
            tracing::warn!(code = err.code(), error = %err, "menus payload rejected; rendering none");
            Vec::new()
        })
    }

    pub async fn load_footer(&self) -> FooterView {
        let data = match self.client.fetch_footer().await {
            Ok(data) => data,
            Err(err) => {
                tracing::warn!(code = err.code(), error = %err, "footer unavailable; rendering none");
                return FooterView::default();
            }
        };
        self.footer.normalize_value(&data).unwrap_or_else(|err| {
            tracing::warn!(code = err.code(), error = %err, "footer payload rejected; rendering none");
            FooterView::default()
        })
    }

    /// Fetch both widgets concurrently.
    pub async fn load(&self) -> LayoutContent {
        let (menus, footer) = tokio::join!(self.load_menus(), self.load_footer());
        LayoutContent {
            menus,
            footer,
            fetched_at: Utc::now(),
        }
    }
}

/// Last loaded layout plus its revalidation policy.
#[derive(Debug)]
pub struct LayoutCache {
    loader: LayoutLoader,
    revalidate_after: TimeDelta,
    slot: RwLock<Option<Arc<LayoutContent>>>,
    // Serializes reloads so concurrent requests on a stale slot fetch once.
    reload: Mutex<()>,
}

impl LayoutCache {
    pub fn new(loader: LayoutLoader, revalidate_after: Duration) -> Self {
        Self {
            loader,
            revalidate_after: TimeDelta::from_std(revalidate_after).unwrap_or(TimeDelta::MAX),
            slot: RwLock::new(None),
            reload: Mutex::new(()),
        }
    }

    pub fn loader(&self) -> &LayoutLoader {
        &self.loader
    }

    /// Current layout, reloading it first when missing or stale.
    pub async fn get(&self) -> Arc<LayoutContent> {
        if let Some(content) = self.fresh().await {
            return content;
        }

        let _reload = self.reload.lock().await;
        if let Some(content) = self.fresh().await {
            return content;
        }

        let content = Arc::new(self.loader.load().await);
        tracing::info!(
            menus = content.menus.len(),
            footer = content.footer.contact_info.is_some(),
            "layout revalidated"
        );
        *self.slot.write().await = Some(Arc::clone(&content));
        content
    }

    /// Drop the cached layout so the next [`get`](Self::get) reloads.
    pub async fn invalidate(&self) {
        *self.slot.write().await = None;
    }

    async fn fresh(&self) -> Option<Arc<LayoutContent>> {
        let slot = self.slot.read().await;
        slot.as_ref()
            .filter(|content| Utc::now() - content.fetched_at < self.revalidate_after)
            .cloned()
    }
}
