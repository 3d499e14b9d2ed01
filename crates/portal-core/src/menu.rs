//! Menu normalizer: CMS menu records -> three-level navigation tree.
//!
//! ```text
//! RawMenu ──► MenuEntry      order: copied from source (default 0)
//!   RawTopic ──► Topic       order: position among siblings
//!     RawLeaf ──► SubmenuLink  order: always 0
//! ```

use crate::error::{NormalizeError, NormalizeResult};
use crate::types::{
    record_or_default, MenuEntry, RawLeaf, RawMenu, RawTopic, SubmenuLink, Topic, TopicIcon,
};

/// Converts raw menu records into [`MenuEntry`] values.
///
/// Holds only the content host used to absolutize icon paths, so one
/// instance can be shared freely across concurrent requests.
#[derive(Debug, Clone)]
pub struct MenuNormalizer {
    asset_base: String,
}

impl MenuNormalizer {
    pub fn new(asset_base: impl Into<String>) -> Self {
        let asset_base = asset_base.into().trim_end_matches('/').to_string();
        Self { asset_base }
    }

    pub fn asset_base(&self) -> &str {
        &self.asset_base
    }

    /// Normalize the CMS `data` payload. Anything other than a JSON array is
    /// rejected; elements that are not records become empty entries.
    pub fn normalize_value(&self, data: &serde_json::Value) -> NormalizeResult<Vec<MenuEntry>> {
        let items = data
            .as_array()
            .ok_or_else(|| NormalizeError::invalid_input("an array of menu records", data))?;

        let raw: Vec<RawMenu> = items.iter().map(record_or_default).collect();
        Ok(self.normalize(&raw))
    }

    /// Normalize already-typed records. Infallible: every missing field has
    /// a default.
    pub fn normalize(&self, menus: &[RawMenu]) -> Vec<MenuEntry> {
        menus.iter().map(|menu| self.menu_entry(menu)).collect()
    }

    fn menu_entry(&self, menu: &RawMenu) -> MenuEntry {
        MenuEntry {
            id: menu.id.clone(),
            name: menu.title.clone().unwrap_or_default(),
            path: menu.link.clone(),
            order: menu.order,
            topics: menu
                .itens
                .iter()
                .enumerate()
                .map(|(position, topic)| self.topic(position, topic))
                .collect(),
        }
    }

    fn topic(&self, position: usize, topic: &RawTopic) -> Topic {
        let title = topic.title.clone().unwrap_or_default();
        let icon = topic
            .icon
            .as_ref()
            .filter(|icon| !icon.url.is_empty())
            .map(|icon| TopicIcon {
                url: self.absolute_url(&icon.url),
                alt: icon
                    .alternative_text
                    .clone()
                    .filter(|alt| !alt.is_empty())
                    .unwrap_or_else(|| title.clone()),
            });

        Topic {
            id: topic.id.clone(),
            title,
            order: position,
            icon,
            submenus: topic.itens.iter().map(submenu_link).collect(),
        }
    }

    /// Prefix a relative media path with the content host. Paths that are
    /// already absolute (external media storage) pass through.
    fn absolute_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        if path.starts_with('/') {
            format!("{}{}", self.asset_base, path)
        } else {
            format!("{}/{}", self.asset_base, path)
        }
    }
}

fn submenu_link(leaf: &RawLeaf) -> SubmenuLink {
    SubmenuLink {
        id: leaf.id.clone(),
        name: leaf.title.clone().unwrap_or_default(),
        path: leaf.link.clone(),
        order: 0,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
