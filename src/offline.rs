//! Offline normalization: run a raw CMS payload through a normalizer
//! without contacting the CMS. Handy when editing content or debugging a
//! page that renders an empty widget.

use portal_content::unwrap_data;
use portal_core::config::Config;
use portal_core::{FooterNormalizer, MenuNormalizer};

/// Which normalizer a payload is meant for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum PayloadKind {
    Menus,
    Footer,
}

/// Parse `raw` (an envelope or a bare `data` value) and return the
/// normalized view-model as JSON.
pub fn normalize_json(cfg: &Config, kind: PayloadKind, raw: &str) -> anyhow::Result<serde_json::Value> {
    let data = unwrap_data(serde_json::from_str(raw)?);
    let normalized = match kind {
        PayloadKind::Menus => {
            let menus = MenuNormalizer::new(cfg.cms.base_url.as_str()).normalize_value(&data)?;
            serde_json::to_value(menus)?
        }
        PayloadKind::Footer => {
            let footer = FooterNormalizer::from_config(&cfg.footer)?.normalize_value(&data)?;
            serde_json::to_value(footer)?
        }
    };
    Ok(normalized)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
