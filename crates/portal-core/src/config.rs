//! Configuration types for portal.
//!
//! [`Config::load`] layers, lowest priority first: the embedded defaults, a
//! TOML file (`--config PATH`, or `./portal.toml` when present), and
//! `PORTAL__SECTION__KEY` environment variables. [`Config::defaults`] returns
//! the embedded defaults without touching the filesystem or the environment
//! (useful in tests).

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[cms]
base_url        = "http://127.0.0.1:1337"
token           = ""
menus_path      = "/api/menus?populate=deep"
footer_path     = "/api/footer?populate=deep"
timeout_secs    = 10
revalidate_secs = 60

[footer]
business_hours_title = "Business Hours"
contacts_title       = "Contacts"
useful_links_title   = "Useful Links"
follow_us_title      = "Follow Us"
phone_pattern        = '\(\+\d{1,4}\)'
phone_separator      = "/"
address_keywords     = ["Achada", "Rua", "Avenida", "Street"]

[server]
bind = "127.0.0.1:8080"
"#;

const DEFAULT_FILE: &str = "portal.toml";

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub cms: CmsConfig,
    pub footer: FooterConfig,
    pub server: ServerConfig,
}

/// `[cms]`: the upstream content host.
#[derive(Debug, Clone, Deserialize)]
pub struct CmsConfig {
    /// Content host. Also the base prepended to menu icon paths.
    pub base_url: String,
    /// Bearer token; empty means no `Authorization` header.
    pub token: String,
    pub menus_path: String,
    pub footer_path: String,
    pub timeout_secs: u64,
    pub revalidate_secs: u64,
}

impl CmsConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn revalidate_after(&self) -> Duration {
        Duration::from_secs(self.revalidate_secs)
    }
}

/// `[footer]`: section labels and the contact classification heuristics.
#[derive(Debug, Clone, Deserialize)]
pub struct FooterConfig {
    pub business_hours_title: String,
    pub contacts_title: String,
    pub useful_links_title: String,
    pub follow_us_title: String,
    /// Regex; a contact item containing a match is a phone line.
    pub phone_pattern: String,
    /// Splits a phone line into at most two numbers.
    pub phone_separator: String,
    pub address_keywords: Vec<String>,
}

/// `[server]`
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub bind: String,
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load the layered configuration. An explicit `path` must exist; the
    /// implicit `./portal.toml` is optional.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let (file, required) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (PathBuf::from(DEFAULT_FILE), false),
        };

        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(file.as_path()).required(required))
            .add_source(
                config::Environment::with_prefix("PORTAL")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
