//! Test builders: ergonomic constructors for raw CMS payloads and config.
//!
//! Builders emit `serde_json::Value` in the exact shape the CMS serves, so
//! harnesses exercise the same deserialization path as production. They
//! panic on invalid input rather than returning `Result`.

use portal_core::config::Config;
use serde_json::{json, Map, Value};

// ---------------------------------------------------------------------------
// Raw record builder
// ---------------------------------------------------------------------------

/// Fluent builder for one CMS record at any level (menu, topic, leaf,
/// footer, section, section item). The CMS uses the same shape everywhere.
///
/// # Example
///
/// ```rust
/// let menu = RecordBuilder::new(1, "Particulares")
///     .link("/particulares")
///     .order(2)
///     .item(RecordBuilder::new(11, "Auto").icon("/uploads/auto.svg", None))
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct RecordBuilder {
    fields: Map<String, Value>,
    itens: Option<Vec<Value>>,
}

impl RecordBuilder {
    pub fn new(id: i64, title: &str) -> Self {
        let mut fields = Map::new();
        fields.insert("id".into(), json!(id));
        fields.insert("title".into(), json!(title));
        Self {
            fields,
            itens: None,
        }
    }

    pub fn link(mut self, link: &str) -> Self {
        self.fields.insert("link".into(), json!(link));
        self
    }

    pub fn order(mut self, order: i64) -> Self {
        self.fields.insert("order".into(), json!(order));
        self
    }

    pub fn icon(mut self, url: &str, alt: Option<&str>) -> Self {
        self.fields.insert(
            "icon".into(),
            json!({ "url": url, "alternativeText": alt }),
        );
        self
    }

    pub fn field(mut self, key: &str, value: Value) -> Self {
        self.fields.insert(key.into(), value);
        self
    }

    pub fn item(mut self, child: RecordBuilder) -> Self {
        self.itens.get_or_insert_with(Vec::new).push(child.build());
        self
    }

    /// Force an `itens` key even when no child was added.
    pub fn empty_itens(mut self) -> Self {
        self.itens.get_or_insert_with(Vec::new);
        self
    }

    pub fn build(self) -> Value {
        let mut fields = self.fields;
        if let Some(itens) = self.itens {
            fields.insert("itens".into(), Value::Array(itens));
        }
        Value::Object(fields)
    }
}

// ---------------------------------------------------------------------------
// Convenience constructors
// ---------------------------------------------------------------------------

/// A footer section titled `title` whose items carry the given titles.
pub fn section(id: i64, title: &str, item_titles: &[&str]) -> RecordBuilder {
    item_titles
        .iter()
        .enumerate()
        .fold(RecordBuilder::new(id, title), |section, (i, item)| {
            section.item(RecordBuilder::new(id * 100 + i as i64, item))
        })
}

/// A footer record built from sections.
pub fn footer(sections: Vec<RecordBuilder>) -> Value {
    sections
        .into_iter()
        .fold(RecordBuilder::new(1, "Footer"), RecordBuilder::item)
        .build()
}

/// Wrap `data` in the CMS response envelope.
pub fn envelope(data: Value) -> Value {
    json!({ "data": data, "meta": {} })
}

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

/// Built-in defaults pointed at `base_url` with a known bearer token.
pub fn config_for(base_url: &str) -> Config {
    let mut cfg = Config::defaults();
    cfg.cms.base_url = base_url.to_string();
    cfg.cms.token = TEST_TOKEN.to_string();
    cfg.cms.timeout_secs = 2;
    cfg
}

pub const TEST_TOKEN: &str = "test-token";
