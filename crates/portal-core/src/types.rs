//! Core types for portal-core.
//!
//! Two families live here:
//!
//! - **Raw records** deserialized from the CMS `data` payload. The CMS reuses
//!   one recursive `{id, title, link, icon, itens}` shape at every depth; we
//!   split it into one non-recursive type per level because each level is
//!   interpreted differently. Anything nested below the third level is not
//!   declared and is therefore dropped by serde.
//! - **View-models** handed to the presentation components. They serialize
//!   with camelCase keys, which is what the components take as props.
//!
//! Raw records never fail to deserialize. A field of the wrong JSON type reads
//! as its default (like an absent or `null` one), and a list element that is
//! not an object reads as an empty record, so one malformed item cannot blank
//! its siblings.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

/// Identifier of a CMS record. The CMS emits numeric ids; text ids are
/// accepted so that document-style ids survive unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(i64),
    Text(String),
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordId::Number(n) => write!(f, "{n}"),
            RecordId::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<i64> for RecordId {
    fn from(value: i64) -> Self {
        RecordId::Number(value)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        RecordId::Text(value.to_string())
    }
}

/// Media reference attached to a record.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct RawIcon {
    /// Path relative to the content host, e.g. `/uploads/car.svg`.
    #[serde(default, deserialize_with = "lenient")]
    pub url: String,
    #[serde(default, rename = "alternativeText", deserialize_with = "lenient")]
    pub alternative_text: Option<String>,
}

// ---------------------------------------------------------------------------
// Raw menu tree
// ---------------------------------------------------------------------------

/// Top-level navigation record.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct RawMenu {
    #[serde(default, deserialize_with = "lenient")]
    pub id: Option<RecordId>,
    #[serde(default, deserialize_with = "lenient")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub link: Option<String>,
    /// Source order. Absent, `null`, `0` and non-numeric values all read as 0.
    #[serde(default, deserialize_with = "lenient_order")]
    pub order: i64,
    #[serde(default, deserialize_with = "lenient_list")]
    pub itens: Vec<RawTopic>,
}

/// Second-level record (a "submenu" in the CMS, a topic in the view).
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct RawTopic {
    #[serde(default, deserialize_with = "lenient")]
    pub id: Option<RecordId>,
    #[serde(default, deserialize_with = "lenient")]
    pub title: Option<String>,
    /// Parsed for completeness; the normalizer reassigns topic order by position.
    #[serde(default, deserialize_with = "lenient_order")]
    pub order: i64,
    #[serde(default, deserialize_with = "lenient")]
    pub icon: Option<RawIcon>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub itens: Vec<RawLeaf>,
}

/// Third-level link item. Its own `itens`, if any, are ignored.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct RawLeaf {
    #[serde(default, deserialize_with = "lenient")]
    pub id: Option<RecordId>,
    #[serde(default, deserialize_with = "lenient")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub link: Option<String>,
}

// ---------------------------------------------------------------------------
// Raw footer tree
// ---------------------------------------------------------------------------

/// The single footer record.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct RawFooter {
    #[serde(default, deserialize_with = "lenient")]
    pub id: Option<RecordId>,
    #[serde(default, deserialize_with = "lenient")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub itens: Vec<RawSection>,
}

/// A titled footer section ("Contacts", "Follow Us", ...).
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct RawSection {
    #[serde(default, deserialize_with = "lenient")]
    pub id: Option<RecordId>,
    #[serde(default, deserialize_with = "lenient")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub itens: Vec<RawSectionItem>,
}

/// One line inside a footer section.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct RawSectionItem {
    #[serde(default, deserialize_with = "lenient")]
    pub id: Option<RecordId>,
    #[serde(default, deserialize_with = "lenient")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub link: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub icon: Option<RawIcon>,
}

// ---------------------------------------------------------------------------
// Menu view-model
// ---------------------------------------------------------------------------

/// A top-level navigation entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuEntry {
    pub id: Option<RecordId>,
    pub name: String,
    pub path: Option<String>,
    pub order: i64,
    pub topics: Vec<Topic>,
}

/// A group of links under a menu entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Topic {
    pub id: Option<RecordId>,
    pub title: String,
    /// Zero-based position among the parent's topics.
    pub order: usize,
    pub icon: Option<TopicIcon>,
    pub submenus: Vec<SubmenuLink>,
}

/// Absolute icon URL plus alt text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopicIcon {
    pub url: String,
    pub alt: String,
}

/// Leaf link. `order` is always 0; the UI does not reorder leaves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmenuLink {
    pub id: Option<RecordId>,
    pub name: String,
    pub path: Option<String>,
    pub order: i64,
}

// ---------------------------------------------------------------------------
// Footer view-model
// ---------------------------------------------------------------------------

/// Output of the footer normalizer. Both halves are `None` when the footer
/// record itself was absent, meaning "render nothing for this widget".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct FooterView {
    pub contact_info: Option<ContactInfo>,
    pub social_info: Option<SocialInfo>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    pub phone1: String,
    pub phone2: String,
    pub email: String,
    pub address: String,
    pub business_hours: Vec<BusinessHours>,
    pub useful_links: Vec<UsefulLink>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessHours {
    pub id: Option<RecordId>,
    pub days: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UsefulLink {
    pub id: Option<RecordId>,
    pub name: String,
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct SocialInfo {
    pub social_links: Vec<SocialLink>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialLink {
    pub id: Option<RecordId>,
    pub name: String,
    pub url: Option<String>,
    /// Zero or one element. The URL stays relative to the content host.
    pub icon: Vec<SocialIcon>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SocialIcon {
    pub url: String,
}

// ---------------------------------------------------------------------------
// Serde helpers
// ---------------------------------------------------------------------------

/// The field's value, or its default when it is `null` or of the wrong type.
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).unwrap_or_default())
}

/// Child records. Anything but an array reads as empty; elements that are
/// not objects read as empty records so positions are kept.
fn lenient_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Default + DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Array(items) => items.iter().map(record_or_default).collect(),
        _ => Vec::new(),
    })
}

/// Read one list element as a record; non-objects become `T::default()`.
pub(crate) fn record_or_default<T>(value: &serde_json::Value) -> T
where
    T: Default + DeserializeOwned,
{
    if !value.is_object() {
        let found = crate::error::json_kind(value);
        tracing::debug!(found, "non-record list element read as empty");
        return T::default();
    }
    T::deserialize(value).unwrap_or_default()
}

/// Numeric order, or 0 for anything falsy or non-numeric.
fn lenient_order<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .unwrap_or(0),
        serde_json::Value::String(s) => s.trim().parse().unwrap_or(0),
        _ => 0,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
