//! portal-core: content normalization for the marketing site.
//!
//! The CMS serves one generic nested-item shape for everything. This crate
//! turns it into the fixed view-models the presentation components take as
//! props:
//!
//! ```text
//! CMS `data` ──► MenuNormalizer   ──► Vec<MenuEntry>
//!            └─► FooterNormalizer ──► FooterView { contactInfo, socialInfo }
//! ```
//!
//! Both normalizers are pure and synchronous: no I/O, no caching, no shared
//! mutable state. Fetching and revalidation live in `portal-content`.

pub mod config;
pub mod error;
pub mod footer;
pub mod menu;
pub mod types;

pub use error::{NormalizeError, NormalizeResult};
pub use footer::{FooterNormalizer, FooterRules, SectionKind};
pub use menu::MenuNormalizer;
pub use types::{
    ContactInfo, FooterView, MenuEntry, RawFooter, RawMenu, RecordId, SocialInfo, Topic,
};
