//! portal: content service for the insurance marketing site.
//!
//! Fetches menus and footer content from the headless CMS, normalizes them
//! into the view-models the page components take as props, and serves them
//! as JSON. This crate wires the layers together and exposes them as public
//! modules so that integration tests can drive them directly.
//!
//! # Architecture
//!
//! ```text
//! CMS ──► portal-content (CmsClient ─► LayoutLoader ─► LayoutCache) ──► server
//!                               │
//!                               └──► portal-core normalizers
//! ```

pub mod offline;
pub mod server;
pub mod telemetry;

pub use offline::{normalize_json, PayloadKind};
