//! portal-content: upstream CMS adapter for portal.
//!
//! [`CmsClient`] fetches raw `data` payloads, [`LayoutLoader`] runs them
//! through the portal-core normalizers and degrades per widget when the
//! upstream fails, and [`LayoutCache`] revalidates the result on a fixed
//! interval.

pub mod client;
pub mod error;
pub mod layout;

pub use client::{unwrap_data, CmsClient, Envelope};
pub use error::{ContentError, ContentResult};
pub use layout::{LayoutCache, LayoutContent, LayoutLoader};
