//! WOOT sequence implementation module.
//!
//! This module contains the sequence store, its elements, the site that owns
//! them, and the supporting identity and clock types.

pub mod element;
pub mod sequence;
pub mod site;
pub mod types;

// Re-export the main public API
pub use element::{Element, SENTINEL_END_CHAR, SENTINEL_START_CHAR};
pub use sequence::Sequence;
pub use site::{SharedSite, Site};
pub use types::{Identity, SiteClock, SiteId};
