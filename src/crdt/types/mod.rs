//! Type definitions for the WOOT sequence.
//!
//! Site ids, element identities and the per-site clock, each in its own
//! submodule.

pub mod clock;
pub mod identity;
pub mod site;

pub use clock::SiteClock;
pub use identity::{Identity, SENTINEL_ANCHOR_CLOCK, SENTINEL_END_CLOCK, SENTINEL_START_CLOCK};
pub use site::SiteId;
