//! # WOOT - WithOut Operational Transformation
//!
//! The local building block of a WOOT replicated sequence: an ordered list of
//! identity-tagged characters bounded by two permanent sentinels, with
//! insertion by visible position and insertion between a pair of anchor
//! identities.
//!
//! ## Features
//!
//! - **Globally unique identities**: each element is named by `(site, clock)`
//! - **Sentinel-bounded storage**: the sequence is never shorter than two elements
//! - **Anchor-pair insertion**: elements minted elsewhere are placed between
//!   the neighbors they were created between
//! - **Atomic failures**: a rejected operation changes nothing
//!
//! Transport between sites, buffering of elements whose anchors are not yet
//! present, and persistence are left to the host.
//!
//! ## Example
//!
//! ```rust
//! use woot::Site;
//!
//! let mut site = Site::new(1);
//! site.insert_at(0, 'h').unwrap();
//! site.insert_at(1, 'i').unwrap();
//! assert_eq!(site.to_string(), "hi");
//! assert_eq!(site.clock(), 2);
//! ```

pub mod crdt;
pub mod error;

// Re-export the main public API from the CRDT module
pub use crdt::{Element, SENTINEL_END_CHAR, SENTINEL_START_CHAR, Sequence, SharedSite, Site};
pub use crdt::{Identity, SiteClock, SiteId};
pub use error::{WootError, WootResult};
