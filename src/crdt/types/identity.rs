//! Element identity for the WOOT sequence.
//!
//! An `Identity` names one element across every replica. It is the pair of the
//! originating site and that site's local clock at the moment of creation.

use std::fmt;

use crate::crdt::types::site::SiteId;

/// Clock value of the left (start) sentinel.
pub const SENTINEL_START_CLOCK: i64 = -2;
/// Clock value of the right (end) sentinel.
pub const SENTINEL_END_CLOCK: i64 = -1;
/// Clock value of the placeholder anchors carried by the sentinels.
///
/// Never present in any sequence, so it never resolves as a real neighbor.
pub const SENTINEL_ANCHOR_CLOCK: i64 = -3;

/// A globally unique identifier for an element.
///
/// Unique as long as each site's clock never repeats and never decreases.
/// Equality and ordering are structural: site first, then clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Identity {
    /// The site that minted this identity
    pub site: SiteId,
    /// The minting site's clock value at creation time
    pub clock: i64,
}

impl Identity {
    /// Creates an identity from a site and clock value.
    pub const fn new(site: SiteId, clock: i64) -> Self {
        Identity { site, clock }
    }

    /// Identity of the left sentinel of `site`.
    pub const fn sentinel_start(site: SiteId) -> Self {
        Identity::new(site, SENTINEL_START_CLOCK)
    }

    /// Identity of the right sentinel of `site`.
    pub const fn sentinel_end(site: SiteId) -> Self {
        Identity::new(site, SENTINEL_END_CLOCK)
    }

    /// Placeholder anchor used by the sentinels of `site`.
    pub const fn sentinel_anchor(site: SiteId) -> Self {
        Identity::new(site, SENTINEL_ANCHOR_CLOCK)
    }

    /// Returns true if the clock is one of the reserved sentinel values.
    ///
    /// Content identities always have a clock of zero or more.
    pub fn is_reserved(&self) -> bool {
        self.clock < 0
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.site, self.clock)
    }
}
