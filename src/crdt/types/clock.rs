//! Per-site clock for minting element identities.
//!
//! Each `Site` owns its own `SiteClock`; nothing is shared between sites. The
//! clock is read to mint an identity and only advanced once the element that
//! carries that identity has actually been stored, so a rejected insertion
//! never burns a clock value.

use crate::crdt::types::identity::Identity;
use crate::crdt::types::site::SiteId;

/// A monotonically increasing local counter for one site.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SiteClock {
    counter: i64,
}

impl SiteClock {
    /// Creates a clock starting at zero.
    pub fn new() -> Self {
        SiteClock { counter: 0 }
    }

    /// The identity the next successful local insertion will carry.
    pub fn peek(&self, site: SiteId) -> Identity {
        Identity::new(site, self.counter)
    }

    /// Commits the value returned by the last `peek`.
    pub fn advance(&mut self) {
        self.counter += 1;
    }

    /// Gets the current counter value.
    pub fn current(&self) -> i64 {
        self.counter
    }

    /// Resets the counter to zero.
    pub fn reset(&mut self) {
        self.counter = 0;
    }
}
