//! A single WOOT replica.
//!
//! `Site` ties a site id to its own clock and sequence. It is the host-facing
//! surface: local edits go through `insert_at`, which mints identities, and
//! already-minted elements go through `insert_by_anchors`.

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, trace};

use crate::crdt::element::Element;
use crate::crdt::sequence::Sequence;
use crate::crdt::types::{Identity, SiteClock, SiteId};
use crate::error::WootResult;

/// A site shared between threads.
///
/// `Site` has no internal synchronization; hosts that mutate one from several
/// threads serialize access through this lock.
pub type SharedSite = Arc<RwLock<Site>>;

/// One replica of the shared sequence.
///
/// # Design
///
/// - The clock is owned state, one per site, never global
/// - Only successful positional inserts advance the clock
/// - Failed operations leave clock and sequence untouched
#[derive(Debug, Clone)]
pub struct Site {
    /// The identifier this site mints identities under
    site_id: SiteId,
    /// Local counter for the next identity
    clock: SiteClock,
    /// The sentinel-bounded element storage
    sequence: Sequence,
}

impl Site {
    /// Creates a new site with an empty sequence and a zeroed clock.
    ///
    /// # Arguments
    ///
    /// * `site_id` - Unique identifier for this site across replicas
    pub fn new(site_id: SiteId) -> Self {
        trace!(site_id, "initializing site");
        Site {
            site_id,
            clock: SiteClock::new(),
            sequence: Sequence::new(site_id),
        }
    }

    /// Resets this site to an empty sequence under `site_id`.
    ///
    /// Safe to call repeatedly.
    pub fn initialize(&mut self, site_id: SiteId) {
        *self = Site::new(site_id);
    }

    /// Gets the site ID.
    pub fn site_id(&self) -> SiteId {
        self.site_id
    }

    /// Gets the current clock value.
    pub fn clock(&self) -> i64 {
        self.clock.current()
    }

    /// Read access to the underlying sequence.
    pub fn sequence(&self) -> &Sequence {
        &self.sequence
    }

    /// Gets the left sentinel ID.
    pub fn sentinel_start_id(&self) -> Identity {
        self.sequence.start().id
    }

    /// Gets the right sentinel ID.
    pub fn sentinel_end_id(&self) -> Identity {
        self.sequence.end().id
    }

    /// Inserts `value` at a visible position and returns its new identity.
    ///
    /// `index = 0` inserts before the first visible character and
    /// `index = visible_len()` appends. The element is anchored to its new
    /// physical neighbors.
    ///
    /// # Returns
    ///
    /// * `Ok(Identity)` - The identity minted for the inserted element
    /// * `Err(WootError::InvalidIndex)` - If `index` is past the end
    pub fn insert_at(&mut self, index: usize, value: char) -> WootResult<Identity> {
        let id = self.clock.peek(self.site_id);

        if let Err(err) = self.sequence.insert_at(index, Element::unanchored(id, value)) {
            debug!(site_id = self.site_id, index, %err, "rejected positional insert");
            return Err(err);
        }

        self.clock.advance();
        debug!(site_id = self.site_id, %id, index, ?value, "inserted at position");
        Ok(id)
    }

    /// Applies an already-minted element between its recorded anchors.
    ///
    /// Never advances the local clock. Fails with `UnresolvableAnchor` if the
    /// anchors are not currently adjacent; buffering and retrying such
    /// elements is up to the host.
    pub fn insert_by_anchors(&mut self, element: Element) -> WootResult<()> {
        let id = element.id;

        if let Err(err) = self.sequence.insert_by_anchors(element) {
            debug!(site_id = self.site_id, %id, %err, "rejected anchored insert");
            return Err(err);
        }

        debug!(site_id = self.site_id, %id, "inserted between anchors");
        Ok(())
    }

    /// The visible characters, left to right.
    pub fn text(&self) -> Vec<char> {
        self.sequence.text()
    }

    /// Returns true if any element, sentinels included, carries `value`.
    pub fn contains(&self, value: char) -> bool {
        self.sequence.contains(value)
    }

    /// Returns the value of the `index`-th visible element.
    pub fn nth_visible(&self, index: usize) -> WootResult<char> {
        self.sequence.nth_visible(index)
    }

    /// Looks up an element by identity, e.g. to ship it to another site.
    pub fn element(&self, id: Identity) -> Option<&Element> {
        self.sequence.get(id)
    }

    /// Wraps this site for shared use across threads.
    pub fn into_shared(self) -> SharedSite {
        Arc::new(RwLock::new(self))
    }
}

impl fmt::Display for Site {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.sequence, f)
    }
}
