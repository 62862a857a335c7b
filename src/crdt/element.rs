//! Element definition and sentinel constants for the WOOT sequence.
//!
//! An `Element` is one character slot. Besides its identity and value it
//! records the identities of the neighbors it was inserted between, which is
//! what lets another replica find the same insertion point later.

use crate::crdt::types::{Identity, SENTINEL_END_CLOCK, SENTINEL_START_CLOCK, SiteId};

/// Value carried by the left sentinel.
///
/// Taken from Unicode's "Miscellaneous Technical" block to stay clear of
/// ordinary text.
pub const SENTINEL_START_CHAR: char = '\u{2388}';
/// Value carried by the right sentinel.
pub const SENTINEL_END_CHAR: char = '\u{2389}';

/// Represents a single character slot within the sequence.
///
/// # Anchors
///
/// `left` and `right` are a historical record of insertion intent: the ids of
/// the element's physical neighbors at the moment it was inserted. They are not
/// updated when later insertions land between the element and those neighbors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    /// Identity of this element, immutable once created
    pub id: Identity,
    /// False for sentinels, true for live content
    pub visible: bool,
    /// The character content of this element
    pub value: char,
    /// Id of the intended left neighbor at insertion time
    pub left: Identity,
    /// Id of the intended right neighbor at insertion time
    pub right: Identity,
}

impl Element {
    /// Creates a visible element anchored between `left` and `right`.
    pub fn new(id: Identity, value: char, left: Identity, right: Identity) -> Self {
        Element {
            id,
            visible: true,
            value,
            left,
            right,
        }
    }

    /// Creates a visible element whose anchors are filled in on insertion.
    ///
    /// Used for positional insertion, where the neighbors are only known once
    /// the element has been placed.
    pub fn unanchored(id: Identity, value: char) -> Self {
        Element::new(id, value, id, id)
    }

    /// Creates the left sentinel for `site`.
    pub fn sentinel_start(site: SiteId) -> Self {
        Element {
            id: Identity::sentinel_start(site),
            visible: false,
            value: SENTINEL_START_CHAR,
            left: Identity::sentinel_anchor(site),
            right: Identity::sentinel_end(site),
        }
    }

    /// Creates the right sentinel for `site`.
    pub fn sentinel_end(site: SiteId) -> Self {
        Element {
            id: Identity::sentinel_end(site),
            visible: false,
            value: SENTINEL_END_CHAR,
            left: Identity::sentinel_start(site),
            right: Identity::sentinel_anchor(site),
        }
    }

    /// Returns true if this element is a sentinel (start or end).
    pub fn is_sentinel(&self) -> bool {
        !self.visible && matches!(self.id.clock, SENTINEL_START_CLOCK | SENTINEL_END_CLOCK)
    }

    /// Returns true if this element contributes to the visible text.
    pub fn is_visible(&self) -> bool {
        self.visible
    }
}
