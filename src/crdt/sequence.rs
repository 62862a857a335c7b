//! Sentinel-bounded element storage.
//!
//! `Sequence` holds the elements in physical order. Physical order is document
//! order: the visible text is read left to right over the `visible` elements.
//! The two sentinels are installed on construction and never move or leave.

use std::fmt;

use crate::crdt::element::Element;
use crate::crdt::types::{Identity, SiteId};
use crate::error::{WootError, WootResult};

/// An ordered list of elements bounded by two invisible sentinels.
///
/// # Design
///
/// - Flat `Vec` storage, physical position is authoritative
/// - Anchor resolution is a linear scan where the first positional match wins
/// - Visible indices count only `visible` elements
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence {
    elements: Vec<Element>,
}

impl Sequence {
    /// Creates an empty sequence holding only the sentinels of `site`.
    pub fn new(site: SiteId) -> Self {
        Sequence {
            elements: vec![Element::sentinel_start(site), Element::sentinel_end(site)],
        }
    }

    /// Total number of elements, sentinels included. Never less than 2.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Number of visible elements.
    pub fn visible_len(&self) -> usize {
        self.elements.iter().filter(|e| e.is_visible()).count()
    }

    /// Returns true if there is no visible content.
    pub fn is_empty(&self) -> bool {
        !self.elements.iter().any(|e| e.is_visible())
    }

    /// All elements in physical order, sentinels included.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// The left sentinel.
    pub fn start(&self) -> &Element {
        &self.elements[0]
    }

    /// The right sentinel.
    pub fn end(&self) -> &Element {
        &self.elements[self.elements.len() - 1]
    }

    /// Finds an element by identity.
    pub fn get(&self, id: Identity) -> Option<&Element> {
        self.elements.iter().find(|e| e.id == id)
    }

    /// Physical position of the element with the given identity.
    pub fn position_of(&self, id: Identity) -> Option<usize> {
        self.elements.iter().position(|e| e.id == id)
    }

    /// Translates a visible index into the physical offset to insert at.
    ///
    /// Index 0 lands right after the left sentinel; index `k` lands right after
    /// the `k`-th visible element.
    fn physical_offset(&self, index: usize) -> Option<usize> {
        if index == 0 {
            return Some(1);
        }
        self.elements
            .iter()
            .enumerate()
            .filter(|(_, e)| e.is_visible())
            .nth(index - 1)
            .map(|(pos, _)| pos + 1)
    }

    /// Inserts `element` at a visible index.
    ///
    /// `index` must be in `0..=visible_len()`. On success the element's
    /// `left`/`right` are overwritten with the ids of its new physical
    /// neighbors. On failure nothing changes.
    pub fn insert_at(&mut self, index: usize, mut element: Element) -> WootResult<()> {
        let offset = self
            .physical_offset(index)
            .ok_or_else(|| WootError::invalid_index(index, self.visible_len()))?;

        element.left = self.elements[offset - 1].id;
        element.right = self.elements[offset].id;
        self.elements.insert(offset, element);
        Ok(())
    }

    /// Splices `element` between the first adjacent pair matching its anchors.
    ///
    /// Scans left to right for `a`, `b` physically consecutive with
    /// `a.id == element.left` and `b.id == element.right`. Fails with
    /// `UnresolvableAnchor` when no such pair exists, leaving the sequence
    /// unchanged.
    pub fn insert_by_anchors(&mut self, element: Element) -> WootResult<()> {
        let pos = self
            .elements
            .windows(2)
            .position(|pair| pair[0].id == element.left && pair[1].id == element.right)
            .ok_or_else(|| WootError::unresolvable_anchor(element.left, element.right))?;

        self.elements.insert(pos + 1, element);
        Ok(())
    }

    /// The visible characters, left to right.
    pub fn text(&self) -> Vec<char> {
        self.visible_values().collect()
    }

    fn visible_values(&self) -> impl Iterator<Item = char> + '_ {
        self.elements
            .iter()
            .filter(|e| e.is_visible())
            .map(|e| e.value)
    }

    /// Returns true if any element, sentinels included, carries `value`.
    pub fn contains(&self, value: char) -> bool {
        self.elements.iter().any(|e| e.value == value)
    }

    /// Returns the value of the `index`-th (zero-based) visible element.
    ///
    /// Fails with `InvalidIndex` when `index` is not below the number of
    /// non-sentinel slots, and with `NotFound` when it is but fewer visible
    /// elements exist.
    pub fn nth_visible(&self, index: usize) -> WootResult<char> {
        let slots = self.elements.len() - 2;
        if index >= slots {
            return Err(WootError::invalid_index(index, slots));
        }
        self.visible_values()
            .nth(index)
            .ok_or_else(|| WootError::not_found(index))
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.visible_values().try_for_each(|c| write!(f, "{c}"))
    }
}
