//! Edge case integration tests for the WOOT sequence.
//!
//! Boundary indices, rejected operations, sentinel handling and unusual
//! character values.

use woot::{Element, Identity, SENTINEL_END_CHAR, SENTINEL_START_CHAR, Site, WootError};

#[test]
fn test_insert_at_invalid_position() {
    let mut site = Site::new(1);

    let result = site.insert_at(100, 'y');
    assert_eq!(result, Err(WootError::invalid_index(100, 0)));
    assert_eq!(site.sequence().len(), 2);
    assert_eq!(site.clock(), 0);
    assert!(site.text().is_empty());

    site.insert_at(0, 'a').unwrap();
    assert_eq!(site.clock(), 1);
    assert_eq!(site.text(), vec!['a']);
}

#[test]
fn test_insert_one_past_end_is_rejected() {
    let mut site = Site::new(1);
    site.insert_at(0, 'a').unwrap();
    site.insert_at(1, 'b').unwrap();

    // visible_len() appends, visible_len() + 1 does not
    assert!(site.insert_at(3, 'x').is_err());
    site.insert_at(2, 'c').unwrap();
    assert_eq!(site.to_string(), "abc");
}

#[test]
fn test_unresolvable_anchor_is_a_no_op() {
    let mut site = Site::new(1);
    site.insert_at(0, 'a').unwrap();
    let before = site.sequence().clone();

    let stray = Element::new(Identity::new(9, 0), 'z', Identity::new(9, 5), Identity::new(9, 6));
    assert!(matches!(
        site.insert_by_anchors(stray),
        Err(WootError::UnresolvableAnchor { .. })
    ));
    assert_eq!(site.sequence(), &before);
    assert_eq!(site.clock(), 1);
}

#[test]
fn test_anchors_from_another_sites_sentinels_do_not_resolve() {
    let mut site1 = Site::new(1);
    let mut site2 = Site::new(2);

    let id = site2.insert_at(0, 'b').unwrap();
    let element = site2.element(id).unwrap().clone();

    // Sentinels are site-specific, so site 1 cannot place this element
    assert!(site1.insert_by_anchors(element).is_err());
    assert!(site1.text().is_empty());
}

#[test]
fn test_anchor_pair_must_be_in_order() {
    let mut site = Site::new(1);
    let start = site.sentinel_start_id();
    let end = site.sentinel_end_id();

    let reversed = Element::new(Identity::new(2, 0), 'r', end, start);
    assert!(site.insert_by_anchors(reversed).is_err());

    let forward = Element::new(Identity::new(2, 0), 'f', start, end);
    site.insert_by_anchors(forward).unwrap();
    assert_eq!(site.to_string(), "f");
}

#[test]
fn test_sentinels_survive_edits() {
    let mut site = Site::new(5);
    for i in 0..50 {
        site.insert_at(i / 2, 'x').unwrap();
    }

    let elements = site.sequence().elements();
    let first = elements.first().unwrap();
    let last = elements.last().unwrap();

    assert_eq!(first.id, Identity::new(5, -2));
    assert_eq!(last.id, Identity::new(5, -1));
    assert!(first.is_sentinel() && last.is_sentinel());
    assert_eq!(site.sequence().len(), 52);
}

#[test]
fn test_sentinel_values_are_never_text() {
    let site = Site::new(1);

    assert!(site.contains(SENTINEL_START_CHAR));
    assert!(site.contains(SENTINEL_END_CHAR));
    assert!(!site.text().contains(&SENTINEL_START_CHAR));
    assert_eq!(site.to_string(), "");
}

#[test]
fn test_nth_visible_on_empty_site() {
    let site = Site::new(1);
    assert_eq!(site.nth_visible(0), Err(WootError::invalid_index(0, 0)));
}

#[test]
fn test_hidden_element_from_anchors() {
    let mut site = Site::new(1);
    let a = site.insert_at(0, 'a').unwrap();

    let mut hidden = Element::new(Identity::new(2, 0), 'h', a, site.sentinel_end_id());
    hidden.visible = false;
    site.insert_by_anchors(hidden).unwrap();

    assert_eq!(site.text(), vec!['a']);
    assert!(site.contains('h'));
    assert_eq!(site.nth_visible(1), Err(WootError::not_found(1)));

    // Appending counts visible characters only
    site.insert_at(1, 'b').unwrap();
    assert_eq!(site.to_string(), "ab");
}

#[test]
fn test_unicode_and_control_characters() {
    let mut site = Site::new(1);
    let chars = ['🦀', '中', '∑', '\0', '\t', '\n'];

    for (i, &c) in chars.iter().enumerate() {
        site.insert_at(i, c).unwrap();
    }

    assert_eq!(site.text(), chars.to_vec());
    assert_eq!(site.to_string().chars().count(), chars.len());
}

#[test]
fn test_extreme_site_ids() {
    let mut max = Site::new(u64::MAX);
    let id = max.insert_at(0, 'M').unwrap();
    assert_eq!(id, Identity::new(u64::MAX, 0));

    let mut zero = Site::new(0);
    let id = zero.insert_at(0, 'Z').unwrap();
    assert_eq!(id, Identity::new(0, 0));
}

#[test]
fn test_large_document() {
    let mut site = Site::new(1);
    let size = 2_000usize;

    for i in 0..size {
        let ch = char::from_u32(65 + (i % 26) as u32).unwrap();
        site.insert_at(i, ch).unwrap();
    }

    assert_eq!(site.clock(), size as i64);
    assert_eq!(site.sequence().visible_len(), size);
    let last = char::from_u32(65 + ((size - 1) % 26) as u32).unwrap();
    assert_eq!(site.nth_visible(size - 1), Ok(last));
}
