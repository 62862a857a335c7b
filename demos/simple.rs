//! Simple standalone example of WOOT sequence usage.
//!
//! A single site types a word by position, then a second host with the same
//! site id rebuilds the document from the shipped elements.
//!
//! Run with: cargo run --example simple

use tracing::info;
use tracing_subscriber::EnvFilter;
use woot::{Identity, Site};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("=== Simple WOOT Example ===");

    let mut site = Site::new(1);

    // Same insertion order as the reference scenario
    for (index, value) in [(0, 'a'), (1, 'b'), (0, 'c'), (2, 'd')] {
        let id = site.insert_at(index, value).unwrap();
        info!("insert_at({index}, {value:?}) -> {id}, text '{site}'");
    }
    info!("clock after four inserts: {}", site.clock());

    info!("--- Elements in physical order ---");
    for element in site.sequence().elements() {
        let status = if element.is_sentinel() { "SENTINEL" } else { "ACTIVE" };
        info!(
            "{} -> {:?} left {} right {} [{}]",
            element.id, element.value, element.left, element.right, status
        );
    }

    match site.insert_at(42, 'x') {
        Ok(_) => unreachable!("index 42 is past the end"),
        Err(err) => info!("insert_at(42, 'x') rejected: {err}"),
    }

    info!("--- Rebuilding on a second host ---");
    let mut mirror = Site::new(1);
    for clock in 0..site.clock() {
        let element = site.element(Identity::new(1, clock)).unwrap().clone();
        mirror.insert_by_anchors(element).unwrap();
    }
    info!("mirror text '{mirror}', mirror clock {}", mirror.clock());
    assert_eq!(mirror.to_string(), site.to_string());

    info!("nth_visible(2) = {:?}", site.nth_visible(2));
    info!("contains('d') = {}", site.contains('d'));
}
