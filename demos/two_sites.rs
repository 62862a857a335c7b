//! Concurrent hosting example for the WOOT sequence.
//!
//! This example showcases:
//! - Several writer threads editing one `SharedSite`, serialized by its lock
//! - Shipping minted elements to a second host over a channel
//! - A host-level retry queue for elements whose anchors have not arrived yet
//!
//! Run with: cargo run --example two_sites

use std::sync::mpsc;
use std::thread;
use std::time::Instant;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use woot::{Element, Site, WootError};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("=== Concurrent WOOT Hosting Example ===");

    let num_threads = 4;
    let operations_per_thread = 50;
    let primary = Site::new(1).into_shared();
    let (tx, rx) = mpsc::channel::<Element>();
    let start_time = Instant::now();

    let mut handles = Vec::new();
    for thread_id in 0..num_threads {
        let site = primary.clone();
        let tx = tx.clone();

        handles.push(thread::spawn(move || {
            for i in 0..operations_per_thread {
                let ch = (b'a' + ((thread_id * 7 + i) % 26) as u8) as char;

                // Mint and read back under one lock so the shipped element
                // carries the anchors it was inserted with.
                let element = {
                    let mut site = site.write();
                    let index = (i * (thread_id + 1)) % (site.sequence().visible_len() + 1);
                    let id = match site.insert_at(index, ch) {
                        Ok(id) => id,
                        Err(err) => {
                            warn!("thread {thread_id}: {err}");
                            continue;
                        }
                    };
                    site.element(id).cloned()
                };

                if let Some(element) = element {
                    // The receiver outlives every writer
                    let _ = tx.send(element);
                }
            }
        }));
    }
    drop(tx);

    for handle in handles {
        handle.join().unwrap();
    }

    // Deliver in reverse so most elements arrive before their anchors
    let mut deliveries: Vec<Element> = rx.iter().collect();
    deliveries.reverse();

    let mut mirror = Site::new(1);
    let mut pending: Vec<Element> = Vec::new();
    let mut buffered = 0usize;

    for element in deliveries {
        match mirror.insert_by_anchors(element.clone()) {
            Ok(()) => drain(&mut mirror, &mut pending),
            Err(WootError::UnresolvableAnchor { .. }) => {
                buffered += 1;
                pending.push(element);
            }
            Err(err) => warn!("dropping {}: {err}", element.id),
        }
    }

    let primary = primary.read();
    info!("primary clock {}, {} characters", primary.clock(), primary.sequence().visible_len());
    info!("mirror buffered {buffered} early arrivals, {} still pending", pending.len());
    info!("converged: {}", primary.to_string() == mirror.to_string());
    info!("elapsed {:?}", start_time.elapsed());
}

/// Retries buffered elements until a full pass makes no progress.
fn drain(site: &mut Site, pending: &mut Vec<Element>) {
    loop {
        let before = pending.len();
        pending.retain(|element| site.insert_by_anchors(element.clone()).is_err());
        if pending.len() == before {
            break;
        }
    }
}
