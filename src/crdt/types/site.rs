//! Site identifier type.
//!
//! A site is one replica participating in the shared document. Its id names the
//! namespace in which that replica mints element identities.

/// A unique identifier for each site (replica) in the distributed system.
///
/// Hosts are responsible for handing out distinct site ids across replicas;
/// two sites with the same id would mint colliding identities.
pub type SiteId = u64;
