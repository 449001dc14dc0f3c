//! Peer registry.
//!
//! Tracks which peers share which content, applies announce events and
//! expires peers that stop announcing.
//!
//! # Architecture
//!
//! Swarms are spread over 256 shards, each behind its own `RwLock`, with the
//! shard chosen by hashing the (opaque) info hash. Every mutation and every
//! filtered read holds exactly one shard lock, so announces for unrelated
//! content never contend and a sweep only ever blocks one shard at a time.
//!
//! A peer is stale once `now - last_seen >= peers_timeout`. The same check
//! ([`structs::torrent_peer::TorrentPeer::is_stale`]) is applied lazily on
//! every announce/listing and periodically by the sweep.
//!
//! # Main Components
//!
//! - `TorrentTracker` - The registry instance, shared behind an `Arc`
//! - `TorrentSharding` - Sharded storage for swarms
//! - `InfoHash` / `PeerId` - Opaque byte-string identifiers
//! - `TorrentEntry` - One swarm
//! - `TorrentPeer` - One peer record
//!
//! # Example
//!
//! ```rust,ignore
//! use std::net::SocketAddr;
//! use std::sync::Arc;
//! use swarm_tracker::catalog::structs::catalog_memory::CatalogMemory;
//! use swarm_tracker::config::structs::configuration::Configuration;
//! use swarm_tracker::tracker::enums::announce_event::AnnounceEvent;
//! use swarm_tracker::tracker::structs::torrent_tracker::TorrentTracker;
//!
//! let tracker = TorrentTracker::new(Arc::new(Configuration::init()), Arc::new(CatalogMemory::new()), None);
//! let now = tracker.clock.now();
//! let peers = tracker.announce(&info_hash, &peer_id, "10.0.0.1:6881".parse()?, AnnounceEvent::Started, now);
//! ```

/// Announce events and persistence actions.
pub mod enums;

/// Implementation blocks for tracker structs.
pub mod impls;

/// Identifier, peer, swarm and registry structs.
pub mod structs;

/// Type aliases for shared collections.
pub mod types;

#[cfg(test)]
mod tests;
