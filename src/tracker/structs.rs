//! Data structures for the peer registry.

/// The registry instance holding swarms, counters and collaborators.
pub mod torrent_tracker;

/// Opaque content identifier.
pub mod info_hash;

/// Opaque peer identifier, unique within a swarm.
pub mod peer_id;

/// One swarm: the peers currently sharing one info hash.
pub mod torrent_entry;

/// One peer record.
pub mod torrent_peer;

/// 256-way sharded swarm storage.
pub mod torrent_sharding;
