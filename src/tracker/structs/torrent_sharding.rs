//! Sharded swarm storage for concurrent access.

use std::collections::BTreeMap;
use parking_lot::RwLock;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::torrent_entry::TorrentEntry;

pub const SHARD_COUNT: usize = 256;

/// Swarms distributed across 256 independently locked shards.
///
/// The shard for an info hash is picked from an `ahash` digest of its bytes,
/// so identifiers of any length spread evenly. Writers only lock the shard
/// they touch; other shards stay available.
#[derive(Debug)]
pub struct TorrentSharding {
    pub shards: [RwLock<BTreeMap<InfoHash, TorrentEntry>>; SHARD_COUNT],
    pub(crate) hasher: ahash::RandomState,
}
