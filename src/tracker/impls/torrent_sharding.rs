use std::collections::BTreeMap;
use std::time::Duration;
use parking_lot::RwLock;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::peer_id::PeerId;
use crate::tracker::structs::torrent_entry::TorrentEntry;
use crate::tracker::structs::torrent_sharding::{TorrentSharding, SHARD_COUNT};

impl Default for TorrentSharding {
    fn default() -> Self {
        Self::new()
    }
}

impl TorrentSharding {
    #[tracing::instrument(level = "debug")]
    pub fn new() -> TorrentSharding {
        TorrentSharding {
            shards: std::array::from_fn(|_| RwLock::new(BTreeMap::new())),
            hasher: ahash::RandomState::new(),
        }
    }

    #[inline]
    pub fn shard_index(&self, info_hash: &InfoHash) -> usize {
        (self.hasher.hash_one(info_hash) as usize) % SHARD_COUNT
    }

    #[inline]
    pub fn get_shard(&self, info_hash: &InfoHash) -> &RwLock<BTreeMap<InfoHash, TorrentEntry>> {
        &self.shards[self.shard_index(info_hash)]
    }

    pub fn contains_torrent(&self, info_hash: &InfoHash) -> bool {
        self.get_shard(info_hash).read().contains_key(info_hash)
    }

    pub fn contains_peer(&self, info_hash: &InfoHash, peer_id: &PeerId) -> bool {
        self.get_shard(info_hash)
            .read()
            .get(info_hash)
            .is_some_and(|torrent_entry| torrent_entry.peers.contains_key(peer_id))
    }

    pub fn get_torrents_amount(&self) -> u64 {
        self.shards.iter().map(|shard| shard.read().len() as u64).sum()
    }

    pub fn get_peers_amount(&self) -> u64 {
        self.shards
            .iter()
            .map(|shard| shard.read().values().map(|entry| entry.peers.len() as u64).sum::<u64>())
            .sum()
    }

    /// Evicts stale peers from every swarm in one shard, holding that shard's write lock.
    ///
    /// Returns `(peers_removed, torrents_removed)`; swarms are only removed when
    /// `prune_empty` is set and they have been empty and idle for a full TTL.
    pub fn sweep_shard(&self, index: usize, now: Duration, ttl: Duration, prune_empty: bool) -> (u64, u64) {
        let Some(shard) = self.shards.get(index) else {
            return (0, 0);
        };
        let mut shard = shard.write();
        if shard.is_empty() {
            return (0, 0);
        }

        let mut peers_removed = 0u64;
        for torrent_entry in shard.values_mut() {
            peers_removed += torrent_entry.evict_stale(now, ttl);
        }

        let mut torrents_removed = 0u64;
        if prune_empty {
            let before = shard.len();
            shard.retain(|_, torrent_entry| !torrent_entry.is_idle(now, ttl));
            torrents_removed = (before - shard.len()) as u64;
        }
        (peers_removed, torrents_removed)
    }
}
