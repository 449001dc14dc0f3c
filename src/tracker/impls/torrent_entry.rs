use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::time::Duration;
use crate::tracker::structs::peer_id::PeerId;
use crate::tracker::structs::torrent_entry::TorrentEntry;
use crate::tracker::structs::torrent_peer::TorrentPeer;

impl TorrentEntry {
    pub fn new(now: Duration) -> TorrentEntry {
        TorrentEntry {
            peers: BTreeMap::new(),
            updated: now,
        }
    }

    /// Inserts or replaces the record for `peer.peer_id`. Returns `true` if the peer was not present.
    pub fn upsert_peer(&mut self, peer: TorrentPeer) -> bool {
        self.updated = self.updated.max(peer.last_seen);
        match self.peers.entry(peer.peer_id.clone()) {
            Entry::Vacant(vacant) => {
                vacant.insert(peer);
                true
            }
            Entry::Occupied(mut occupied) => {
                occupied.insert(peer);
                false
            }
        }
    }

    pub fn remove_peer(&mut self, peer_id: &PeerId, now: Duration) -> Option<TorrentPeer> {
        let removed = self.peers.remove(peer_id);
        if removed.is_some() {
            self.updated = self.updated.max(now);
        }
        removed
    }

    /// Moves `last_seen` of an existing record to `now`; never adds a peer.
    pub fn refresh_peer(&mut self, peer_id: &PeerId, now: Duration) -> Option<&TorrentPeer> {
        let peer = self.peers.get_mut(peer_id)?;
        peer.last_seen = peer.last_seen.max(now);
        self.updated = self.updated.max(now);
        Some(peer)
    }

    pub fn has_stale(&self, now: Duration, ttl: Duration) -> bool {
        self.peers.values().any(|peer| peer.is_stale(now, ttl))
    }

    /// Drops every stale record and returns how many were removed.
    pub fn evict_stale(&mut self, now: Duration, ttl: Duration) -> u64 {
        let before = self.peers.len();
        self.peers.retain(|_, peer| !peer.is_stale(now, ttl));
        (before - self.peers.len()) as u64
    }

    /// Removes every stale record and hands the removed records back.
    pub fn take_stale(&mut self, now: Duration, ttl: Duration) -> Vec<TorrentPeer> {
        let stale_ids = self.peers
            .iter()
            .filter(|(_, peer)| peer.is_stale(now, ttl))
            .map(|(peer_id, _)| peer_id.clone())
            .collect::<Vec<PeerId>>();
        stale_ids.iter().filter_map(|peer_id| self.peers.remove(peer_id)).collect()
    }

    /// An empty swarm nobody touched for a full TTL.
    pub fn is_idle(&self, now: Duration, ttl: Duration) -> bool {
        self.peers.is_empty() && now.saturating_sub(self.updated) >= ttl
    }

    pub fn live_peers(&self) -> Vec<TorrentPeer> {
        self.peers.values().cloned().collect()
    }
}
