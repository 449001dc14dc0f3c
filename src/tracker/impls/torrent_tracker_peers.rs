use std::net::SocketAddr;
use std::time::Duration;
use log::debug;
use parking_lot::RwLockUpgradableReadGuard;
use crate::common::structs::tracker_clock::TrackerClock;
use crate::stats::enums::stats_event::StatsEvent;
use crate::tracker::enums::announce_event::AnnounceEvent;
use crate::tracker::enums::updates_action::UpdatesAction;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::peer_id::PeerId;
use crate::tracker::structs::torrent_entry::TorrentEntry;
use crate::tracker::structs::torrent_peer::TorrentPeer;
use crate::tracker::structs::torrent_sharding::SHARD_COUNT;
use crate::tracker::structs::torrent_tracker::TorrentTracker;

impl TorrentTracker {
    #[inline]
    pub fn peers_timeout(&self) -> Duration
    {
        Duration::from_secs(self.config.tracker_config.peers_timeout)
    }

    /// Applies one announce to a swarm and returns the peers left in it.
    ///
    /// Stale records are evicted before the event is applied, under the same
    /// shard lock, so the returned list never contains a peer past the TTL.
    /// `Started` and `None` insert or replace the record, `Stopped` removes
    /// it and `Completed` only refreshes a record that already exists. The
    /// announcing peer itself is part of the returned list.
    ///
    /// Persistence updates are queued while the shard lock is still held, so
    /// the queue sees changes to a peer in the order the registry applied them.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn announce(&self, info_hash: &InfoHash, peer_id: &PeerId, peer_addr: SocketAddr, event: AnnounceEvent, now: Duration) -> Vec<TorrentPeer>
    {
        let ttl = self.peers_timeout();
        let mut torrents_added = 0i64;
        let mut peers_added = 0i64;
        let mut peers_removed = 0i64;
        let mut evicted = 0u64;

        let peers = {
            let mut shard = self.torrents_sharding.get_shard(info_hash).write();
            match event {
                AnnounceEvent::Started | AnnounceEvent::None => {
                    let torrent_entry = shard.entry(info_hash.clone()).or_insert_with(|| {
                        torrents_added += 1;
                        TorrentEntry::new(now)
                    });
                    evicted = self.evict_and_queue(info_hash, torrent_entry, now, ttl);
                    let torrent_peer = TorrentPeer::new(peer_id.clone(), peer_addr, now);
                    if torrent_entry.upsert_peer(torrent_peer.clone()) {
                        peers_added += 1;
                    }
                    self.queue_peer_update(info_hash, torrent_peer, UpdatesAction::Add);
                    torrent_entry.live_peers()
                }
                AnnounceEvent::Stopped | AnnounceEvent::Completed => {
                    match shard.get_mut(info_hash) {
                        None => Vec::new(),
                        Some(torrent_entry) => {
                            evicted = self.evict_and_queue(info_hash, torrent_entry, now, ttl);
                            if event == AnnounceEvent::Stopped {
                                if let Some(removed) = torrent_entry.remove_peer(peer_id, now) {
                                    peers_removed += 1;
                                    self.queue_peer_update(info_hash, removed, UpdatesAction::Remove);
                                }
                            } else if let Some(refreshed) = torrent_entry.refresh_peer(peer_id, now) {
                                let refreshed = refreshed.clone();
                                self.queue_peer_update(info_hash, refreshed, UpdatesAction::Update);
                            }
                            torrent_entry.live_peers()
                        }
                    }
                }
            }
        };

        self.apply_membership_stats(torrents_added, peers_added - peers_removed, evicted);
        debug!("[PEERS] {info_hash} {event:?} from {peer_addr}, {} peers listed", peers.len());
        peers
    }

    /// Snapshot of the live peers of a swarm. Unknown info hashes yield an
    /// empty list and do not create a swarm.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn list_peers(&self, info_hash: &InfoHash, now: Duration) -> Vec<TorrentPeer>
    {
        let ttl = self.peers_timeout();
        let shard = self.torrents_sharding.get_shard(info_hash).upgradable_read();
        match shard.get(info_hash) {
            None => return Vec::new(),
            Some(torrent_entry) if !torrent_entry.has_stale(now, ttl) => return torrent_entry.live_peers(),
            Some(_) => {}
        }

        let mut shard = RwLockUpgradableReadGuard::upgrade(shard);
        let Some(torrent_entry) = shard.get_mut(info_hash) else {
            return Vec::new();
        };
        let evicted = self.evict_and_queue(info_hash, torrent_entry, now, ttl);
        let peers = torrent_entry.live_peers();
        drop(shard);

        self.apply_membership_stats(0, 0, evicted);
        peers
    }

    /// Refreshes `last_seen` of a live peer without changing membership.
    /// Returns `false` when the swarm or the peer is unknown, or the peer had already gone stale.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn refresh_peer(&self, info_hash: &InfoHash, peer_id: &PeerId, now: Duration) -> bool
    {
        let ttl = self.peers_timeout();
        let (evicted, refreshed) = {
            let mut shard = self.torrents_sharding.get_shard(info_hash).write();
            match shard.get_mut(info_hash) {
                None => (0, false),
                Some(torrent_entry) => {
                    let evicted = self.evict_and_queue(info_hash, torrent_entry, now, ttl);
                    match torrent_entry.refresh_peer(peer_id, now).cloned() {
                        None => (evicted, false),
                        Some(torrent_peer) => {
                            self.queue_peer_update(info_hash, torrent_peer, UpdatesAction::Update);
                            (evicted, true)
                        }
                    }
                }
            }
        };

        self.apply_membership_stats(0, 0, evicted);
        refreshed
    }

    /// Storage cutoff in unix seconds for a sweep at `now`.
    ///
    /// Rows with `last_seen < cutoff` are stale by the in-memory predicate as
    /// well: `floor(last_seen) < floor(now - ttl)` implies `last_seen < now - ttl`.
    pub fn stale_cutoff(&self, now: Duration) -> i64
    {
        TrackerClock::unix_seconds(now.saturating_sub(self.peers_timeout()))
    }

    /// Removes every stale peer from every swarm, one shard lock at a time.
    /// Returns the number of peers removed.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn sweep(&self, now: Duration) -> u64
    {
        let ttl = self.peers_timeout();
        let prune_empty = self.config.tracker_config.prune_empty_swarms;
        let mut peers_removed = 0u64;
        let mut torrents_removed = 0u64;

        for index in 0..SHARD_COUNT {
            let (peers, torrents) = self.torrents_sharding.sweep_shard(index, now, ttl, prune_empty);
            peers_removed += peers;
            torrents_removed += torrents;
        }

        self.apply_membership_stats(-(torrents_removed as i64), 0, peers_removed);
        self.update_stats(StatsEvent::Sweeps, 1);
        self.set_stats(StatsEvent::TimestampSweep, TrackerClock::unix_seconds(now));
        debug!("[SWEEP] Removed {peers_removed} peers and {torrents_removed} torrents");
        peers_removed
    }

    /// Lazy eviction for one swarm. Must be called with its shard write lock held.
    fn evict_and_queue(&self, info_hash: &InfoHash, torrent_entry: &mut TorrentEntry, now: Duration, ttl: Duration) -> u64
    {
        if !self.is_persistent() {
            return torrent_entry.evict_stale(now, ttl);
        }
        let stale = torrent_entry.take_stale(now, ttl);
        let evicted = stale.len() as u64;
        for torrent_peer in stale {
            self.add_peer_update(info_hash, torrent_peer, UpdatesAction::Remove);
        }
        evicted
    }

    #[inline]
    fn queue_peer_update(&self, info_hash: &InfoHash, torrent_peer: TorrentPeer, action: UpdatesAction)
    {
        if self.is_persistent() {
            self.add_peer_update(info_hash, torrent_peer, action);
        }
    }

    fn apply_membership_stats(&self, torrents_delta: i64, peers_delta: i64, evicted: u64)
    {
        if torrents_delta != 0 {
            self.update_stats(StatsEvent::Torrents, torrents_delta);
        }
        let evicted = evicted as i64;
        if peers_delta - evicted != 0 {
            self.update_stats(StatsEvent::Peers, peers_delta - evicted);
        }
        if evicted > 0 {
            self.update_stats(StatsEvent::PeersEvicted, evicted);
        }
    }
}
