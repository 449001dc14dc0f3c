use std::collections::hash_map::Entry;
use std::time::Duration;
use log::{info, warn};
use crate::common::structs::tracker_clock::TrackerClock;
use crate::database::errors::StorageError;
use crate::database::structs::peer_row::PeerRow;
use crate::stats::enums::stats_event::StatsEvent;
use crate::tracker::enums::updates_action::UpdatesAction;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::torrent_entry::TorrentEntry;
use crate::tracker::structs::torrent_peer::TorrentPeer;
use crate::tracker::structs::torrent_tracker::TorrentTracker;

impl TorrentTracker {
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn add_peer_update(&self, info_hash: &InfoHash, torrent_peer: TorrentPeer, action: UpdatesAction)
    {
        let key = (info_hash.clone(), torrent_peer.peer_id.clone());
        let mut lock = self.peers_updates.write();
        if lock.insert(key, (torrent_peer, action)).is_none() {
            self.update_stats(StatsEvent::PeersUpdates, 1);
        }
    }

    pub fn get_peer_updates_amount(&self) -> usize
    {
        self.peers_updates.read().len()
    }

    /// Writes queued peer changes to storage.
    ///
    /// The queue is swapped out under its lock and written without holding
    /// it. On failure the taken entries are put back, unless a newer change
    /// for the same peer was queued in the meantime.
    pub async fn save_peer_updates(&self) -> Result<u64, StorageError>
    {
        let Some(storage) = self.storage.as_ref() else {
            return Ok(0);
        };

        let updates = std::mem::take(&mut *self.peers_updates.write());
        if updates.is_empty() {
            return Ok(0);
        }
        self.update_stats(StatsEvent::PeersUpdates, -(updates.len() as i64));

        let rows = updates
            .iter()
            .map(|((info_hash, _), (torrent_peer, action))| (PeerRow::from_peer(info_hash, torrent_peer), *action))
            .collect::<Vec<_>>();

        match storage.save_peers(rows).await {
            Ok(saved) => {
                self.set_stats(StatsEvent::TimestampSave, TrackerClock::unix_seconds(self.clock.now()));
                info!("[SAVE] Saved {saved} peer changes");
                Ok(saved)
            }
            Err(error) => {
                let mut requeued = 0i64;
                {
                    let mut lock = self.peers_updates.write();
                    for (key, value) in updates {
                        if let Entry::Vacant(vacant) = lock.entry(key) {
                            vacant.insert(value);
                            requeued += 1;
                        }
                    }
                }
                self.update_stats(StatsEvent::PeersUpdates, requeued);
                Err(error)
            }
        }
    }

    /// Seeds the registry from storage at startup, skipping rows already past the TTL.
    pub async fn load_peers(&self) -> Result<u64, StorageError>
    {
        let Some(storage) = self.storage.as_ref() else {
            return Ok(0);
        };

        let rows = storage.load_peers().await?;
        let now = self.clock.now();
        let ttl = self.peers_timeout();
        let mut loaded = 0u64;
        let mut torrents_added = 0i64;

        for row in rows {
            let (info_hash, torrent_peer) = match row.to_peer() {
                Ok(result) => result,
                Err(error) => {
                    warn!("[LOAD] Skipping peer row: {error}");
                    continue;
                }
            };
            if torrent_peer.is_stale(now, ttl) {
                continue;
            }

            let last_seen: Duration = torrent_peer.last_seen;
            let mut shard = self.torrents_sharding.get_shard(&info_hash).write();
            let torrent_entry = shard.entry(info_hash).or_insert_with(|| {
                torrents_added += 1;
                TorrentEntry::new(last_seen)
            });
            if torrent_entry.upsert_peer(torrent_peer) {
                loaded += 1;
            }
        }

        self.update_stats(StatsEvent::Torrents, torrents_added);
        self.update_stats(StatsEvent::Peers, loaded as i64);
        info!("[LOAD] Loaded {loaded} peers in {torrents_added} torrents");
        Ok(loaded)
    }
}
