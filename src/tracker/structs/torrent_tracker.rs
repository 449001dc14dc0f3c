use std::sync::Arc;
use crate::catalog::traits::torrent_catalog::TorrentCatalog;
use crate::common::structs::tracker_clock::TrackerClock;
use crate::config::structs::configuration::Configuration;
use crate::database::traits::database_backend::DatabaseBackend;
use crate::stats::structs::stats_atomics::StatsAtomics;
use crate::tracker::structs::torrent_sharding::TorrentSharding;
use crate::tracker::types::PeersUpdates;

pub struct TorrentTracker {
    pub config: Arc<Configuration>,
    pub torrents_sharding: Arc<TorrentSharding>,
    pub peers_updates: PeersUpdates,
    pub stats: Arc<StatsAtomics>,
    pub catalog: Arc<dyn TorrentCatalog>,
    /// Peer mirror; `None` keeps the registry purely in memory.
    pub storage: Option<Arc<dyn DatabaseBackend>>,
    pub clock: TrackerClock,
}
