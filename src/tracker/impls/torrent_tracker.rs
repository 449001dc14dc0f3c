use std::sync::Arc;
use ahash::AHashMap;
use log::info;
use parking_lot::RwLock;
use crate::catalog::structs::catalog_memory::CatalogMemory;
use crate::catalog::traits::torrent_catalog::TorrentCatalog;
use crate::common::structs::tracker_clock::TrackerClock;
use crate::config::structs::configuration::Configuration;
use crate::database::enums::database_drivers::DatabaseDrivers;
use crate::database::errors::StorageError;
use crate::database::structs::database_connector_sqlite::DatabaseConnectorSQLite;
use crate::database::traits::database_backend::DatabaseBackend;
use crate::stats::structs::stats_atomics::StatsAtomics;
use crate::tracker::structs::torrent_sharding::TorrentSharding;
use crate::tracker::structs::torrent_tracker::TorrentTracker;

impl TorrentTracker {
    pub fn new(config: Arc<Configuration>, catalog: Arc<dyn TorrentCatalog>, storage: Option<Arc<dyn DatabaseBackend>>) -> TorrentTracker
    {
        let clock = TrackerClock::new();
        TorrentTracker {
            config,
            torrents_sharding: Arc::new(TorrentSharding::new()),
            peers_updates: Arc::new(RwLock::new(AHashMap::new())),
            stats: Arc::new(StatsAtomics::new(TrackerClock::unix_seconds(clock.now()))),
            catalog,
            storage,
            clock,
        }
    }

    /// Builds the tracker for a configuration: in memory only, or backed by
    /// the configured database for both the peer mirror and the catalog.
    pub async fn from_config(config: Arc<Configuration>, create_database: bool) -> Result<TorrentTracker, StorageError>
    {
        if !config.database.persistent {
            info!("[BOOT] Running without persistence, catalog kept in memory");
            return Ok(TorrentTracker::new(config, Arc::new(CatalogMemory::new()), None));
        }

        match config.database.engine {
            DatabaseDrivers::sqlite3 => {
                info!("[BOOT] Connecting to SQLite database {}", config.database.path);
                let connector = Arc::new(DatabaseConnectorSQLite::connect(&config.database, create_database).await?);
                Ok(TorrentTracker::new(config, connector.clone(), Some(connector)))
            }
        }
    }

    #[inline]
    pub fn is_persistent(&self) -> bool
    {
        self.storage.is_some()
    }
}
