#![allow(dead_code)]
use rand::RngExt;
use std::net::SocketAddr;
use std::sync::Arc;
use percent_encoding::{percent_encode, NON_ALPHANUMERIC};
use tempfile::TempDir;
use swarm_tracker::catalog::structs::catalog_memory::CatalogMemory;
use swarm_tracker::config::structs::configuration::Configuration;
use swarm_tracker::config::structs::http_trackers_config::HttpTrackersConfig;
use swarm_tracker::http::structs::http_service_data::HttpServiceData;
use swarm_tracker::tracker::structs::info_hash::InfoHash;
use swarm_tracker::tracker::structs::peer_id::PeerId;
use swarm_tracker::tracker::structs::torrent_tracker::TorrentTracker;

pub type TestTracker = Arc<TorrentTracker>;
pub type TestConfig = Arc<Configuration>;

pub fn create_test_config() -> TestConfig {
    let mut config: Configuration = Configuration::init();
    config.database.persistent = false;
    Arc::new(config)
}

pub fn create_test_http_config() -> Arc<HttpTrackersConfig> {
    Arc::new(HttpTrackersConfig {
        enabled: true,
        bind_address: "127.0.0.1:6969".to_string(),
        real_ip: String::new(),
        keep_alive: 5,
        request_timeout: 10,
        disconnect_timeout: 5,
        max_connections: 1000,
        threads: 1,
    })
}

pub fn create_test_tracker() -> TestTracker {
    Arc::new(TorrentTracker::new(create_test_config(), Arc::new(CatalogMemory::new()), None))
}

pub fn create_test_service_data(torrent_tracker: TestTracker) -> Arc<HttpServiceData> {
    Arc::new(HttpServiceData {
        torrent_tracker,
        http_trackers_config: create_test_http_config(),
    })
}

/// Persistent configuration backed by a fresh SQLite file inside `dir`.
pub fn create_sqlite_config(dir: &TempDir) -> TestConfig {
    let mut config: Configuration = Configuration::init();
    config.database.persistent = true;
    config.database.path = format!("sqlite://{}/test.db", dir.path().display());
    Arc::new(config)
}

pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

pub fn random_info_hash() -> InfoHash {
    let mut rng = rand::rng();
    let bytes: [u8; 20] = rng.random();
    InfoHash::from(bytes)
}

pub fn random_peer_id() -> PeerId {
    let mut rng = rand::rng();
    let bytes: [u8; 20] = rng.random();
    PeerId::from(&bytes[..])
}

pub fn socket(value: &str) -> SocketAddr {
    value.parse().expect("valid socket address")
}

pub fn url_encode(bytes: &[u8]) -> String {
    percent_encode(bytes, NON_ALPHANUMERIC).to_string()
}
