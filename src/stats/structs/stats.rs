use serde::Serialize;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stats {
    pub started: i64,
    pub timestamp_run_sweep: i64,
    pub timestamp_run_save: i64,
    pub torrents: i64,
    pub peers: i64,
    pub peers_updates: i64,
    pub announces_handled: i64,
    pub updates_handled: i64,
    pub downloads_handled: i64,
    pub torrents_handled: i64,
    pub not_found: i64,
    pub bad_requests: i64,
    pub failures: i64,
    pub sweeps: i64,
    pub peers_evicted: i64,
}
