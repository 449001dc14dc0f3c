use std::sync::atomic::AtomicI64;

#[derive(Debug, Default)]
pub struct StatsAtomics {
    pub started: AtomicI64,
    pub timestamp_run_sweep: AtomicI64,
    pub timestamp_run_save: AtomicI64,
    pub torrents: AtomicI64,
    pub peers: AtomicI64,
    pub peers_updates: AtomicI64,
    pub announces_handled: AtomicI64,
    pub updates_handled: AtomicI64,
    pub downloads_handled: AtomicI64,
    pub torrents_handled: AtomicI64,
    pub not_found: AtomicI64,
    pub bad_requests: AtomicI64,
    pub failures: AtomicI64,
    pub sweeps: AtomicI64,
    pub peers_evicted: AtomicI64,
}
