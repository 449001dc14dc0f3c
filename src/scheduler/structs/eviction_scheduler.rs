use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::time::Duration;
use crate::tracker::structs::torrent_tracker::TorrentTracker;

pub struct EvictionScheduler {
    pub torrent_tracker: Arc<TorrentTracker>,
    pub interval: Duration,
    /// Set while a sweep is in progress; a tick that finds it set is skipped.
    pub(crate) running: AtomicBool,
}
