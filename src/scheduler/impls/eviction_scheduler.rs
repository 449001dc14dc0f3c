use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use log::{error, info, warn};
use tokio::sync::watch;
use crate::common::common::shutdown_waiting;
use crate::database::errors::StorageError;
use crate::scheduler::structs::eviction_scheduler::EvictionScheduler;
use crate::stats::enums::stats_event::StatsEvent;
use crate::tracker::structs::torrent_tracker::TorrentTracker;

struct RunningGuard<'a>(&'a AtomicBool);

impl Drop for RunningGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl EvictionScheduler {
    pub fn new(torrent_tracker: Arc<TorrentTracker>, interval: Duration) -> EvictionScheduler {
        EvictionScheduler {
            torrent_tracker,
            interval,
            running: AtomicBool::new(false),
        }
    }

    pub fn from_tracker(torrent_tracker: Arc<TorrentTracker>) -> EvictionScheduler {
        let interval = Duration::from_secs(torrent_tracker.config.tracker_config.peers_cleanup_interval);
        EvictionScheduler::new(torrent_tracker, interval)
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }

    /// One tick: sweep the registry, then delete the same peers from storage.
    ///
    /// Returns `None` if another tick is still running. The in-memory sweep
    /// always completes; an error only reports a failed storage mirror.
    pub async fn run_once(&self) -> Option<Result<u64, StorageError>> {
        if self.running.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire).is_err() {
            return None;
        }
        let _guard = RunningGuard(&self.running);

        let now = self.torrent_tracker.clock.now();
        let removed = self.torrent_tracker.sweep(now);

        if let Some(storage) = self.torrent_tracker.storage.as_ref() {
            let cutoff = self.torrent_tracker.stale_cutoff(now);
            if let Err(error) = storage.remove_stale(cutoff).await {
                return Some(Err(error));
            }
        }
        Some(Ok(removed))
    }

    pub async fn run(self: Arc<Self>, mut shutdown: watch::Receiver<bool>) {
        info!("[SWEEP] Starting peer sweep every {} seconds", self.interval.as_secs());
        loop {
            if shutdown_waiting(self.interval, &mut shutdown).await {
                info!("[SWEEP] Shutting down peer sweep");
                break;
            }

            match self.run_once().await {
                None => warn!("[SWEEP] Previous sweep still running, skipping this tick"),
                Some(Ok(removed)) => info!("[SWEEP] Removed {removed} stale peers"),
                Some(Err(error)) => {
                    self.torrent_tracker.update_stats(StatsEvent::Failures, 1);
                    error!("[SWEEP] Unable to remove stale peers from storage: {error}");
                    sentry::capture_error(&error);
                }
            }
        }
    }
}
