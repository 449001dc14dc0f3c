use std::sync::atomic::{AtomicI64, Ordering};
use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::stats::Stats;
use crate::stats::structs::stats_atomics::StatsAtomics;

impl StatsAtomics {
    pub fn new(started: i64) -> StatsAtomics {
        let stats = StatsAtomics::default();
        stats.started.store(started, Ordering::SeqCst);
        stats
    }

    pub fn counter(&self, event: StatsEvent) -> &AtomicI64 {
        match event {
            StatsEvent::Torrents => &self.torrents,
            StatsEvent::Peers => &self.peers,
            StatsEvent::PeersUpdates => &self.peers_updates,
            StatsEvent::TimestampSweep => &self.timestamp_run_sweep,
            StatsEvent::TimestampSave => &self.timestamp_run_save,
            StatsEvent::AnnouncesHandled => &self.announces_handled,
            StatsEvent::UpdatesHandled => &self.updates_handled,
            StatsEvent::DownloadsHandled => &self.downloads_handled,
            StatsEvent::TorrentsHandled => &self.torrents_handled,
            StatsEvent::NotFound => &self.not_found,
            StatsEvent::BadRequests => &self.bad_requests,
            StatsEvent::Failures => &self.failures,
            StatsEvent::Sweeps => &self.sweeps,
            StatsEvent::PeersEvicted => &self.peers_evicted,
        }
    }

    pub fn snapshot(&self) -> Stats {
        Stats {
            started: self.started.load(Ordering::SeqCst),
            timestamp_run_sweep: self.timestamp_run_sweep.load(Ordering::SeqCst),
            timestamp_run_save: self.timestamp_run_save.load(Ordering::SeqCst),
            torrents: self.torrents.load(Ordering::SeqCst),
            peers: self.peers.load(Ordering::SeqCst),
            peers_updates: self.peers_updates.load(Ordering::SeqCst),
            announces_handled: self.announces_handled.load(Ordering::SeqCst),
            updates_handled: self.updates_handled.load(Ordering::SeqCst),
            downloads_handled: self.downloads_handled.load(Ordering::SeqCst),
            torrents_handled: self.torrents_handled.load(Ordering::SeqCst),
            not_found: self.not_found.load(Ordering::SeqCst),
            bad_requests: self.bad_requests.load(Ordering::SeqCst),
            failures: self.failures.load(Ordering::SeqCst),
            sweeps: self.sweeps.load(Ordering::SeqCst),
            peers_evicted: self.peers_evicted.load(Ordering::SeqCst),
        }
    }
}
