use std::sync::atomic::Ordering;
use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::stats::Stats;
use crate::tracker::structs::torrent_tracker::TorrentTracker;

impl TorrentTracker {
    pub fn get_stats(&self) -> Stats
    {
        self.stats.snapshot()
    }

    pub fn update_stats(&self, event: StatsEvent, value: i64)
    {
        let counter = self.stats.counter(event);
        if value > 0 { counter.fetch_add(value, Ordering::SeqCst); }
        if value < 0 { counter.fetch_sub(-value, Ordering::SeqCst); }
    }

    pub fn set_stats(&self, event: StatsEvent, value: i64)
    {
        self.stats.counter(event).store(value, Ordering::SeqCst);
    }
}
