use serde::{Deserialize, Serialize};

/// Counter selector for `TorrentTracker::update_stats` and `TorrentTracker::set_stats`.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum StatsEvent {
    Torrents,
    Peers,
    PeersUpdates,
    TimestampSweep,
    TimestampSave,
    AnnouncesHandled,
    UpdatesHandled,
    DownloadsHandled,
    TorrentsHandled,
    NotFound,
    BadRequests,
    Failures,
    Sweeps,
    PeersEvicted,
}
