pub mod stats_atomics;
pub mod torrent_tracker;
