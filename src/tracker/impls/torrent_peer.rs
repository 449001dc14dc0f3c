use std::net::SocketAddr;
use std::time::Duration;
use crate::tracker::structs::peer_id::PeerId;
use crate::tracker::structs::torrent_peer::TorrentPeer;

impl TorrentPeer {
    pub fn new(peer_id: PeerId, peer_addr: SocketAddr, last_seen: Duration) -> TorrentPeer {
        TorrentPeer { peer_id, peer_addr, last_seen }
    }

    /// Time since the last announce; a clock reading before `last_seen` counts as zero.
    #[inline]
    pub fn age(&self, now: Duration) -> Duration {
        now.saturating_sub(self.last_seen)
    }

    /// The single staleness rule used by both lazy and periodic eviction.
    #[inline]
    pub fn is_stale(&self, now: Duration, ttl: Duration) -> bool {
        self.age(now) >= ttl
    }
}
