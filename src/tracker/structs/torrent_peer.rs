use std::net::SocketAddr;
use std::time::Duration;
use serde::Serialize;
use crate::tracker::structs::peer_id::PeerId;

#[derive(PartialEq, Eq, Debug, Clone, Serialize)]
pub struct TorrentPeer {
    pub peer_id: PeerId,
    pub peer_addr: SocketAddr,
    /// Tracker clock reading of the most recent announce from this peer.
    pub last_seen: Duration,
}
