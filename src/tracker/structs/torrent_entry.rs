use std::collections::BTreeMap;
use std::time::Duration;
use crate::tracker::structs::peer_id::PeerId;
use crate::tracker::structs::torrent_peer::TorrentPeer;

#[derive(Clone, Debug, Default)]
pub struct TorrentEntry {
    pub peers: BTreeMap<PeerId, TorrentPeer>,
    /// Last time membership or a record in this swarm changed.
    pub updated: Duration
}
