use std::net::{IpAddr, SocketAddr};
use crate::common::structs::tracker_clock::TrackerClock;
use crate::database::errors::StorageError;
use crate::database::structs::peer_row::PeerRow;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::peer_id::PeerId;
use crate::tracker::structs::torrent_peer::TorrentPeer;

impl PeerRow {
    pub fn from_peer(info_hash: &InfoHash, torrent_peer: &TorrentPeer) -> PeerRow {
        PeerRow {
            info_hash: info_hash.0.to_vec(),
            peer_id: torrent_peer.peer_id.0.to_vec(),
            ip: torrent_peer.peer_addr.ip().to_string(),
            port: i64::from(torrent_peer.peer_addr.port()),
            last_seen: TrackerClock::unix_seconds(torrent_peer.last_seen),
        }
    }

    pub fn to_peer(&self) -> Result<(InfoHash, TorrentPeer), StorageError> {
        if self.info_hash.is_empty() || self.peer_id.is_empty() {
            return Err(StorageError::InvalidRow(String::from("empty info_hash or peer_id")));
        }
        let ip = self.ip.parse::<IpAddr>()
            .map_err(|_| StorageError::InvalidRow(format!("bad ip \"{}\"", self.ip)))?;
        let port = u16::try_from(self.port)
            .map_err(|_| StorageError::InvalidRow(format!("bad port {}", self.port)))?;
        Ok((
            InfoHash::from(self.info_hash.as_slice()),
            TorrentPeer::new(
                PeerId::from(self.peer_id.as_slice()),
                SocketAddr::new(ip, port),
                TrackerClock::from_unix_seconds(self.last_seen),
            ),
        ))
    }
}
