use std::net::IpAddr;
use crate::catalog::structs::torrent_meta_update::TorrentMetaUpdate;
use crate::tracker::enums::announce_event::AnnounceEvent;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::peer_id::PeerId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnounceQueryRequest {
    pub info_hash: InfoHash,
    pub peer_id: PeerId,
    /// Address the request arrived from, never taken from the query.
    pub remote_addr: IpAddr,
    pub port: u16,
    pub event: AnnounceEvent,
    /// Catalog fields, present when the announce carried any of them.
    pub metadata: Option<TorrentMetaUpdate>,
}
