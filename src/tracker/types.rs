use std::sync::Arc;
use ahash::AHashMap;
use parking_lot::RwLock;
use crate::tracker::enums::updates_action::UpdatesAction;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::peer_id::PeerId;
use crate::tracker::structs::torrent_peer::TorrentPeer;

/// Peer changes waiting to be written to storage; the latest change per peer wins.
pub type PeersUpdates = Arc<RwLock<AHashMap<(InfoHash, PeerId), (TorrentPeer, UpdatesAction)>>>;
