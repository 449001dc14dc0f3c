use std::collections::BTreeMap;
use parking_lot::RwLock;
use crate::catalog::structs::torrent_meta::TorrentMeta;
use crate::tracker::structs::info_hash::InfoHash;

#[derive(Debug, Default)]
pub struct CatalogMemory {
    pub torrents: RwLock<BTreeMap<InfoHash, TorrentMeta>>,
}
