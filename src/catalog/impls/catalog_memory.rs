use std::collections::btree_map::Entry;
use async_trait::async_trait;
use crate::catalog::errors::CatalogError;
use crate::catalog::structs::catalog_memory::CatalogMemory;
use crate::catalog::structs::torrent_meta::TorrentMeta;
use crate::catalog::structs::torrent_meta_update::TorrentMetaUpdate;
use crate::catalog::traits::torrent_catalog::TorrentCatalog;
use crate::tracker::structs::info_hash::InfoHash;

impl CatalogMemory {
    pub fn new() -> CatalogMemory {
        CatalogMemory::default()
    }
}

#[async_trait]
impl TorrentCatalog for CatalogMemory {
    async fn upsert(&self, info_hash: &InfoHash, update: &TorrentMetaUpdate, now: i64) -> Result<(), CatalogError> {
        let mut lock = self.torrents.write();
        match lock.entry(info_hash.clone()) {
            Entry::Vacant(vacant) => {
                vacant.insert(TorrentMeta::from_update(info_hash, update, now));
            }
            Entry::Occupied(mut occupied) => {
                occupied.get_mut().merge(update, now);
            }
        }
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<TorrentMeta>, CatalogError> {
        Ok(self.torrents.read().values().cloned().collect())
    }

    async fn get_by_info_hash(&self, info_hash: &InfoHash) -> Result<Vec<TorrentMeta>, CatalogError> {
        Ok(self.torrents.read().get(info_hash).cloned().into_iter().collect())
    }
}
