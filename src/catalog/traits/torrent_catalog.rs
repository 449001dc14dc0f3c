use async_trait::async_trait;
use crate::catalog::errors::CatalogError;
use crate::catalog::structs::torrent_meta::TorrentMeta;
use crate::catalog::structs::torrent_meta_update::TorrentMetaUpdate;
use crate::tracker::structs::info_hash::InfoHash;

#[async_trait]
pub trait TorrentCatalog: Send + Sync {
    /// Creates or merges the record for `info_hash`; `now` is unix seconds.
    async fn upsert(&self, info_hash: &InfoHash, update: &TorrentMetaUpdate, now: i64) -> Result<(), CatalogError>;

    async fn list_all(&self) -> Result<Vec<TorrentMeta>, CatalogError>;

    /// Zero or one record; an unknown info hash is an empty list, not an error.
    async fn get_by_info_hash(&self, info_hash: &InfoHash) -> Result<Vec<TorrentMeta>, CatalogError>;
}
