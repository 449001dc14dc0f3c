use serde::Serialize;
use crate::tracker::structs::info_hash::InfoHash;

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct TorrentMeta {
    pub info_hash: InfoHash,
    pub name: String,
    pub media_type: String,
    pub description: String,
    pub magnet_link: Option<String>,
    /// Unix seconds of the last upsert.
    pub updated: i64,
}
