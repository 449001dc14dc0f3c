use crate::tracker::structs::info_hash::InfoHash;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadQueryRequest {
    pub info_hash: InfoHash,
}
