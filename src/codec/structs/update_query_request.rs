use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::peer_id::PeerId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateQueryRequest {
    pub info_hash: InfoHash,
    pub peer_id: PeerId,
}
