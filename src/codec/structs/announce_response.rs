use crate::codec::structs::response_peer::ResponsePeer;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnounceResponse {
    /// Seconds the client should wait before announcing again.
    pub interval: i64,
    pub peers: Vec<ResponsePeer>,
}
