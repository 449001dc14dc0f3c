/// Peer record as stored in the `peers` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeerRow {
    pub info_hash: Vec<u8>,
    pub peer_id: Vec<u8>,
    pub ip: String,
    pub port: i64,
    /// Unix seconds.
    pub last_seen: i64,
}
