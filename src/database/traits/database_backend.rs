use async_trait::async_trait;
use crate::database::errors::StorageError;
use crate::database::structs::peer_row::PeerRow;
use crate::tracker::enums::updates_action::UpdatesAction;

#[async_trait]
pub trait DatabaseBackend: Send + Sync {
    async fn load_peers(&self) -> Result<Vec<PeerRow>, StorageError>;

    /// Applies queued changes in one transaction and returns how many were written.
    async fn save_peers(&self, peers: Vec<(PeerRow, UpdatesAction)>) -> Result<u64, StorageError>;

    /// Deletes every peer with `last_seen < cutoff` (unix seconds).
    async fn remove_stale(&self, cutoff: i64) -> Result<u64, StorageError>;
}
