use serde::{Deserialize, Serialize};
use crate::config::enums::peers_encoding::PeersEncoding;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TrackerConfig {
    pub request_interval: u64,
    pub peers_timeout: u64,
    pub peers_cleanup_interval: u64,
    #[serde(default)]
    pub peers_encoding: PeersEncoding,
    #[serde(default)]
    pub prune_empty_swarms: bool
}
