/// Announce event types.
///
/// - `None` - Regular re-announce (no event given, or an unknown one)
/// - `Started` - Peer joined the swarm
/// - `Stopped` - Peer left the swarm
/// - `Completed` - Peer finished the download
pub mod announce_event;

/// Queued persistence operation for a peer record.
pub mod updates_action;
