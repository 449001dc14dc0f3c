use std::time::{Duration, Instant};

/// Source of the timestamps handed to the peer registry.
///
/// Readings are taken from a monotonic [`Instant`], offset by the unix time
/// captured at construction. Values never go backwards while the process runs,
/// and they stay comparable with `last_seen` values written to storage by a
/// previous run.
#[derive(Debug, Clone, Copy)]
pub struct TrackerClock {
    pub(crate) origin: Duration,
    pub(crate) started: Instant,
}
