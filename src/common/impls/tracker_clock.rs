use std::time::{Duration, Instant, SystemTime};
use crate::common::structs::tracker_clock::TrackerClock;

impl TrackerClock {
    pub fn new() -> TrackerClock {
        TrackerClock {
            origin: SystemTime::now()
                .duration_since(SystemTime::UNIX_EPOCH)
                .unwrap_or_default(),
            started: Instant::now(),
        }
    }

    #[inline]
    pub fn now(&self) -> Duration {
        self.origin + self.started.elapsed()
    }

    /// Whole seconds since the unix epoch, as stored in the database.
    #[inline]
    pub fn unix_seconds(timestamp: Duration) -> i64 {
        i64::try_from(timestamp.as_secs()).unwrap_or(i64::MAX)
    }

    #[inline]
    pub fn from_unix_seconds(seconds: i64) -> Duration {
        Duration::from_secs(u64::try_from(seconds).unwrap_or(0))
    }
}

impl Default for TrackerClock {
    fn default() -> Self {
        Self::new()
    }
}
