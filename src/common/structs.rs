pub mod custom_error;

/// Monotonic clock anchored to the unix epoch at startup.
pub mod tracker_clock;
