//! Runtime statistics for the tracker.
//!
//! Atomic counters updated from request handlers, the sweep and the
//! persistence flusher, readable at any time as a [`structs::stats::Stats`]
//! snapshot.
//!
//! # Example
//!
//! ```rust,ignore
//! use swarm_tracker::stats::enums::stats_event::StatsEvent;
//!
//! tracker.update_stats(StatsEvent::AnnouncesHandled, 1);
//! let stats = tracker.get_stats();
//! ```

/// Statistics event enumeration.
pub mod enums;

/// Implementation blocks for statistics operations.
pub mod impls;

/// Statistics data structures (atomic counters).
pub mod structs;
