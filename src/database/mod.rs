//! Persistence for peers and catalog records.
//!
//! The in-memory registry stays the source of truth; storage is a mirror that
//! is written asynchronously from the update queue and read back at startup.
//! Only SQLite is supported, through `sqlx`.

/// Supported database engines.
pub mod enums;

/// Storage error type.
pub mod errors;

/// Implementation blocks.
pub mod impls;

/// Connector and row structures.
pub mod structs;

/// The storage contract used by the tracker.
pub mod traits;
