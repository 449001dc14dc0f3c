//! Torrent metadata catalog.
//!
//! Descriptive metadata (name, media type, description, magnet link) keyed by
//! info hash. Kept apart from swarm membership: the registry never reads it.

/// Catalog error type.
pub mod errors;

/// Catalog entities and the in-memory store.
pub mod structs;

/// Implementation blocks.
pub mod impls;

/// The catalog contract.
pub mod traits;
