//! Common utilities and shared functionality.
//!
//! Helpers used across the tracker: query string parsing, the tracker clock,
//! shutdown-aware waiting and the free-form `CustomError` type used during boot.
//!
//! # Example
//!
//! ```rust
//! use swarm_tracker::common::common::parse_query;
//!
//! let params = parse_query(Some("info_hash=%AB%CD&port=6881"));
//! assert_eq!(params.get("port"), Some(&vec![b"6881".to_vec()]));
//! ```

/// Common data structures (errors, clock).
pub mod structs;

/// Core utility functions.
#[allow(clippy::module_inception)]
pub mod common;

/// Implementation blocks for common types.
pub mod impls;
