//! HTTP surface of the tracker.
//!
//! # Endpoints
//!
//! - `/` and `/announce` - Announce (bencoded peer list)
//! - `/torrents` - Catalog listing
//! - `/update` - Refresh `last_seen` of a known peer
//! - `/download` - Live peers of one info hash
//!
//! Anything else is answered with a bencoded `failure reason` and `404`.
//! Validation and storage errors on the endpoints above are plain text bodies.

/// HTTP server implementation and handlers.
#[allow(clippy::module_inception)]
pub mod http;

/// Data shared with the handlers.
pub mod structs;
