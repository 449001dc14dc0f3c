//! Announce codec.
//!
//! Turns query-parameter maps into typed requests and typed responses into
//! bencoded bodies (and back). Nothing in here touches the registry.
//!
//! # Response forms
//!
//! Full (`peers_encoding = "full"`):
//!
//! ```text
//! d8:intervali1800e5:peersld2:ip8:10.0.0.14:porti6881eeee
//! ```
//!
//! Compact (`peers_encoding = "compact"`): `peers` is a byte string of
//! 6-byte entries, a big-endian IPv4 address followed by a big-endian port.
//! IPv6 peers cannot be expressed in this form and are left out.

/// Bencode helpers for failure bodies and the auxiliary endpoints.
#[allow(clippy::module_inception)]
pub mod codec;

/// Codec error type.
pub mod errors;

/// Implementation blocks.
pub mod impls;

/// Typed requests and responses.
pub mod structs;
