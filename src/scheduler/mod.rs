//! Periodic eviction.
//!
//! Runs the registry sweep on a fixed period, independent of request
//! traffic, and mirrors it into storage when persistence is enabled.

pub mod structs;
pub mod impls;
