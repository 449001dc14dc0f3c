//! Configuration management module.
//!
//! Loads, parses and validates the tracker configuration from a TOML file.
//!
//! # Configuration Structure
//!
//! The configuration file (`config.toml`) contains sections for:
//! - **tracker_config**: announce interval, peer TTL, sweep period, response encoding
//! - **database**: SQLite path and persistence settings
//! - **http_server**: one or more HTTP listeners
//! - **sentry_config**: optional error reporting
//!
//! # Example
//!
//! ```rust,ignore
//! use swarm_tracker::config::structs::configuration::Configuration;
//!
//! let config = Configuration::load_from_file("config.toml", false)?;
//! ```

/// Configuration enumerations (errors, peer encoding).
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving.
pub mod impls;

#[cfg(test)]
mod tests;
