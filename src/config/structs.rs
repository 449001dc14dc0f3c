//! Configuration data structures.
//!
//! Each struct corresponds to a section in the TOML configuration file.

/// Root configuration structure containing all settings.
pub mod configuration;

/// Database connection and persistence settings.
pub mod database_config;

/// HTTP server configuration.
pub mod http_trackers_config;

/// Core tracker settings (intervals, TTL, encoding).
pub mod tracker_config;

/// Sentry error reporting configuration.
pub mod sentry_config;
