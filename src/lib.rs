//! # swarm-tracker
//!
//! A BitTorrent announce tracker built on actix-web.
//!
//! Peers announce which content (`info_hash`) they share; the tracker answers
//! with the other peers of that swarm and forgets peers that stop announcing.
//!
//! ## Modules
//!
//! - [`tracker`] - Sharded peer registry: announce, listing, refresh and sweep
//! - [`codec`] - Query decoding and bencoded response encoding
//! - [`scheduler`] - Periodic eviction of stale peers
//! - [`catalog`] - Torrent metadata (name, media type, description)
//! - [`database`] - SQLite mirror for peers and the catalog
//! - [`http`] - HTTP endpoints
//! - [`config`] - TOML configuration
//! - [`stats`] - Atomic counters
//! - [`common`] - Query parsing, tracker clock, shutdown helpers
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use swarm_tracker::config::structs::configuration::Configuration;
//! use swarm_tracker::tracker::structs::torrent_tracker::TorrentTracker;
//!
//! let config = Arc::new(Configuration::load_from_file("config.toml", false)?);
//! let tracker = Arc::new(TorrentTracker::from_config(config, false).await?);
//! ```

/// Torrent metadata catalog.
pub mod catalog;

/// Announce request decoding and response encoding.
pub mod codec;

/// Common utilities and shared functionality.
pub mod common;

/// Configuration management module.
pub mod config;

/// SQLite persistence for peers and catalog records.
pub mod database;

/// HTTP tracker endpoints.
pub mod http;

/// Logging setup.
pub mod logging;

/// Periodic stale-peer eviction.
pub mod scheduler;

/// Statistics tracking.
pub mod stats;

/// CLI argument parsing.
pub mod structs;

/// Core peer registry.
pub mod tracker;
