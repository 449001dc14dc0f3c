/// SQLite connection pool wrapper.
pub mod database_connector_sqlite;

/// One persisted peer.
pub mod peer_row;
