pub mod database_connector_sqlite;
pub mod peer_row;
