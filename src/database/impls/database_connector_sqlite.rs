use std::str::FromStr;
use std::time::Duration;
use async_trait::async_trait;
use futures_util::TryStreamExt;
use log::{error, info};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions, SqliteRow};
use sqlx::{ConnectOptions, Pool, Row, Sqlite};
use crate::catalog::errors::CatalogError;
use crate::catalog::structs::torrent_meta::TorrentMeta;
use crate::catalog::structs::torrent_meta_update::TorrentMetaUpdate;
use crate::catalog::traits::torrent_catalog::TorrentCatalog;
use crate::config::structs::database_config::DatabaseConfig;
use crate::database::errors::StorageError;
use crate::database::structs::database_connector_sqlite::DatabaseConnectorSQLite;
use crate::database::structs::peer_row::PeerRow;
use crate::database::traits::database_backend::DatabaseBackend;
use crate::tracker::enums::updates_action::UpdatesAction;
use crate::tracker::structs::info_hash::InfoHash;

const LOG_PREFIX: &str = "[SQLite]";

const CREATE_PEERS_TABLE: &str = "CREATE TABLE IF NOT EXISTS peers (\
    info_hash BLOB NOT NULL, \
    peer_id BLOB NOT NULL, \
    ip TEXT NOT NULL, \
    port INTEGER NOT NULL, \
    last_seen INTEGER NOT NULL, \
    PRIMARY KEY (info_hash, peer_id))";

const CREATE_TORRENTS_TABLE: &str = "CREATE TABLE IF NOT EXISTS torrents (\
    info_hash BLOB PRIMARY KEY NOT NULL, \
    nome TEXT NOT NULL DEFAULT '', \
    tipo_midia TEXT NOT NULL DEFAULT '', \
    descricao TEXT NOT NULL DEFAULT '', \
    link_magnetico TEXT, \
    updated INTEGER NOT NULL)";

const UPSERT_PEER: &str = "INSERT INTO peers (info_hash, peer_id, ip, port, last_seen) VALUES (?, ?, ?, ?, ?) \
    ON CONFLICT(info_hash, peer_id) DO UPDATE SET ip = excluded.ip, port = excluded.port, last_seen = excluded.last_seen";

const DELETE_PEER: &str = "DELETE FROM peers WHERE info_hash = ? AND peer_id = ?";

const UPSERT_TORRENT: &str = "INSERT INTO torrents (info_hash, nome, tipo_midia, descricao, link_magnetico, updated) \
    VALUES (?, COALESCE(?, ''), COALESCE(?, ''), COALESCE(?, ''), ?, ?) \
    ON CONFLICT(info_hash) DO UPDATE SET \
    nome = COALESCE(?, nome), \
    tipo_midia = COALESCE(?, tipo_midia), \
    descricao = COALESCE(?, descricao), \
    link_magnetico = COALESCE(?, link_magnetico), \
    updated = excluded.updated";

const SELECT_TORRENTS: &str = "SELECT info_hash, nome, tipo_midia, descricao, link_magnetico, updated FROM torrents ORDER BY updated, info_hash";

const SELECT_TORRENT: &str = "SELECT info_hash, nome, tipo_midia, descricao, link_magnetico, updated FROM torrents WHERE info_hash = ?";

impl DatabaseConnectorSQLite {
    #[tracing::instrument(level = "debug")]
    pub async fn create(dsl: &str, create_if_missing: bool) -> Result<Pool<Sqlite>, sqlx::Error> {
        let options = SqliteConnectOptions::from_str(dsl)?
            .create_if_missing(create_if_missing)
            .log_statements(log::LevelFilter::Debug)
            .log_slow_statements(log::LevelFilter::Debug, Duration::from_secs(1));
        SqlitePoolOptions::new()
            .connect_with(options)
            .await
    }

    /// Opens the pool; with `create_database` the file and tables are created when missing.
    #[tracing::instrument(level = "debug")]
    pub async fn connect(config: &DatabaseConfig, create_database: bool) -> Result<DatabaseConnectorSQLite, StorageError> {
        let pool = match DatabaseConnectorSQLite::create(config.path.as_str(), create_database).await {
            Ok(pool) => pool,
            Err(error) => {
                error!("{LOG_PREFIX} Unable to connect to SQLite on DSL {}", config.path);
                error!("{LOG_PREFIX} Message: {error}");
                return Err(StorageError::DatabaseError(error));
            }
        };

        let connector = DatabaseConnectorSQLite { pool };
        if create_database {
            connector.create_tables().await?;
        }
        Ok(connector)
    }

    pub async fn create_tables(&self) -> Result<(), StorageError> {
        info!("[BOOT] Database creation triggered for SQLite.");
        info!("[BOOT SQLite] Creating table peers");
        sqlx::query(CREATE_PEERS_TABLE).execute(&self.pool).await?;
        info!("[BOOT SQLite] Creating table torrents");
        sqlx::query(CREATE_TORRENTS_TABLE).execute(&self.pool).await?;
        Ok(())
    }

    fn torrent_from_row(row: &SqliteRow) -> Result<TorrentMeta, sqlx::Error> {
        let info_hash: Vec<u8> = row.try_get("info_hash")?;
        Ok(TorrentMeta {
            info_hash: InfoHash::from(info_hash.as_slice()),
            name: row.try_get("nome")?,
            media_type: row.try_get("tipo_midia")?,
            description: row.try_get("descricao")?,
            magnet_link: row.try_get("link_magnetico")?,
            updated: row.try_get("updated")?,
        })
    }

    async fn fetch_torrents(&self, info_hash: Option<&InfoHash>) -> Result<Vec<TorrentMeta>, sqlx::Error> {
        let query = match info_hash {
            None => sqlx::query(SELECT_TORRENTS),
            Some(info_hash) => sqlx::query(SELECT_TORRENT).bind(info_hash.0.to_vec()),
        };

        let mut torrents = Vec::new();
        let mut rows = query.fetch(&self.pool);
        while let Some(row) = rows.try_next().await? {
            torrents.push(Self::torrent_from_row(&row)?);
        }
        Ok(torrents)
    }
}

#[async_trait]
impl DatabaseBackend for DatabaseConnectorSQLite {
    async fn load_peers(&self) -> Result<Vec<PeerRow>, StorageError> {
        let mut peers = Vec::new();
        let mut rows = sqlx::query("SELECT info_hash, peer_id, ip, port, last_seen FROM peers").fetch(&self.pool);
        while let Some(row) = rows.try_next().await? {
            peers.push(PeerRow {
                info_hash: row.try_get("info_hash")?,
                peer_id: row.try_get("peer_id")?,
                ip: row.try_get("ip")?,
                port: row.try_get("port")?,
                last_seen: row.try_get("last_seen")?,
            });
        }
        info!("{LOG_PREFIX} Loaded {} peers", peers.len());
        Ok(peers)
    }

    async fn save_peers(&self, peers: Vec<(PeerRow, UpdatesAction)>) -> Result<u64, StorageError> {
        let mut transaction = self.pool.begin().await?;
        let mut handled = 0u64;
        for (peer_row, updates_action) in peers.iter() {
            let result = match updates_action {
                UpdatesAction::Remove => {
                    sqlx::query(DELETE_PEER)
                        .bind(peer_row.info_hash.as_slice())
                        .bind(peer_row.peer_id.as_slice())
                        .execute(&mut *transaction)
                        .await
                }
                UpdatesAction::Add | UpdatesAction::Update => {
                    sqlx::query(UPSERT_PEER)
                        .bind(peer_row.info_hash.as_slice())
                        .bind(peer_row.peer_id.as_slice())
                        .bind(peer_row.ip.as_str())
                        .bind(peer_row.port)
                        .bind(peer_row.last_seen)
                        .execute(&mut *transaction)
                        .await
                }
            };
            if let Err(error) = result {
                error!("{LOG_PREFIX} Error: {error}");
                return Err(StorageError::DatabaseError(error));
            }
            handled += 1;
        }
        transaction.commit().await?;
        Ok(handled)
    }

    async fn remove_stale(&self, cutoff: i64) -> Result<u64, StorageError> {
        let result = sqlx::query("DELETE FROM peers WHERE last_seen < ?")
            .bind(cutoff)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}

#[async_trait]
impl TorrentCatalog for DatabaseConnectorSQLite {
    async fn upsert(&self, info_hash: &InfoHash, update: &TorrentMetaUpdate, now: i64) -> Result<(), CatalogError> {
        sqlx::query(UPSERT_TORRENT)
            .bind(info_hash.0.to_vec())
            .bind(update.name.as_deref())
            .bind(update.media_type.as_deref())
            .bind(update.description.as_deref())
            .bind(update.magnet_link.as_deref())
            .bind(now)
            .bind(update.name.as_deref())
            .bind(update.media_type.as_deref())
            .bind(update.description.as_deref())
            .bind(update.magnet_link.as_deref())
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<TorrentMeta>, CatalogError> {
        self.fetch_torrents(None).await.map_err(|error| {
            error!("{LOG_PREFIX} Error fetching torrents: {error}");
            CatalogError::from(StorageError::from(error))
        })
    }

    async fn get_by_info_hash(&self, info_hash: &InfoHash) -> Result<Vec<TorrentMeta>, CatalogError> {
        self.fetch_torrents(Some(info_hash)).await.map_err(|error| CatalogError::from(StorageError::from(error)))
    }
}
