use std::net::SocketAddr;
use log::debug;
use crate::catalog::errors::CatalogError;
use crate::catalog::structs::torrent_meta::TorrentMeta;
use crate::codec::structs::announce_query_request::AnnounceQueryRequest;
use crate::codec::structs::download_query_request::DownloadQueryRequest;
use crate::codec::structs::update_query_request::UpdateQueryRequest;
use crate::common::structs::tracker_clock::TrackerClock;
use crate::stats::enums::stats_event::StatsEvent;
use crate::tracker::structs::torrent_peer::TorrentPeer;
use crate::tracker::structs::torrent_tracker::TorrentTracker;

impl TorrentTracker {
    /// Runs a decoded announce against the registry, then records any
    /// catalog fields it carried. A catalog failure is reported after the
    /// membership change has already been applied.
    pub async fn handle_announce(&self, request: &AnnounceQueryRequest) -> Result<Vec<TorrentPeer>, CatalogError>
    {
        let now = self.clock.now();
        let peers = self.announce(
            &request.info_hash,
            &request.peer_id,
            SocketAddr::new(request.remote_addr, request.port),
            request.event,
            now
        );
        self.update_stats(StatsEvent::AnnouncesHandled, 1);

        if let Some(metadata) = request.metadata.as_ref() {
            debug!("[CATALOG] Upserting metadata for {}", request.info_hash);
            self.catalog.upsert(&request.info_hash, metadata, TrackerClock::unix_seconds(now)).await?;
        }
        Ok(peers)
    }

    pub fn handle_update(&self, request: &UpdateQueryRequest) -> bool
    {
        self.update_stats(StatsEvent::UpdatesHandled, 1);
        self.refresh_peer(&request.info_hash, &request.peer_id, self.clock.now())
    }

    pub fn handle_download(&self, request: &DownloadQueryRequest) -> Vec<TorrentPeer>
    {
        self.update_stats(StatsEvent::DownloadsHandled, 1);
        self.list_peers(&request.info_hash, self.clock.now())
    }

    pub async fn handle_torrents(&self) -> Result<Vec<TorrentMeta>, CatalogError>
    {
        self.update_stats(StatsEvent::TorrentsHandled, 1);
        self.catalog.list_all().await
    }
}
