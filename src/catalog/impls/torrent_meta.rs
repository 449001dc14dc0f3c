use crate::catalog::structs::torrent_meta::TorrentMeta;
use crate::catalog::structs::torrent_meta_update::TorrentMetaUpdate;
use crate::tracker::structs::info_hash::InfoHash;

impl TorrentMeta {
    pub fn from_update(info_hash: &InfoHash, update: &TorrentMetaUpdate, now: i64) -> TorrentMeta {
        TorrentMeta {
            info_hash: info_hash.clone(),
            name: update.name.clone().unwrap_or_default(),
            media_type: update.media_type.clone().unwrap_or_default(),
            description: update.description.clone().unwrap_or_default(),
            magnet_link: update.magnet_link.clone(),
            updated: now,
        }
    }

    pub fn merge(&mut self, update: &TorrentMetaUpdate, now: i64) {
        if let Some(name) = update.name.as_ref() {
            self.name = name.clone();
        }
        if let Some(media_type) = update.media_type.as_ref() {
            self.media_type = media_type.clone();
        }
        if let Some(description) = update.description.as_ref() {
            self.description = description.clone();
        }
        if update.magnet_link.is_some() {
            self.magnet_link = update.magnet_link.clone();
        }
        self.updated = now;
    }
}
