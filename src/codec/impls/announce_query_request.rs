use std::net::IpAddr;
use once_cell::sync::Lazy;
use regex::Regex;
use crate::catalog::structs::torrent_meta_update::TorrentMetaUpdate;
use crate::codec::codec::{optional_value, required_value, QueryMap};
use crate::codec::errors::CodecError;
use crate::codec::structs::announce_query_request::AnnounceQueryRequest;
use crate::tracker::enums::announce_event::AnnounceEvent;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::peer_id::PeerId;

static PORT_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+$").unwrap());

impl AnnounceQueryRequest {
    /// Decodes an announce from its query parameters.
    ///
    /// Presence of `info_hash`, `peer_id` and `port` is checked before the
    /// port itself, so a request missing `peer_id` is `Invalid request` even
    /// if its port is also malformed.
    pub fn decode(remote_addr: IpAddr, query: &QueryMap) -> Result<AnnounceQueryRequest, CodecError> {
        let info_hash = required_value(query, "info_hash")?;
        let peer_id = required_value(query, "peer_id")?;
        let port = required_value(query, "port")?;

        Ok(AnnounceQueryRequest {
            info_hash: InfoHash::from(info_hash),
            peer_id: PeerId::from(peer_id),
            remote_addr,
            port: Self::decode_port(port)?,
            event: optional_value(query, "event").map(AnnounceEvent::from_query_value).unwrap_or_default(),
            metadata: Self::decode_metadata(query),
        })
    }

    pub fn decode_port(value: &[u8]) -> Result<u16, CodecError> {
        let value = std::str::from_utf8(value).map_err(|_| CodecError::InvalidPort)?;
        if !PORT_REGEX.is_match(value) {
            return Err(CodecError::InvalidPort);
        }
        value.parse::<u16>().map_err(|_| CodecError::InvalidPort)
    }

    fn decode_metadata(query: &QueryMap) -> Option<TorrentMetaUpdate> {
        let text = |key: &str| optional_value(query, key).map(|value| String::from_utf8_lossy(value).into_owned());
        let metadata = TorrentMetaUpdate {
            name: text("nome"),
            media_type: text("tipo_midia"),
            description: text("descricao"),
            magnet_link: text("link_magnetico"),
        };
        (metadata != TorrentMetaUpdate::default()).then_some(metadata)
    }
}
