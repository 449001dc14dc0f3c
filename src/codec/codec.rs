use std::borrow::Cow;
use std::collections::HashMap;
use bip_bencode::{ben_bytes, ben_int, ben_list, ben_map, BMutAccess};
use crate::catalog::structs::torrent_meta::TorrentMeta;
use crate::codec::errors::CodecError;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::torrent_peer::TorrentPeer;

pub type QueryMap = HashMap<String, Vec<Vec<u8>>>;

/// First value of `key`, if the key is present at all.
pub fn optional_value<'a>(query: &'a QueryMap, key: &str) -> Option<&'a [u8]> {
    query.get(key).and_then(|values| values.first()).map(Vec::as_slice)
}

/// First value of `key`; missing or empty is `Invalid request`.
pub fn required_value<'a>(query: &'a QueryMap, key: &str) -> Result<&'a [u8], CodecError> {
    match optional_value(query, key) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(CodecError::InvalidRequest),
    }
}

pub fn encode_failure(reason: &str) -> Vec<u8> {
    ben_map! {
        "failure reason" => ben_bytes!(reason)
    }.encode()
}

/// `/download` body: one dictionary per live peer.
pub fn encode_peer_list(info_hash: &InfoHash, peers: &[TorrentPeer]) -> Vec<u8> {
    let mut peers_list = ben_list!();
    if let Some(peers_list_mut) = peers_list.list_mut() {
        for torrent_peer in peers {
            peers_list_mut.push(ben_map! {
                "info_hash" => ben_bytes!(info_hash.0.to_vec()),
                "peer_id" => ben_bytes!(torrent_peer.peer_id.0.to_vec()),
                "ip" => ben_bytes!(torrent_peer.peer_addr.ip().to_string()),
                "port" => ben_int!(i64::from(torrent_peer.peer_addr.port()))
            });
        }
    }
    peers_list.encode()
}

/// `/torrents` body: one dictionary per catalog record; `link_magnetico` only when set.
pub fn encode_torrent_list(torrents: &[TorrentMeta]) -> Vec<u8> {
    let mut torrents_list = ben_list!();
    if let Some(torrents_list_mut) = torrents_list.list_mut() {
        for torrent in torrents {
            let mut entry = ben_map! {
                "nome" => ben_bytes!(torrent.name.clone()),
                "tipo_midia" => ben_bytes!(torrent.media_type.clone()),
                "descricao" => ben_bytes!(torrent.description.clone()),
                "info_hash" => ben_bytes!(torrent.info_hash.0.to_vec())
            };
            if let (Some(magnet_link), Some(entry_mut)) = (torrent.magnet_link.as_ref(), entry.dict_mut()) {
                entry_mut.insert(Cow::from(b"link_magnetico".to_vec()), ben_bytes!(magnet_link.clone()));
            }
            torrents_list_mut.push(entry);
        }
    }
    torrents_list.encode()
}
