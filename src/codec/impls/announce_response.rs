use std::net::{IpAddr, Ipv4Addr};
use bip_bencode::{ben_bytes, ben_int, ben_list, ben_map, BDecodeOpt, BMutAccess, BRefAccess, BencodeRef};
use byteorder::{BigEndian, ByteOrder};
use crate::codec::errors::CodecError;
use crate::codec::structs::announce_response::AnnounceResponse;
use crate::codec::structs::response_peer::ResponsePeer;
use crate::config::enums::peers_encoding::PeersEncoding;
use crate::tracker::structs::torrent_peer::TorrentPeer;

const COMPACT_PEER_LEN: usize = 6;

impl AnnounceResponse {
    pub fn from_peers(interval: i64, peers: &[TorrentPeer]) -> AnnounceResponse {
        AnnounceResponse {
            interval,
            peers: peers
                .iter()
                .map(|torrent_peer| ResponsePeer {
                    ip: torrent_peer.peer_addr.ip(),
                    port: torrent_peer.peer_addr.port(),
                })
                .collect(),
        }
    }

    pub fn encode(&self, encoding: PeersEncoding) -> Vec<u8> {
        match encoding {
            PeersEncoding::full => self.encode_full(),
            PeersEncoding::compact => self.encode_compact(),
        }
    }

    fn encode_full(&self) -> Vec<u8> {
        let mut peers_list = ben_list!();
        if let Some(peers_list_mut) = peers_list.list_mut() {
            for peer in self.peers.iter() {
                peers_list_mut.push(ben_map! {
                    "ip" => ben_bytes!(peer.ip.to_string()),
                    "port" => ben_int!(i64::from(peer.port))
                });
            }
        }
        ben_map! {
            "interval" => ben_int!(self.interval),
            "peers" => peers_list
        }.encode()
    }

    fn encode_compact(&self) -> Vec<u8> {
        let mut peers: Vec<u8> = Vec::with_capacity(self.peers.len() * COMPACT_PEER_LEN);
        for peer in self.peers.iter() {
            if let IpAddr::V4(ip) = peer.ip {
                let mut entry = [0u8; COMPACT_PEER_LEN];
                BigEndian::write_u32(&mut entry[0..4], u32::from(ip));
                BigEndian::write_u16(&mut entry[4..6], peer.port);
                peers.extend_from_slice(&entry);
            }
        }
        ben_map! {
            "interval" => ben_int!(self.interval),
            "peers" => ben_bytes!(peers)
        }.encode()
    }

    pub fn decode(bytes: &[u8]) -> Result<AnnounceResponse, CodecError> {
        Self::decode_encoding(bytes).map(|(response, _)| response)
    }

    /// Decodes either response form; the form is told apart by the bencode type of `peers`.
    pub fn decode_encoding(bytes: &[u8]) -> Result<(AnnounceResponse, PeersEncoding), CodecError> {
        let bencode = BencodeRef::decode(bytes, BDecodeOpt::default())
            .map_err(|error| CodecError::InvalidBencode(error.to_string()))?;
        let dict = bencode.dict()
            .ok_or_else(|| CodecError::InvalidResponse(String::from("response is not a dictionary")))?;
        let interval = dict.lookup(b"interval")
            .and_then(|value| value.int())
            .ok_or_else(|| CodecError::InvalidResponse(String::from("missing interval")))?;
        let peers = dict.lookup(b"peers")
            .ok_or_else(|| CodecError::InvalidResponse(String::from("missing peers")))?;

        if let Some(list) = peers.list() {
            let mut decoded = Vec::with_capacity(list.len());
            for index in 0..list.len() {
                let entry = list.get(index)
                    .and_then(|entry| entry.dict())
                    .ok_or_else(|| CodecError::InvalidResponse(String::from("peer entry is not a dictionary")))?;
                let ip = entry.lookup(b"ip")
                    .and_then(|value| value.str())
                    .and_then(|value| value.parse::<IpAddr>().ok())
                    .ok_or_else(|| CodecError::InvalidResponse(String::from("invalid peer ip")))?;
                let port = entry.lookup(b"port")
                    .and_then(|value| value.int())
                    .and_then(|value| u16::try_from(value).ok())
                    .ok_or_else(|| CodecError::InvalidResponse(String::from("invalid peer port")))?;
                decoded.push(ResponsePeer { ip, port });
            }
            return Ok((AnnounceResponse { interval, peers: decoded }, PeersEncoding::full));
        }

        let compact = peers.bytes()
            .ok_or_else(|| CodecError::InvalidResponse(String::from("peers is neither a list nor a byte string")))?;
        if compact.len() % COMPACT_PEER_LEN != 0 {
            return Err(CodecError::InvalidResponse(format!(
                "compact peers length {} is not a multiple of {COMPACT_PEER_LEN}", compact.len()
            )));
        }
        let decoded = compact
            .chunks_exact(COMPACT_PEER_LEN)
            .map(|entry| ResponsePeer {
                ip: IpAddr::V4(Ipv4Addr::from(BigEndian::read_u32(&entry[0..4]))),
                port: BigEndian::read_u16(&entry[4..6]),
            })
            .collect();
        Ok((AnnounceResponse { interval, peers: decoded }, PeersEncoding::compact))
    }
}
