use crate::codec::codec::{required_value, QueryMap};
use crate::codec::errors::CodecError;
use crate::codec::structs::download_query_request::DownloadQueryRequest;
use crate::tracker::structs::info_hash::InfoHash;

impl DownloadQueryRequest {
    pub fn decode(query: &QueryMap) -> Result<DownloadQueryRequest, CodecError> {
        Ok(DownloadQueryRequest {
            info_hash: InfoHash::from(required_value(query, "info_hash")?),
        })
    }
}
