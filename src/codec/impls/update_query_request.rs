use crate::codec::codec::{required_value, QueryMap};
use crate::codec::errors::CodecError;
use crate::codec::structs::update_query_request::UpdateQueryRequest;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::peer_id::PeerId;

impl UpdateQueryRequest {
    pub fn decode(query: &QueryMap) -> Result<UpdateQueryRequest, CodecError> {
        Ok(UpdateQueryRequest {
            info_hash: InfoHash::from(required_value(query, "info_hash")?),
            peer_id: PeerId::from(required_value(query, "peer_id")?),
        })
    }
}
