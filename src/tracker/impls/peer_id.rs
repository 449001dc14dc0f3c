use std::fmt;
use std::fmt::Formatter;
use smallvec::SmallVec;
use crate::tracker::structs::peer_id::PeerId;

impl fmt::Display for PeerId {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(&hex::encode(&self.0))
    }
}

impl fmt::Debug for PeerId {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "PeerId({})", hex::encode(&self.0))
    }
}

impl std::str::FromStr for PeerId {
    type Err = hex::FromHexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = hex::decode(s)?;
        Ok(PeerId(SmallVec::from_vec(bytes)))
    }
}

impl From<&[u8]> for PeerId {
    fn from(data: &[u8]) -> PeerId {
        PeerId(SmallVec::from_slice(data))
    }
}

impl From<[u8; 20]> for PeerId {
    fn from(data: [u8; 20]) -> Self {
        PeerId(SmallVec::from_buf(data))
    }
}

impl AsRef<[u8]> for PeerId {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl serde::ser::Serialize for PeerId {
    fn serialize<S: serde::ser::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&hex::encode(&self.0))
    }
}

impl<'de> serde::de::Deserialize<'de> for PeerId {
    fn deserialize<D: serde::de::Deserializer<'de>>(des: D) -> Result<Self, D::Error> {
        let value = <String as serde::de::Deserialize>::deserialize(des)?;
        value.parse().map_err(serde::de::Error::custom)
    }
}
