use smallvec::SmallVec;

/// Content identifier as sent by the client. Usually 20 bytes, but any
/// non-empty byte string is accepted and compared byte for byte.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone)]
pub struct InfoHash(pub SmallVec<[u8; 20]>);
