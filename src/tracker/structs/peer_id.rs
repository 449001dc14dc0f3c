use smallvec::SmallVec;

#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone)]
pub struct PeerId(pub SmallVec<[u8; 20]>);
