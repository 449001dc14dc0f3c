/// Metadata fields carried by an announce. `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TorrentMetaUpdate {
    pub name: Option<String>,
    pub media_type: Option<String>,
    pub description: Option<String>,
    pub magnet_link: Option<String>,
}
