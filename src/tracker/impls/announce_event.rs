use crate::tracker::enums::announce_event::AnnounceEvent;

impl AnnounceEvent {
    /// Maps the raw `event` parameter; empty and unrecognized values are a plain announce.
    pub fn from_query_value(value: &[u8]) -> AnnounceEvent {
        if value.eq_ignore_ascii_case(b"started") {
            AnnounceEvent::Started
        } else if value.eq_ignore_ascii_case(b"stopped") {
            AnnounceEvent::Stopped
        } else if value.eq_ignore_ascii_case(b"completed") {
            AnnounceEvent::Completed
        } else {
            AnnounceEvent::None
        }
    }
}
