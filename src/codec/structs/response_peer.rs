use std::net::IpAddr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResponsePeer {
    pub ip: IpAddr,
    pub port: u16,
}
