use serde::{Deserialize, Serialize};

#[allow(non_camel_case_types)]
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PeersEncoding {
    /// List of `{ip, port}` dictionaries.
    #[default]
    full,
    /// Byte string of 6-byte IPv4 entries.
    compact,
}
