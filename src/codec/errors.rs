use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("Invalid request")]
    InvalidRequest,

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid bencode: {0}")]
    InvalidBencode(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}
