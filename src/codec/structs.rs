/// Decoded announce request.
pub mod announce_query_request;

/// Decoded `/update` request.
pub mod update_query_request;

/// Decoded `/download` request.
pub mod download_query_request;

/// Announce response body.
pub mod announce_response;

/// One `(ip, port)` entry of an announce response.
pub mod response_peer;
