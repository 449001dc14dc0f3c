pub mod announce_query_request;
pub mod announce_response;
pub mod download_query_request;
pub mod update_query_request;
