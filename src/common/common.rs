use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::watch;

/// Splits a raw query string into lowercase keys and percent-decoded byte values.
///
/// Values are kept as raw bytes since `info_hash` and `peer_id` are binary.
/// Repeated keys collect every value in order; a key without `=` gets an empty value.
pub fn parse_query(query: Option<&str>) -> HashMap<String, Vec<Vec<u8>>> {
    let mut queries: HashMap<String, Vec<Vec<u8>>> = HashMap::new();
    let Some(raw_query) = query else {
        return queries;
    };

    for query_item in raw_query.split('&') {
        if query_item.is_empty() {
            continue;
        }
        let (key_name_raw, value_data_raw) = query_item.split_once('=').unwrap_or((query_item, ""));
        let key_name = percent_encoding::percent_decode_str(key_name_raw).decode_utf8_lossy().to_lowercase();
        if key_name.is_empty() {
            continue;
        }
        let value_data = percent_encoding::percent_decode_str(value_data_raw).collect::<Vec<u8>>();
        queries.entry(key_name).or_default().push(value_data);
    }

    queries
}

/// Sleeps for `timeout` unless a shutdown is signalled first.
///
/// Returns `true` when the caller should stop: the flag was set, or every
/// sender of the channel is gone.
pub async fn shutdown_waiting(timeout: Duration, shutdown: &mut watch::Receiver<bool>) -> bool {
    if *shutdown.borrow() {
        return true;
    }
    tokio::select! {
        _ = tokio::time::sleep(timeout) => false,
        changed = shutdown.changed() => changed.is_err() || *shutdown.borrow()
    }
}
