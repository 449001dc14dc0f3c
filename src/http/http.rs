use std::future::Future;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use actix_cors::Cors;
use actix_web::{App, http, HttpRequest, HttpResponse, HttpResponseBuilder, HttpServer, web};
use actix_web::dev::ServerHandle;
use actix_web::http::header::ContentType;
use actix_web::web::{Data, ServiceConfig};
use log::{debug, error, info};
use crate::codec::codec::{encode_failure, encode_peer_list, encode_torrent_list};
use crate::codec::structs::announce_query_request::AnnounceQueryRequest;
use crate::codec::structs::announce_response::AnnounceResponse;
use crate::codec::structs::download_query_request::DownloadQueryRequest;
use crate::codec::structs::update_query_request::UpdateQueryRequest;
use crate::common::common::parse_query;
use crate::config::structs::http_trackers_config::HttpTrackersConfig;
use crate::http::structs::http_service_data::HttpServiceData;
use crate::stats::enums::stats_event::StatsEvent;
use crate::tracker::structs::torrent_tracker::TorrentTracker;

pub fn http_service_cors() -> Cors
{
    Cors::default()
        .send_wildcard()
        .allowed_methods(vec!["GET"])
        .allowed_headers(vec![http::header::X_FORWARDED_FOR, http::header::ACCEPT])
        .allowed_header(http::header::CONTENT_TYPE)
        .max_age(1)
}

pub fn http_service_routes(data: Arc<HttpServiceData>) -> Box<dyn Fn(&mut ServiceConfig)>
{
    Box::new(move |cfg: &mut ServiceConfig| {
        cfg.app_data(Data::new(data.clone()));
        cfg.service(web::resource("/").route(web::get().to(http_service_announce)));
        cfg.service(web::resource("/announce").route(web::get().to(http_service_announce)));
        cfg.service(web::resource("/torrents").route(web::get().to(http_service_torrents)));
        cfg.service(web::resource("/update").route(web::get().to(http_service_update)));
        cfg.service(web::resource("/download").route(web::get().to(http_service_download)));
        cfg.default_service(web::route().to(http_service_not_found));
    })
}

/// Binds one listener. The returned future runs the server until its handle stops it.
pub fn http_service(
    addr: SocketAddr,
    torrent_tracker: Arc<TorrentTracker>,
    http_server_object: HttpTrackersConfig
) -> std::io::Result<(ServerHandle, impl Future<Output=Result<(), std::io::Error>>)>
{
    let keep_alive = http_server_object.keep_alive;
    let request_timeout = http_server_object.request_timeout;
    let disconnect_timeout = http_server_object.disconnect_timeout;
    let max_connections = http_server_object.max_connections;
    let worker_threads = http_server_object.threads;
    let data = Arc::new(HttpServiceData {
        torrent_tracker,
        http_trackers_config: Arc::new(http_server_object),
    });

    info!("[HTTP] Starting server listener on {addr}");
    let server = HttpServer::new(move || {
        App::new()
            .wrap(http_service_cors())
            .configure(http_service_routes(data.clone()))
    })
        .keep_alive(Duration::from_secs(keep_alive))
        .client_request_timeout(Duration::from_secs(request_timeout))
        .client_disconnect_timeout(Duration::from_secs(disconnect_timeout))
        .max_connections(max_connections as usize)
        .workers(worker_threads.max(1) as usize)
        .bind((addr.ip(), addr.port()))?
        .disable_signals()
        .run();

    Ok((server.handle(), server))
}

pub async fn http_service_announce(request: HttpRequest, data: Data<Arc<HttpServiceData>>) -> HttpResponse
{
    let ip = match http_validate_ip(&request, &data) {
        Ok(ip) => ip,
        Err(response) => return response,
    };

    let query_map = parse_query(Some(request.query_string()));
    let announce = match AnnounceQueryRequest::decode(ip, &query_map) {
        Ok(announce) => announce,
        Err(error) => {
            data.torrent_tracker.update_stats(StatsEvent::BadRequests, 1);
            debug!("[HTTP] Rejected announce from {ip}: {error}");
            return http_service_plaintext(HttpResponse::BadRequest(), &error.to_string());
        }
    };

    match data.torrent_tracker.handle_announce(&announce).await {
        Ok(peers) => {
            let tracker_config = &data.torrent_tracker.config.tracker_config;
            let response = AnnounceResponse::from_peers(tracker_config.request_interval as i64, &peers);
            HttpResponse::Ok().content_type(ContentType::plaintext()).body(response.encode(tracker_config.peers_encoding))
        }
        Err(error) => {
            data.torrent_tracker.update_stats(StatsEvent::Failures, 1);
            error!("[HTTP] Announce for {} failed: {error}", announce.info_hash);
            sentry::capture_error(&error);
            http_service_plaintext(HttpResponse::InternalServerError(), "Failed to update peer")
        }
    }
}

pub async fn http_service_torrents(data: Data<Arc<HttpServiceData>>) -> HttpResponse
{
    match data.torrent_tracker.handle_torrents().await {
        Ok(torrents) => {
            HttpResponse::Ok().content_type(ContentType::plaintext()).body(encode_torrent_list(&torrents))
        }
        Err(error) => {
            data.torrent_tracker.update_stats(StatsEvent::Failures, 1);
            error!("[HTTP] Error fetching torrents: {error}");
            sentry::capture_error(&error);
            http_service_plaintext(HttpResponse::InternalServerError(), "Failed to fetch torrents data")
        }
    }
}

pub async fn http_service_update(request: HttpRequest, data: Data<Arc<HttpServiceData>>) -> HttpResponse
{
    let query_map = parse_query(Some(request.query_string()));
    let update = match UpdateQueryRequest::decode(&query_map) {
        Ok(update) => update,
        Err(error) => {
            data.torrent_tracker.update_stats(StatsEvent::BadRequests, 1);
            return http_service_plaintext(HttpResponse::BadRequest(), &error.to_string());
        }
    };

    if data.torrent_tracker.handle_update(&update) {
        http_service_plaintext(HttpResponse::Ok(), "Successfully updated peer")
    } else {
        data.torrent_tracker.update_stats(StatsEvent::NotFound, 1);
        http_service_plaintext(HttpResponse::NotFound(), "Peer not found")
    }
}

pub async fn http_service_download(request: HttpRequest, data: Data<Arc<HttpServiceData>>) -> HttpResponse
{
    let query_map = parse_query(Some(request.query_string()));
    let download = match DownloadQueryRequest::decode(&query_map) {
        Ok(download) => download,
        Err(error) => {
            data.torrent_tracker.update_stats(StatsEvent::BadRequests, 1);
            return http_service_plaintext(HttpResponse::BadRequest(), &error.to_string());
        }
    };

    let peers = data.torrent_tracker.handle_download(&download);
    HttpResponse::Ok().content_type(ContentType::plaintext()).body(encode_peer_list(&download.info_hash, &peers))
}

pub async fn http_service_not_found(request: HttpRequest, data: Data<Arc<HttpServiceData>>) -> HttpResponse
{
    data.torrent_tracker.update_stats(StatsEvent::NotFound, 1);
    debug!("[HTTP] Request for {}: 404 Not Found", request.path());
    HttpResponse::NotFound().content_type(ContentType::plaintext()).body(encode_failure("unknown request"))
}

pub fn http_service_plaintext(mut builder: HttpResponseBuilder, body: &str) -> HttpResponse
{
    builder.content_type(ContentType::plaintext()).body(body.to_string())
}

/// Client address: the socket peer, or the configured proxy header when it is present.
pub fn http_service_retrieve_remote_ip(request: &HttpRequest, real_ip: &str) -> Result<IpAddr, ()>
{
    let origin_ip = request.peer_addr().map(|addr| addr.ip()).ok_or(())?;
    if real_ip.is_empty() {
        return Ok(origin_ip);
    }
    match request.headers().get(real_ip) {
        None => Ok(origin_ip),
        Some(header) => {
            let value = header.to_str().map_err(|_| ())?;
            IpAddr::from_str(value.trim()).map_err(|_| ())
        }
    }
}

pub fn http_validate_ip(request: &HttpRequest, data: &Data<Arc<HttpServiceData>>) -> Result<IpAddr, HttpResponse>
{
    http_service_retrieve_remote_ip(request, &data.http_trackers_config.real_ip).map_err(|_| {
        data.torrent_tracker.update_stats(StatsEvent::BadRequests, 1);
        http_service_plaintext(HttpResponse::BadRequest(), "Invalid request")
    })
}
