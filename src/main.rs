use std::net::SocketAddr;
use std::process::exit;
use std::sync::Arc;
use std::time::Duration;
use clap::Parser;
use futures_util::future::try_join_all;
use log::{error, info};
use sentry::ClientInitGuard;
use tokio::runtime::Builder;
use tokio::sync::watch;
use swarm_tracker::common::common::shutdown_waiting;
use swarm_tracker::config::structs::configuration::Configuration;
use swarm_tracker::http::http::http_service;
use swarm_tracker::logging::setup_logging;
use swarm_tracker::scheduler::structs::eviction_scheduler::EvictionScheduler;
use swarm_tracker::stats::enums::stats_event::StatsEvent;
use swarm_tracker::structs::Cli;
use swarm_tracker::tracker::structs::torrent_tracker::TorrentTracker;

#[tracing::instrument(level = "debug")]
fn main() -> std::io::Result<()>
{
    let args = Cli::parse();

    let config = match Configuration::load_from_file(&args.config, args.create_config) {
        Ok(config) => Arc::new(config),
        Err(_) => exit(101)
    };

    if let Err(error) = setup_logging(&config) {
        eprintln!("{error}");
        exit(1);
    }

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let _sentry_guard: Option<ClientInitGuard> = if config.sentry_config.enabled {
        Some(sentry::init((config.sentry_config.dsn.clone(), sentry::ClientOptions {
            release: sentry::release_name!(),
            debug: config.sentry_config.debug,
            sample_rate: config.sentry_config.sample_rate,
            max_breadcrumbs: config.sentry_config.max_breadcrumbs,
            attach_stacktrace: config.sentry_config.attach_stacktrace,
            traces_sample_rate: config.sentry_config.traces_sample_rate,
            environment: Some(config.sentry_config.environment.clone().into()),
            ..Default::default()
        })))
    } else {
        None
    };

    Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let tracker = match TorrentTracker::from_config(config.clone(), args.create_database).await {
                Ok(tracker) => Arc::new(tracker),
                Err(error) => {
                    error!("[BOOT] Unable to open the database: {error}");
                    sentry::capture_error(&error);
                    exit(1);
                }
            };

            if tracker.is_persistent() {
                match tracker.load_peers().await {
                    Ok(loaded) => info!("[LOAD] Restored {loaded} peers from the database"),
                    Err(error) => {
                        error!("[LOAD] Unable to restore peers: {error}");
                        sentry::capture_error(&error);
                        exit(1);
                    }
                }
            }

            let (shutdown_tx, shutdown_rx) = watch::channel(false);

            let mut http_futures = Vec::new();
            for http_server_object in &config.http_server {
                if http_server_object.enabled {
                    let address: SocketAddr = match http_server_object.bind_address.parse() {
                        Ok(address) => address,
                        Err(error) => {
                            error!("[HTTP] Invalid bind address {}: {error}", http_server_object.bind_address);
                            exit(1);
                        }
                    };
                    let (handle, future) = match http_service(address, tracker.clone(), http_server_object.clone()) {
                        Ok(server) => server,
                        Err(error) => {
                            error!("[HTTP] Unable to bind {address}: {error}");
                            exit(1);
                        }
                    };
                    http_futures.push((handle, future));
                }
            }

            let (http_handles, futures): (Vec<_>, Vec<_>) = http_futures.into_iter().unzip();
            let http_task = tokio::spawn(async move {
                if let Err(error) = try_join_all(futures).await {
                    sentry::capture_error(&error);
                    error!("[HTTP] Server stopped with an error: {error}");
                }
            });

            let scheduler = Arc::new(EvictionScheduler::from_tracker(tracker.clone()));
            let scheduler_task = tokio::spawn(scheduler.run(shutdown_rx.clone()));

            let tracker_spawn_stats = tracker.clone();
            let mut stats_shutdown = shutdown_rx.clone();
            let console_interval = tracker_spawn_stats.config.log_console_interval;
            info!("[BOOT] Starting thread for console updates with {console_interval} seconds delay...");
            let stats_task = tokio::spawn(async move {
                loop {
                    if shutdown_waiting(Duration::from_secs(console_interval), &mut stats_shutdown).await {
                        info!("[BOOT] Shutting down thread for console updates...");
                        return;
                    }
                    let stats = tracker_spawn_stats.get_stats();
                    info!(
                        "[STATS] Torrents: {} - Peers: {} - Updates: {} | Announces: {} - Refreshes: {} - Downloads: {} - Listings: {} | 404: {} - 400: {} - Failures: {} | Sweeps: {} - Evicted: {}",
                        stats.torrents, stats.peers, stats.peers_updates,
                        stats.announces_handled, stats.updates_handled, stats.downloads_handled, stats.torrents_handled,
                        stats.not_found, stats.bad_requests, stats.failures,
                        stats.sweeps, stats.peers_evicted
                    );
                }
            });

            let mut persistence_task = None;
            if tracker.is_persistent() {
                let tracker_spawn_updates = tracker.clone();
                let mut updates_shutdown = shutdown_rx.clone();
                let update_interval = tracker_spawn_updates.config.database.persistent_interval;
                info!("[BOOT] Starting thread for database updates with {update_interval} seconds delay...");
                persistence_task = Some(tokio::spawn(async move {
                    loop {
                        if shutdown_waiting(Duration::from_secs(update_interval), &mut updates_shutdown).await {
                            info!("[BOOT] Shutting down thread for updates...");
                            return;
                        }
                        tracker_spawn_updates.set_stats(StatsEvent::TimestampSave,
                            chrono::Utc::now().timestamp() + update_interval as i64);
                        if let Err(error) = tracker_spawn_updates.save_peer_updates().await {
                            tracker_spawn_updates.update_stats(StatsEvent::Failures, 1);
                            error!("[SAVE] Unable to write peer updates: {error}");
                            sentry::capture_error(&error);
                        }
                    }
                }));
            }

            if let Err(error) = tokio::signal::ctrl_c().await {
                error!("[BOOT] Unable to listen for the shutdown signal: {error}");
            }
            info!("Shutdown request received, shutting down...");

            let _ = shutdown_tx.send(true);
            for handle in &http_handles {
                handle.stop(true).await;
            }
            let _ = http_task.await;
            let _ = scheduler_task.await;
            let _ = stats_task.await;

            if let Some(task) = persistence_task {
                let _ = task.await;
                info!("[SAVE] Saving final data to database...");
                match tracker.save_peer_updates().await {
                    Ok(saved) => info!("[SAVE] Stored {saved} peer updates"),
                    Err(error) => {
                        error!("[SAVE] Unable to write final peer updates: {error}");
                        sentry::capture_error(&error);
                    }
                }
            }

            info!("Server shutting down completed");
            Ok(())
        })
}
