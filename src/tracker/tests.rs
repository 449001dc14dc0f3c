#[cfg(test)]
mod tracker_tests {
    mod identifier_tests {
        use std::str::FromStr;
        use crate::tracker::structs::info_hash::InfoHash;
        use crate::tracker::structs::peer_id::PeerId;

        #[test]
        fn test_info_hash_is_opaque() {
            let short = InfoHash::from(&b"H1"[..]);
            assert_eq!(short.0.len(), 2);
            assert_eq!(short.to_string(), "4831");

            let full = InfoHash::from([0xABu8; 20]);
            assert_eq!(full.0.len(), 20);
            assert_eq!(InfoHash::from_str(&full.to_string()).unwrap(), full);
        }

        #[test]
        fn test_peer_id_hex() {
            let peer_id = PeerId::from(&b"P1"[..]);
            assert_eq!(format!("{peer_id:?}"), "PeerId(5031)");
            assert!(PeerId::from_str("zz").is_err());
        }
    }

    mod announce_event_tests {
        use crate::tracker::enums::announce_event::AnnounceEvent;

        #[test]
        fn test_from_query_value() {
            assert_eq!(AnnounceEvent::from_query_value(b"started"), AnnounceEvent::Started);
            assert_eq!(AnnounceEvent::from_query_value(b"STOPPED"), AnnounceEvent::Stopped);
            assert_eq!(AnnounceEvent::from_query_value(b"completed"), AnnounceEvent::Completed);
            assert_eq!(AnnounceEvent::from_query_value(b""), AnnounceEvent::None);
            assert_eq!(AnnounceEvent::from_query_value(b"paused"), AnnounceEvent::None);
        }
    }

    mod torrent_entry_tests {
        use std::time::Duration;
        use crate::tracker::structs::peer_id::PeerId;
        use crate::tracker::structs::torrent_entry::TorrentEntry;
        use crate::tracker::structs::torrent_peer::TorrentPeer;

        const TTL: Duration = Duration::from_secs(1800);

        fn peer(id: &[u8], seconds: u64) -> TorrentPeer {
            TorrentPeer::new(PeerId::from(id), "10.0.0.1:6881".parse().unwrap(), Duration::from_secs(seconds))
        }

        #[test]
        fn test_stale_boundary() {
            let torrent_peer = peer(b"P1", 100);
            assert!(!torrent_peer.is_stale(Duration::from_secs(1899), TTL));
            assert!(torrent_peer.is_stale(Duration::from_secs(1900), TTL));
            assert!(!torrent_peer.is_stale(Duration::from_secs(50), TTL));
        }

        #[test]
        fn test_upsert_replaces() {
            let mut torrent_entry = TorrentEntry::new(Duration::ZERO);
            assert!(torrent_entry.upsert_peer(peer(b"P1", 0)));
            assert!(!torrent_entry.upsert_peer(peer(b"P1", 10)));
            assert_eq!(torrent_entry.peers.len(), 1);
            assert_eq!(torrent_entry.live_peers()[0].last_seen, Duration::from_secs(10));
        }

        #[test]
        fn test_refresh_never_inserts() {
            let mut torrent_entry = TorrentEntry::new(Duration::ZERO);
            assert!(torrent_entry.refresh_peer(&PeerId::from(&b"P1"[..]), Duration::from_secs(5)).is_none());
            assert!(torrent_entry.peers.is_empty());
        }

        #[test]
        fn test_evict_and_idle() {
            let mut torrent_entry = TorrentEntry::new(Duration::ZERO);
            torrent_entry.upsert_peer(peer(b"P1", 0));
            torrent_entry.upsert_peer(peer(b"P2", 1000));

            assert_eq!(torrent_entry.evict_stale(Duration::from_secs(2000), TTL), 1);
            assert!(!torrent_entry.is_idle(Duration::from_secs(2000), TTL));
            assert_eq!(torrent_entry.evict_stale(Duration::from_secs(2800), TTL), 1);
            assert!(!torrent_entry.is_idle(Duration::from_secs(2799), TTL));
            assert!(torrent_entry.is_idle(Duration::from_secs(2800), TTL));
        }
    }

    mod registry_tests {
        use std::net::SocketAddr;
        use std::sync::Arc;
        use std::time::Duration;
        use crate::catalog::structs::catalog_memory::CatalogMemory;
        use crate::config::structs::configuration::Configuration;
        use crate::tracker::enums::announce_event::AnnounceEvent;
        use crate::tracker::structs::info_hash::InfoHash;
        use crate::tracker::structs::peer_id::PeerId;
        use crate::tracker::structs::torrent_peer::TorrentPeer;
        use crate::tracker::structs::torrent_tracker::TorrentTracker;

        fn tracker(prune_empty_swarms: bool) -> TorrentTracker {
            let mut config = Configuration::init();
            config.tracker_config.prune_empty_swarms = prune_empty_swarms;
            TorrentTracker::new(Arc::new(config), Arc::new(CatalogMemory::new()), None)
        }

        fn at(seconds: u64) -> Duration {
            Duration::from_secs(seconds)
        }

        fn h1() -> InfoHash {
            InfoHash::from(&b"H1"[..])
        }

        fn p(id: &[u8]) -> PeerId {
            PeerId::from(id)
        }

        fn addr(value: &str) -> SocketAddr {
            value.parse().unwrap()
        }

        fn ids(peers: &[TorrentPeer]) -> Vec<PeerId> {
            let mut ids = peers.iter().map(|peer| peer.peer_id.clone()).collect::<Vec<_>>();
            ids.sort();
            ids
        }

        #[test]
        fn test_started_lists_self_and_others() {
            let torrent_tracker = tracker(false);
            let first = torrent_tracker.announce(&h1(), &p(b"P1"), addr("10.0.0.1:6881"), AnnounceEvent::Started, at(0));
            assert_eq!(first.len(), 1);
            assert_eq!(first[0].peer_addr, addr("10.0.0.1:6881"));

            let second = torrent_tracker.announce(&h1(), &p(b"P2"), addr("10.0.0.2:6882"), AnnounceEvent::Started, at(10));
            assert_eq!(ids(&second), vec![p(b"P1"), p(b"P2")]);

            let stats = torrent_tracker.get_stats();
            assert_eq!(stats.torrents, 1);
            assert_eq!(stats.peers, 2);
        }

        #[test]
        fn test_join_leave_and_expire() {
            let torrent_tracker = tracker(false);

            let peers = torrent_tracker.announce(&h1(), &p(b"P1"), addr("1.2.3.4:6881"), AnnounceEvent::Started, at(0));
            assert_eq!(peers.iter().map(|peer| peer.peer_addr).collect::<Vec<_>>(), vec![addr("1.2.3.4:6881")]);

            let peers = torrent_tracker.announce(&h1(), &p(b"P2"), addr("5.6.7.8:6882"), AnnounceEvent::Started, at(10));
            assert_eq!(ids(&peers), vec![p(b"P1"), p(b"P2")]);

            let peers = torrent_tracker.announce(&h1(), &p(b"P1"), addr("1.2.3.4:6881"), AnnounceEvent::Stopped, at(20));
            assert_eq!(ids(&peers), vec![p(b"P2")]);

            assert_eq!(torrent_tracker.sweep(at(2000)), 1);
            assert!(torrent_tracker.list_peers(&h1(), at(2000)).is_empty());
            assert!(torrent_tracker.torrents_sharding.contains_torrent(&h1()));
        }

        #[test]
        fn test_started_twice_is_idempotent() {
            let torrent_tracker = tracker(false);
            torrent_tracker.announce(&h1(), &p(b"P1"), addr("10.0.0.1:6881"), AnnounceEvent::Started, at(0));
            let peers = torrent_tracker.announce(&h1(), &p(b"P1"), addr("10.0.0.9:7000"), AnnounceEvent::Started, at(5));

            assert_eq!(peers.len(), 1);
            assert_eq!(peers[0].peer_addr, addr("10.0.0.9:7000"));
            assert_eq!(peers[0].last_seen, at(5));
            assert_eq!(torrent_tracker.get_stats().peers, 1);
        }

        #[test]
        fn test_regular_announce_inserts() {
            let torrent_tracker = tracker(false);
            let peers = torrent_tracker.announce(&h1(), &p(b"P1"), addr("10.0.0.1:6881"), AnnounceEvent::None, at(0));
            assert_eq!(peers.len(), 1);
            assert!(torrent_tracker.torrents_sharding.contains_peer(&h1(), &p(b"P1")));
        }

        #[test]
        fn test_stopped_removes_peer() {
            let torrent_tracker = tracker(false);
            torrent_tracker.announce(&h1(), &p(b"P1"), addr("10.0.0.1:6881"), AnnounceEvent::Started, at(0));
            torrent_tracker.announce(&h1(), &p(b"P2"), addr("10.0.0.2:6882"), AnnounceEvent::Started, at(10));

            let peers = torrent_tracker.announce(&h1(), &p(b"P1"), addr("10.0.0.1:6881"), AnnounceEvent::Stopped, at(20));
            assert_eq!(ids(&peers), vec![p(b"P2")]);
            assert_eq!(torrent_tracker.get_stats().peers, 1);

            let again = torrent_tracker.announce(&h1(), &p(b"P1"), addr("10.0.0.1:6881"), AnnounceEvent::Stopped, at(21));
            assert_eq!(ids(&again), vec![p(b"P2")]);
        }

        #[test]
        fn test_stopped_and_completed_do_not_create_swarm() {
            let torrent_tracker = tracker(false);
            assert!(torrent_tracker.announce(&h1(), &p(b"P1"), addr("10.0.0.1:6881"), AnnounceEvent::Stopped, at(0)).is_empty());
            assert!(torrent_tracker.announce(&h1(), &p(b"P1"), addr("10.0.0.1:6881"), AnnounceEvent::Completed, at(0)).is_empty());
            assert!(!torrent_tracker.torrents_sharding.contains_torrent(&h1()));
            assert_eq!(torrent_tracker.get_stats().torrents, 0);
        }

        #[test]
        fn test_completed_refreshes_only_existing() {
            let torrent_tracker = tracker(false);
            torrent_tracker.announce(&h1(), &p(b"P1"), addr("10.0.0.1:6881"), AnnounceEvent::Started, at(0));

            let peers = torrent_tracker.announce(&h1(), &p(b"P2"), addr("10.0.0.2:6882"), AnnounceEvent::Completed, at(10));
            assert_eq!(ids(&peers), vec![p(b"P1")]);

            let peers = torrent_tracker.announce(&h1(), &p(b"P1"), addr("10.0.0.1:6881"), AnnounceEvent::Completed, at(1000));
            assert_eq!(peers[0].last_seen, at(1000));
            assert_eq!(torrent_tracker.list_peers(&h1(), at(2500)).len(), 1);
        }

        #[test]
        fn test_lazy_eviction_on_announce() {
            let torrent_tracker = tracker(false);
            torrent_tracker.announce(&h1(), &p(b"P1"), addr("10.0.0.1:6881"), AnnounceEvent::Started, at(0));
            torrent_tracker.announce(&h1(), &p(b"P2"), addr("10.0.0.2:6882"), AnnounceEvent::Started, at(10));

            let peers = torrent_tracker.announce(&h1(), &p(b"P3"), addr("10.0.0.3:6883"), AnnounceEvent::Started, at(2000));
            assert_eq!(ids(&peers), vec![p(b"P3")]);

            let stats = torrent_tracker.get_stats();
            assert_eq!(stats.peers, 1);
            assert_eq!(stats.peers_evicted, 2);
        }

        #[test]
        fn test_stale_peer_reannounce_counts_as_new() {
            let torrent_tracker = tracker(false);
            torrent_tracker.announce(&h1(), &p(b"P1"), addr("10.0.0.1:6881"), AnnounceEvent::Started, at(0));
            let peers = torrent_tracker.announce(&h1(), &p(b"P1"), addr("10.0.0.1:6881"), AnnounceEvent::None, at(1800));

            assert_eq!(peers.len(), 1);
            assert_eq!(peers[0].last_seen, at(1800));
            assert_eq!(torrent_tracker.get_stats().peers, 1);
        }

        #[test]
        fn test_list_peers_filters_stale() {
            let torrent_tracker = tracker(false);
            torrent_tracker.announce(&h1(), &p(b"P1"), addr("10.0.0.1:6881"), AnnounceEvent::Started, at(0));
            torrent_tracker.announce(&h1(), &p(b"P2"), addr("10.0.0.2:6882"), AnnounceEvent::Started, at(1000));

            assert_eq!(torrent_tracker.list_peers(&h1(), at(1799)).len(), 2);
            assert_eq!(ids(&torrent_tracker.list_peers(&h1(), at(1800))), vec![p(b"P2")]);
            assert!(!torrent_tracker.torrents_sharding.contains_peer(&h1(), &p(b"P1")));
            assert!(torrent_tracker.list_peers(&h1(), at(5000)).is_empty());
            assert!(torrent_tracker.torrents_sharding.contains_torrent(&h1()));
        }

        #[test]
        fn test_list_peers_unknown_does_not_create() {
            let torrent_tracker = tracker(false);
            assert!(torrent_tracker.list_peers(&h1(), at(0)).is_empty());
            assert!(!torrent_tracker.torrents_sharding.contains_torrent(&h1()));
        }

        #[test]
        fn test_swarms_are_isolated() {
            let torrent_tracker = tracker(false);
            let h2 = InfoHash::from(&b"H2"[..]);
            torrent_tracker.announce(&h1(), &p(b"P1"), addr("10.0.0.1:6881"), AnnounceEvent::Started, at(0));
            let peers = torrent_tracker.announce(&h2, &p(b"P1"), addr("10.0.0.1:6881"), AnnounceEvent::Started, at(0));

            assert_eq!(peers.len(), 1);
            torrent_tracker.announce(&h2, &p(b"P1"), addr("10.0.0.1:6881"), AnnounceEvent::Stopped, at(1));
            assert_eq!(torrent_tracker.list_peers(&h1(), at(2)).len(), 1);
            assert_eq!(torrent_tracker.get_stats().torrents, 2);
        }

        #[test]
        fn test_refresh_peer() {
            let torrent_tracker = tracker(false);
            assert!(!torrent_tracker.refresh_peer(&h1(), &p(b"P1"), at(0)));

            torrent_tracker.announce(&h1(), &p(b"P1"), addr("10.0.0.1:6881"), AnnounceEvent::Started, at(0));
            assert!(torrent_tracker.refresh_peer(&h1(), &p(b"P1"), at(1700)));
            assert!(!torrent_tracker.refresh_peer(&h1(), &p(b"P2"), at(1700)));
            assert_eq!(torrent_tracker.list_peers(&h1(), at(3000)).len(), 1);

            assert!(!torrent_tracker.refresh_peer(&h1(), &p(b"P1"), at(3500)));
            assert!(torrent_tracker.list_peers(&h1(), at(3500)).is_empty());
        }

        #[test]
        fn test_sweep_keeps_empty_swarms() {
            let torrent_tracker = tracker(false);
            torrent_tracker.announce(&h1(), &p(b"P1"), addr("10.0.0.1:6881"), AnnounceEvent::Started, at(0));
            torrent_tracker.announce(&h1(), &p(b"P2"), addr("10.0.0.2:6882"), AnnounceEvent::Started, at(1000));

            assert_eq!(torrent_tracker.sweep(at(1800)), 1);
            assert_eq!(torrent_tracker.sweep(at(1801)), 0);
            assert_eq!(torrent_tracker.sweep(at(9000)), 1);

            assert!(torrent_tracker.torrents_sharding.contains_torrent(&h1()));
            let stats = torrent_tracker.get_stats();
            assert_eq!(stats.sweeps, 3);
            assert_eq!(stats.peers, 0);
            assert_eq!(stats.torrents, 1);
            assert_eq!(stats.peers_evicted, 2);
            assert_eq!(stats.timestamp_run_sweep, 9000);
        }

        #[test]
        fn test_sweep_prunes_idle_swarms() {
            let torrent_tracker = tracker(true);
            torrent_tracker.announce(&h1(), &p(b"P1"), addr("10.0.0.1:6881"), AnnounceEvent::Started, at(0));

            assert_eq!(torrent_tracker.sweep(at(1800)), 1);
            assert!(!torrent_tracker.torrents_sharding.contains_torrent(&h1()));
            assert_eq!(torrent_tracker.get_stats().torrents, 0);
        }

        #[test]
        fn test_sweep_prune_waits_for_idle() {
            let torrent_tracker = tracker(true);
            torrent_tracker.announce(&h1(), &p(b"P1"), addr("10.0.0.1:6881"), AnnounceEvent::Started, at(0));
            torrent_tracker.announce(&h1(), &p(b"P1"), addr("10.0.0.1:6881"), AnnounceEvent::Stopped, at(100));

            torrent_tracker.sweep(at(1800));
            assert!(torrent_tracker.torrents_sharding.contains_torrent(&h1()));
            torrent_tracker.sweep(at(1900));
            assert!(!torrent_tracker.torrents_sharding.contains_torrent(&h1()));
        }

        #[test]
        fn test_amounts() {
            let torrent_tracker = tracker(false);
            for index in 0..50u8 {
                let info_hash = InfoHash::from([index; 20]);
                torrent_tracker.announce(&info_hash, &p(b"P1"), addr("10.0.0.1:6881"), AnnounceEvent::Started, at(0));
                torrent_tracker.announce(&info_hash, &p(b"P2"), addr("10.0.0.2:6881"), AnnounceEvent::Started, at(0));
            }
            assert_eq!(torrent_tracker.torrents_sharding.get_torrents_amount(), 50);
            assert_eq!(torrent_tracker.torrents_sharding.get_peers_amount(), 100);
        }
    }

    mod persistence_queue_tests {
        use std::net::SocketAddr;
        use std::sync::{Arc, Barrier};
        use std::thread;
        use std::time::Duration;
        use async_trait::async_trait;
        use mockall::mock;
        use crate::catalog::structs::catalog_memory::CatalogMemory;
        use crate::config::structs::configuration::Configuration;
        use crate::database::errors::StorageError;
        use crate::database::structs::peer_row::PeerRow;
        use crate::database::traits::database_backend::DatabaseBackend;
        use crate::tracker::enums::announce_event::AnnounceEvent;
        use crate::tracker::enums::updates_action::UpdatesAction;
        use crate::tracker::structs::info_hash::InfoHash;
        use crate::tracker::structs::peer_id::PeerId;
        use crate::tracker::structs::torrent_tracker::TorrentTracker;

        mock! {
            pub Storage {}

            #[async_trait]
            impl DatabaseBackend for Storage {
                async fn load_peers(&self) -> Result<Vec<PeerRow>, StorageError>;
                async fn save_peers(&self, peers: Vec<(PeerRow, UpdatesAction)>) -> Result<u64, StorageError>;
                async fn remove_stale(&self, cutoff: i64) -> Result<u64, StorageError>;
            }
        }

        fn tracker(storage: Option<Arc<dyn DatabaseBackend>>) -> TorrentTracker {
            TorrentTracker::new(Arc::new(Configuration::init()), Arc::new(CatalogMemory::new()), storage)
        }

        fn addr() -> SocketAddr {
            "10.0.0.1:6881".parse().unwrap()
        }

        #[test]
        fn test_no_queue_without_storage() {
            let torrent_tracker = tracker(None);
            torrent_tracker.announce(&InfoHash::from(&b"H1"[..]), &PeerId::from(&b"P1"[..]), addr(), AnnounceEvent::Started, Duration::ZERO);
            assert_eq!(torrent_tracker.get_peer_updates_amount(), 0);
        }

        #[test]
        fn test_queue_keeps_latest_action() {
            let torrent_tracker = tracker(Some(Arc::new(MockStorage::new())));
            let info_hash = InfoHash::from(&b"H1"[..]);
            let peer_id = PeerId::from(&b"P1"[..]);

            torrent_tracker.announce(&info_hash, &peer_id, addr(), AnnounceEvent::Started, Duration::ZERO);
            torrent_tracker.announce(&info_hash, &PeerId::from(&b"P2"[..]), addr(), AnnounceEvent::Started, Duration::ZERO);
            torrent_tracker.announce(&info_hash, &peer_id, addr(), AnnounceEvent::Stopped, Duration::from_secs(1));
            assert_eq!(torrent_tracker.get_peer_updates_amount(), 2);
            assert_eq!(torrent_tracker.get_stats().peers_updates, 2);

            let lock = torrent_tracker.peers_updates.read();
            let (_, action) = lock.get(&(info_hash, peer_id)).unwrap();
            assert_eq!(*action, UpdatesAction::Remove);
        }

        #[tokio::test]
        async fn test_save_drains_queue() {
            let mut storage = MockStorage::new();
            storage.expect_save_peers()
                .times(1)
                .withf(|rows| rows.len() == 1 && rows[0].1 == UpdatesAction::Add)
                .returning(|rows| Ok(rows.len() as u64));
            let torrent_tracker = tracker(Some(Arc::new(storage)));
            torrent_tracker.announce(&InfoHash::from(&b"H1"[..]), &PeerId::from(&b"P1"[..]), addr(), AnnounceEvent::Started, Duration::ZERO);

            assert_eq!(torrent_tracker.save_peer_updates().await.unwrap(), 1);
            assert_eq!(torrent_tracker.get_peer_updates_amount(), 0);
            assert_eq!(torrent_tracker.save_peer_updates().await.unwrap(), 0);
        }

        #[tokio::test]
        async fn test_save_failure_requeues() {
            let mut storage = MockStorage::new();
            storage.expect_save_peers()
                .times(1)
                .returning(|_| Err(StorageError::InvalidRow("disk full".to_string())));
            let torrent_tracker = tracker(Some(Arc::new(storage)));
            torrent_tracker.announce(&InfoHash::from(&b"H1"[..]), &PeerId::from(&b"P1"[..]), addr(), AnnounceEvent::Started, Duration::ZERO);

            assert!(torrent_tracker.save_peer_updates().await.is_err());
            assert_eq!(torrent_tracker.get_peer_updates_amount(), 1);
            assert_eq!(torrent_tracker.get_stats().peers_updates, 1);
        }

        #[test]
        fn test_queue_follows_registry_order_under_contention() {
            let torrent_tracker = Arc::new(tracker(Some(Arc::new(MockStorage::new()))));
            let info_hash = InfoHash::from(&b"H1"[..]);
            let now = Duration::from_secs(10);

            for trial in 0..2000u32 {
                let peer_id = PeerId::from(&trial.to_be_bytes()[..]);
                let barrier = Arc::new(Barrier::new(2));
                let handles = [AnnounceEvent::Started, AnnounceEvent::Stopped].map(|event| {
                    let torrent_tracker = torrent_tracker.clone();
                    let info_hash = info_hash.clone();
                    let peer_id = peer_id.clone();
                    let barrier = barrier.clone();
                    thread::spawn(move || {
                        barrier.wait();
                        torrent_tracker.announce(&info_hash, &peer_id, addr(), event, now);
                    })
                });
                for handle in handles {
                    handle.join().unwrap();
                }

                let present = torrent_tracker.torrents_sharding.contains_peer(&info_hash, &peer_id);
                let lock = torrent_tracker.peers_updates.read();
                let (_, action) = lock.get(&(info_hash.clone(), peer_id)).unwrap();
                let expected = if present { UpdatesAction::Add } else { UpdatesAction::Remove };
                assert_eq!(*action, expected, "trial {trial}");
            }
        }

        #[test]
        fn test_lazy_eviction_queues_remove() {
            let torrent_tracker = tracker(Some(Arc::new(MockStorage::new())));
            let info_hash = InfoHash::from(&b"H1"[..]);
            let old_peer = PeerId::from(&b"P1"[..]);

            torrent_tracker.announce(&info_hash, &old_peer, addr(), AnnounceEvent::Started, Duration::ZERO);
            torrent_tracker.announce(&info_hash, &PeerId::from(&b"P2"[..]), addr(), AnnounceEvent::Started, Duration::from_secs(2000));

            let lock = torrent_tracker.peers_updates.read();
            let (_, action) = lock.get(&(info_hash.clone(), old_peer.clone())).unwrap();
            assert_eq!(*action, UpdatesAction::Remove);
            drop(lock);

            torrent_tracker.announce(&info_hash, &PeerId::from(&b"P3"[..]), addr(), AnnounceEvent::Started, Duration::from_secs(2001));
            assert!(torrent_tracker.list_peers(&info_hash, Duration::from_secs(4000)).is_empty());
            let lock = torrent_tracker.peers_updates.read();
            assert!(lock.values().all(|(_, action)| *action == UpdatesAction::Remove));
            assert_eq!(lock.len(), 3);
        }

        #[test]
        fn test_stale_cutoff_floors_once() {
            let torrent_tracker = tracker(None);
            assert_eq!(torrent_tracker.stale_cutoff(Duration::from_millis(2_800_500)), 1000);
            assert_eq!(torrent_tracker.stale_cutoff(Duration::from_millis(2_801_000)), 1001);
            assert_eq!(torrent_tracker.stale_cutoff(Duration::from_secs(100)), 0);
        }

        #[tokio::test]
        async fn test_load_skips_stale_and_invalid_rows() {
            let mut storage = MockStorage::new();
            storage.expect_load_peers().times(1).returning(|| {
                let now = std::time::SystemTime::now()
                    .duration_since(std::time::UNIX_EPOCH)
                    .unwrap()
                    .as_secs() as i64;
                Ok(vec![
                    PeerRow { info_hash: b"H1".to_vec(), peer_id: b"P1".to_vec(), ip: "10.0.0.1".to_string(), port: 6881, last_seen: now },
                    PeerRow { info_hash: b"H1".to_vec(), peer_id: b"P2".to_vec(), ip: "10.0.0.2".to_string(), port: 6882, last_seen: now - 4000 },
                    PeerRow { info_hash: b"H2".to_vec(), peer_id: b"P3".to_vec(), ip: "not-an-ip".to_string(), port: 6883, last_seen: now },
                ])
            });
            let torrent_tracker = tracker(Some(Arc::new(storage)));

            assert_eq!(torrent_tracker.load_peers().await.unwrap(), 1);
            assert!(torrent_tracker.torrents_sharding.contains_peer(&InfoHash::from(&b"H1"[..]), &PeerId::from(&b"P1"[..])));
            assert!(!torrent_tracker.torrents_sharding.contains_torrent(&InfoHash::from(&b"H2"[..])));
            assert_eq!(torrent_tracker.get_stats().torrents, 1);
            assert_eq!(torrent_tracker.get_stats().peers, 1);
        }
    }

    mod handler_tests {
        use std::sync::Arc;
        use crate::catalog::structs::catalog_memory::CatalogMemory;
        use crate::catalog::structs::torrent_meta_update::TorrentMetaUpdate;
        use crate::codec::structs::announce_query_request::AnnounceQueryRequest;
        use crate::codec::structs::download_query_request::DownloadQueryRequest;
        use crate::codec::structs::update_query_request::UpdateQueryRequest;
        use crate::config::structs::configuration::Configuration;
        use crate::tracker::enums::announce_event::AnnounceEvent;
        use crate::tracker::structs::info_hash::InfoHash;
        use crate::tracker::structs::peer_id::PeerId;
        use crate::tracker::structs::torrent_tracker::TorrentTracker;

        fn announce_request(metadata: Option<TorrentMetaUpdate>) -> AnnounceQueryRequest {
            AnnounceQueryRequest {
                info_hash: InfoHash::from(&b"H1"[..]),
                peer_id: PeerId::from(&b"P1"[..]),
                remote_addr: "10.0.0.1".parse().unwrap(),
                port: 6881,
                event: AnnounceEvent::Started,
                metadata,
            }
        }

        #[tokio::test]
        async fn test_handlers_flow() {
            let torrent_tracker = TorrentTracker::new(Arc::new(Configuration::init()), Arc::new(CatalogMemory::new()), None);
            let metadata = TorrentMetaUpdate {
                name: Some("Ubuntu".to_string()),
                media_type: Some("iso".to_string()),
                ..Default::default()
            };

            let peers = torrent_tracker.handle_announce(&announce_request(Some(metadata))).await.unwrap();
            assert_eq!(peers.len(), 1);

            assert!(torrent_tracker.handle_update(&UpdateQueryRequest {
                info_hash: InfoHash::from(&b"H1"[..]),
                peer_id: PeerId::from(&b"P1"[..]),
            }));
            assert_eq!(torrent_tracker.handle_download(&DownloadQueryRequest { info_hash: InfoHash::from(&b"H1"[..]) }).len(), 1);

            let torrents = torrent_tracker.handle_torrents().await.unwrap();
            assert_eq!(torrents.len(), 1);
            assert_eq!(torrents[0].name, "Ubuntu");

            let stats = torrent_tracker.get_stats();
            assert_eq!(stats.announces_handled, 1);
            assert_eq!(stats.updates_handled, 1);
            assert_eq!(stats.downloads_handled, 1);
            assert_eq!(stats.torrents_handled, 1);
        }

        #[tokio::test]
        async fn test_announce_without_metadata_leaves_catalog_alone() {
            let torrent_tracker = TorrentTracker::new(Arc::new(Configuration::init()), Arc::new(CatalogMemory::new()), None);
            torrent_tracker.handle_announce(&announce_request(None)).await.unwrap();
            assert!(torrent_tracker.handle_torrents().await.unwrap().is_empty());
        }
    }
}
