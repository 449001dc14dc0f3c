#[cfg(test)]
mod config_tests {
    mod peers_encoding_tests {
        use crate::config::enums::peers_encoding::PeersEncoding;

        #[test]
        fn test_peers_encoding_default() {
            assert_eq!(PeersEncoding::default(), PeersEncoding::full);
        }

        #[test]
        fn test_peers_encoding_toml() {
            #[derive(serde::Deserialize)]
            struct Wrapper {
                peers_encoding: PeersEncoding,
            }
            let wrapper: Wrapper = toml::from_str("peers_encoding = \"compact\"").unwrap();
            assert_eq!(wrapper.peers_encoding, PeersEncoding::compact);
        }
    }

    mod configuration_tests {
        use crate::config::enums::configuration_error::ConfigurationError;
        use crate::config::enums::peers_encoding::PeersEncoding;
        use crate::config::structs::configuration::Configuration;

        #[test]
        fn test_configuration_defaults() {
            let config = Configuration::init();
            assert_eq!(config.tracker_config.peers_timeout, 1800);
            assert_eq!(config.tracker_config.peers_cleanup_interval, 1800);
            assert_eq!(config.tracker_config.request_interval, 1800);
            assert_eq!(config.tracker_config.peers_encoding, PeersEncoding::full);
            assert!(!config.tracker_config.prune_empty_swarms);
            assert!(!config.database.persistent);
            assert_eq!(config.http_server[0].bind_address, "0.0.0.0:6969");
            assert!(config.validate().is_ok());
        }

        #[test]
        fn test_configuration_toml_roundtrip() {
            let config = Configuration::init();
            let serialized = toml::to_string(&config).unwrap();
            let loaded = Configuration::load(serialized.as_bytes()).unwrap();
            assert_eq!(loaded.log_level, config.log_level);
            assert_eq!(loaded.database.path, config.database.path);
            assert_eq!(loaded.http_server.len(), 1);
        }

        #[test]
        fn test_configuration_rejects_bad_bind_address() {
            let mut config = Configuration::init();
            config.http_server[0].bind_address = String::from("not-an-address");
            assert!(matches!(config.validate(), Err(ConfigurationError::ValidationError(_))));
        }

        #[test]
        fn test_configuration_rejects_bad_log_level() {
            let mut config = Configuration::init();
            config.log_level = String::from("loud");
            assert!(matches!(config.validate(), Err(ConfigurationError::ValidationError(_))));
        }

        #[test]
        fn test_configuration_rejects_zero_timeout() {
            let mut config = Configuration::init();
            config.tracker_config.peers_timeout = 0;
            assert!(config.validate().is_err());
        }

        #[test]
        fn test_configuration_rejects_bad_header_name() {
            let mut config = Configuration::init();
            config.http_server[0].real_ip = String::from("X Real IP");
            assert!(config.validate().is_err());
            config.http_server[0].real_ip = String::from("X-Real-IP");
            assert!(config.validate().is_ok());
        }

        #[test]
        fn test_load_file_missing() {
            let result = Configuration::load_file("/nonexistent/path/config.toml");
            assert!(matches!(result, Err(ConfigurationError::IOError(_))));
        }

        #[test]
        fn test_load_from_file_creates_default() {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("config.toml");
            let path = path.to_str().unwrap();
            assert!(Configuration::load_from_file(path, false).is_err());
            assert!(!std::path::Path::new(path).exists());
            assert!(Configuration::load_from_file(path, true).is_err());
            assert!(std::path::Path::new(path).exists());
            let config = Configuration::load_from_file(path, false).unwrap();
            assert_eq!(config.tracker_config.peers_timeout, 1800);
        }
    }
}
