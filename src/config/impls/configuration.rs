use std::fs::File;
use std::io::Write;
use std::net::SocketAddr;
use std::thread::available_parallelism;
use once_cell::sync::Lazy;
use regex::Regex;
use crate::common::structs::custom_error::CustomError;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::enums::peers_encoding::PeersEncoding;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::database_config::DatabaseConfig;
use crate::config::structs::http_trackers_config::HttpTrackersConfig;
use crate::config::structs::sentry_config::SentryConfig;
use crate::config::structs::tracker_config::TrackerConfig;
use crate::database::enums::database_drivers::DatabaseDrivers;

static LOG_LEVEL_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(off|trace|debug|info|warn|error)$").unwrap());
static HEADER_NAME_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([A-Za-z0-9!#$%&'*+.^_`|~-]+)?$").unwrap());
static SQLITE_PATH_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^sqlite:(//)?.+$").unwrap());

impl Configuration {
    pub fn init() -> Configuration {
        let threads = available_parallelism().map(|n| n.get() as u64).unwrap_or(1);
        Configuration {
            log_level: String::from("info"),
            log_console_interval: 60,
            tracker_config: TrackerConfig {
                request_interval: 1800,
                peers_timeout: 1800,
                peers_cleanup_interval: 1800,
                peers_encoding: PeersEncoding::full,
                prune_empty_swarms: false,
            },
            database: DatabaseConfig {
                engine: DatabaseDrivers::sqlite3,
                path: String::from("sqlite://data.db"),
                persistent: false,
                persistent_interval: 60,
            },
            http_server: vec!(
                HttpTrackersConfig {
                    enabled: true,
                    bind_address: String::from("0.0.0.0:6969"),
                    real_ip: String::from(""),
                    keep_alive: 60,
                    request_timeout: 15,
                    disconnect_timeout: 15,
                    max_connections: 25000,
                    threads,
                }
            ),
            sentry_config: SentryConfig {
                enabled: false,
                dsn: String::from(""),
                debug: false,
                sample_rate: 1.0,
                max_breadcrumbs: 100,
                attach_stacktrace: true,
                traces_sample_rate: 1.0,
                environment: String::from("production"),
            },
        }
    }

    pub fn load(data: &[u8]) -> Result<Configuration, toml::de::Error> {
        toml::from_str(&String::from_utf8_lossy(data))
    }

    pub fn load_file(path: &str) -> Result<Configuration, ConfigurationError> {
        let data = std::fs::read(path).map_err(ConfigurationError::IOError)?;
        Self::load(data.as_slice()).map_err(ConfigurationError::ParseError)
    }

    pub fn save_file(path: &str, data: String) -> Result<(), ConfigurationError> {
        let mut file = File::create(path).map_err(ConfigurationError::IOError)?;
        file.write_all(data.as_ref()).map_err(ConfigurationError::IOError)
    }

    pub fn save_from_config(path: &str, config: &Configuration) -> Result<(), ConfigurationError> {
        let config_toml = toml::to_string(config).map_err(ConfigurationError::SerializeError)?;
        Self::save_file(path, config_toml)
    }

    pub fn load_from_file(path: &str, create: bool) -> Result<Configuration, CustomError> {
        let config = match Configuration::load_file(path) {
            Ok(config) => config,
            Err(error) => {
                eprintln!("No config file found or corrupt.");
                eprintln!("[ERROR] {error}");

                if !create {
                    eprintln!("You can either create your own {path} file, or start this app using '--create-config' as parameter.");
                    return Err(CustomError::new("will not create automatically config file"));
                }
                eprintln!("Creating config file..");

                return match Configuration::save_from_config(path, &Configuration::init()) {
                    Ok(_) => {
                        eprintln!("Please edit {path} and restart, exiting now...");
                        Err(CustomError::new("created config file"))
                    }
                    Err(e) => {
                        eprintln!("{path} could not be created, check permissions...");
                        eprintln!("{e}");
                        Err(CustomError::new("could not create config file"))
                    }
                };
            }
        };

        println!("[VALIDATE] Validating configuration...");
        config.validate().map_err(|e| CustomError::new(&e.to_string()))?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        Self::validate_value("log_level", &self.log_level, &LOG_LEVEL_REGEX)?;
        Self::validate_value("database.path", &self.database.path, &SQLITE_PATH_REGEX)?;

        let tracker_config = &self.tracker_config;
        if tracker_config.peers_timeout == 0 {
            return Err(ConfigurationError::ValidationError(String::from("tracker_config.peers_timeout must be greater than 0")));
        }
        if tracker_config.peers_cleanup_interval == 0 {
            return Err(ConfigurationError::ValidationError(String::from("tracker_config.peers_cleanup_interval must be greater than 0")));
        }
        if self.database.persistent && self.database.persistent_interval == 0 {
            return Err(ConfigurationError::ValidationError(String::from("database.persistent_interval must be greater than 0")));
        }

        for (index, http_server) in self.http_server.iter().enumerate() {
            if http_server.bind_address.parse::<SocketAddr>().is_err() {
                return Err(ConfigurationError::ValidationError(format!(
                    "http_server[{index}].bind_address \"{}\" is not a socket address", http_server.bind_address
                )));
            }
            Self::validate_value(&format!("http_server[{index}].real_ip"), &http_server.real_ip, &HEADER_NAME_REGEX)?;
        }
        Ok(())
    }

    pub fn validate_value(name: &str, value: &str, regex: &Regex) -> Result<(), ConfigurationError> {
        if !regex.is_match(value) {
            return Err(ConfigurationError::ValidationError(format!(
                "{name} \"{value}\" does not match \"{regex}\""
            )));
        }
        Ok(())
    }
}
