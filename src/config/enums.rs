/// Errors raised while reading, writing or validating the configuration.
pub mod configuration_error;

/// Wire form of the `peers` value in announce responses.
pub mod peers_encoding;
