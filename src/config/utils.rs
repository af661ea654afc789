/// Configuration utilities - loading, overrides and validation
///
/// This module provides utility functions for working with the configuration system:
/// - Loading configuration from disk (defaults when the file is missing)
/// - Applying command-line overrides on top of the file values
/// - Validating values that would otherwise fail later at runtime
use super::schemas::Config;
use crate::errors::{ConfigurationError, PoolScoreError};
use crate::logger::{self, LogTag};

/// Default configuration file path
pub const CONFIG_FILE_PATH: &str = "data/config.toml";

/// Values supplied on the command line that replace file settings
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub host: Option<String>,
    pub port: Option<u16>,
}

/// Load configuration from a specific file path
///
/// If the file does not exist the defaults from the schema definitions are
/// used. The loaded configuration is validated before it is returned.
pub fn load_config_from_path(path: &str) -> Result<Config, PoolScoreError> {
    load_config_with_overrides(path, ConfigOverrides::default())
}

/// Load configuration, apply overrides, then validate the merged result
pub fn load_config_with_overrides(
    path: &str,
    overrides: ConfigOverrides,
) -> Result<Config, PoolScoreError> {
    let mut config = read_config_file(path)?;
    config.apply_overrides(overrides);
    config.validate()?;
    Ok(config)
}

/// Read and parse a config file without validating it
pub fn read_config_file(path: &str) -> Result<Config, PoolScoreError> {
    if !std::path::Path::new(path).exists() {
        logger::warning(
            LogTag::Config,
            &format!("Config file '{}' not found, using default values", path),
        );
        return Ok(Config::default());
    }

    let contents = std::fs::read_to_string(path).map_err(|e| {
        PoolScoreError::Configuration(ConfigurationError::FileUnreadable {
            path: path.to_string(),
            error: e.to_string(),
        })
    })?;

    let config = parse_config(&contents)?;
    logger::info(LogTag::Config, &format!("Loaded configuration from {}", path));
    Ok(config)
}

/// Parse configuration from TOML text
pub fn parse_config(contents: &str) -> Result<Config, PoolScoreError> {
    Ok(toml::from_str::<Config>(contents)?)
}

impl Config {
    pub fn apply_overrides(&mut self, overrides: ConfigOverrides) {
        if let Some(host) = overrides.host {
            logger::debug(LogTag::Config, &format!("webserver.host overridden: {}", host));
            self.webserver.host = host;
        }
        if let Some(port) = overrides.port {
            logger::debug(LogTag::Config, &format!("webserver.port overridden: {}", port));
            self.webserver.port = port;
        }
    }

    /// Reject values that would only fail once a request hits them
    pub fn validate(&self) -> Result<(), PoolScoreError> {
        if self.webserver.port == 0 {
            return Err(PoolScoreError::invalid_config(
                "webserver.port",
                "must be between 1 and 65535",
            ));
        }
        if self.webserver.host.trim().is_empty() {
            return Err(PoolScoreError::invalid_config(
                "webserver.host",
                "must not be empty",
            ));
        }

        let sources = &self.sources;
        if sources.fetch_timeout_seconds == 0 {
            return Err(PoolScoreError::invalid_config(
                "sources.fetch_timeout_seconds",
                "must be greater than zero",
            ));
        }

        let gecko = &sources.geckoterminal;
        if gecko.enabled {
            if gecko.timeout_seconds == 0 {
                return Err(PoolScoreError::invalid_config(
                    "sources.geckoterminal.timeout_seconds",
                    "must be greater than zero",
                ));
            }
            if gecko.dexes.iter().all(|d| d.trim().is_empty()) {
                return Err(PoolScoreError::invalid_config(
                    "sources.geckoterminal.dexes",
                    "at least one DEX id is required when GeckoTerminal is enabled",
                ));
            }
            validate_url(&gecko.base_url)?;
        }

        let merkle = &sources.merkle;
        if merkle.enabled {
            if merkle.timeout_seconds == 0 {
                return Err(PoolScoreError::invalid_config(
                    "sources.merkle.timeout_seconds",
                    "must be greater than zero",
                ));
            }
            validate_url(&merkle.base_url)?;
        }

        let indexer = &sources.aptos_indexer;
        if indexer.enabled {
            if indexer.timeout_seconds == 0 {
                return Err(PoolScoreError::invalid_config(
                    "sources.aptos_indexer.timeout_seconds",
                    "must be greater than zero",
                ));
            }
            validate_url(&indexer.graphql_url)?;
        }

        Ok(())
    }
}

fn validate_url(url: &str) -> Result<(), PoolScoreError> {
    reqwest::Url::parse(url).map(|_| ()).map_err(|e| {
        PoolScoreError::Configuration(ConfigurationError::InvalidUrl {
            url: url.to_string(),
            error: e.to_string(),
        })
    })
}
