/// Logger configuration derived from command-line flags
///
/// Recognized flags:
/// - `--debug-<tag>`: enable debug output for one tag (e.g. --debug-api)
/// - `--debug-all`: enable debug output for every tag
/// - `--verbose` / `--verbose-<tag>`: enable verbose output
/// - `--quiet`: only errors
/// - `--log-level <level>`: explicit minimum level
use once_cell::sync::Lazy;
use std::collections::HashSet;
use std::sync::RwLock;

use super::levels::LogLevel;
use super::tags::LogTag;
use crate::arguments::{get_arg_value, get_cmd_args};

#[derive(Debug, Clone)]
pub struct LoggerConfig {
    /// Most detailed level that may be printed
    pub min_level: LogLevel,
    /// Tags with --debug-<tag> enabled
    pub debug_tags: HashSet<String>,
    /// Tags with --verbose-<tag> enabled
    pub verbose_tags: HashSet<String>,
    /// Debug output for every tag
    pub debug_all: bool,
    /// If non-empty, only these tags are printed (errors always are)
    pub enabled_tags: HashSet<String>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            min_level: LogLevel::Info,
            debug_tags: HashSet::new(),
            verbose_tags: HashSet::new(),
            debug_all: false,
            enabled_tags: HashSet::new(),
        }
    }
}

static LOGGER_CONFIG: Lazy<RwLock<LoggerConfig>> =
    Lazy::new(|| RwLock::new(LoggerConfig::default()));

/// Get a copy of the active logger configuration
pub fn get_logger_config() -> LoggerConfig {
    match LOGGER_CONFIG.read() {
        Ok(cfg) => cfg.clone(),
        Err(_) => LoggerConfig::default(),
    }
}

/// Replace the active logger configuration
pub fn set_logger_config(config: LoggerConfig) {
    if let Ok(mut cfg) = LOGGER_CONFIG.write() {
        *cfg = config;
    }
}

/// Build the logger configuration from the global command-line arguments
pub fn init_from_args() {
    let args = get_cmd_args();
    let mut config = from_args(&args);

    if let Some(level) = get_arg_value("--log-level").and_then(|v| LogLevel::parse(&v)) {
        config.min_level = level;
    }

    set_logger_config(config);
}

/// Parse flags into a logger configuration (pure, used by init_from_args)
pub fn from_args(args: &[String]) -> LoggerConfig {
    let mut config = LoggerConfig::default();

    for arg in args {
        if arg == "--quiet" {
            config.min_level = LogLevel::Error;
        } else if arg == "--verbose" {
            config.min_level = LogLevel::Verbose;
        } else if arg == "--debug-all" {
            config.debug_all = true;
        } else if let Some(tag) = arg.strip_prefix("--debug-") {
            config.debug_tags.insert(tag.to_lowercase());
        } else if let Some(tag) = arg.strip_prefix("--verbose-") {
            config.verbose_tags.insert(tag.to_lowercase());
        }
    }

    // Debug output needs the threshold to let debug lines through
    let wants_debug = config.debug_all || !config.debug_tags.is_empty();
    if wants_debug && config.min_level < LogLevel::Debug {
        config.min_level = LogLevel::Debug;
    }
    if !config.verbose_tags.is_empty() && config.min_level < LogLevel::Verbose {
        config.min_level = LogLevel::Verbose;
    }

    config
}

pub(crate) fn is_debug_enabled_for_tag(config: &LoggerConfig, tag: &LogTag) -> bool {
    config.debug_all || config.debug_tags.contains(&tag.to_debug_key())
}

pub(crate) fn is_verbose_enabled_for_tag(config: &LoggerConfig, tag: &LogTag) -> bool {
    config.verbose_tags.contains(&tag.to_debug_key())
}
