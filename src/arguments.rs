/// Centralized argument handling for the poolscore server
///
/// Features:
/// - Centralized CMD_ARGS storage with thread-safe access
/// - Flag/value lookups shared by the logger and main
/// - Help text
use once_cell::sync::Lazy;
use std::env;
use std::sync::Mutex;

use crate::errors::PoolScoreError;

/// Global command-line arguments storage
/// Thread-safe singleton that stores arguments for access throughout the application
pub static CMD_ARGS: Lazy<Mutex<Vec<String>>> = Lazy::new(|| Mutex::new(env::args().collect()));

/// Sets the global command-line arguments
/// Used by binaries and tests to override the default env::args() collection
pub fn set_cmd_args(args: Vec<String>) {
    if let Ok(mut cmd_args) = CMD_ARGS.lock() {
        *cmd_args = args;
    }
}

/// Gets a copy of the current command-line arguments
/// Returns a vector clone to avoid holding the mutex lock
pub fn get_cmd_args() -> Vec<String> {
    match CMD_ARGS.lock() {
        Ok(args) => args.clone(),
        Err(_) => {
            // Fallback to env::args if mutex is poisoned
            env::args().collect()
        }
    }
}

/// Checks if a specific argument is present in the command line
pub fn has_arg(arg: &str) -> bool {
    get_cmd_args().iter().any(|a| a == arg)
}

/// Gets the value of a command-line argument that follows a flag
/// Returns None if the flag is not found or has no value
pub fn get_arg_value(flag: &str) -> Option<String> {
    let args = get_cmd_args();
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .cloned()
}

/// --help / -h
pub fn is_help_requested() -> bool {
    has_arg("--help") || has_arg("-h")
}

/// --config <path>
pub fn config_path() -> Option<String> {
    get_arg_value("--config")
}

/// --host <ip> override for webserver.host
pub fn host_override() -> Option<String> {
    get_arg_value("--host")
}

/// --port <n> override for webserver.port; a flag without a numeric value is an error
pub fn port_override() -> Result<Option<u16>, PoolScoreError> {
    if !has_arg("--port") {
        return Ok(None);
    }
    let value = get_arg_value("--port").unwrap_or_default();
    value.parse::<u16>().map(Some).map_err(|_| {
        PoolScoreError::invalid_config("--port", format!("'{}' is not a port number", value))
    })
}

/// Print usage information
pub fn print_help() {
    println!(
        "poolscore - Aptos DEX pool aggregation and scoring API

USAGE:
    poolscore [OPTIONS]

OPTIONS:
    --config <path>       Configuration file (default: data/config.toml)
    --host <ip>           Override webserver.host
    --port <port>         Override webserver.port
    --log-level <level>   error | warning | info | debug | verbose
    --quiet               Only print errors
    --verbose             Print everything
    --debug-<module>      Debug output for one module: api, pools, scoring, webserver, config, system
    --debug-all           Debug output for every module
    -h, --help            Print this help"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    // One test only: the argument store is process-global
    #[test]
    fn test_argument_lookups() {
        set_cmd_args(vec![
            "poolscore".to_string(),
            "--debug-api".to_string(),
            "--config".to_string(),
            "custom.toml".to_string(),
            "--port".to_string(),
            "8081".to_string(),
            "--host".to_string(),
        ]);

        assert!(has_arg("--debug-api"));
        assert!(!has_arg("--debug-pools"));
        assert!(!is_help_requested());
        assert_eq!(config_path(), Some("custom.toml".to_string()));
        assert_eq!(port_override().unwrap(), Some(8081));
        // Flag without a value
        assert_eq!(host_override(), None);

        set_cmd_args(vec!["poolscore".to_string(), "--port".to_string(), "http".to_string()]);
        assert!(port_override().is_err());

        set_cmd_args(vec!["poolscore".to_string(), "--port".to_string()]);
        assert!(port_override().is_err());

        set_cmd_args(vec!["poolscore".to_string()]);
        assert_eq!(port_override().unwrap(), None);
    }
}
