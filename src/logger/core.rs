/// Core logging implementation with automatic filtering
///
/// Checks whether a message should be displayed based on level and tag,
/// then hands it to the format module.
use super::config::{
    get_logger_config, is_debug_enabled_for_tag, is_verbose_enabled_for_tag, LoggerConfig,
};
use super::levels::LogLevel;
use super::tags::LogTag;

/// Check if a log message should be displayed
///
/// Filtering rules:
/// 1. Errors are always shown
/// 2. Check against minimum log level threshold
/// 3. Debug level requires --debug-<module> flag for that tag
/// 4. Verbose level requires --verbose flag OR --verbose-<module> flag for that tag
/// 5. If enabled_tags is non-empty, tag must be in the set
pub fn should_log(config: &LoggerConfig, tag: &LogTag, level: LogLevel) -> bool {
    if level == LogLevel::Error {
        return true;
    }

    if level > config.min_level {
        return false;
    }

    if level == LogLevel::Debug {
        return is_debug_enabled_for_tag(config, tag);
    }

    if level == LogLevel::Verbose {
        return (config.min_level == LogLevel::Verbose && config.verbose_tags.is_empty())
            || is_verbose_enabled_for_tag(config, tag);
    }

    if !config.enabled_tags.is_empty() && !config.enabled_tags.contains(&tag.to_debug_key()) {
        return false;
    }

    true
}

/// Internal logging function with automatic filtering
pub fn log_internal(tag: LogTag, level: LogLevel, message: &str) {
    let config = get_logger_config();
    if !should_log(&config, &tag, level) {
        return;
    }

    super::format::format_and_log(tag, level, message);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_errors_always_pass() {
        let mut cfg = LoggerConfig::default();
        cfg.min_level = LogLevel::Error;
        assert!(should_log(&cfg, &LogTag::Api, LogLevel::Error));
        assert!(!should_log(&cfg, &LogTag::Api, LogLevel::Warning));
    }

    #[test]
    fn test_debug_needs_tag_flag() {
        let mut cfg = LoggerConfig::default();
        assert!(!should_log(&cfg, &LogTag::Api, LogLevel::Debug));

        cfg.min_level = LogLevel::Debug;
        cfg.debug_tags.insert("api".to_string());
        assert!(should_log(&cfg, &LogTag::Api, LogLevel::Debug));
        assert!(!should_log(&cfg, &LogTag::Pools, LogLevel::Debug));
        assert!(should_log(&cfg, &LogTag::Pools, LogLevel::Info));
    }

    #[test]
    fn test_enabled_tags_restrict_info() {
        let mut cfg = LoggerConfig::default();
        cfg.enabled_tags.insert("webserver".to_string());
        assert!(should_log(&cfg, &LogTag::Webserver, LogLevel::Info));
        assert!(!should_log(&cfg, &LogTag::Api, LogLevel::Info));
        assert!(should_log(&cfg, &LogTag::Api, LogLevel::Error));
    }
}
