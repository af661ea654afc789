/// Error types for the pool scoring service
///
/// Upstream failures inside fetchers never reach this type (they degrade to
/// empty listings). Everything that does reach it is either a startup problem
/// (configuration, client construction) or a request-level failure that the
/// webserver reports as `500 {"error": ...}`.

// =============================================================================
// MAIN ERROR TYPE
// =============================================================================

#[derive(Debug, Clone)]
pub enum PoolScoreError {
    // Network connectivity errors
    Network(NetworkError),

    // Configuration errors
    Configuration(ConfigurationError),

    // Data parsing & validation errors
    Data(DataError),

    // Failures inside request handling (e.g. a crashed fetch task)
    Internal { message: String },
}

impl std::fmt::Display for PoolScoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PoolScoreError::Network(e) => write!(f, "Network Error: {}", e),
            PoolScoreError::Configuration(e) => write!(f, "Configuration Error: {}", e),
            PoolScoreError::Data(e) => write!(f, "Data Error: {}", e),
            PoolScoreError::Internal { message } => write!(f, "Internal Error: {}", message),
        }
    }
}

impl std::error::Error for PoolScoreError {}

// =============================================================================
// NETWORK ERROR TYPES
// =============================================================================

#[derive(Debug, Clone)]
pub enum NetworkError {
    Generic { message: String },
}

impl std::fmt::Display for NetworkError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NetworkError::Generic { message } => write!(f, "{}", message),
        }
    }
}

// =============================================================================
// CONFIGURATION ERROR TYPES
// =============================================================================

#[derive(Debug, Clone)]
pub enum ConfigurationError {
    InvalidConfig { field: String, reason: String },
    InvalidUrl { url: String, error: String },
    FileUnreadable { path: String, error: String },
}

impl std::fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigurationError::InvalidConfig { field, reason } => {
                write!(f, "Invalid config field '{}': {}", field, reason)
            }
            ConfigurationError::InvalidUrl { url, error } => {
                write!(f, "Invalid URL '{}': {}", url, error)
            }
            ConfigurationError::FileUnreadable { path, error } => {
                write!(f, "Failed to read config file '{}': {}", path, error)
            }
        }
    }
}

// =============================================================================
// DATA ERROR TYPES
// =============================================================================

#[derive(Debug, Clone)]
pub enum DataError {
    ParseError { data_type: String, error: String },
}

impl std::fmt::Display for DataError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataError::ParseError { data_type, error } => {
                write!(f, "Failed to parse {}: {}", data_type, error)
            }
        }
    }
}

// =============================================================================
// CONVERSIONS
// =============================================================================

impl From<toml::de::Error> for PoolScoreError {
    fn from(err: toml::de::Error) -> Self {
        PoolScoreError::Data(DataError::ParseError {
            data_type: "TOML".to_string(),
            error: err.to_string(),
        })
    }
}

impl From<tokio::task::JoinError> for PoolScoreError {
    fn from(err: tokio::task::JoinError) -> Self {
        PoolScoreError::Internal {
            message: format!("Fetch task failed: {}", err),
        }
    }
}

// =============================================================================
// STRUCTURED ERROR BUILDERS
// =============================================================================

impl PoolScoreError {
    /// Create a generic network error
    pub fn network_error(message: impl Into<String>) -> Self {
        PoolScoreError::Network(NetworkError::Generic {
            message: message.into(),
        })
    }

    /// Create an invalid config field error
    pub fn invalid_config(field: impl Into<String>, reason: impl Into<String>) -> Self {
        PoolScoreError::Configuration(ConfigurationError::InvalidConfig {
            field: field.into(),
            reason: reason.into(),
        })
    }
}
