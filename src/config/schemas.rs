//! Configuration schemas - all config structures defined once with defaults
//!
//! Each struct is defined using the config_struct! macro which provides:
//! - Single-source definition (no repetition)
//! - Embedded defaults
//! - Serde support and equality

// ============================================================================
// WEBSERVER CONFIGURATION
// ============================================================================

config_struct! {
    /// HTTP API server configuration
    pub struct WebserverConfig {
        /// IP to bind: 127.0.0.1 = localhost only, 0.0.0.0 = all interfaces
        host: String = "127.0.0.1".to_string(),
        /// Port to bind the API server
        port: u16 = 4000,
        /// Allow cross-origin requests from any origin (front-end runs elsewhere)
        cors_permissive: bool = true,
    }
}

// ============================================================================
// UPSTREAM SOURCES
// ============================================================================

config_struct! {
    /// GeckoTerminal pool listings (Thala, Liquidswap and any other DEX id)
    pub struct GeckoTerminalConfig {
        enabled: bool = true,
        base_url: String = "https://api.geckoterminal.com/api/v2".to_string(),
        network: String = "aptos".to_string(),
        /// DEX ids queried through `networks/{network}/pools?dex=<id>`, in merge order
        dexes: Vec<String> = vec!["thala".to_string(), "liquidswap".to_string()],
        timeout_seconds: u64 = 10,
        /// 0 disables rate limiting
        rate_limit_per_minute: usize = 0,
    }
}

config_struct! {
    /// Merkle Trade markets API
    pub struct MerkleConfig {
        enabled: bool = true,
        base_url: String = "https://api.prod.merkle.trade/v1".to_string(),
        timeout_seconds: u64 = 10,
    }
}

config_struct! {
    /// Aptos indexer GraphQL API (on-chain pool reserves)
    pub struct AptosIndexerConfig {
        enabled: bool = true,
        graphql_url: String = "https://api.mainnet.aptoslabs.com/v1/graphql".to_string(),
        timeout_seconds: u64 = 20,
        reserves_limit: u32 = 200,
    }
}

config_struct! {
    /// Shared settings for every upstream plus the per-source sections
    pub struct SourcesConfig {
        user_agent: String = "Mozilla/5.0".to_string(),
        /// Hard cap on a single source fetch, on top of the HTTP client timeout
        fetch_timeout_seconds: u64 = 15,
        geckoterminal: GeckoTerminalConfig = GeckoTerminalConfig::default(),
        merkle: MerkleConfig = MerkleConfig::default(),
        aptos_indexer: AptosIndexerConfig = AptosIndexerConfig::default(),
    }
}

// ============================================================================
// ROOT
// ============================================================================

config_struct! {
    /// Root configuration (data/config.toml)
    pub struct Config {
        webserver: WebserverConfig = WebserverConfig::default(),
        sources: SourcesConfig = SourcesConfig::default(),
    }
}
