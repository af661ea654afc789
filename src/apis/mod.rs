/// Upstream API clients
///
/// - `geckoterminal`: pool listings per DEX (Thala, Liquidswap, ...)
/// - `merkle`: Merkle Trade markets
/// - `aptos_indexer`: Aptos indexer GraphQL (on-chain reserves)
///
/// All clients share `client::HttpClient` for timeouts, the fixed
/// User-Agent, optional rate limiting and request statistics.
pub mod aptos_indexer;
pub mod client;
pub mod geckoterminal;
pub mod manager;
pub mod merkle;
pub mod stats;

pub use manager::{ApiManager, ApiManagerStats};
