/// Pool aggregation and scoring
///
/// Pipeline (leaf → root):
/// - `sources`: one `PoolSource` per DEX, fail-open fetches
/// - `normalize`: ordered-candidate field lookups into `NormalizedPool`
/// - `filter`: drop pools without TVL or volume
/// - `scoring`: APR heuristic and batch-relative composite score
/// - `ranking`: sort, dedupe by address, named views
/// - `service`: concurrent fetch with per-source timeout, then the above
pub mod filter;
pub mod normalize;
pub mod ranking;
pub mod scoring;
pub mod service;
pub mod sources;
pub mod types;

pub use ranking::{AllScoresResponse, ScoreView, ViewResult};
pub use service::{PoolService, SourceBatch};
pub use sources::{build_sources, GeckoTerminalSource, MerkleSource, PoolSource};
pub use types::{Dex, NormalizedPool, RawPoolRecord, ScoredPool, SourceScope};
