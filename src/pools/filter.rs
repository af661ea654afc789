use super::types::NormalizedPool;

/// Keep only pools with strictly positive TVL and 24h volume
pub fn filter_pools(mut pools: Vec<NormalizedPool>) -> Vec<NormalizedPool> {
    pools.retain(|p| p.tvl > 0.0 && p.volume24h > 0.0);
    pools
}
