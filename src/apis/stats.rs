/// Per-client request statistics
use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::RwLock;

use crate::logger::{self, LogTag};

#[derive(Debug, Clone, Default, Serialize)]
pub struct ApiStats {
    pub total_requests: u64,
    pub successful_requests: u64,
    pub failed_requests: u64,
    pub average_response_time_ms: f64,
    pub last_success_at: Option<DateTime<Utc>>,
    pub last_error: Option<String>,
    pub last_error_at: Option<DateTime<Utc>>,
}

impl ApiStats {
    pub fn success_rate(&self) -> f64 {
        if self.total_requests == 0 {
            return 0.0;
        }
        self.successful_requests as f64 / self.total_requests as f64 * 100.0
    }
}

pub struct ApiStatsTracker {
    stats: RwLock<ApiStats>,
}

impl ApiStatsTracker {
    pub fn new() -> Self {
        Self {
            stats: RwLock::new(ApiStats::default()),
        }
    }

    /// Record one finished request and fold its latency into the running average
    pub async fn record_request(&self, success: bool, elapsed_ms: f64) {
        let mut stats = self.stats.write().await;
        stats.total_requests += 1;
        if success {
            stats.successful_requests += 1;
            stats.last_success_at = Some(Utc::now());
        } else {
            stats.failed_requests += 1;
        }
        let n = stats.total_requests as f64;
        stats.average_response_time_ms += (elapsed_ms - stats.average_response_time_ms) / n;
    }

    pub async fn record_error(&self, api_name: &str, endpoint: &str, message: String) {
        logger::debug(
            LogTag::Api,
            &format!("[{}] {} failed: {}", api_name, endpoint, message),
        );
        let mut stats = self.stats.write().await;
        stats.last_error = Some(format!("{}: {}", endpoint, message));
        stats.last_error_at = Some(Utc::now());
    }

    pub async fn get_stats(&self) -> ApiStats {
        self.stats.read().await.clone()
    }
}

impl Default for ApiStatsTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_record_request_tracks_counts_and_average() {
        let tracker = ApiStatsTracker::new();
        tracker.record_request(true, 100.0).await;
        tracker.record_request(false, 300.0).await;
        tracker
            .record_error("Merkle", "markets", "HTTP 500".to_string())
            .await;

        let stats = tracker.get_stats().await;
        assert_eq!(stats.total_requests, 2);
        assert_eq!(stats.successful_requests, 1);
        assert_eq!(stats.failed_requests, 1);
        assert!((stats.average_response_time_ms - 200.0).abs() < 1e-9);
        assert!((stats.success_rate() - 50.0).abs() < 1e-9);
        assert_eq!(stats.last_error.as_deref(), Some("markets: HTTP 500"));
        assert!(stats.last_success_at.is_some());
    }
}
