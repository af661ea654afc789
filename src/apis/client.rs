/// Base HTTP client with rate limiting and stats tracking
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::{Mutex, OwnedSemaphorePermit, Semaphore};

use super::stats::{ApiStats, ApiStatsTracker};
use crate::logger::{self, LogTag};

/// Rate limiter for API clients
///
/// `max_per_minute == 0` disables limiting entirely: requests are neither
/// serialized nor spaced.
pub struct RateLimiter {
    semaphore: Arc<Semaphore>,
    last_request: Arc<Mutex<Option<Instant>>>,
    min_interval: Duration,
    max_per_minute: usize,
}

impl RateLimiter {
    pub fn new(max_per_minute: usize) -> Self {
        let min_interval = if max_per_minute > 0 {
            Duration::from_secs_f64(60.0 / max_per_minute as f64)
        } else {
            Duration::ZERO
        };

        Self {
            semaphore: Arc::new(Semaphore::new(1)), // Only 1 concurrent request
            last_request: Arc::new(Mutex::new(None)),
            min_interval,
            max_per_minute,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.max_per_minute > 0
    }

    /// Wait until we can make a request (respects rate limits)
    pub async fn acquire(&self) -> Result<RateLimitGuard, String> {
        if !self.is_enabled() {
            return Ok(RateLimitGuard { _permit: None });
        }

        let permit = self
            .semaphore
            .clone()
            .acquire_owned()
            .await
            .map_err(|e| format!("Failed to acquire rate limiter permit: {}", e))?;

        let mut last = self.last_request.lock().await;
        if let Some(last_time) = *last {
            let elapsed = last_time.elapsed();
            if elapsed < self.min_interval {
                tokio::time::sleep(self.min_interval - elapsed).await;
            }
        }
        *last = Some(Instant::now());

        Ok(RateLimitGuard {
            _permit: Some(permit),
        })
    }

    pub fn max_per_minute(&self) -> usize {
        self.max_per_minute
    }

    pub fn min_interval(&self) -> Duration {
        self.min_interval
    }
}

/// RAII guard returned by [`RateLimiter::acquire`]
pub struct RateLimitGuard {
    _permit: Option<OwnedSemaphorePermit>,
}

/// HTTP client wrapper shared by every upstream client
///
/// Owns the reqwest client (fixed User-Agent, timeout), the rate limiter and
/// the stats tracker, and turns every failure into a `String` describing it.
pub struct HttpClient {
    api_name: &'static str,
    client: Client,
    rate_limiter: RateLimiter,
    stats: Arc<ApiStatsTracker>,
    timeout: Duration,
    enabled: bool,
}

impl HttpClient {
    pub fn new(
        api_name: &'static str,
        enabled: bool,
        user_agent: &str,
        timeout_secs: u64,
        rate_limit_per_minute: usize,
    ) -> Result<Self, String> {
        if enabled && timeout_secs == 0 {
            return Err("Timeout must be greater than zero".to_string());
        }
        // A disabled client never sends; any non-zero timeout will do
        let timeout = Duration::from_secs(timeout_secs.max(1));

        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()
            .map_err(|e| format!("Failed to create HTTP client: {}", e))?;

        Ok(Self {
            api_name,
            client,
            rate_limiter: RateLimiter::new(rate_limit_per_minute),
            stats: Arc::new(ApiStatsTracker::new()),
            timeout,
            enabled,
        })
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub async fn get_stats(&self) -> ApiStats {
        self.stats.get_stats().await
    }

    fn ensure_enabled(&self, endpoint: &str) -> Result<(), String> {
        if self.enabled {
            Ok(())
        } else {
            Err(format!(
                "{} client disabled via configuration (endpoint={})",
                self.api_name, endpoint
            ))
        }
    }

    async fn execute_request(
        &self,
        endpoint: &str,
        builder: RequestBuilder,
    ) -> Result<(Response, f64), String> {
        self.ensure_enabled(endpoint)?;

        let guard = self
            .rate_limiter
            .acquire()
            .await
            .map_err(|e| format!("Rate limiter error: {}", e))?;

        let start = Instant::now();
        let response_result = builder.timeout(self.timeout).send().await;
        drop(guard);
        let elapsed = start.elapsed().as_millis() as f64;

        match response_result {
            Ok(response) => Ok((response, elapsed)),
            Err(err) => {
                let message = if err.is_timeout() {
                    format!("Request timed out after {}s", self.timeout.as_secs())
                } else {
                    format!("Request failed: {}", err)
                };
                self.stats.record_request(false, elapsed).await;
                self.stats
                    .record_error(self.api_name, endpoint, message.clone())
                    .await;
                Err(message)
            }
        }
    }

    /// Send a request and decode a JSON body, recording stats either way
    pub async fn request_json<T>(&self, endpoint: &str, builder: RequestBuilder) -> Result<T, String>
    where
        T: DeserializeOwned,
    {
        let (response, elapsed) = self.execute_request(endpoint, builder).await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            self.stats.record_request(false, elapsed).await;
            self.stats
                .record_error(self.api_name, endpoint, format!("HTTP {}: {}", status, body))
                .await;
            return Err(format!("{} API error {}: {}", self.api_name, status, body));
        }

        match response.json::<T>().await {
            Ok(value) => {
                self.stats.record_request(true, elapsed).await;
                logger::verbose(
                    LogTag::Api,
                    &format!("[{}] {} ok in {:.0}ms", self.api_name, endpoint, elapsed),
                );
                Ok(value)
            }
            Err(err) => {
                self.stats.record_request(false, elapsed).await;
                self.stats
                    .record_error(self.api_name, endpoint, format!("Parse error: {}", err))
                    .await;
                Err(format!("Failed to parse response: {}", err))
            }
        }
    }
}
