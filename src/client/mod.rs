//! HTTP client for the user API.
//!
//! This module provides a synchronous HTTP client that can be used from async contexts
//! via `tokio::task::spawn_blocking` (see [`AsyncUserClientImpl`]).

mod async_wrapper;
pub use async_wrapper::{AsyncUserClient, AsyncUserClientImpl};

use crate::config::Config;
use crate::error::{UserApiError, UserApiResult};
use crate::metrics::Metrics;
use crate::models::User;
use std::io;
use std::sync::Arc;
use std::time::Duration;

/// HTTP client for the user API.
///
/// This client uses `ureq` for synchronous HTTP requests.
#[derive(Clone)]
pub struct UserClient {
    /// Base URL for the user API
    base_url: String,

    /// HTTP client agent
    agent: Arc<ureq::Agent>,

    /// Metrics collector
    metrics: Metrics,
}

impl UserClient {
    /// Create a new UserClient from configuration.
    pub fn new(config: &Config) -> Self {
        Self::build(
            config.user_api_url.clone(),
            Duration::from_secs(config.request_timeout),
        )
    }

    /// Create a UserClient with a custom base URL (useful for testing).
    #[doc(hidden)]
    pub fn with_base_url(base_url: String) -> Self {
        Self::build(base_url, Duration::from_secs(10))
    }

    fn build(base_url: String, timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(timeout).build();

        Self {
            base_url,
            agent: Arc::new(agent),
            metrics: Metrics::new(),
        }
    }

    /// Get a reference to the metrics collector.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Build a full URL from a path.
    fn build_url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }

    /// Execute a GET request and return the response body.
    fn get(&self, path: &str) -> UserApiResult<String> {
        let url = self.build_url(path);
        let timer = self.metrics.start_request();

        tracing::debug!("GET {}", url);

        let result = self
            .agent
            .get(&url)
            .set("Accept", "application/json")
            .call()
            .map_err(map_error)
            .and_then(|response| {
                response
                    .into_string()
                    .map_err(|e| UserApiError::HttpError(e.to_string()))
            });

        if let Err(e) = &result {
            tracing::warn!("GET {} - Error: {:?}", url, e);
        }
        timer.finish(result.is_ok());

        result
    }

    /// Fetch a single user by ID.
    ///
    /// # Errors
    ///
    /// Any non-success status becomes `UserApiError::FetchFailed`, whose
    /// message is `User fetch failed`.
    pub fn fetch_user(&self, id: u64) -> UserApiResult<User> {
        let body = self.get(&format!("/api/users/{}", id))?;
        let user: User = serde_json::from_str(&body)?;

        self.metrics.record_user_fetched();
        Ok(user)
    }
}

/// Map a ureq error to a UserApiError.
fn map_error(error: ureq::Error) -> UserApiError {
    match error {
        ureq::Error::Status(status, _) => UserApiError::FetchFailed { status },
        ureq::Error::Transport(transport) => match transport.kind() {
            ureq::ErrorKind::ConnectionFailed => {
                UserApiError::HttpError("Connection failed".to_string())
            }
            ureq::ErrorKind::Io if is_timeout(&transport) => UserApiError::Timeout,
            _ => UserApiError::HttpError(transport.to_string()),
        },
    }
}

/// Whether a transport failure was caused by a read or connect deadline.
fn is_timeout(transport: &ureq::Transport) -> bool {
    std::error::Error::source(transport)
        .and_then(|source| source.downcast_ref::<io::Error>())
        .is_some_and(|e| matches!(e.kind(), io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock))
}
