//! Async wrapper around the synchronous UserClient.
//!
//! HTTP calls run on tokio's blocking thread pool so they never stall the
//! async runtime.

use crate::client::UserClient;
use crate::error::{UserApiError, UserApiResult};
use crate::models::User;
use async_trait::async_trait;
use std::sync::Arc;

/// Async user lookups.
///
/// Services depend on this trait rather than on [`UserClient`], so tests can
/// substitute an in-memory implementation.
#[async_trait]
pub trait AsyncUserClient: Send + Sync {
    async fn fetch_user(&self, id: u64) -> UserApiResult<User>;
}

/// Async wrapper around synchronous UserClient.
#[derive(Clone)]
pub struct AsyncUserClientImpl {
    client: Arc<UserClient>,
}

impl AsyncUserClientImpl {
    pub fn new(client: UserClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }

    /// The wrapped blocking client.
    pub fn inner(&self) -> &UserClient {
        &self.client
    }
}

#[async_trait]
impl AsyncUserClient for AsyncUserClientImpl {
    async fn fetch_user(&self, id: u64) -> UserApiResult<User> {
        let client = self.client.clone();

        tokio::task::spawn_blocking(move || client.fetch_user(id))
            .await
            .map_err(|e| UserApiError::HttpError(format!("Task join error: {}", e)))?
    }
}
