//! User service layer.
//!
//! Cached user lookups on top of an [`AsyncUserClient`].

use crate::cache::TimedCache;
use crate::client::AsyncUserClient;
use crate::error::UserApiResult;
use crate::models::User;
use std::sync::Arc;

/// Fetches users, keeping successful results for the cache TTL.
pub struct UserService {
    client: Arc<dyn AsyncUserClient>,
    cache: TimedCache<u64, User>,
}

impl UserService {
    pub fn new(client: Arc<dyn AsyncUserClient>, cache_ttl_secs: u64) -> Self {
        Self {
            client,
            cache: TimedCache::new(cache_ttl_secs),
        }
    }

    /// Get a user, from the cache when a fresh copy exists.
    ///
    /// Failed fetches are not cached; the error is returned unchanged.
    pub async fn get_user(&self, id: u64) -> UserApiResult<User> {
        if let Some(user) = self.cache.get(&id) {
            tracing::debug!(user_id = id, "User cache hit");
            return Ok(user);
        }

        tracing::debug!(user_id = id, "User cache miss, fetching");
        let user = self.client.fetch_user(id).await?;
        self.cache.insert(id, user.clone());

        Ok(user)
    }

    /// Forget the cached copy of one user.
    pub fn invalidate(&self, id: u64) {
        self.cache.remove(&id);
    }

    pub fn clear_cache(&self) {
        self.cache.clear();
    }
}
