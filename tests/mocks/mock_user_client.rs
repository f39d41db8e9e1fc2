use async_trait::async_trait;
use kata_lab::client::AsyncUserClient;
use kata_lab::error::{UserApiError, UserApiResult};
use kata_lab::models::User;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

type UserFactory = Arc<dyn Fn(u64) -> User + Send + Sync>;

#[derive(Clone)]
enum Behavior {
    Resolve(User),
    Reject(u16),
    Implementation(UserFactory),
}

/// Programmable stand-in for the user API.
///
/// One-shot responses queued with the `*_once` methods are used first, in
/// order; after that the persistent behaviour applies. Every call's ID is
/// recorded, and an optional delay is slept on the tokio clock before
/// answering.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockUserClient {
    behavior: Arc<Mutex<Option<Behavior>>>,
    once: Arc<Mutex<VecDeque<Behavior>>>,
    calls: Arc<Mutex<Vec<u64>>>,
    delay: Arc<Mutex<Option<Duration>>>,
}

#[allow(dead_code)]
impl MockUserClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer every call with `user`.
    pub fn mock_resolved_value(&self, user: User) -> &Self {
        *self.behavior.lock().unwrap() = Some(Behavior::Resolve(user));
        self
    }

    /// Fail every call with a `status` response.
    pub fn mock_rejected_value(&self, status: u16) -> &Self {
        *self.behavior.lock().unwrap() = Some(Behavior::Reject(status));
        self
    }

    /// Build each answer from the requested ID.
    pub fn mock_implementation<F>(&self, f: F) -> &Self
    where
        F: Fn(u64) -> User + Send + Sync + 'static,
    {
        *self.behavior.lock().unwrap() = Some(Behavior::Implementation(Arc::new(f)));
        self
    }

    /// Answer the next unanswered call with `user`.
    pub fn mock_resolved_value_once(&self, user: User) -> &Self {
        self.once.lock().unwrap().push_back(Behavior::Resolve(user));
        self
    }

    pub fn mock_rejected_value_once(&self, status: u16) -> &Self {
        self.once.lock().unwrap().push_back(Behavior::Reject(status));
        self
    }

    /// Sleep for `delay` before answering.
    pub fn with_delay(&self, delay: Duration) -> &Self {
        *self.delay.lock().unwrap() = Some(delay);
        self
    }

    /// IDs of every call so far, in call order.
    pub fn calls(&self) -> Vec<u64> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn was_called_with(&self, id: u64) -> bool {
        self.calls.lock().unwrap().contains(&id)
    }

    /// Forget all behaviour, queued answers, delay and recorded calls.
    pub fn reset(&self) {
        *self.behavior.lock().unwrap() = None;
        self.once.lock().unwrap().clear();
        self.calls.lock().unwrap().clear();
        *self.delay.lock().unwrap() = None;
    }

    fn next_behavior(&self) -> Option<Behavior> {
        if let Some(once) = self.once.lock().unwrap().pop_front() {
            return Some(once);
        }
        self.behavior.lock().unwrap().clone()
    }
}

#[async_trait]
impl AsyncUserClient for MockUserClient {
    async fn fetch_user(&self, id: u64) -> UserApiResult<User> {
        self.calls.lock().unwrap().push(id);

        let behavior = self.next_behavior();
        let delay = *self.delay.lock().unwrap();

        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        match behavior {
            Some(Behavior::Resolve(user)) => Ok(user),
            Some(Behavior::Reject(status)) => Err(UserApiError::FetchFailed { status }),
            Some(Behavior::Implementation(f)) => Ok(f(id)),
            None => Err(UserApiError::HttpError(format!(
                "no mock response configured for user {}",
                id
            ))),
        }
    }
}
