use crate::domain::result::{FetchError, FetchOutcome, FetchResult};
use async_trait::async_trait;

/// Source of published SSH keys for a single user
///
/// Implementations must not fail: every problem is reported through the
/// returned [`FetchResult`] so one user cannot abort the others.
#[async_trait]
pub trait KeySource: Send + Sync {
    async fn fetch(&self, user: &str) -> FetchResult;
}

/// Map a completed HTTP exchange to a fetch outcome.
pub fn classify_response(status: u16, body: &str) -> FetchOutcome {
    match status {
        200 => {
            let keys = body.trim();
            if keys.is_empty() {
                FetchOutcome::Failed(FetchError::NoKeys)
            } else {
                FetchOutcome::Keys(keys.to_string())
            }
        }
        404 => FetchOutcome::Failed(FetchError::UserNotFound),
        other => FetchOutcome::Failed(FetchError::Status(other)),
    }
}
