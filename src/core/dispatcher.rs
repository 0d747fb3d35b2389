use crate::core::fetcher::KeySource;
use crate::domain::result::FetchResult;
use futures_util::future::join_all;
use tracing::debug;

/// Fetch keys for every user concurrently.
///
/// All requests run at once over the shared source and are joined before
/// returning. The i-th result always belongs to the i-th user, whatever order
/// the responses arrive in.
pub async fn fetch_all<S>(source: &S, users: &[String]) -> Vec<FetchResult>
where
    S: KeySource + ?Sized,
{
    debug!(count = users.len(), "dispatching key fetches");
    let results = join_all(users.iter().map(|user| source.fetch(user))).await;
    debug!(
        succeeded = results.iter().filter(|result| result.is_success()).count(),
        failed = results.iter().filter(|result| !result.is_success()).count(),
        "all fetches completed"
    );
    results
}
