use serde::{Serialize, Serializer};
use serde::ser::SerializeStruct;
use thiserror::Error;

/// Why a single user's keys could not be fetched.
///
/// The `Display` text is the diagnostic printed as `{user}: {error}` and the
/// `error` field of the JSON output.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("User not found")]
    UserNotFound,

    #[error("No keys found")]
    NoKeys,

    #[error("HTTP {0}")]
    Status(u16),

    #[error("Request timed out")]
    Timeout,

    #[error("{0}")]
    Transport(String),
}

/// Outcome of one fetch: either the trimmed key block or the reason it failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    Keys(String),
    Failed(FetchError),
}

/// Per-user fetch result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResult {
    pub user: String,
    pub outcome: FetchOutcome,
}

impl FetchResult {
    pub fn keys(user: impl Into<String>, keys: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            outcome: FetchOutcome::Keys(keys.into()),
        }
    }

    pub fn failed(user: impl Into<String>, error: FetchError) -> Self {
        Self {
            user: user.into(),
            outcome: FetchOutcome::Failed(error),
        }
    }

    /// Raw key block, one key per line
    pub fn key_block(&self) -> Option<&str> {
        match &self.outcome {
            FetchOutcome::Keys(keys) => Some(keys),
            FetchOutcome::Failed(_) => None,
        }
    }

    pub fn error(&self) -> Option<&FetchError> {
        match &self.outcome {
            FetchOutcome::Keys(_) => None,
            FetchOutcome::Failed(error) => Some(error),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self.outcome, FetchOutcome::Keys(_))
    }

    /// Individual key lines; empty when the fetch failed.
    pub fn key_lines(&self) -> Vec<&str> {
        self.key_block()
            .map(|keys| keys.lines().collect())
            .unwrap_or_default()
    }
}

/// Serialized as `{"user": ..., "keys": [...], "error": ... | null}`
impl Serialize for FetchResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("FetchResult", 3)?;
        state.serialize_field("user", &self.user)?;
        state.serialize_field("keys", &self.key_lines())?;
        state.serialize_field("error", &self.error().map(ToString::to_string))?;
        state.end()
    }
}
