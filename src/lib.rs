//! ghkeys library
//!
//! Fetches the public SSH keys GitHub publishes for a set of users and
//! renders them as authorized_keys text or JSON.

pub mod cli;
pub mod core;
pub mod domain;
pub mod infrastructure;

pub use self::core::{fetch_all, format_json, format_text, FormattedText, KeySource};
pub use domain::config::GhKeysConfig;
pub use domain::error::{GhKeysError, GhKeysResult};
pub use domain::result::{FetchError, FetchOutcome, FetchResult};
pub use infrastructure::github::GitHubKeySource;
