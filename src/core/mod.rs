// Core module - Fetching, dispatching and formatting of keys
pub mod dispatcher;
pub mod fetcher;
pub mod formatter;

pub use dispatcher::fetch_all;
pub use fetcher::KeySource;
pub use formatter::{format_json, format_text, FormattedText};
