// Infrastructure module - External dependencies and adapters
pub mod config;
pub mod github;
pub mod logging;
