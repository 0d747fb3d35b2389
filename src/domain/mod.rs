// Domain module - Types shared across layers
pub mod config;
pub mod error;
pub mod result;
