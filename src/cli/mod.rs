// CLI module - Command line interface
pub mod args;
pub mod commands;
pub mod output;

pub use args::Args;
pub use commands::{execute_command, run};
pub use output::{OutputTarget, OutputWriter};
