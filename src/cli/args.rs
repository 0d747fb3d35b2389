use clap::Parser;
use std::path::PathBuf;

/// Command line arguments for ghkeys
#[derive(Parser, Debug, Clone)]
#[command(
    name = "ghkeys",
    version = env!("CARGO_PKG_VERSION"),
    about = "Fetch SSH public keys from GitHub users.",
    long_about = "Fetch the SSH public keys GitHub publishes for one or more users and print them, \
                  emit them as JSON, or write/append them to an authorized_keys file."
)]
pub struct Args {
    /// GitHub usernames
    #[arg(required = true, num_args = 1..)]
    pub users: Vec<String>,

    /// Append username to the end of each key
    #[arg(short, long)]
    pub inline_comments: bool,

    /// Output JSON instead of SSH keys
    #[arg(short, long)]
    pub json: bool,

    /// Append to ~/.ssh/authorized_keys (or --output file if given)
    #[arg(short, long)]
    pub append: bool,

    /// Write keys to specified file
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Overwrite existing file
    #[arg(short, long)]
    pub force: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Configuration file path
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}
