// ghkeys - Fetch SSH public keys from GitHub users
use clap::Parser;
use ghkeys::cli::{execute_command, Args};

#[tokio::main]
async fn main() {
    let args = Args::parse();

    tokio::select! {
        result = execute_command(args) => {
            if let Err(e) = result {
                eprintln!("{}", e);
                std::process::exit(e.exit_code());
            }
        }
        // Interrupted runs end silently
        _ = tokio::signal::ctrl_c() => {}
    }
}
