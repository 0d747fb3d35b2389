use crate::cli::args::Args;
use crate::cli::output::{writer_for, ConsoleWriter, OutputTarget, OutputWriter};
use crate::core::{fetch_all, format_json, format_text, KeySource};
use crate::domain::config::GhKeysConfig;
use crate::domain::error::GhKeysResult;
use crate::infrastructure::config::ConfigManager;
use crate::infrastructure::github::GitHubKeySource;
use crate::infrastructure::logging::{init_logging, level_override};
use std::io::{self, Write};
use tracing::debug;

/// Execute the command line against GitHub, printing to the process streams.
pub async fn execute_command(args: Args) -> GhKeysResult<()> {
    let config = ConfigManager::new().load_config(args.config.as_deref())?;

    let level = level_override(args.verbose, args.quiet)
        .unwrap_or(config.global.log_level.as_str());
    if let Err(e) = init_logging(level) {
        eprintln!("Warning: logging disabled: {e:#}");
    }

    let source = GitHubKeySource::from_config(&config.fetch)?;
    run(&args, &config, &source, &mut io::stdout(), &mut io::stderr()).await
}

/// Fetch, format and deliver keys.
///
/// `stdout` receives the payload when no file is targeted; `stderr` receives
/// per-user errors and status messages.
pub async fn run<S, O, E>(
    args: &Args,
    config: &GhKeysConfig,
    source: &S,
    stdout: &mut O,
    stderr: &mut E,
) -> GhKeysResult<()>
where
    S: KeySource + ?Sized,
    O: Write,
    E: Write,
{
    let results = fetch_all(source, &args.users).await;

    if args.json {
        if args.append || args.output.is_some() {
            debug!("JSON output always goes to stdout, ignoring file options");
        }
        let mut json = format_json(&results)?;
        json.push('\n');
        ConsoleWriter::new(stdout).write_keys(&json)?;
        return Ok(());
    }

    let text = format_text(&results, args.inline_comments);
    for line in &text.diagnostics {
        writeln!(stderr, "{line}")?;
    }

    if text.is_empty() {
        debug!(users = args.users.len(), "no keys fetched");
        writeln!(stderr, "No keys fetched.")?;
        return Ok(());
    }

    if text.had_errors {
        writeln!(stderr)?;
    }

    let target = OutputTarget::resolve(
        args.append,
        args.output.as_deref(),
        args.force,
        &config.output,
    )?;
    debug!(?target, "delivering keys");

    if let Some(confirmation) = writer_for(target, stdout).write_keys(&text.payload)? {
        writeln!(stderr, "{confirmation}")?;
    }
    Ok(())
}
