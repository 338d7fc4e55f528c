//! MailPalette - command palette host for the terminal.
//!
//! Lists, searches and runs palette commands, or serves palette requests as
//! JSON lines over stdin/stdout for an external UI.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use mailpalette::commands::SearchResult;
use mailpalette::config::{self, Settings};
use mailpalette::error::{AppError, Result};
use mailpalette::host::SystemNavigator;
use mailpalette::logging;
use mailpalette::messages::{self, SearchResultView};
use mailpalette::palette::CommandPalette;

#[derive(Debug, Parser)]
#[command(name = "mailpalette", version, about = "Fuzzy command palette for mail clients")]
struct Cli {
    /// Path to the configuration file (defaults to $MAILPALETTE_CONFIG or the
    /// platform config directory).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Cmd,
}

#[derive(Debug, Subcommand)]
enum Cmd {
    /// List all commands in registration order.
    List,
    /// Rank commands against a query.
    Search {
        /// Text to search for.
        query: String,
        /// Maximum number of results.
        #[arg(short, long)]
        limit: Option<usize>,
        /// Print results as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Run a command by id.
    Exec {
        /// Command id.
        id: String,
    },
    /// Answer JSON requests read line by line from stdin.
    Serve,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Logging is best effort; the palette works without it.
    let guard = match logging::init() {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("Warning: logging disabled: {}", e);
            None
        }
    };

    let result = run(cli).await;
    logging::shutdown();

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if e.is_recoverable() {
                tracing::warn!(error = %e, "Command failed");
            } else {
                tracing::error!(error = %e, "Command failed");
            }
            eprintln!("Error: {}", e.user_message());
            if let Some(action) = e.suggested_action() {
                eprintln!("{}", action);
            }
            if let (Some(_), Some(dir)) = (&guard, logging::log_directory()) {
                eprintln!("Logs: {}", dir.display());
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let (settings, config_path) = match cli.config {
        Some(path) => (config::load_from(&path)?, path),
        None => (config::load()?, config::config_path()?),
    };
    let palette = build_palette(&settings, config_path)?;

    match cli.command {
        Cmd::List => {
            for cmd in palette.get_commands() {
                match &cmd.description {
                    Some(desc) => println!("{:<24} {:<24} {}", cmd.id, cmd.title, desc),
                    None => println!("{:<24} {}", cmd.id, cmd.title),
                }
            }
        }
        Cmd::Search { query, limit, json } => {
            let results = search_results(&palette, &query, limit);

            if json {
                let views: Vec<SearchResultView> =
                    results.iter().map(SearchResultView::from).collect();
                let out = serde_json::to_string_pretty(&views)
                    .map_err(|e| AppError::other(format!("Failed to encode results: {}", e)))?;
                println!("{}", out);
            } else if results.is_empty() {
                println!("No commands found");
            } else {
                for result in &results {
                    println!(
                        "{:>5}  {:<24} {}",
                        result.score, result.command.id, result.command.title
                    );
                }
            }
        }
        Cmd::Exec { id } => {
            palette.execute_command(&id).await?;
        }
        Cmd::Serve => serve(&palette).await?,
    }

    Ok(())
}

/// Ranked results for the `search` subcommand.
///
/// `--limit` replaces the configured `max_results` rather than capping it.
fn search_results(
    palette: &CommandPalette,
    query: &str,
    limit: Option<usize>,
) -> Vec<SearchResult> {
    match limit {
        Some(limit) => palette
            .clone()
            .with_max_results(Some(limit))
            .search_commands(query),
        None => palette.search_commands(query),
    }
}

fn build_palette(settings: &Settings, config_path: PathBuf) -> Result<CommandPalette> {
    let navigator = Arc::new(SystemNavigator::new(Some(config_path)));
    Ok(CommandPalette::from_settings(settings, navigator)?)
}

/// Read one JSON request per line and write one JSON response per line.
async fn serve(palette: &CommandPalette) -> Result<()> {
    tracing::info!(
        commands = palette.get_commands().len(),
        "Serving palette requests on stdin"
    );

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        let response = messages::handle_json(palette, &line).await;
        stdout.write_all(response.as_bytes()).await?;
        stdout.write_all(b"\n").await?;
        stdout.flush().await?;
    }

    Ok(())
}
