//! # Page Courier CLI (`courier`)
//!
//! The `courier` binary drives the submission pipeline from the command
//! line: submit pages and files to the indexing server, stream browser
//! events through the pipeline, build address-bar search dispatches, and
//! fetch computed answers.
//!
//! ## Usage
//!
//! ```bash
//! courier --config ./config/courier.toml <command>
//! ```
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `courier submit <url>` | Fetch a page and submit it for indexing |
//! | `courier submit-file <path> --url <url>` | Submit a downloaded file |
//! | `courier pipe` | Consume NDJSON navigation/page events from stdin |
//! | `courier search "<query>"` | Build and dispatch a search URL |
//! | `courier answer <uuid>` | Fetch and print a computed answer |
//! | `courier config get\|set` | Read or write the server setting |

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use page_courier::{answer, config, pipe, pipeline, search};

/// Page Courier — forwards visited pages to a local indexing server and
/// wires address-bar search against it.
///
/// All commands accept a `--config` flag pointing to a TOML configuration
/// file; a missing file means built-in defaults (server at
/// `http://localhost:8080`).
#[derive(Parser)]
#[command(
    name = "courier",
    about = "Page Courier — forwards visited pages to a local indexing server",
    version,
    long_about = "Page Courier tracks the HTTP outcome of page loads, submits successfully \
    loaded pages to a local indexing server, and builds address-bar search dispatches \
    against that server's /search endpoint."
)]
struct Cli {
    /// Path to configuration file (TOML).
    #[arg(long, global = true, default_value = "./config/courier.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand)]
enum Commands {
    /// Fetch a page and submit it for indexing.
    ///
    /// The fetch is the top-level navigation: its status code is recorded
    /// and the page is submitted only if the load succeeded (< 300).
    Submit {
        /// Page URL to fetch and submit.
        url: String,
    },

    /// Submit a downloaded file for indexing.
    ///
    /// Sends the file path instead of page text; the server extracts the
    /// text itself, so this only works against a local server.
    SubmitFile {
        /// Path to the downloaded file.
        path: PathBuf,

        /// URL the file was downloaded from.
        #[arg(long)]
        url: String,
    },

    /// Consume navigation and page events from stdin (NDJSON).
    ///
    /// One event per line: `{"event":"completed",...}` records a
    /// navigation outcome, `{"event":"page",...}` submits a captured page.
    /// Runs until EOF. Malformed lines are logged and skipped.
    Pipe,

    /// Build and dispatch an address-bar search.
    ///
    /// Prints the percent-encoded `/search?q=` URL and the navigation
    /// action the host should perform with it.
    Search {
        /// The search query string.
        query: String,

        /// Where the result should open: `current`, `foreground`, or `background`.
        #[arg(long, default_value = "current")]
        disposition: String,
    },

    /// Fetch a computed answer by its id.
    ///
    /// The server holds the request open until the answer task finishes
    /// (up to 30s), then returns the answer, an HTML extract, and the
    /// source URL.
    Answer {
        /// Answer UUID, as returned by a question-shaped search.
        id: String,
    },

    /// Read or write the server setting.
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Settings subcommands — the options-page contract: one key, `server`.
#[derive(Subcommand)]
enum ConfigAction {
    /// Print the configured server base URL.
    Get,
    /// Set the server base URL and persist it to the config file.
    Set {
        /// Server base URL, e.g. `http://localhost:8080`.
        server: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // The settings write path must work before any config file exists.
    if let Commands::Config {
        action: ConfigAction::Set { server },
    } = &cli.command
    {
        config::set_server(&cli.config, server)?;
        println!("server set to {}", server.trim_end_matches('/'));
        return Ok(());
    }

    let cfg = config::load_config(&cli.config)?;

    match cli.command {
        Commands::Submit { url } => {
            pipeline::run_submit(&cfg, &url).await?;
        }
        Commands::SubmitFile { path, url } => {
            pipeline::run_submit_file(&cfg, &path, &url).await?;
        }
        Commands::Pipe => {
            pipe::run_pipe(&cfg).await?;
        }
        Commands::Search { query, disposition } => {
            search::run_search(&cfg, &query, &disposition)?;
        }
        Commands::Answer { id } => {
            answer::run_answer(&cfg, &id).await?;
        }
        Commands::Config { action } => match action {
            ConfigAction::Get => {
                println!("{}", cfg.server.base_url);
            }
            ConfigAction::Set { .. } => {
                // Handled above (before config loading)
                unreachable!()
            }
        },
    }

    Ok(())
}
