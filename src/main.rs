//! hub-bridge CLI

mod cli;

use anstream::eprintln;
use clap::{Parser, Subcommand};
use cli::style::Stylize;
use cli::{CheckOptions, ConfigureOptions, run_check, run_configure};
use hub_bridge::error::Result;
use hub_bridge::types::BridgeParams;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Provision GitHub access tokens for issue bridges
#[derive(Parser)]
#[command(name = "hub-bridge", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// GitHub API base URL (overrides settings.toml)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Bridge store file (defaults to the user config directory)
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    /// Log requests and decisions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Configure a bridge: resolve the project and obtain an access token
    Configure {
        /// Name to save the bridge under
        #[arg(long, default_value = "default")]
        name: String,

        /// Project owner
        #[arg(long)]
        owner: Option<String>,

        /// Project name
        #[arg(long)]
        project: Option<String>,

        /// Project URL, e.g. https://github.com/owner/project
        #[arg(long)]
        url: Option<String>,

        /// Existing access token; skips the interactive login
        #[arg(long)]
        token: Option<String>,
    },

    /// Check a stored bridge configuration
    Check {
        /// Name of the bridge to check
        #[arg(long, default_value = "default")]
        name: String,

        /// Only validate stored keys, don't contact GitHub
        #[arg(long)]
        offline: bool,
    },
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "hub_bridge=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let api_url = cli.api_url.as_deref();

    match cli.command {
        Commands::Configure {
            name,
            owner,
            project,
            url,
            token,
        } => {
            let options = ConfigureOptions {
                name,
                params: BridgeParams {
                    owner,
                    project,
                    url,
                    token,
                },
            };
            run_configure(api_url, cli.store, &options)
        }
        Commands::Check { name, offline } => {
            run_check(api_url, cli.store, &CheckOptions { name, offline })
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e}", "error:".failure());
            ExitCode::FAILURE
        }
    }
}
