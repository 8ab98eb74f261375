//! # Ethiens Server
//!
//! Movie metadata service for the Ethiens cinema backend.
//!
//! Serves title search and movie detail lookups backed by TMDB, falling back
//! to an IMDb mirror when TMDB is not configured or does not answer. The
//! `lookup` subcommand runs a single resolution from the command line and
//! prints the canonical JSON.

use std::{net::SocketAddr, path::PathBuf};

use anyhow::Context;
use clap::{Args as ClapArgs, Parser, Subcommand};
use ethiens_config::{Config, ConfigLoad, ConfigLoader, ConfigLoaderOptions};
use ethiens_core::MovieMetadataResolver;
use ethiens_model::SearchResponse;
use ethiens_server::{AppState, create_app};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// CLI entry point
#[derive(Parser, Debug)]
#[command(name = "ethiens-server")]
#[command(about = "Movie metadata service with TMDB primary and IMDb mirror fallback")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    #[command(flatten)]
    serve: ServeArgs,
}

#[derive(ClapArgs, Debug, Clone)]
struct ServeArgs {
    /// Server port (overrides config)
    #[arg(short, long, env = "SERVER_PORT")]
    port: Option<u16>,

    /// Server host (overrides config)
    #[arg(long, env = "SERVER_HOST")]
    host: Option<String>,

    /// Path to the TOML configuration file; must exist when given
    #[arg(short, long, env = "ETHIENS_CONFIG_PATH")]
    config: Option<PathBuf>,

    /// Path to a .env file (defaults to ./.env when present)
    #[arg(long)]
    env_file: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Resolve once and print the canonical JSON to stdout
    #[command(subcommand)]
    Lookup(LookupCommand),
}

#[derive(Debug, Subcommand)]
enum LookupCommand {
    /// Search movies by title
    Search { query: String },
    /// Fetch details by TMDB id or IMDb `tt` id
    Detail { identifier: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_runtime_config(&cli.serve)?;

    match cli.command {
        Some(Command::Lookup(lookup)) => run_lookup(config, lookup).await,
        None => run_server(config).await,
    }
}

fn load_runtime_config(args: &ServeArgs) -> anyhow::Result<Config> {
    let ConfigLoad {
        mut config,
        warnings,
    } = ConfigLoader::with_options(ConfigLoaderOptions {
        config_path: args.config.clone(),
        env_file: args.env_file.clone(),
    })
    .load()
    .context("failed to load configuration")?;

    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(host) = args.host.clone() {
        config.server.host = host;
    }

    // Logs go to stderr so `lookup` output stays machine readable.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(
                |_| "info,ethiens_core=info,tower_http=warn".into(),
            ),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if config.metadata.env_file_loaded {
        info!("loaded .env file");
    }
    if let Some(path) = &config.metadata.config_path {
        info!(path = %path.display(), "configuration file in effect");
    }

    for warning in &warnings.items {
        match &warning.hint {
            Some(hint) => {
                warn!(message = %warning.message, hint = %hint, "configuration warning")
            }
            None => {
                warn!(message = %warning.message, "configuration warning")
            }
        }
    }

    let providers = &config.providers;
    info!(
        tmdb.enabled = providers.tmdb.is_configured(),
        tmdb.language = %providers.tmdb.language,
        tmdb.timeout = ?providers.tmdb.timeout,
        imdb.base_url = %providers.fallback.base_url,
        imdb.timeout = ?providers.fallback.timeout,
        "metadata providers configured"
    );

    Ok(config)
}

async fn run_server(config: Config) -> anyhow::Result<()> {
    let bind_address = config.bind_address();
    let state =
        AppState::from_config(config).context("failed to build provider clients")?;
    let app = create_app(state);

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("failed to bind {bind_address}"))?;
    let addr: SocketAddr = listener.local_addr()?;
    info!("Ethiens server listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("server stopped");
    Ok(())
}

async fn run_lookup(config: Config, lookup: LookupCommand) -> anyhow::Result<()> {
    let resolver = MovieMetadataResolver::new(&config.providers)
        .context("failed to build provider clients")?;

    let rendered = match lookup {
        LookupCommand::Search { query } => {
            let results = resolver.resolve_search(&query).await?;
            serde_json::to_string_pretty(&SearchResponse::from(results))?
        }
        LookupCommand::Detail { identifier } => {
            let detail = resolver.resolve_detail(&identifier).await?;
            serde_json::to_string_pretty(&detail)?
        }
    };

    println!("{rendered}");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "failed to listen for shutdown signal");
        // Without a signal handler the server runs until killed.
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
