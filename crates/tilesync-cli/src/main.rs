//! tilesync - command-line harness
//!
//! Runs one reconciliation pass over JSON fixtures and prints the updated
//! target tree with the pass report. Logs go to stderr; `RUST_LOG` overrides
//! the default `tilesync=info` filter.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tilesync_core::{reconcile_detached, ReconcileConfig, ReconciliationEngine};
use tilesync_resolver::{HostContext, ProviderResolver};
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod fixture;
mod output;

/// Host package assumed when neither the flag nor the fixture names one
const DEFAULT_HOST: &str = "com.android.settings";

/// Command-line arguments for tilesync
#[derive(Parser, Debug)]
#[command(name = "tilesync")]
#[command(about = "Reconcile dashboard tile metadata into display targets")]
#[command(version)]
struct Cli {
    /// Emit logs as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run one reconciliation pass over fixtures
    Reconcile(ReconcileArgs),
    /// Validate a reconcile config file
    CheckConfig {
        /// Path to TOML config
        path: PathBuf,
    },
}

#[derive(Args, Debug)]
struct ReconcileArgs {
    /// Target tree fixture (JSON)
    #[arg(long)]
    screen: PathBuf,

    /// Tile category fixture (JSON)
    #[arg(long)]
    tiles: PathBuf,

    /// Provider and package fixture (JSON)
    #[arg(long)]
    providers: PathBuf,

    /// Reconcile config (TOML)
    #[arg(long, env = "TILESYNC_CONFIG")]
    config: Option<PathBuf>,

    /// Host package name, overriding the fixture
    #[arg(long)]
    host: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.json);

    match cli.command {
        Command::Reconcile(args) => reconcile(args).await,
        Command::CheckConfig { path } => check_config(&path),
    }
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "tilesync=info".into());
    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry.with(fmt::layer().with_writer(std::io::stderr)).init();
    }
}

fn load_config(path: Option<&Path>) -> Result<ReconcileConfig> {
    match path {
        Some(path) => ReconcileConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display())),
        None => Ok(ReconcileConfig::default()),
    }
}

async fn reconcile(args: ReconcileArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let screen = fixture::load_screen(&args.screen)?;
    let category = fixture::load_tiles(&args.tiles)?;
    let env = fixture::load_environment(&args.providers)?;

    let host = args
        .host
        .map(HostContext::new)
        .or(env.host)
        .unwrap_or_else(|| HostContext::new(DEFAULT_HOST));
    info!(
        host = %host.package_name,
        targets = screen.len(),
        tiles = category.tiles_count(),
        "starting reconciliation"
    );

    let engine = Arc::new(ReconciliationEngine::with_config(
        ProviderResolver::new(env.registry, env.packages),
        config,
    ));
    let (screen, report) = reconcile_detached(engine, host, screen, category)
        .await
        .context("reconciliation pass did not complete")?;

    println!("{}", output::render(&screen, &report)?);
    Ok(())
}

fn check_config(path: &Path) -> Result<()> {
    let config = load_config(Some(path))?;
    info!(path = %path.display(), "config is valid");
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}
