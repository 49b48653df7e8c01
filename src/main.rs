use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use roi_engine::api::{AppState, create_router};
use roi_engine::config::ConfigLoader;
use roi_engine::error::EngineError;
use thiserror::Error;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Log filter used when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Parser, Debug)]
#[command(
    name = "roi-engine",
    about = "Calculate the return on investment of AI tool adoption",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
}

#[derive(Args, Debug)]
struct ServeArgs {
    /// Address to bind the HTTP server to
    #[arg(long, default_value = "127.0.0.1")]
    host: String,
    /// Port for the HTTP server
    #[arg(long, default_value_t = 3000)]
    port: u16,
    /// Directory containing insights.yaml; the built-in tables are used when omitted
    #[arg(long)]
    config: Option<PathBuf>,
}

impl Default for ServeArgs {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            config: None,
        }
    }
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("invalid listen address '{0}'")]
    Address(String),

    #[error("telemetry error: {0}")]
    Telemetry(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() {
    if let Err(err) = run_cli().await {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

async fn run_cli() -> Result<(), CliError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => run_server(args).await,
    }
}

fn init_telemetry() -> Result<(), CliError> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(DEFAULT_LOG_FILTER))
        .map_err(|err| CliError::Telemetry(err.to_string()))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|err| CliError::Telemetry(err.to_string()))
}

async fn run_server(args: ServeArgs) -> Result<(), CliError> {
    init_telemetry()?;

    let loader = match &args.config {
        Some(dir) => ConfigLoader::load(dir)?,
        None => {
            info!("No configuration directory given, using built-in insight tables");
            ConfigLoader::default()
        }
    };

    let addr: SocketAddr = format!("{}:{}", args.host, args.port)
        .parse()
        .map_err(|_| CliError::Address(format!("{}:{}", args.host, args.port)))?;

    let app = create_router(AppState::new(loader));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!(%addr, "ROI engine listening");

    axum::serve(listener, app).await?;
    Ok(())
}
