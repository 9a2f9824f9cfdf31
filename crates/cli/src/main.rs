use clap::{Parser, Subcommand};
use namegate_domain::CliOverrides;
use std::net::SocketAddr;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "namegate")]
#[command(version)]
#[command(about = "namegate - CCIP-Read gateway and meta-transaction relayer for cross-chain names")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// HTTP server port
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Database path
    #[arg(long)]
    database: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the gateway and relayer HTTP server (default)
    Serve,

    /// Resolve a name through the origin resolver, following CCIP-Read
    Resolve {
        /// Dotted name, e.g. alice.namegate.eth
        name: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        port: cli.port,
        bind_address: cli.bind.clone(),
        database_path: cli.database.clone(),
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;
    bootstrap::init_logging(&config);

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => serve(config).await,
        Command::Resolve { name } => resolve(&config, &name).await,
    }
}

async fn serve(config: namegate_domain::Config) -> anyhow::Result<()> {
    info!("Starting namegate v{}", env!("CARGO_PKG_VERSION"));

    let pool = bootstrap::init_database(&config.database).await?;

    let repos = di::Repositories::new(pool.clone());
    let chains = di::Chains::new(&config)?;
    let use_cases = di::UseCases::new(&config, &repos, &chains)?;

    let shutdown = CancellationToken::new();
    let jobs = di::build_jobs(&config, &use_cases, pool, shutdown.clone()).start();

    let addr: SocketAddr = format!("{}:{}", config.server.bind_address, config.server.port)
        .parse()
        .map_err(|e| anyhow::anyhow!("invalid bind address: {}", e))?;

    server::start_web_server(addr, use_cases.app_state(), shutdown.clone()).await?;

    shutdown.cancel();
    for job in jobs {
        if let Err(e) = job.await {
            warn!(error = %e, "Background job ended abnormally");
        }
    }

    info!("Server shutdown complete");
    Ok(())
}

async fn resolve(config: &namegate_domain::Config, name: &str) -> anyhow::Result<()> {
    let resolver = di::fallback_resolver(config)?;

    match resolver.try_resolve_address(name).await? {
        Some(address) => println!("{}", address),
        None => println!("{} has no address record", name),
    }
    Ok(())
}
