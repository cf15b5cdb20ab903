use anyhow::Context;
use clap::{Parser, Subcommand};
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

use version_probe::config::{ClientConfig, ServerConfig};
use version_probe::logging::{self, LogFormat};

#[derive(Parser)]
#[command(name = "version-probe")]
#[command(
    version,
    about = "Version info server and compatibility-polling client"
)]
struct Cli {
    /// Log line format
    #[arg(long, value_enum, default_value_t = LogFormat::Text, global = true)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Serve this build's version on GET /info (PORT, SERVER_VERSION)
    Serve,
    /// Poll a server and check its version against a range
    /// (SERVER_URL, SUPPORTED_VERSIONS, POLL_INTERVAL_SECONDS, FETCH_TIMEOUT_SECONDS)
    Watch,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _guard = logging::init(cli.log_format);

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(run(cli.command))
}

async fn run(command: Command) -> anyhow::Result<()> {
    let cancel = CancellationToken::new();
    spawn_ctrl_c_handler(cancel.clone());

    match command {
        Command::Serve => {
            let config = ServerConfig::from_env();
            version_probe::server::run_server(config, cancel)
                .await
                .context("Server failed")
        }
        Command::Watch => {
            let config = ClientConfig::from_env().context("Invalid client configuration")?;
            version_probe::client::run_client(config, cancel)
                .await
                .context("Failed to start client")
        }
    }
}

fn spawn_ctrl_c_handler(cancel: CancellationToken) {
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for Ctrl-C: {}", e);
            return;
        }
        info!("Received Ctrl-C, shutting down");
        cancel.cancel();
    });
}
