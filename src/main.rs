use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use eleven_chat::{Commands, Container, ContainerConfig, MistralClient, Router, ServerConfig};

#[derive(Parser)]
#[command(name = "eleven-chat")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Answer from an offline mock instead of the hosted model
    #[arg(long, global = true)]
    mock_provider: bool,

    /// Provider base URL (defaults to MISTRAL_BASE_URL, then https://api.mistral.ai)
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let container = Container::new(ContainerConfig {
        mock_provider: cli.mock_provider,
        base_url: cli.base_url.clone(),
    });

    match cli.command {
        Commands::Serve { host, port, public } => {
            let host = if public { "0.0.0.0".to_string() } else { host };
            if container.mock_provider() {
                info!("Serving with the mock chat provider");
            } else {
                info!(
                    "Forwarding chats to {}",
                    cli.base_url
                        .unwrap_or_else(MistralClient::configured_base_url)
                );
            }
            eleven_chat::serve(Arc::new(container), ServerConfig { host, port }).await?;
        }
        command => {
            let router = Router::new(&container);
            let output = router.route(command).await?;
            println!("{}", output);
        }
    }

    Ok(())
}
