//! sitecorpus CLI entrypoint

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use sitecorpus::cli::Cli;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Initialize tracing on stderr; stdout carries the JSON payload
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    // Parse and execute CLI
    let cli = Cli::parse();
    if let Err(e) = cli.execute().await {
        tracing::error!("{:#}", e);
        std::process::exit(1);
    }
}
