use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use crossbuild_core::build_manager::{BuildManager, BuildManagerConfig};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

mod commands;

/// Log filter applied to every run; the binary reads no environment
const LOG_FILTER: &str = "crossbuild_core=warn,crossbuild_cli=warn";

/// Crossbuild - build every release target in parallel
#[derive(Parser)]
#[command(name = "crossbuild")]
#[command(about = "Build every release target in parallel and fail if any build fails")]
#[command(version)]
struct Cli {}

fn init_tracing() {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::new(LOG_FILTER))
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

#[tokio::main]
async fn main() -> Result<()> {
    let _cli = Cli::parse();
    init_tracing();

    let manager = BuildManager::new(BuildManagerConfig {
        workspace_root: PathBuf::from("."),
    })
    .map_err(|e| anyhow::anyhow!("Failed to load build targets: {}", e))?;

    commands::build::execute(&manager).await
}
