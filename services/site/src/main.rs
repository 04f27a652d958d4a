//! Robotics site CLI
//!
//! Command-line interface for the site host.

use std::path::PathBuf;

use clap::Parser;
use robotics_site::{load_config, Config};
use tracing::Level;

#[derive(Parser)]
#[command(name = "robotics-site")]
#[command(about = "Static host for the robotics club website bundle")]
#[command(version)]
struct Args {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Listen port (overrides config file)
    #[arg(short, long)]
    port: Option<u16>,

    /// Directory holding the compiled bundle (overrides config file)
    #[arg(long)]
    site_root: Option<PathBuf>,

    /// Log level
    #[arg(short, long, default_value = "info")]
    log_level: Level,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .init();

    tracing::debug!(
        "Parsed command line arguments: config={:?}, port={:?}, site_root={:?}, log_level={:?}",
        args.config,
        args.port,
        args.site_root,
        args.log_level
    );

    let mut config = if let Some(config_path) = &args.config {
        tracing::debug!("Loading configuration from {:?}", config_path);
        load_config(config_path)?
    } else {
        tracing::debug!("Using default configuration");
        Config::default()
    };

    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(site_root) = args.site_root {
        config.site.root = site_root;
    }

    tracing::info!("Starting robotics site host");
    robotics_site::run(config).await?;

    Ok(())
}
