//! Automated-action dispatch service.
//!
//! Serves the cron and worker routes over HTTP. Every request path is
//! resolved against the handler registry; the matching handler is
//! constructed, initialised with the request and executed.

use std::path::PathBuf;

use clap::Parser;

use automated_dispatch::config::{load_config, ServiceConfig};
use automated_dispatch::observability::logging::init_logging;
use automated_dispatch::{default_registry, lifecycle};

#[derive(Parser)]
#[command(name = "automated-dispatch")]
#[command(about = "Dispatch service for scheduled and queued automated actions", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file. Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the route table and exit.
    #[arg(long)]
    list_routes: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ServiceConfig::default(),
    };

    let registry = default_registry();

    if cli.list_routes {
        for (identifier, descriptor) in registry.routes() {
            println!("{:<60} {}", identifier, descriptor.name().unwrap_or("(unmapped)"));
        }
        return Ok(());
    }

    init_logging(&config.observability)?;
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        routes = registry.len(),
        "automated-dispatch starting"
    );

    lifecycle::run(config, registry).await?;
    Ok(())
}
