//! OctoFit Development Backend
//!
//! Run with: cargo run --bin octofit-api
//!
//! Serves the seed fixtures under `/api/…/` so the dashboard can be used
//! without the real backend. Settings come from the `[server]` and
//! `[logging]` config sections; see `octofit config` for the template.

use clap::Parser;
use octofit::config::{Config, LoadedConfig};
use octofit::server::{serve, AppState};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "octofit-api")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Development backend serving OctoFit seed data")]
struct Args {
    /// Config file (default: search the usual locations)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Host to bind to
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    port: Option<u16>,

    /// Return bare arrays instead of paginated envelopes
    #[arg(long)]
    no_paginate: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let loaded = match &args.config {
        Some(path) => LoadedConfig::from_path(path)?,
        None => Config::load_default(),
    };
    let mut config = loaded.config.clone();
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if args.no_paginate {
        config.server.paginate = false;
    }

    octofit::logging::init_tracing(&config.logging)?;
    loaded.report();
    tracing::info!("Starting OctoFit API server v{}", env!("CARGO_PKG_VERSION"));

    serve(AppState::new(config.server)).await?;

    tracing::info!("OctoFit API server stopped");
    Ok(())
}
