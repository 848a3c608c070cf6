//! Routed Anecdotes server
//!
//! Binary entry point. The library functionality is in `lib.rs`.

use std::{net::SocketAddr, path::PathBuf};

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use tokio::net::TcpListener;

/// Command-line interface for the static host.
#[derive(Parser)]
#[command(
    name = "server",
    version,
    about = "Serve the Routed Anecdotes single-page app"
)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "anecdotes.toml")]
    config: PathBuf,

    /// Address to listen on (overrides server.addr)
    #[arg(long)]
    addr: Option<SocketAddr>,

    /// Directory with the compiled site (overrides server.site_root)
    #[arg(long)]
    site_root: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    server::init_tracing(cli.verbose);

    let config = server::load_config(&cli.config)?;
    let addr = cli.addr.unwrap_or(config.server.addr);
    let site_root = cli
        .site_root
        .unwrap_or_else(|| PathBuf::from(&config.server.site_root));

    if !site_root.join("index.html").exists() {
        tracing::warn!(
            ?site_root,
            "index.html not found, build the frontend with cargo leptos build"
        );
    }

    let listener = TcpListener::bind(addr)
        .await
        .wrap_err_with(|| format!("Failed to bind {addr}"))?;
    tracing::info!(%addr, ?site_root, "serving routed anecdotes");
    println!("  Listening on http://{addr}");

    axum::serve(listener, server::create_router(&site_root))
        .await
        .wrap_err("Server error")?;

    Ok(())
}
