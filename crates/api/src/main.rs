//! Overseer API server binary.
//!
//! Usage:
//!   overseer-api --config config.toml
//!   overseer-api --port 8000
//!   overseer-api --port 8000 --bind 0.0.0.0
//!
//! # Environment Variables
//!
//! - `HOST` - Server bind address (overridden by --bind)
//! - `PORT` - Server port (overridden by --port)
//! - `RUST_LOG` - Log filter (default: info)

use overseer_agents::default_agents;
use overseer_api::{serve, AppState};
use overseer_supervisor::SupervisorConfig;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args: Vec<String> = std::env::args().collect();
    let mut port: Option<u16> = None;
    let mut bind_addr: Option<String> = None;
    let mut config_path: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--port" | "-p" => {
                if i + 1 < args.len() {
                    port = Some(args[i + 1].parse()?);
                    i += 1;
                }
            }
            "--bind" | "-b" => {
                if i + 1 < args.len() {
                    bind_addr = Some(args[i + 1].clone());
                    i += 1;
                }
            }
            "--config" | "-c" => {
                if i + 1 < args.len() {
                    config_path = Some(args[i + 1].clone());
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Overseer API Server");
                println!();
                println!("Usage: overseer-api [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -p, --port <PORT>     Port to listen on (default: 8000, env: PORT)");
                println!("  -b, --bind <ADDR>     Bind address (default: 127.0.0.1, env: HOST)");
                println!("  -c, --config <FILE>   Path to config.toml file");
                println!("  -h, --help            Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    // Flag > environment > config file > default.
    let config = if let Some(path) = config_path {
        tracing::info!(path = %path, "Loading configuration");
        SupervisorConfig::from_file(&path)?
    } else {
        SupervisorConfig::default()
    };

    let host = bind_addr
        .or_else(|| std::env::var("HOST").ok())
        .unwrap_or_else(|| config.server.host.clone());
    let port = match port {
        Some(p) => p,
        None => match std::env::var("PORT") {
            Ok(value) => value.parse()?,
            Err(_) => config.server.port,
        },
    };

    if host == "0.0.0.0" {
        tracing::warn!(
            "Server binding to 0.0.0.0 — this exposes the API to all network interfaces."
        );
    }

    let state = Arc::new(AppState::new(&config, default_agents()));

    tracing::info!(supervisor = %config.name, "Starting supervisor");
    state.supervisor.write().await.start().await?;

    let addr: SocketAddr = format!("{host}:{port}").parse()?;
    serve(state.clone(), addr).await?;

    tracing::info!("Stopping supervisor");
    state.supervisor.write().await.stop().await?;

    Ok(())
}
