//! Mock weather service.
//!
//! Serves `GET /weather?city=...` with a random reading and `GET /cities`
//! with the fixed list of known cities. No state survives a request.

use anyhow::Context;
use clap::Parser;
use std::net::{IpAddr, SocketAddr};
use tokio::net::TcpListener;

mod app;
mod error;
mod routes;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Address to listen on.
    #[arg(long, env = "WEATHER_HOST", default_value = "127.0.0.1")]
    host: IpAddr,

    /// Port to listen on.
    #[arg(short, long, env = "WEATHER_PORT", default_value_t = 4000)]
    port: u16,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let addr = SocketAddr::new(args.host, args.port);

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    log::info!("Weather backend running on http://{}", listener.local_addr()?);

    axum::serve(listener, app::create_app())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Weather backend stopped unexpectedly")?;

    log::info!("shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("failed to listen for ctrl-c: {e}");
        std::future::pending::<()>().await;
    }
    log::info!("got SIGINT, shutting down");
}
