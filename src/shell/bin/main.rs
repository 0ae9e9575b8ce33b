include!("../../lib.rs");
use std::net::SocketAddr;
use clap::Parser;
use tracing::{info, Level};
use crate::core::controller::AppState;
use crate::core::domain::{Configuration, DEFAULT_LIBRARY_NAME};
use crate::shell::build_router;
use crate::utils::logs::setup_tracing;

#[derive(Debug, Parser)]
#[command(name = "shelf", about = "Track the books of a small personal library from a browser form")]
struct Cli {
    /// Address the form and the json api listen on
    #[arg(long, env = "SHELF_ADDR", default_value = "127.0.0.1:3000")]
    addr: SocketAddr,

    /// Name shown as the page title
    #[arg(long, env = "SHELF_NAME", default_value = DEFAULT_LIBRARY_NAME)]
    name: String,

    #[arg(long, env = "SHELF_LOG_LEVEL", default_value = "info")]
    log_level: Level,

    /// Write logs as json lines
    #[arg(long, env = "SHELF_JSON_LOGS")]
    json_logs: bool,
}

impl Cli {
    fn configuration(&self) -> Configuration {
        Configuration::new(self.name.as_str())
            .with_bind_addr(self.addr)
            .with_logging(self.log_level, self.json_logs)
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(%err, "failed to listen for ctrl-c");
    }
    info!("shutting down");
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = Cli::parse().configuration();
    setup_tracing(&config);

    let addr = config.bind_addr;
    let app = build_router(AppState::new(config));
    info!(%addr, "library form listening on http://{}", addr);

    axum::Server::try_bind(&addr)?
        .serve(app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}
