//! HTTP front end: the run API plus static files for the chart page.

mod handlers;
mod router;
mod state;

pub use router::create_router;
pub use state::AppState;

use crate::config::ServerConfig;
use crate::{BinaryBench, Result};

/// Run the HTTP server until the listener fails.
pub async fn run(server: ServerConfig, bench: BinaryBench) -> Result<()> {
    let addr = server.server_addr();
    let router = create_router(AppState::new(server, bench));

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("binary-race listening on http://{}", addr);

    axum::serve(listener, router).await?;

    Ok(())
}
