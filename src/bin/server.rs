//! Jira board server.
//!
//! Serves `GET /jira/{host:boardId}?apiKey=...` and answers with the board's
//! columns and cards as JSON.
//!
//! ```bash
//! export BOARD_SERVER_ADDR=127.0.0.1:3000
//! export JIRA_TIMEOUT_SECS=30
//! server
//! ```

use jira_board::{
    config::ServerConfig,
    prelude::*,
    web::{AppState, router},
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("jira_board=debug,{}=debug,tower_http=debug", env!("CARGO_CRATE_NAME"))
                    .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env()?;
    tracing::info!("Starting with {config}");
    let app = router(AppState::from_config(&config)?);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    tracing::debug!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if tokio::signal::ctrl_c().await.is_ok() {
                tracing::info!("Shutting down");
            }
        })
        .await?;

    Ok(())
}
