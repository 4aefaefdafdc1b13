//! todo-api バイナリのエントリポイント
//! SQLite をバックエンドに HTTP サーバを起動します。

use anyhow::Context;
use infrastructure::SqliteTodoRepository;
use shared::{init_tracing, Config};
use std::sync::Arc;
use todo_api::{app_with_state, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // ロガー設定（RUST_LOG 環境変数で制御可能）
    init_tracing().map_err(|e| anyhow::anyhow!(e))?;

    let config = Config::from_env()?;
    let repository = SqliteTodoRepository::connect(&config)
        .await
        .context("failed to open database")?;
    let state = AppState::new(Arc::new(repository));

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(%addr, environment = %config.environment, "server starting");

    axum::serve(listener, app_with_state(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
    }
}
