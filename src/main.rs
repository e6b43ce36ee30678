mod config;
mod routes;

use config::HostConfig;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    if let Err(e) = serve().await {
        tracing::error!(error = %e, "board-admin failed");
        std::process::exit(1);
    }
}

async fn serve() -> Result<(), String> {
    let config = HostConfig::from_env().map_err(|e| e.to_string())?;
    let app = routes::app()?;
    let listener = tokio::net::TcpListener::bind(config.bind_addr())
        .await
        .map_err(|e| format!("bind {}: {e}", config.bind_addr()))?;

    tracing::info!(port = config.port, "board-admin listening");
    axum::serve(listener, app).await.map_err(|e| format!("server: {e}"))
}
