//! `insight`: serves the feedback dashboard and forwards analysis requests to
//! the sentiment backend.

#![recursion_limit = "256"]

mod config;
mod routes;
mod state;

#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] config::ConfigError),
    #[error("http client: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server io: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    tracing_subscriber::fmt::init();

    if let Err(e) = dotenvy::dotenv() {
        tracing::debug!(error = %e, "no .env file loaded");
    }

    let config = config::ServerConfig::from_env()?;
    let state = state::AppState::new(&config)?;

    // Non-fatal: without Leptos options only the proxy routes are served.
    let app = match routes::leptos_app(state.clone()) {
        Ok(app) => app,
        Err(e) => {
            tracing::warn!(error = %e, "leptos app not configured; serving proxy routes only");
            routes::api_routes(state)
        }
    };

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
    tracing::info!(port = config.port, target = %config.proxy_target, "insight listening");
    axum::serve(listener, app).await?;
    Ok(())
}
