use anyhow::Result;
use std::sync::Arc;
use tracing::info;

use linkedin_connect::config::Config;
use linkedin_connect::providers::LinkedInProvider;
use linkedin_connect::store::FileTokenStore;
use linkedin_connect::{api, AppState, SharedState};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "linkedin_connect=info,tower_http=info".into()),
        )
        .init();

    // Missing LinkedIn credentials halt startup here
    let config = Config::from_env()?;
    info!("linkedin-connect v{}", env!("CARGO_PKG_VERSION"));

    let provider = LinkedInProvider::new(&config)?;
    let store = FileTokenStore::new(&config.token_file);
    info!("Token file: {}", store.path().display());

    let state: SharedState = Arc::new(AppState::new(
        config.clone(),
        Box::new(provider),
        Arc::new(store),
    ));

    let app = api::router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("App running on http://localhost:{}", config.port);
    info!(
        "Open http://localhost:{}/auth/linkedin to start the LinkedIn OAuth flow",
        config.port
    );
    axum::serve(listener, app).await?;

    Ok(())
}
