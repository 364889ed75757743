pub mod api;
pub mod config;
pub mod crypto;
pub mod error;
pub mod providers;
pub mod store;

pub use config::Config;
pub use error::AppError;

use std::sync::Arc;

use crypto::StateSigner;
use providers::OAuthProvider;
use store::TokenStore;

/// Shared application state passed to all API handlers.
pub struct AppState {
    pub config: Config,
    pub provider: Box<dyn OAuthProvider>,
    pub store: Arc<dyn TokenStore>,
    pub signer: StateSigner,
}

impl AppState {
    pub fn new(config: Config, provider: Box<dyn OAuthProvider>, store: Arc<dyn TokenStore>) -> Self {
        let signer = StateSigner::new(&config.state_secret);
        Self {
            config,
            provider,
            store,
            signer,
        }
    }
}

pub type SharedState = Arc<AppState>;
