use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

/// LinkedIn production endpoints.
pub mod endpoints {
    pub const AUTH_URL: &str = "https://www.linkedin.com/oauth/v2/authorization";
    pub const TOKEN_URL: &str = "https://www.linkedin.com/oauth/v2/accessToken";
    pub const API_URL: &str = "https://api.linkedin.com";
}

pub const DEFAULT_SCOPES: &str = "r_liteprofile r_emailaddress w_member_social";
pub const DEFAULT_STATE_SECRET: &str = "state_secret_placeholder";

/// Application configuration, loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    // ── Server ──────────────────────────────────────────────────────────
    pub host: String,
    pub port: u16,

    // ── OAuth client ────────────────────────────────────────────────────
    pub client_id: String,
    pub client_secret: String,
    /// Callback URL registered with LinkedIn. Must point at `/auth/{provider}/callback`.
    pub redirect_uri: String,
    /// Space-separated scopes requested on the authorization redirect.
    pub scopes: String,
    /// Key for signing the `oauth_state` cookie.
    pub state_secret: String,

    // ── Provider endpoints ──────────────────────────────────────────────
    pub auth_url: String,
    pub token_url: String,
    pub api_url: String,
    pub http_timeout: Duration,

    // ── Storage ─────────────────────────────────────────────────────────
    pub token_file: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Config {
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "3000".into())
                .parse()
                .context("Invalid PORT")?,

            client_id: required("LINKEDIN_CLIENT_ID")?,
            client_secret: required("LINKEDIN_CLIENT_SECRET")?,
            redirect_uri: required("REDIRECT_URI")?,
            scopes: std::env::var("LINKEDIN_SCOPES").unwrap_or_else(|_| DEFAULT_SCOPES.into()),
            state_secret: std::env::var("STATE_SECRET")
                .unwrap_or_else(|_| DEFAULT_STATE_SECRET.into()),

            auth_url: std::env::var("LINKEDIN_AUTH_URL")
                .unwrap_or_else(|_| endpoints::AUTH_URL.into()),
            token_url: std::env::var("LINKEDIN_TOKEN_URL")
                .unwrap_or_else(|_| endpoints::TOKEN_URL.into()),
            api_url: std::env::var("LINKEDIN_API_URL")
                .unwrap_or_else(|_| endpoints::API_URL.into()),
            http_timeout: Duration::from_secs(
                std::env::var("HTTP_TIMEOUT_SECS")
                    .unwrap_or_else(|_| "30".into())
                    .parse()
                    .context("Invalid HTTP_TIMEOUT_SECS")?,
            ),

            token_file: std::env::var("TOKEN_FILE")
                .unwrap_or_else(|_| "tokens.json".into())
                .into(),
        })
    }

    /// Configuration with every provider endpoint rooted at `base_url` (a mock server).
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 0,
            client_id: "test-client-id".into(),
            client_secret: "test-client-secret".into(),
            redirect_uri: "http://localhost:3000/auth/linkedin/callback".into(),
            scopes: DEFAULT_SCOPES.into(),
            state_secret: "test-state-secret".into(),
            auth_url: format!("{base_url}/oauth/v2/authorization"),
            token_url: format!("{base_url}/oauth/v2/accessToken"),
            api_url: base_url.to_string(),
            http_timeout: Duration::from_secs(5),
            token_file: "tokens.json".into(),
        }
    }

    pub fn scope_list(&self) -> Vec<String> {
        self.scopes.split_whitespace().map(str::to_string).collect()
    }
}

fn required(name: &str) -> Result<String> {
    std::env::var(name)
        .ok()
        .filter(|v| !v.is_empty())
        .with_context(|| format!("{name} is required (set it in the environment or .env)"))
}
