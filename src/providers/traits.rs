use async_trait::async_trait;
use std::time::Duration;

use crate::error::AppError;

/// Tokens returned from the provider after a code exchange.
#[derive(Debug, Clone)]
pub struct TokenSet {
    pub access_token: String,
    pub expires_in: Option<u64>,
    pub scope: Option<String>,
}

/// The provider's side of the authorization-code flow.
#[async_trait]
pub trait OAuthProvider: Send + Sync {
    /// Provider identifier (e.g. "linkedin"). The flow is mounted at `/auth/{id}`.
    fn id(&self) -> &str;

    /// Human-readable display name (e.g. "LinkedIn").
    fn display_name(&self) -> &str;

    /// Build the authorization URL that the user should be redirected to.
    ///
    /// - `scopes`: The OAuth scopes to request.
    /// - `state`: The anti-CSRF value the provider echoes back on the callback.
    /// - `redirect_uri`: The callback URL registered with the provider.
    fn auth_url(&self, scopes: &[String], state: &str, redirect_uri: &str) -> String;

    /// Exchange an authorization code for an access token.
    async fn exchange_code(&self, code: &str, redirect_uri: &str) -> Result<TokenSet, AppError>;

    /// Fetch the member's basic profile with a bearer token.
    async fn fetch_profile(&self, access_token: &str) -> Result<serde_json::Value, AppError>;

    /// Fetch the member's primary email address with a bearer token.
    async fn fetch_email(&self, access_token: &str) -> Result<serde_json::Value, AppError>;

    /// Token lifetime assumed when the exchange response omits `expires_in`.
    fn token_ttl(&self) -> Duration {
        Duration::from_secs(3600) // 1 hour default
    }
}

/// Pull a human-readable reason out of a provider error body.
///
/// OAuth endpoints answer with `error_description`, the REST API with `message`.
/// Falls back to the HTTP status when neither is present.
pub fn error_detail(status: reqwest::StatusCode, body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            v.get("error_description")
                .or_else(|| v.get("message"))
                .and_then(|d| d.as_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| format!("Request failed with status code {}", status.as_u16()))
}
