use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

use super::traits::{error_detail, OAuthProvider, TokenSet};
use crate::config::Config;
use crate::error::AppError;

const RESTLI_PROTOCOL_VERSION: &str = "2.0.0";

/// LinkedIn OAuth 2.0 provider.
///
/// Quirks:
/// - Access tokens expire in 60 days.
/// - Token exchange uses standard form-encoded POST with the client secret in the body.
/// - REST API calls need the `X-Restli-Protocol-Version` header.
/// - Email lives behind a projection on `/v2/emailAddress`, not on the profile.
pub struct LinkedInProvider {
    client_id: String,
    client_secret: String,
    auth_endpoint: String,
    token_endpoint: String,
    api_base: String,
    http: reqwest::Client,
}

#[derive(Debug, Deserialize)]
struct LinkedInTokenResponse {
    access_token: String,
    expires_in: Option<u64>,
    scope: Option<String>,
}

impl LinkedInProvider {
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .timeout(config.http_timeout)
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client_id: config.client_id.clone(),
            client_secret: config.client_secret.clone(),
            auth_endpoint: config.auth_url.clone(),
            token_endpoint: config.token_url.clone(),
            api_base: config.api_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    async fn get_json(&self, url: &str, access_token: &str) -> Result<serde_json::Value, AppError> {
        let resp = self
            .http
            .get(url)
            .bearer_auth(access_token)
            .header("X-Restli-Protocol-Version", RESTLI_PROTOCOL_VERSION)
            .send()
            .await
            .map_err(|e| AppError::ProfileFetch(format!("LinkedIn API request failed: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            tracing::warn!("LinkedIn API {url} returned {status}: {body}");
            return Err(AppError::ProfileFetch(error_detail(status, &body)));
        }

        resp.json()
            .await
            .map_err(|e| AppError::ProfileFetch(format!("Failed to parse LinkedIn API response: {e}")))
    }
}

#[async_trait]
impl OAuthProvider for LinkedInProvider {
    fn id(&self) -> &str {
        "linkedin"
    }

    fn display_name(&self) -> &str {
        "LinkedIn"
    }

    fn auth_url(&self, scopes: &[String], state: &str, redirect_uri: &str) -> String {
        let query = url::form_urlencoded::Serializer::new(String::new())
            .append_pair("response_type", "code")
            .append_pair("client_id", &self.client_id)
            .append_pair("redirect_uri", redirect_uri)
            .append_pair("scope", &scopes.join(" "))
            .append_pair("state", state)
            .finish();

        format!("{}?{}", self.auth_endpoint, query)
    }

    async fn exchange_code(&self, code: &str, redirect_uri: &str) -> Result<TokenSet, AppError> {
        let resp = self
            .http
            .post(&self.token_endpoint)
            .form(&[
                ("grant_type", "authorization_code"),
                ("code", code),
                ("redirect_uri", redirect_uri),
                ("client_id", self.client_id.as_str()),
                ("client_secret", self.client_secret.as_str()),
            ])
            .send()
            .await
            .map_err(|e| AppError::TokenExchange(format!("Token exchange request failed: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            tracing::warn!("LinkedIn token exchange returned {status}: {body}");
            return Err(AppError::TokenExchange(error_detail(status, &body)));
        }

        let token_resp: LinkedInTokenResponse = resp
            .json()
            .await
            .map_err(|e| AppError::TokenExchange(format!("Failed to parse token response: {e}")))?;

        Ok(TokenSet {
            access_token: token_resp.access_token,
            expires_in: token_resp.expires_in,
            scope: token_resp.scope,
        })
    }

    async fn fetch_profile(&self, access_token: &str) -> Result<serde_json::Value, AppError> {
        self.get_json(&format!("{}/v2/me", self.api_base), access_token)
            .await
    }

    async fn fetch_email(&self, access_token: &str) -> Result<serde_json::Value, AppError> {
        self.get_json(
            &format!(
                "{}/v2/emailAddress?q=members&projection=(elements*(handle~))",
                self.api_base
            ),
            access_token,
        )
        .await
    }

    fn token_ttl(&self) -> Duration {
        Duration::from_secs(60 * 24 * 3600) // LinkedIn tokens expire in 60 days
    }
}
