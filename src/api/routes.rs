//! Route handlers for the OAuth flow.
//!
//! All handlers receive `SharedState` via Axum state extraction.

use axum::{
    extract::{Query, State},
    response::{Html, IntoResponse, Redirect},
    routing::get,
    Json, Router,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use chrono::Utc;
use serde::Deserialize;
use serde_json::json;
use tracing::{info, warn};

use crate::api::html;
use crate::error::AppError;
use crate::providers::OAuthProvider;
use crate::store::TokenRecord;
use crate::SharedState;

/// Cookie holding the signed state between the redirect and the callback.
pub const STATE_COOKIE: &str = "oauth_state";

/// Path that starts the flow for `provider`; the callback lives under it.
pub fn start_path(provider: &dyn OAuthProvider) -> String {
    format!("/auth/{}", provider.id())
}

pub fn router(state: SharedState) -> Router {
    let start = start_path(&*state.provider);
    let callback = format!("{start}/callback");

    Router::new()
        .route("/", get(home))
        .route("/status", get(status))
        .route(&start, get(oauth_start))
        .route(&callback, get(oauth_callback))
        .with_state(state)
}

// =============================================================================
// Pages
// =============================================================================

/// GET /: Token status page. Reads the store on every request.
async fn home(State(state): State<SharedState>) -> Html<String> {
    let token = state.store.load();
    Html(html::home_page(
        &start_path(&*state.provider),
        &state.store.describe(),
        token.as_ref(),
    ))
}

/// GET /status: Health check.
async fn status(State(state): State<SharedState>) -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "linkedin-connect",
        "version": env!("CARGO_PKG_VERSION"),
        "token_saved": state.store.load().is_some(),
    }))
}

// =============================================================================
// OAuth
// =============================================================================

fn state_cookie(value: String) -> Cookie<'static> {
    Cookie::build((STATE_COOKIE, value))
        .http_only(true)
        .same_site(SameSite::Lax)
        .path("/")
        .build()
}

/// GET /auth/{provider}: Redirect to the provider's authorization screen.
async fn oauth_start(
    State(state): State<SharedState>,
    jar: CookieJar,
) -> Result<(CookieJar, Redirect), AppError> {
    let oauth_state = state.signer.generate();
    let signed = state.signer.sign(&oauth_state)?;

    let auth_url = state.provider.auth_url(
        &state.config.scope_list(),
        &oauth_state,
        &state.config.redirect_uri,
    );

    info!("Starting {} OAuth flow", state.provider.display_name());
    Ok((jar.add(state_cookie(signed)), Redirect::temporary(&auth_url)))
}

#[derive(Debug, Deserialize)]
struct OAuthCallbackQuery {
    code: Option<String>,
    state: Option<String>,
    error: Option<String>,
    error_description: Option<String>,
}

/// GET /auth/{provider}/callback: Validate state, exchange the code, store
/// the token and fetch the profile and email to prove it works.
async fn oauth_callback(
    State(state): State<SharedState>,
    jar: CookieJar,
    Query(q): Query<OAuthCallbackQuery>,
) -> Result<(CookieJar, Html<String>), AppError> {
    let Some(code) = q.code.as_deref().filter(|c| !c.is_empty()) else {
        if let Some(error) = &q.error {
            warn!(
                "Authorization denied by provider: {error} ({})",
                q.error_description.as_deref().unwrap_or("no description")
            );
        }
        return Err(AppError::MissingCode);
    };

    let saved_state = jar.get(STATE_COOKIE).map(|c| c.value().to_string());
    state
        .signer
        .check(q.state.as_deref(), saved_state.as_deref())
        .inspect_err(|_| warn!("OAuth state mismatch on callback"))?;

    let tokens = state
        .provider
        .exchange_code(code, &state.config.redirect_uri)
        .await?;

    let expires_in = tokens
        .expires_in
        .unwrap_or_else(|| state.provider.token_ttl().as_secs());
    let record = TokenRecord::issued(tokens.access_token, expires_in, Utc::now());
    state.store.save(&record)?;
    info!(
        "Saved {} token (expires {}, scope: {})",
        state.provider.display_name(),
        record.expires_at,
        tokens.scope.as_deref().unwrap_or("not reported")
    );

    let profile = state.provider.fetch_profile(&record.access_token).await?;
    let email = state.provider.fetch_email(&record.access_token).await?;

    let jar = jar.remove(Cookie::build(STATE_COOKIE).path("/"));
    Ok((
        jar,
        Html(html::connected_page(&state.store.describe(), &profile, &email)),
    ))
}
