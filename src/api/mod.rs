//! HTTP surface:
//! - `/`                          token status page
//! - `/auth/{provider}`           start the OAuth flow
//! - `/auth/{provider}/callback`  finish it
//! - `/status`                    health check

pub mod html;
pub mod routes;

use crate::SharedState;
use axum::Router;
use tower_http::trace::TraceLayer;

pub fn router(state: SharedState) -> Router {
    routes::router(state).layer(TraceLayer::new_for_http())
}
