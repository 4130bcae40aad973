//! HTTP Gateway Module
//!
//! Thin axum layer in front of `RankedStore`. Handlers parse and clamp client input,
//! call the store, and map `None` to 404 and bad input to 400. No ranking logic lives here.
//!
//! ## Submodules
//! - **`handlers`**: Axum request handlers, one per endpoint.
//! - **`policy`**: Defaults, caps and rating bounds applied before any store call.
//! - **`protocol`**: Endpoint paths and JSON request/response bodies.

pub mod handlers;
pub mod policy;
pub mod protocol;

use crate::leaderboard::RankedStore;
use axum::http::{Method, header};
use axum::routing::{get, post};
use axum::{Extension, Router};
use handlers::*;
use policy::GatewayPolicy;
use protocol::*;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

/// Browser clients on any origin may call the API, including preflighted writes.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::ORIGIN,
            header::CONTENT_TYPE,
            header::ACCEPT,
            header::AUTHORIZATION,
        ])
}

/// Wires every endpoint to its handler, sharing `store` and `policy` through extensions.
pub fn router(store: Arc<RankedStore>, policy: GatewayPolicy) -> Router {
    Router::new()
        .route(ENDPOINT_LEADERBOARD, get(handle_get_leaderboard))
        .route(ENDPOINT_SEARCH, get(handle_search))
        .route(ENDPOINT_USER_RANK, get(handle_get_user_rank))
        .route(ENDPOINT_USER_RATING, post(handle_update_rating))
        .route(ENDPOINT_SEED, post(handle_seed))
        .route(ENDPOINT_STATS, get(handle_stats))
        .route(ENDPOINT_HEALTH, get(handle_health))
        .layer(Extension(store))
        .layer(Extension(policy))
        .layer(cors_layer())
}
