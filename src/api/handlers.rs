use super::policy::GatewayPolicy;
use super::protocol::{
    ErrorResponse, HealthResponse, LeaderboardParams, LeaderboardResponse, SearchParams,
    SearchResponse, SeedParams, SeedResponse, StatsResponse, UpdateRatingRequest,
};
use crate::leaderboard::{RankedStore, SearchResult, UserId};

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Extension, Path, Query};
use axum::http::StatusCode;
use std::sync::Arc;

pub type ApiError = (StatusCode, Json<ErrorResponse>);

fn api_error(status: StatusCode, message: &str) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
}

fn parse_user_id(raw: &str) -> Result<UserId, ApiError> {
    raw.parse::<u64>().map(UserId).map_err(|e| {
        tracing::debug!("Rejected user id {:?}: {}", raw, e);
        api_error(StatusCode::BAD_REQUEST, "invalid user id")
    })
}

pub async fn handle_get_leaderboard(
    Extension(store): Extension<Arc<RankedStore>>,
    Extension(policy): Extension<GatewayPolicy>,
    Query(params): Query<LeaderboardParams>,
) -> (StatusCode, Json<LeaderboardResponse>) {
    let limit = policy.page_limit(params.limit.as_deref());
    let offset = policy.page_offset(params.offset.as_deref());

    let (data, total) = store.get_page(limit, offset);

    (
        StatusCode::OK,
        Json(LeaderboardResponse {
            data,
            total,
            limit,
            offset,
            has_more: offset.saturating_add(limit) < total,
        }),
    )
}

pub async fn handle_search(
    Extension(store): Extension<Arc<RankedStore>>,
    Query(params): Query<SearchParams>,
) -> Result<(StatusCode, Json<SearchResponse>), ApiError> {
    let query = match params.q {
        Some(q) if !q.is_empty() => q,
        _ => {
            return Err(api_error(
                StatusCode::BAD_REQUEST,
                "query parameter 'q' is required",
            ));
        }
    };

    let data = store.search(&query);
    tracing::debug!("Search {:?} matched {} users", query, data.len());

    Ok((
        StatusCode::OK,
        Json(SearchResponse {
            count: data.len(),
            data,
            query,
        }),
    ))
}

pub async fn handle_get_user_rank(
    Extension(store): Extension<Arc<RankedStore>>,
    Path(raw_id): Path<String>,
) -> Result<(StatusCode, Json<SearchResult>), ApiError> {
    let id = parse_user_id(&raw_id)?;

    match store.get_by_id(id) {
        Some(result) => Ok((StatusCode::OK, Json(result))),
        None => Err(api_error(StatusCode::NOT_FOUND, "user not found")),
    }
}

pub async fn handle_update_rating(
    Extension(store): Extension<Arc<RankedStore>>,
    Extension(policy): Extension<GatewayPolicy>,
    Path(raw_id): Path<String>,
    body: Result<Json<UpdateRatingRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<SearchResult>), ApiError> {
    let id = parse_user_id(&raw_id)?;

    let rating_error = format!(
        "rating must be between {} and {}",
        policy.min_rating, policy.max_rating
    );
    let rating = match body {
        Ok(Json(req)) if policy.rating_allowed(req.rating) => req.rating,
        Ok(Json(req)) => {
            tracing::debug!("Rejected out-of-range rating {} for user {}", req.rating, id);
            return Err(api_error(StatusCode::BAD_REQUEST, &rating_error));
        }
        Err(e) => {
            tracing::debug!("Rejected rating body for user {}: {}", id, e);
            return Err(api_error(StatusCode::BAD_REQUEST, &rating_error));
        }
    };

    match store.update_rating(id, rating) {
        Some(result) => {
            tracing::info!(
                "User {} rating set to {} (rank {})",
                id,
                result.rating,
                result.global_rank
            );
            Ok((StatusCode::OK, Json(result)))
        }
        None => Err(api_error(StatusCode::NOT_FOUND, "user not found")),
    }
}

pub async fn handle_seed(
    Extension(store): Extension<Arc<RankedStore>>,
    Extension(policy): Extension<GatewayPolicy>,
    Query(params): Query<SeedParams>,
) -> Result<(StatusCode, Json<SeedResponse>), ApiError> {
    let count = policy.seed_count(params.count.as_deref());

    // Seeding sorts the whole population; keep it off the async workers.
    let seeded = tokio::task::spawn_blocking(move || {
        store.reset(count, policy.min_rating, policy.max_rating)
    })
    .await
    .map_err(|e| {
        tracing::error!("Seeding task failed: {}", e);
        api_error(StatusCode::INTERNAL_SERVER_ERROR, "seeding failed")
    })?;

    Ok((
        StatusCode::OK,
        Json(SeedResponse {
            message: "users seeded successfully".to_string(),
            count: seeded,
        }),
    ))
}

pub async fn handle_stats(
    Extension(store): Extension<Arc<RankedStore>>,
) -> (StatusCode, Json<StatsResponse>) {
    (
        StatusCode::OK,
        Json(StatsResponse {
            total_users: store.count(),
        }),
    )
}

pub async fn handle_health() -> (StatusCode, Json<HealthResponse>) {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "ok".to_string(),
        }),
    )
}
