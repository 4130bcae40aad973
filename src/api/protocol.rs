//! HTTP Protocol
//!
//! Endpoint paths and the JSON bodies exchanged with clients. Field names follow the
//! public API (`globalRank`, `hasMore`, `totalUsers`), not Rust naming.

use crate::leaderboard::{LeaderboardEntry, SearchResult};
use serde::{Deserialize, Serialize};

// --- API Endpoints ---

/// Paginated leaderboard (`?limit=&offset=`).
pub const ENDPOINT_LEADERBOARD: &str = "/api/leaderboard";
/// Case-insensitive username search (`?q=`).
pub const ENDPOINT_SEARCH: &str = "/api/search";
/// Rank lookup for a single user.
pub const ENDPOINT_USER_RANK: &str = "/api/user/:id/rank";
/// Rating update for a single user.
pub const ENDPOINT_USER_RATING: &str = "/api/user/:id/rating";
/// Re-seeds the whole leaderboard (`?count=`).
pub const ENDPOINT_SEED: &str = "/api/seed";
pub const ENDPOINT_STATS: &str = "/api/stats";
pub const ENDPOINT_HEALTH: &str = "/health";

// --- Query Parameters ---
//
// Numeric parameters arrive as raw strings so malformed values fall back to
// defaults instead of rejecting the request.

#[derive(Debug, Default, Deserialize)]
pub struct LeaderboardParams {
    pub limit: Option<String>,
    pub offset: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SeedParams {
    pub count: Option<String>,
}

// --- Request Bodies ---

#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateRatingRequest {
    pub rating: i64,
}

// --- Responses ---

#[derive(Debug, Serialize, Deserialize)]
pub struct LeaderboardResponse {
    pub data: Vec<LeaderboardEntry>,
    pub total: usize,
    pub limit: usize,
    pub offset: usize,
    #[serde(rename = "hasMore")]
    pub has_more: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResponse {
    pub data: Vec<SearchResult>,
    pub count: usize,
    pub query: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SeedResponse {
    pub message: String,
    pub count: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StatsResponse {
    #[serde(rename = "totalUsers")]
    pub total_users: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

/// Body of every 4xx response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
