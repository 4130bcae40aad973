//! Leaderboard Data Types
//!
//! The stored `User` record and the transient views computed from it on every read.

use serde::{Deserialize, Serialize};

/// Stable identity of a user, assigned at creation and never reused while the user exists.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct UserId(pub u64);

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single ranked user.
///
/// `id` and `username` are immutable once the user is created; only `rating`
/// changes, and only through the store's write path.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub rating: i64,
}

/// One row of a leaderboard page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LeaderboardEntry {
    pub rank: usize,
    pub username: String,
    pub rating: i64,
    pub id: UserId,
}

/// A user annotated with its global tie-aware rank.
///
/// Returned by search, point lookup and rating updates.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchResult {
    #[serde(rename = "globalRank")]
    pub global_rank: usize,
    pub username: String,
    pub rating: i64,
    pub id: UserId,
}

impl LeaderboardEntry {
    pub(crate) fn from_user(user: &User, rank: usize) -> Self {
        Self {
            rank,
            username: user.username.clone(),
            rating: user.rating,
            id: user.id,
        }
    }
}

impl SearchResult {
    pub(crate) fn from_user(user: &User, global_rank: usize) -> Self {
        Self {
            global_rank,
            username: user.username.clone(),
            rating: user.rating,
            id: user.id,
        }
    }
}
