//! Ranked Leaderboard Library
//!
//! An in-memory leaderboard of users ordered by rating, with tie-aware ranks.
//! It serves as the foundation for the binary executable (`main.rs`).
//!
//! ## Modules
//! - **`leaderboard`**: The ranked store. Owns the rating-ordered sequence and its id and
//!   username indexes, and answers page, search, lookup and update queries under a
//!   readers-writer lock.
//! - **`api`**: The HTTP gateway. Axum handlers that validate and clamp client input
//!   before calling the store, and map results to status codes and JSON.
//! - **`config`**: Command-line and environment configuration for the server.

pub mod api;
pub mod config;
pub mod leaderboard;
