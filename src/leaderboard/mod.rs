//! Ranked Leaderboard Module
//!
//! The authoritative in-memory collection of users, kept sorted by rating.
//!
//! ## Core Concepts
//! - **Ordered sequence**: every user lives in one `Vec` sorted by rating descending.
//!   It is the single source of truth; the id and username indexes are derived from it
//!   and rebuilt after every reorder.
//! - **Tie-aware rank**: `1 + (number of users rated strictly higher)`, found by a
//!   boundary search over the sorted sequence. Equal ratings share a rank.
//! - **Locking**: one readers-writer lock guards the sequence and both indexes together.
//!   Reads share it; seeding, inserts and rating updates hold it exclusively until the
//!   sequence is re-sorted and re-indexed.
//!
//! Users with equal ratings have no defined relative order, and that order may change
//! after unrelated updates. Only their ranks are guaranteed equal.
//!
//! ## Submodules
//! - **`store`**: `RankedStore`, the locked collection and all query/update logic.
//! - **`seed`**: Sources of candidate usernames and ratings for bulk seeding.
//! - **`types`**: `User` and the rank-annotated views returned to callers.

pub mod seed;
pub mod store;
pub mod types;

pub use seed::{RandomSeedSource, SeedSource};
pub use store::RankedStore;
pub use types::{LeaderboardEntry, SearchResult, User, UserId};
