use super::seed::{RandomSeedSource, SeedSource};
use super::types::{LeaderboardEntry, SearchResult, User, UserId};

use parking_lot::{Mutex, RwLock};
use std::collections::HashMap;

/// The ordered sequence plus both indexes. Only ever touched through the
/// store's lock, so it is always observed as one unit.
#[derive(Debug)]
struct RankedState {
    /// Sorted by rating descending. Ties are in no particular order.
    users: Vec<User>,
    by_id: HashMap<UserId, usize>,
    by_name: HashMap<String, usize>,
    next_id: u64,
}

impl RankedState {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            users: Vec::with_capacity(capacity),
            by_id: HashMap::with_capacity(capacity),
            by_name: HashMap::with_capacity(capacity),
            next_id: 1,
        }
    }

    /// Tie-aware rank: one plus the number of users rated strictly higher.
    /// Requires the sort invariant.
    fn rank_of(&self, rating: i64) -> usize {
        self.users.partition_point(|user| user.rating > rating) + 1
    }

    fn unique_username(&self, base: String) -> String {
        if !self.by_name.contains_key(&base) {
            return base;
        }

        // Each attempt uses a fresh suffix and at most `by_name.len()` of them
        // can be taken, so this ends within `by_name.len() + 1` attempts.
        let mut counter: u64 = 1;
        loop {
            let candidate = format!("{}_{}", base, counter);
            if !self.by_name.contains_key(&candidate) {
                return candidate;
            }
            counter += 1;
        }
    }

    /// Appends without reordering. Callers must `reorder` before releasing the lock.
    fn push(&mut self, username: String, rating: i64) -> UserId {
        let id = UserId(self.next_id);
        self.next_id += 1;

        let slot = self.users.len();
        self.by_id.insert(id, slot);
        self.by_name.insert(username.clone(), slot);
        self.users.push(User {
            id,
            username,
            rating,
        });
        id
    }

    fn reorder(&mut self) {
        self.users.sort_unstable_by(|a, b| b.rating.cmp(&a.rating));

        for (slot, user) in self.users.iter().enumerate() {
            self.by_id.insert(user.id, slot);
            match self.by_name.get_mut(user.username.as_str()) {
                Some(existing) => *existing = slot,
                None => {
                    self.by_name.insert(user.username.clone(), slot);
                }
            }
        }
    }

    fn result_for(&self, id: UserId) -> Option<SearchResult> {
        let slot = *self.by_id.get(&id)?;
        let user = self.users.get(slot)?;
        Some(SearchResult::from_user(user, self.rank_of(user.rating)))
    }
}

/// In-memory leaderboard ordered by rating.
///
/// All reads share one readers-writer lock; every write mutates, re-sorts and
/// re-indexes under the exclusive side of that lock, so readers never see a
/// sequence and indexes that disagree. Construct one per service and share it
/// behind an `Arc`.
pub struct RankedStore {
    state: RwLock<RankedState>,
    seed_source: Mutex<Box<dyn SeedSource + Send>>,
}

impl RankedStore {
    /// Creates an empty store seeded from a random name generator.
    pub fn new() -> Self {
        Self::with_seed_source(RandomSeedSource::new())
    }

    /// Creates an empty store that draws `reset` populations from `source`.
    pub fn with_seed_source<S>(source: S) -> Self
    where
        S: SeedSource + Send + 'static,
    {
        Self {
            state: RwLock::new(RankedState::with_capacity(0)),
            seed_source: Mutex::new(Box::new(source)),
        }
    }

    /// Replaces the whole population with `count` users drawn from the store's
    /// own seed source. Returns the number of users now present.
    pub fn reset(&self, count: usize, min_rating: i64, max_rating: i64) -> usize {
        let mut source = self.seed_source.lock();
        self.reset_with(&mut **source, count, min_rating, max_rating)
    }

    /// Replaces the whole population with `count` users drawn from `source`.
    ///
    /// Ids run from 1 to `count`. Colliding usernames get `_1`, `_2`, ...
    /// appended until unique. The new population is built aside and swapped in
    /// under the write lock.
    pub fn reset_with<S>(
        &self,
        source: &mut S,
        count: usize,
        min_rating: i64,
        max_rating: i64,
    ) -> usize
    where
        S: SeedSource + ?Sized,
    {
        debug_assert!(min_rating <= max_rating, "min_rating must not exceed max_rating");

        let mut fresh = RankedState::with_capacity(count);
        for _ in 0..count {
            let username = fresh.unique_username(source.username());
            let rating = source.rating(min_rating, max_rating);
            fresh.push(username, rating);
        }
        fresh.reorder();

        let inserted = fresh.users.len();
        let previous = {
            let mut state = self.state.write();
            std::mem::replace(&mut *state, fresh)
        };
        drop(previous);

        tracing::info!(
            "Seeded {} users with ratings in [{}, {}]",
            inserted,
            min_rating,
            max_rating
        );
        inserted
    }

    /// Adds a single user with the next free id.
    pub fn insert(&self, username: &str, rating: i64) -> SearchResult {
        let mut state = self.state.write();

        let username = state.unique_username(username.to_string());
        let id = state.push(username.clone(), rating);
        state.reorder();

        tracing::debug!("Inserted user {} ({}) with rating {}", id, username, rating);

        SearchResult {
            global_rank: state.rank_of(rating),
            username,
            rating,
            id,
        }
    }

    /// Returns up to `limit` entries starting at the `offset`-th highest rated
    /// user, together with the total number of users.
    pub fn get_page(&self, limit: usize, offset: usize) -> (Vec<LeaderboardEntry>, usize) {
        let state = self.state.read();

        let total = state.users.len();
        if offset >= total {
            return (Vec::new(), total);
        }

        let end = offset.saturating_add(limit).min(total);
        let entries = state.users[offset..end]
            .iter()
            .map(|user| LeaderboardEntry::from_user(user, state.rank_of(user.rating)))
            .collect();

        (entries, total)
    }

    /// Case-insensitive substring search over every username, in leaderboard order.
    pub fn search(&self, query: &str) -> Vec<SearchResult> {
        let needle = query.to_lowercase();
        let state = self.state.read();

        state
            .users
            .iter()
            .filter(|user| user.username.to_lowercase().contains(&needle))
            .map(|user| SearchResult::from_user(user, state.rank_of(user.rating)))
            .collect()
    }

    pub fn get_by_id(&self, id: UserId) -> Option<SearchResult> {
        self.state.read().result_for(id)
    }

    /// Sets a user's rating and returns its refreshed rank, or `None` if the id is unknown.
    ///
    /// Re-sorts the whole sequence, so this is O(n log n).
    pub fn update_rating(&self, id: UserId, new_rating: i64) -> Option<SearchResult> {
        let mut state = self.state.write();

        let slot = *state.by_id.get(&id)?;
        let old_rating = std::mem::replace(&mut state.users[slot].rating, new_rating);
        state.reorder();

        tracing::debug!("Rating for user {} changed {} -> {}", id, old_rating, new_rating);
        state.result_for(id)
    }

    /// Rank a user with `rating` would hold right now.
    pub fn rank_of(&self, rating: i64) -> usize {
        self.state.read().rank_of(rating)
    }

    pub fn count(&self) -> usize {
        self.state.read().users.len()
    }

    /// Checks the ordering and index invariants under one read lock.
    #[cfg(test)]
    pub(crate) fn assert_consistent(&self) {
        let state = self.state.read();

        assert!(
            state.users.windows(2).all(|pair| pair[0].rating >= pair[1].rating),
            "sequence is not sorted by rating descending"
        );
        assert_eq!(state.by_id.len(), state.users.len());
        assert_eq!(state.by_name.len(), state.users.len());
        for (slot, user) in state.users.iter().enumerate() {
            assert_eq!(state.by_id.get(&user.id), Some(&slot));
            assert_eq!(state.by_name.get(&user.username), Some(&slot));
        }
    }
}

impl Default for RankedStore {
    fn default() -> Self {
        Self::new()
    }
}
