//! Seed Sources
//!
//! Produces candidate usernames and ratings for bulk seeding. The store owns the
//! uniqueness guarantee; a source only proposes names and may repeat itself freely.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

const FIRST_NAMES: &[&str] = &[
    "rahul", "priya", "amit", "neha", "vikram", "ananya", "rohan", "sneha", "arjun", "kavita",
    "sanjay", "meera", "karan", "pooja", "raj", "divya", "nikhil", "riya", "varun", "shweta",
    "aditya", "anjali", "manish", "nisha", "suresh", "deepika", "akash", "shreya", "vikas",
    "kritika",
];

const LAST_NAMES: &[&str] = &[
    "sharma", "kumar", "singh", "patel", "gupta", "joshi", "verma", "rao", "reddy", "iyer",
    "nair", "menon", "pillai", "shah", "mehta", "agarwal", "jain", "mishra", "pandey", "trivedi",
    "chopra", "malhotra", "kapoor", "khanna", "bhatia", "sethi", "arora", "bansal", "garg",
    "saxena",
];

/// Chance that a generated username carries a last name.
const LAST_NAME_PROBABILITY: f64 = 0.7;

/// Supplies candidate usernames and ratings to `RankedStore::reset_with`.
pub trait SeedSource {
    /// Proposes a username. Collisions are resolved by the store.
    fn username(&mut self) -> String;

    /// Draws a rating from the inclusive range `[min, max]`. Callers guarantee `min <= max`.
    fn rating(&mut self, min: i64, max: i64) -> i64;
}

/// Random first/last-name generator with uniformly distributed ratings.
pub struct RandomSeedSource {
    rng: StdRng,
}

impl RandomSeedSource {
    /// Seeds the generator from OS entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible generator; the same seed yields the same population.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomSeedSource {
    fn default() -> Self {
        Self::new()
    }
}

impl SeedSource for RandomSeedSource {
    fn username(&mut self) -> String {
        let first = FIRST_NAMES.choose(&mut self.rng).copied().unwrap_or("player");
        let mut username = first.to_string();

        if self.rng.gen_bool(LAST_NAME_PROBABILITY) {
            let last = LAST_NAMES.choose(&mut self.rng).copied().unwrap_or("anon");
            username.push('_');
            username.push_str(last);
        }

        let suffix: u32 = self.rng.gen_range(0..1000);
        if suffix > 500 {
            username.push('_');
            username.push_str(&(suffix % 10).to_string());
        }

        username
    }

    fn rating(&mut self, min: i64, max: i64) -> i64 {
        self.rng.gen_range(min..=max)
    }
}
