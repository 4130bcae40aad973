//! Input Policy
//!
//! Defaults, caps and bounds applied to client input before it reaches the store.
//! The store trusts its arguments; everything it must never see is filtered here.

use std::num::IntErrorKind;

/// Defaults and limits for the HTTP gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GatewayPolicy {
    pub default_limit: usize,
    pub max_limit: usize,
    pub default_seed_count: usize,
    pub max_seed_count: usize,
    pub min_rating: i64,
    pub max_rating: i64,
}

impl Default for GatewayPolicy {
    fn default() -> Self {
        Self {
            default_limit: 50,
            max_limit: 100,
            default_seed_count: 10_000,
            max_seed_count: 100_000,
            min_rating: 100,
            max_rating: 5000,
        }
    }
}

impl GatewayPolicy {
    /// Missing, malformed or non-positive limits fall back to the default; large ones are capped.
    pub fn page_limit(&self, raw: Option<&str>) -> usize {
        match parse_int(raw) {
            Some(limit) if limit > 0 => clamp_to_usize(limit).min(self.max_limit),
            _ => self.default_limit,
        }
    }

    /// Missing, malformed or negative offsets become zero.
    pub fn page_offset(&self, raw: Option<&str>) -> usize {
        match parse_int(raw) {
            Some(offset) if offset > 0 => clamp_to_usize(offset),
            _ => 0,
        }
    }

    /// Missing, malformed or non-positive counts fall back to the default; large ones are capped.
    pub fn seed_count(&self, raw: Option<&str>) -> usize {
        match parse_int(raw) {
            Some(count) if count > 0 => clamp_to_usize(count).min(self.max_seed_count),
            _ => self.default_seed_count,
        }
    }

    pub fn rating_allowed(&self, rating: i64) -> bool {
        (self.min_rating..=self.max_rating).contains(&rating)
    }
}

/// Out-of-range integers saturate instead of being discarded, so an absurdly
/// large offset still means "past the end".
fn parse_int(raw: Option<&str>) -> Option<i64> {
    let value = raw?.trim();
    match value.parse::<i64>() {
        Ok(n) => Some(n),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Some(i64::MAX),
            IntErrorKind::NegOverflow => Some(i64::MIN),
            _ => None,
        },
    }
}

fn clamp_to_usize(value: i64) -> usize {
    usize::try_from(value).unwrap_or(usize::MAX)
}
