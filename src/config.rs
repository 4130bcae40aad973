//! Server Configuration
//!
//! Command-line flags with environment fallbacks. Defaults reproduce the stock
//! service: port 8080, 10 000 seeded users rated 100..=5000, pages of at most 100.

use crate::api::policy::GatewayPolicy;
use anyhow::{Result, bail};
use clap::Parser;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

#[derive(Debug, Clone, Parser)]
#[command(name = "leaderboard", about = "In-memory ranked leaderboard over HTTP")]
pub struct ServerConfig {
    /// Interface to listen on.
    #[arg(long, env = "LEADERBOARD_HOST", default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub host: IpAddr,

    #[arg(long, env = "PORT", default_value_t = 8080)]
    pub port: u16,

    /// Users generated at startup and by `/api/seed` without a count.
    #[arg(long, env = "LEADERBOARD_SEED_COUNT", default_value_t = 10_000)]
    pub seed_count: usize,

    #[arg(long, env = "LEADERBOARD_MAX_SEED_COUNT", default_value_t = 100_000)]
    pub max_seed_count: usize,

    #[arg(
        long,
        env = "LEADERBOARD_MIN_RATING",
        default_value_t = 100,
        allow_negative_numbers = true
    )]
    pub min_rating: i64,

    #[arg(
        long,
        env = "LEADERBOARD_MAX_RATING",
        default_value_t = 5000,
        allow_negative_numbers = true
    )]
    pub max_rating: i64,

    #[arg(long, env = "LEADERBOARD_DEFAULT_LIMIT", default_value_t = 50)]
    pub default_limit: usize,

    #[arg(long, env = "LEADERBOARD_MAX_LIMIT", default_value_t = 100)]
    pub max_limit: usize,

    /// Fixed RNG seed for reproducible populations.
    #[arg(long, env = "LEADERBOARD_RNG_SEED")]
    pub rng_seed: Option<u64>,

    #[arg(long, env = "LEADERBOARD_LOG_LEVEL", default_value_t = tracing::Level::INFO)]
    pub log_level: tracing::Level,
}

impl ServerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.min_rating > self.max_rating {
            bail!(
                "min rating {} exceeds max rating {}",
                self.min_rating,
                self.max_rating
            );
        }
        if self.max_limit == 0 {
            bail!("max limit must be positive");
        }
        if self.default_limit == 0 || self.default_limit > self.max_limit {
            bail!(
                "default limit {} must be within 1..={}",
                self.default_limit,
                self.max_limit
            );
        }
        if self.seed_count > self.max_seed_count {
            bail!(
                "seed count {} exceeds max seed count {}",
                self.seed_count,
                self.max_seed_count
            );
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn policy(&self) -> GatewayPolicy {
        GatewayPolicy {
            default_limit: self.default_limit,
            max_limit: self.max_limit,
            default_seed_count: self.seed_count,
            max_seed_count: self.max_seed_count,
            min_rating: self.min_rating,
            max_rating: self.max_rating,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> ServerConfig {
        let argv = std::iter::once("leaderboard").chain(args.iter().copied());
        ServerConfig::try_parse_from(argv).expect("arguments should parse")
    }

    #[test]
    fn test_explicit_flags() {
        let config = parse(&[
            "--host",
            "127.0.0.1",
            "--port",
            "9090",
            "--seed-count",
            "500",
            "--min-rating",
            "-10",
            "--max-rating",
            "10",
            "--rng-seed",
            "7",
            "--log-level",
            "debug",
        ]);

        assert_eq!(config.bind_addr(), "127.0.0.1:9090".parse().unwrap());
        assert_eq!(config.seed_count, 500);
        assert_eq!(config.min_rating, -10);
        assert_eq!(config.rng_seed, Some(7));
        assert_eq!(config.log_level, tracing::Level::DEBUG);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_policy_mirrors_flags() {
        let config = parse(&[
            "--seed-count",
            "20",
            "--max-seed-count",
            "40",
            "--default-limit",
            "5",
            "--max-limit",
            "10",
            "--min-rating",
            "1",
            "--max-rating",
            "9",
        ]);

        let policy = config.policy();
        assert_eq!(policy.default_seed_count, 20);
        assert_eq!(policy.max_seed_count, 40);
        assert_eq!(policy.default_limit, 5);
        assert_eq!(policy.max_limit, 10);
        assert_eq!(policy.min_rating, 1);
        assert_eq!(policy.max_rating, 9);
    }

    #[test]
    fn test_validate_rejects_inverted_ratings() {
        let config = parse(&["--min-rating", "500", "--max-rating", "100"]);

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("exceeds max rating"));
    }

    #[test]
    fn test_validate_rejects_bad_limits() {
        let config = parse(&["--default-limit", "200", "--max-limit", "100"]);
        assert!(config.validate().is_err());

        let config = parse(&["--max-limit", "0", "--default-limit", "0"]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_unparseable_port() {
        let argv = ["leaderboard", "--port", "not-a-port"];
        assert!(ServerConfig::try_parse_from(argv).is_err());
    }
}
