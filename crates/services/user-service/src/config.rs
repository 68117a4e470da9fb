//! User service configuration.

use std::env;

use common::DatabaseConfig;
use domain::{DEFAULT_BCRYPT_COST, MAX_BCRYPT_COST, MIN_BCRYPT_COST};

/// User service configuration.
#[derive(Debug, Clone)]
pub struct UserServiceConfig {
    /// Database connection settings
    pub database: DatabaseConfig,
    /// bcrypt cost factor for new password hashes
    pub bcrypt_cost: u32,
}

impl UserServiceConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let defaults = Self::default();

        Self {
            database: DatabaseConfig {
                url: env::var("USER_SERVICE_DATABASE_URL")
                    .or_else(|_| env::var("DATABASE_URL"))
                    .unwrap_or(defaults.database.url),
                max_connections: parse_var("DATABASE_MAX_CONNECTIONS")
                    .unwrap_or(defaults.database.max_connections),
                min_connections: parse_var("DATABASE_MIN_CONNECTIONS")
                    .unwrap_or(defaults.database.min_connections),
            },
            bcrypt_cost: checked_bcrypt_cost(parse_var("BCRYPT_COST")),
        }
    }
}

impl Default for UserServiceConfig {
    fn default() -> Self {
        Self {
            database: DatabaseConfig::default(),
            bcrypt_cost: DEFAULT_BCRYPT_COST,
        }
    }
}

fn parse_var<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|v| v.parse().ok())
}

/// Keep a configured cost only if bcrypt accepts it.
fn checked_bcrypt_cost(configured: Option<u32>) -> u32 {
    match configured {
        Some(cost) if (MIN_BCRYPT_COST..=MAX_BCRYPT_COST).contains(&cost) => cost,
        Some(cost) => {
            tracing::warn!(
                cost,
                "BCRYPT_COST outside {}..={}, using default {}",
                MIN_BCRYPT_COST,
                MAX_BCRYPT_COST,
                DEFAULT_BCRYPT_COST
            );
            DEFAULT_BCRYPT_COST
        }
        None => DEFAULT_BCRYPT_COST,
    }
}
