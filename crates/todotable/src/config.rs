use std::env;

use todotable_auth::AuthConfig;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// DynamoDB table holding every row (default: "todotable")
    /// Note: Only used when the `dynamodb` feature is enabled.
    #[allow(dead_code)]
    pub dynamodb_table_name: String,
    /// Argon2 memory cost in KiB (default: 65,536)
    pub argon2_memory_kib: u32,
    /// Argon2 iteration count (default: 3)
    pub argon2_iterations: u32,
    /// Argon2 lanes (default: 1)
    pub argon2_parallelism: u32,
    /// Session and cookie settings
    pub auth: AuthConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dynamodb_table_name: "todotable".to_string(),
            argon2_memory_kib: todotable_auth::DEFAULT_MEMORY_KIB,
            argon2_iterations: todotable_auth::DEFAULT_ITERATIONS,
            argon2_parallelism: todotable_auth::DEFAULT_PARALLELISM,
            auth: AuthConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `DYNAMODB_TABLE_NAME` - DynamoDB table name (default: "todotable")
    /// - `ARGON2_MEMORY_KIB` - Argon2 memory cost (default: 65,536)
    /// - `ARGON2_ITERATIONS` - Argon2 iterations (default: 3)
    /// - `ARGON2_PARALLELISM` - Argon2 lanes (default: 1)
    ///
    /// Session settings are read by [`AuthConfig::from_env`].
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            dynamodb_table_name: env::var("DYNAMODB_TABLE_NAME")
                .unwrap_or(defaults.dynamodb_table_name),
            argon2_memory_kib: parse_var("ARGON2_MEMORY_KIB").unwrap_or(defaults.argon2_memory_kib),
            argon2_iterations: parse_var("ARGON2_ITERATIONS").unwrap_or(defaults.argon2_iterations),
            argon2_parallelism: parse_var("ARGON2_PARALLELISM")
                .unwrap_or(defaults.argon2_parallelism),
            auth: AuthConfig::from_env(),
        }
    }
}

fn parse_var(name: &str) -> Option<u32> {
    env::var(name).ok().and_then(|v| v.parse().ok())
}
