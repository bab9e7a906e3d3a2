//! Application configuration management.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Database configuration.
    pub database: DatabaseConfig,
    /// Balance engine configuration.
    #[serde(default)]
    pub engine: EngineConfig,
}

/// Database configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Database connection URL.
    pub url: String,
    /// Maximum number of connections in the pool.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Minimum number of connections in the pool.
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    1
}

/// Balance engine tunables.
///
/// These control the summary cache and the credit classifier. The
/// defaults match production behaviour; deployments override them via
/// `KHATA__ENGINE__*` environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    /// Time-to-live for cached balance summaries, in seconds.
    #[serde(default = "default_cache_ttl")]
    pub cache_ttl_secs: u64,
    /// Maximum number of cached balance summaries.
    #[serde(default = "default_cache_capacity")]
    pub cache_capacity: u64,
    /// Timeout for ledger store and invoice queries, in seconds.
    #[serde(default = "default_store_timeout")]
    pub store_timeout_secs: u64,
    /// Fraction of the credit limit at which a customer moves from
    /// `Available` to `Limited` (0 < threshold <= 1).
    #[serde(default = "default_headroom_threshold")]
    pub credit_headroom_threshold: Decimal,
}

fn default_cache_ttl() -> u64 {
    300 // 5 minutes
}

fn default_cache_capacity() -> u64 {
    10_000
}

fn default_store_timeout() -> u64 {
    8
}

fn default_headroom_threshold() -> Decimal {
    Decimal::new(8, 1) // 0.8
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            cache_ttl_secs: default_cache_ttl(),
            cache_capacity: default_cache_capacity(),
            store_timeout_secs: default_store_timeout(),
            credit_headroom_threshold: default_headroom_threshold(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        // Load .env before reading RUN_MODE or the KHATA overrides.
        dotenvy::dotenv().ok();

        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("KHATA").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
