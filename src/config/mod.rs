pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_number, validate_range, validate_url, Validate,
};
use std::time::Duration;

#[cfg(feature = "cli")]
use clap::Parser;
use serde::{Deserialize, Serialize};

pub use crate::adapters::http::DEFAULT_FACT_SERVICE_URL;
pub use crate::core::fun_fact::DEFAULT_FALLBACK;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_FACT_TIMEOUT_MS: u64 = 500;
pub const DEFAULT_CACHE_CAPACITY: u64 = 10_000;
pub const MAX_FACT_TIMEOUT_MS: u64 = 60_000;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(Parser))]
#[cfg_attr(feature = "cli", command(name = "number-classifier"))]
#[cfg_attr(
    feature = "cli",
    command(about = "HTTP service that classifies integers and attaches a math fun fact")
)]
pub struct CliConfig {
    #[cfg_attr(feature = "cli", arg(long, default_value = DEFAULT_HOST))]
    pub host: String,

    #[cfg_attr(feature = "cli", arg(long, default_value_t = DEFAULT_PORT))]
    pub port: u16,

    #[cfg_attr(feature = "cli", arg(long, default_value = DEFAULT_FACT_SERVICE_URL))]
    pub fact_service_url: String,

    #[cfg_attr(feature = "cli", arg(long, default_value_t = DEFAULT_FACT_TIMEOUT_MS))]
    pub fact_timeout_ms: u64,

    #[cfg_attr(feature = "cli", arg(long, default_value_t = DEFAULT_CACHE_CAPACITY))]
    pub cache_capacity: u64,

    #[cfg_attr(
        feature = "cli",
        arg(long, help = "TOML config file; overrides the flags above")
    )]
    pub config: Option<String>,

    #[cfg_attr(feature = "cli", arg(long, help = "Enable verbose output"))]
    pub verbose: bool,

    #[cfg_attr(feature = "cli", arg(long, help = "Emit logs as JSON"))]
    pub json_logs: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            fact_service_url: DEFAULT_FACT_SERVICE_URL.to_string(),
            fact_timeout_ms: DEFAULT_FACT_TIMEOUT_MS,
            cache_capacity: DEFAULT_CACHE_CAPACITY,
            config: None,
            verbose: false,
            json_logs: false,
        }
    }
}

impl ConfigProvider for CliConfig {
    fn host(&self) -> &str {
        &self.host
    }

    fn port(&self) -> u16 {
        self.port
    }

    fn fact_service_url(&self) -> &str {
        &self.fact_service_url
    }

    fn fact_timeout(&self) -> Duration {
        Duration::from_millis(self.fact_timeout_ms)
    }

    fn fact_fallback(&self) -> &str {
        DEFAULT_FALLBACK
    }

    fn cache_capacity(&self) -> u64 {
        self.cache_capacity
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_common(self)
    }
}

/// CLI 與 TOML 共用的檢查
pub(crate) fn validate_common(config: &impl ConfigProvider) -> Result<()> {
    validate_non_empty_string("host", config.host())?;
    validate_url("fact_service_url", config.fact_service_url())?;
    validate_range(
        "fact_timeout_ms",
        config.fact_timeout().as_millis() as u64,
        1,
        MAX_FACT_TIMEOUT_MS,
    )?;
    validate_positive_number("cache_capacity", config.cache_capacity(), 1)?;
    validate_non_empty_string("fact_fallback", config.fact_fallback())?;
    Ok(())
}
