use crate::config::{
    validate_common, DEFAULT_CACHE_CAPACITY, DEFAULT_FACT_SERVICE_URL, DEFAULT_FACT_TIMEOUT_MS,
    DEFAULT_FALLBACK, DEFAULT_HOST, DEFAULT_PORT,
};
use crate::core::ConfigProvider;
use crate::utils::error::{Result, ServiceError};
use crate::utils::validation::Validate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;
use std::time::Duration;

static ENV_VAR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is a valid regex"));

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub server: ServerConfig,
    pub fun_fact: FunFactConfig,
    pub cache: CacheConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FunFactConfig {
    pub service_url: String,
    pub timeout_ms: u64,
    pub fallback: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    pub capacity: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl Default for FunFactConfig {
    fn default() -> Self {
        Self {
            service_url: DEFAULT_FACT_SERVICE_URL.to_string(),
            timeout_ms: DEFAULT_FACT_TIMEOUT_MS,
            fallback: DEFAULT_FALLBACK.to_string(),
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CACHE_CAPACITY,
        }
    }
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ServiceError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| ServiceError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${FACT_SERVICE_URL})，未定義的保留原字串
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR_PATTERN
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .to_string()
    }
}

impl ConfigProvider for TomlConfig {
    fn host(&self) -> &str {
        &self.server.host
    }

    fn port(&self) -> u16 {
        self.server.port
    }

    fn fact_service_url(&self) -> &str {
        &self.fun_fact.service_url
    }

    fn fact_timeout(&self) -> Duration {
        Duration::from_millis(self.fun_fact.timeout_ms)
    }

    fn fact_fallback(&self) -> &str {
        &self.fun_fact.fallback
    }

    fn cache_capacity(&self) -> u64 {
        self.cache.capacity
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_common(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_toml_config() {
        let toml_content = r#"
[server]
host = "127.0.0.1"
port = 3000

[fun_fact]
service_url = "http://facts.internal"
timeout_ms = 250
fallback = "No trivia today."

[cache]
capacity = 64
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.bind_address(), "127.0.0.1:3000");
        assert_eq!(config.fact_service_url(), "http://facts.internal");
        assert_eq!(config.fact_timeout(), Duration::from_millis(250));
        assert_eq!(config.fact_fallback(), "No trivia today.");
        assert_eq!(config.cache_capacity(), 64);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config = TomlConfig::from_toml_str("[server]\nport = 9090\n").unwrap();

        assert_eq!(config.host(), DEFAULT_HOST);
        assert_eq!(config.port(), 9090);
        assert_eq!(config.fact_service_url(), DEFAULT_FACT_SERVICE_URL);
        assert_eq!(config.fact_fallback(), DEFAULT_FALLBACK);
        assert_eq!(config.cache_capacity(), DEFAULT_CACHE_CAPACITY);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("NUMBER_CLASSIFIER_TEST_FACT_URL", "https://facts.example.com");

        let toml_content = r#"
[fun_fact]
service_url = "${NUMBER_CLASSIFIER_TEST_FACT_URL}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.fact_service_url(), "https://facts.example.com");

        std::env::remove_var("NUMBER_CLASSIFIER_TEST_FACT_URL");
    }

    #[test]
    fn test_unknown_env_var_left_verbatim() {
        let toml_content = r#"
[fun_fact]
service_url = "${NUMBER_CLASSIFIER_UNSET_VAR}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.fact_service_url(), "${NUMBER_CLASSIFIER_UNSET_VAR}");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let result = TomlConfig::from_toml_str("[server\nport = ");
        assert!(matches!(result, Err(ServiceError::ConfigError { .. })));
    }

    #[test]
    fn test_config_validation() {
        let config = TomlConfig::from_toml_str("[fun_fact]\ntimeout_ms = 120000\n").unwrap();
        assert!(config.validate().is_err());

        let config = TomlConfig::from_toml_str("[cache]\ncapacity = 0\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[server]\nhost = \"localhost\"\nport = 8181\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.bind_address(), "localhost:8181");
    }
}
