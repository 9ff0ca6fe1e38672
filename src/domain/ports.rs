use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// 外部 fun fact 來源，例如 numbersapi.com
#[async_trait]
pub trait FactSource: Send + Sync {
    async fn fetch_fact(&self, number: i32) -> Result<String>;
}

pub trait ConfigProvider: Send + Sync {
    fn host(&self) -> &str;
    fn port(&self) -> u16;
    fn fact_service_url(&self) -> &str;
    fn fact_timeout(&self) -> Duration;
    fn fact_fallback(&self) -> &str;
    fn cache_capacity(&self) -> u64;

    fn bind_address(&self) -> String {
        format!("{}:{}", self.host(), self.port())
    }
}
