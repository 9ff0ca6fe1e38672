use crate::core::FactSource;
use crate::utils::error::{Result, ServiceError};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_FACT_SERVICE_URL: &str = "http://numbersapi.com";

#[derive(Debug, Deserialize)]
struct FactPayload {
    text: String,
}

/// numbersapi 的 `math` 類別查詢: `GET {base}/{n}/math?json`
#[derive(Debug, Clone)]
pub struct NumbersApiClient {
    client: Client,
    base_url: String,
}

impl NumbersApiClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(timeout)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn fact_url(&self, number: i32) -> String {
        format!("{}/{}/math?json", self.base_url, number)
    }
}

#[async_trait]
impl FactSource for NumbersApiClient {
    async fn fetch_fact(&self, number: i32) -> Result<String> {
        let url = self.fact_url(number);
        tracing::debug!("Making fact request to: {}", url);

        let response = self.client.get(&url).send().await?;
        tracing::debug!("Fact service response status: {}", response.status());

        let response = response.error_for_status()?;
        let body = response.bytes().await?;
        let payload: FactPayload = serde_json::from_slice(&body)?;

        if payload.text.trim().is_empty() {
            return Err(ServiceError::FactUnavailable {
                number,
                reason: "empty text field".to_string(),
            });
        }

        Ok(payload.text)
    }
}
