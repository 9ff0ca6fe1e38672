use crate::core::FactSource;
use crate::utils::error::{Result, ServiceError};
use moka::future::Cache;
use std::time::Duration;

pub const DEFAULT_FALLBACK: &str = "No fun fact found.";

/// Memoizing front for a [`FactSource`].
///
/// `get_fun_fact` never fails: any error or timeout from the source yields
/// the fallback string, and failures are never cached. Concurrent misses on
/// the same key may each hit the source; the last insert wins.
pub struct FunFactCache<S: FactSource> {
    source: S,
    cache: Cache<i32, String>,
    timeout: Duration,
    fallback: String,
}

impl<S: FactSource> FunFactCache<S> {
    pub fn new(source: S, capacity: u64, timeout: Duration) -> Self {
        Self::with_fallback(source, capacity, timeout, DEFAULT_FALLBACK)
    }

    pub fn with_fallback(
        source: S,
        capacity: u64,
        timeout: Duration,
        fallback: impl Into<String>,
    ) -> Self {
        Self {
            source,
            cache: Cache::builder().max_capacity(capacity).build(),
            timeout,
            fallback: fallback.into(),
        }
    }

    pub async fn get_fun_fact(&self, number: i32) -> String {
        if let Some(fact) = self.cache.get(&number).await {
            tracing::debug!("Fun fact cache hit for {}", number);
            return fact;
        }

        tracing::debug!("Fun fact cache miss for {}, querying source", number);
        match self.fetch_bounded(number).await {
            Ok(fact) => {
                self.cache.insert(number, fact.clone()).await;
                fact
            }
            Err(e) => {
                tracing::warn!("⚠️ {}; using fallback", e);
                self.fallback.clone()
            }
        }
    }

    async fn fetch_bounded(&self, number: i32) -> Result<String> {
        match tokio::time::timeout(self.timeout, self.source.fetch_fact(number)).await {
            Ok(result) => result,
            Err(_) => Err(ServiceError::FactTimeout {
                number,
                budget_ms: self.timeout.as_millis(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tokio::sync::Mutex;

    enum Scripted {
        Fact(&'static str),
        Fail,
        Hang,
    }

    #[derive(Clone)]
    struct ScriptedSource {
        script: Arc<Mutex<VecDeque<Scripted>>>,
        calls: Arc<AtomicUsize>,
    }

    impl ScriptedSource {
        fn new(script: Vec<Scripted>) -> Self {
            Self {
                script: Arc::new(Mutex::new(script.into())),
                calls: Arc::new(AtomicUsize::new(0)),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl FactSource for ScriptedSource {
        async fn fetch_fact(&self, number: i32) -> Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let next = self.script.lock().await.pop_front();
            match next {
                Some(Scripted::Fact(text)) => Ok(text.to_string()),
                Some(Scripted::Hang) => {
                    tokio::time::sleep(Duration::from_secs(60)).await;
                    Ok("too late".to_string())
                }
                Some(Scripted::Fail) | None => Err(ServiceError::FactUnavailable {
                    number,
                    reason: "scripted failure".to_string(),
                }),
            }
        }
    }

    fn cache_over(source: ScriptedSource) -> FunFactCache<ScriptedSource> {
        FunFactCache::new(source, 100, Duration::from_millis(100))
    }

    #[tokio::test]
    async fn test_failure_is_not_cached() {
        let source = ScriptedSource::new(vec![
            Scripted::Fail,
            Scripted::Fact("28 is a perfect number."),
        ]);
        let cache = cache_over(source.clone());

        assert_eq!(cache.get_fun_fact(28).await, DEFAULT_FALLBACK);
        assert_eq!(source.calls(), 1);

        assert_eq!(cache.get_fun_fact(28).await, "28 is a perfect number.");
        assert_eq!(source.calls(), 2);

        // 第三次直接命中快取
        assert_eq!(cache.get_fun_fact(28).await, "28 is a perfect number.");
        assert_eq!(source.calls(), 2);
    }

    #[tokio::test]
    async fn test_keys_are_independent() {
        let source = ScriptedSource::new(vec![Scripted::Fact("six"), Scripted::Fact("seven")]);
        let cache = cache_over(source.clone());

        assert_eq!(cache.get_fun_fact(6).await, "six");
        assert_eq!(cache.get_fun_fact(7).await, "seven");
        assert_eq!(cache.get_fun_fact(6).await, "six");
        assert_eq!(source.calls(), 2);
    }

    #[tokio::test]
    async fn test_timeout_yields_fallback_and_retries_later() {
        let source = ScriptedSource::new(vec![Scripted::Hang, Scripted::Fact("retried")]);
        let cache = cache_over(source.clone());

        assert_eq!(cache.get_fun_fact(1).await, DEFAULT_FALLBACK);
        assert_eq!(cache.get_fun_fact(1).await, "retried");
        assert_eq!(source.calls(), 2);
    }

    #[tokio::test]
    async fn test_custom_fallback() {
        let source = ScriptedSource::new(vec![]);
        let cache =
            FunFactCache::with_fallback(source, 10, Duration::from_millis(50), "nothing today");

        assert_eq!(cache.get_fun_fact(5).await, "nothing today");
        assert_eq!(cache.get_fun_fact(6).await, "nothing today");
    }
}
