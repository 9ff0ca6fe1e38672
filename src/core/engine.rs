use crate::core::classifier::{digit_sum, is_perfect, is_prime};
use crate::core::fun_fact::FunFactCache;
use crate::core::properties::compose_properties;
use crate::core::validator::validate;
use crate::core::FactSource;
use crate::domain::model::{ClassificationResult, ClassifyResponse, ErrorResult, ValidatedNumber};

pub struct NumberClassifier<S: FactSource> {
    facts: FunFactCache<S>,
}

impl<S: FactSource> NumberClassifier<S> {
    pub fn new(facts: FunFactCache<S>) -> Self {
        Self { facts }
    }

    /// 驗證 → 分類 → 取 fun fact → 組裝回應；驗證失敗時直接回傳錯誤結果
    pub async fn classify(&self, raw: &str) -> ClassifyResponse {
        match validate(raw) {
            Ok(number) => ClassifyResponse::Classified(self.assemble(number).await),
            Err(e) => {
                tracing::info!("Rejected input: {}", e);
                ClassifyResponse::Rejected(ErrorResult::new(e.raw()))
            }
        }
    }

    async fn assemble(&self, number: ValidatedNumber) -> ClassificationResult {
        let n = number.value();
        ClassificationResult {
            number: n,
            is_prime: is_prime(n),
            is_perfect: is_perfect(n),
            properties: compose_properties(n),
            digit_sum: digit_sum(n),
            fun_fact: self.facts.get_fun_fact(n).await,
        }
    }
}
