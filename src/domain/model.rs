use serde::{Deserialize, Serialize};

/// 已通過驗證的 32 位元有號整數，建立後不可變
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ValidatedNumber(i32);

impl ValidatedNumber {
    pub(crate) fn new(value: i32) -> Self {
        Self(value)
    }

    pub fn value(self) -> i32 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Property {
    Armstrong,
    Even,
    Odd,
}

/// 成功分類的回應，欄位順序即序列化順序
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub number: i32,
    pub is_prime: bool,
    pub is_perfect: bool,
    pub properties: Vec<Property>,
    pub digit_sum: u32,
    pub fun_fact: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResult {
    pub number: String,
    pub error: bool,
}

impl ErrorResult {
    pub fn new(raw: impl Into<String>) -> Self {
        Self {
            number: raw.into(),
            error: true,
        }
    }
}

/// 端點只有兩種結果: 分類成功 (200) 或輸入被拒 (400)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ClassifyResponse {
    Classified(ClassificationResult),
    Rejected(ErrorResult),
}

impl ClassifyResponse {
    pub fn is_success(&self) -> bool {
        matches!(self, ClassifyResponse::Classified(_))
    }
}
