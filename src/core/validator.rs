use crate::domain::model::ValidatedNumber;
use crate::utils::error::InputError;
use regex::Regex;
use std::num::IntErrorKind;
use std::sync::LazyLock;

// 只接受 ASCII 數字，`\d` 在 regex crate 會匹配 Unicode 數字
static NUMBER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?[0-9]+$").expect("number pattern is a valid regex"));

/// 將原始字串驗證為 32 位元有號整數
///
/// 前後空白會被修剪；不接受 `+` 前綴、小數或科學記號。
pub fn validate(raw: &str) -> Result<ValidatedNumber, InputError> {
    let candidate = raw.trim();

    if !NUMBER_PATTERN.is_match(candidate) {
        return Err(InputError::InvalidFormat {
            raw: raw.to_string(),
        });
    }

    match candidate.parse::<i32>() {
        Ok(value) => Ok(ValidatedNumber::new(value)),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => Err(InputError::OutOfRange {
                raw: raw.to_string(),
            }),
            _ => Err(InputError::InvalidFormat {
                raw: raw.to_string(),
            }),
        },
    }
}
