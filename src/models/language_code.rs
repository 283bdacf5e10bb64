// Language code model - 저장소에 기록되는 언어 코드
//
// 저장소는 값을 검증하지 않는 불투명 문자열로 취급한다.
// 실제 사용 값은 "pt", "en", "es" 세 가지.

use serde::{Deserialize, Serialize};
use std::fmt;

/// 언어 코드 (예: "pt", "en", "es")
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LanguageCode(String);

impl LanguageCode {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LanguageCode {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for LanguageCode {
    fn from(s: String) -> Self {
        Self(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_code_is_opaque() {
        // 지원하지 않는 코드도 그대로 보존
        let code = LanguageCode::from("fr");
        assert_eq!(code.as_str(), "fr");
        assert_eq!(code.to_string(), "fr");
    }

    #[test]
    fn test_language_code_serializes_as_plain_string() {
        #[derive(Serialize)]
        struct Wrapper {
            language: LanguageCode,
        }
        let out = toml::to_string(&Wrapper {
            language: "es".into(),
        })
        .unwrap();
        assert_eq!(out.trim(), "language = \"es\"");
    }
}
