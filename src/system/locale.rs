// Locale adapter - 프로세스 전역 로케일 관리
//
// 애플리케이션 로케일은 프로세스 전역 상태이며 LocaleManager를 통해서만 변경한다.

use crate::utils::error::{IdiomasError, Result};
use std::env;
use std::sync::{LazyLock, RwLock};

/// 현재 적용된 애플리케이션 로케일 (None = 시스템 기본값)
static APP_LOCALE: LazyLock<RwLock<Option<String>>> = LazyLock::new(|| RwLock::new(None));

/// 플랫폼 로케일 적용 인터페이스
pub trait LocaleManager: Send + Sync {
    /// 언어 태그를 애플리케이션 로케일로 적용
    ///
    /// 빈 문자열은 시스템 기본값으로 되돌린다.
    fn apply_locale(&self, tag: &str) -> Result<()>;

    /// 현재 적용된 로케일 (None = 시스템 기본값)
    fn current_locale(&self) -> Option<String>;
}

/// 프로세스 전역 슬롯에 로케일을 기록하는 기본 구현
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessLocale;

impl ProcessLocale {
    pub fn new() -> Self {
        Self
    }
}

impl LocaleManager for ProcessLocale {
    fn apply_locale(&self, tag: &str) -> Result<()> {
        let tag = tag.trim();
        let value = if tag.is_empty() {
            None
        } else if is_valid_tag(tag) {
            Some(tag.to_string())
        } else {
            return Err(IdiomasError::Locale(tag.to_string()));
        };

        let mut slot = APP_LOCALE
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if *slot != value {
            tracing::info!(locale = ?value, "application locale changed");
        }
        *slot = value;
        Ok(())
    }

    fn current_locale(&self) -> Option<String> {
        APP_LOCALE
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

/// 환경변수에서 시스템 로케일 감지 (예: "pt_BR.UTF-8" → "pt")
pub fn system_language() -> Option<String> {
    ["LC_ALL", "LC_MESSAGES", "LANG"]
        .iter()
        .filter_map(|key| env::var(key).ok())
        .find(|value| !value.trim().is_empty())
        .and_then(|value| primary_subtag(&value))
}

/// 로케일 문자열에서 기본 언어 부분 추출
pub fn primary_subtag(locale: &str) -> Option<String> {
    let primary = locale
        .split(['_', '-', '.', '@'])
        .next()
        .unwrap_or("")
        .trim()
        .to_ascii_lowercase();
    if primary.is_empty() || primary == "c" || primary == "posix" {
        None
    } else {
        Some(primary)
    }
}

/// 단순 BCP-47 형식 검사: 2~8자 알파벳 + (`-` 1~8자 영숫자)*
fn is_valid_tag(tag: &str) -> bool {
    let mut parts = tag.split('-');
    let Some(primary) = parts.next() else {
        return false;
    };
    if !(2..=8).contains(&primary.len()) || !primary.chars().all(|c| c.is_ascii_alphabetic()) {
        return false;
    }
    parts.all(|part| {
        (1..=8).contains(&part.len()) && part.chars().all(|c| c.is_ascii_alphanumeric())
    })
}
