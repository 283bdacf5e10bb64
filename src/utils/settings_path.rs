// Settings path resolution - 설정/로그 파일 경로 결정
//
// 우선순위: 환경변수 override → OS 설정 디렉토리 → $HOME/.idiomas

use crate::utils::error::{IdiomasError, Result};
use std::env;
use std::path::PathBuf;

/// 애플리케이션 디렉토리 이름
pub const APP_DIR_NAME: &str = "idiomas";
/// 설정 파일 이름
pub const SETTINGS_FILE_NAME: &str = "settings.toml";
/// 설정 파일 경로 override 환경변수
pub const SETTINGS_FILE_ENV: &str = "IDIOMAS_SETTINGS_FILE";
/// 로그 디렉토리 override 환경변수
pub const LOG_DIR_ENV: &str = "IDIOMAS_LOG_DIR";

fn env_path(key: &str) -> Option<PathBuf> {
    let value = env::var(key).ok()?;
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(PathBuf::from(trimmed))
}

fn home_fallback() -> Option<PathBuf> {
    env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(format!(".{}", APP_DIR_NAME)))
}

/// 언어 설정 파일 경로
pub fn settings_file() -> Result<PathBuf> {
    if let Some(custom) = env_path(SETTINGS_FILE_ENV) {
        return Ok(custom);
    }
    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR_NAME))
        .or_else(home_fallback)
        .map(|dir| dir.join(SETTINGS_FILE_NAME))
        .ok_or_else(|| IdiomasError::Config("cannot resolve a configuration directory".into()))
}

/// 로그 디렉토리 경로
pub fn log_dir() -> Result<PathBuf> {
    if let Some(custom) = env_path(LOG_DIR_ENV) {
        return Ok(custom);
    }
    dirs::data_dir()
        .map(|dir| dir.join(APP_DIR_NAME))
        .or_else(home_fallback)
        .map(|dir| dir.join("logs"))
        .ok_or_else(|| IdiomasError::Config("cannot resolve a data directory".into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_file_name() {
        // 환경에 따라 디렉토리는 달라지지만 파일 이름은 고정
        if env::var_os(SETTINGS_FILE_ENV).is_none() {
            if let Ok(path) = settings_file() {
                assert!(path.ends_with(SETTINGS_FILE_NAME));
            }
        }
    }

    #[test]
    fn test_env_path_ignores_blank_values() {
        assert_eq!(env_path("IDIOMAS_TEST_UNSET_VARIABLE_FOR_PATHS"), None);
    }
}
