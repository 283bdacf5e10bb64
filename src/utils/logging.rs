// Logging - tracing 초기화
//
// TUI가 터미널을 점유하므로 로그는 파일로만 기록한다.

use crate::utils::settings_path;
use std::fs;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// 로그 파일 이름
pub const LOG_FILE_NAME: &str = "idiomas.log";

/// 파일 로거 초기화
///
/// 반환된 guard는 프로그램 종료까지 유지해야 버퍼가 flush된다.
/// 로그 디렉토리를 만들 수 없으면 로깅 없이 계속 진행한다.
pub fn init() -> Option<WorkerGuard> {
    // RUST_LOG 미설정 시 info
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let log_dir = settings_path::log_dir().ok()?;
    fs::create_dir_all(&log_dir).ok()?;

    let file_appender = tracing_appender::rolling::never(&log_dir, LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_ansi(false)
        .with_writer(non_blocking)
        .try_init()
        .ok()?;
    Some(guard)
}
