// Preference store - 언어 설정 저장소
//
// 고정 키 하나(`language`)에 문자열 값을 영속 저장하고,
// 구독자에게 현재 값을 먼저 재생한 뒤 이후 커밋된 값을 커밋 순서대로 전달한다.

use crate::models::LanguageCode;
use crate::utils::error::{IdiomasError, Result};
use crate::utils::settings_path;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::sync::broadcast::{self, error::RecvError};

/// 설정 파일 포맷 버전
const SETTINGS_VERSION: u32 = 1;
/// 구독 채널 버퍼 크기
const CHANNEL_CAPACITY: usize = 64;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct PersistedSettings {
    version: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    language: Option<LanguageCode>,
}

struct Shared {
    path: PathBuf,
    /// 마지막으로 커밋된 값. 구독 등록과 발행은 이 락 안에서 수행
    slot: Mutex<Option<LanguageCode>>,
    tx: broadcast::Sender<Option<LanguageCode>>,
    /// 쓰기 직렬화
    writer: tokio::sync::Mutex<()>,
}

/// 언어 설정 저장소
///
/// 복제본은 같은 슬롯을 공유한다. 모든 복제본이 drop되면 구독 스트림이 종료된다.
#[derive(Clone)]
pub struct PreferenceStore {
    shared: Arc<Shared>,
}

impl std::fmt::Debug for PreferenceStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PreferenceStore")
            .field("path", &self.shared.path)
            .field("current", &self.current())
            .finish()
    }
}

impl PreferenceStore {
    /// 주어진 경로의 설정 파일로 저장소 열기
    ///
    /// 읽기 실패(파일 없음, 손상, 버전 불일치)는 "설정 없음"으로 취급한다.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let initial = load_language(&path);
        let (tx, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self {
            shared: Arc::new(Shared {
                path,
                slot: Mutex::new(initial),
                tx,
                writer: tokio::sync::Mutex::new(()),
            }),
        }
    }

    /// 환경 설정에 따른 기본 경로로 저장소 열기
    pub fn from_env() -> Result<Self> {
        let path = settings_path::settings_file()?;
        Ok(Self::open(path))
    }

    /// 설정 파일 경로
    pub fn path(&self) -> &Path {
        &self.shared.path
    }

    /// 현재 저장된 값
    pub fn current(&self) -> Option<LanguageCode> {
        self.lock_slot().clone()
    }

    /// 현재 값을 먼저 내보내고 이후 모든 쓰기를 전달하는 구독 생성
    pub fn observe(&self) -> Subscription {
        let slot = self.lock_slot();
        let rx = self.shared.tx.subscribe();
        Subscription {
            replay: Some(slot.clone()),
            rx,
        }
    }

    /// 활성 구독 수
    #[cfg(test)]
    pub fn subscriber_count(&self) -> usize {
        self.shared.tx.receiver_count()
    }

    /// 언어 코드 저장
    ///
    /// 같은 값이면 디스크 쓰기와 발행 모두 생략한다.
    /// 커밋이 성공한 뒤에만 메모리 값을 갱신하고 구독자에게 발행한다.
    pub async fn save(&self, code: LanguageCode) -> Result<()> {
        let _writer = self.shared.writer.lock().await;

        if self.current().as_ref() == Some(&code) {
            tracing::debug!(code = %code, "language unchanged, skipping write");
            return Ok(());
        }

        let data = toml::to_string_pretty(&PersistedSettings {
            version: SETTINGS_VERSION,
            language: Some(code.clone()),
        })?;

        let path = self.shared.path.clone();
        let commit = tokio::task::spawn_blocking(move || write_atomically(&path, &data)).await;
        let outcome = match commit {
            Ok(result) => result,
            Err(join_err) => Err(io::Error::other(join_err)),
        };
        if let Err(source) = outcome {
            tracing::error!(
                path = %self.shared.path.display(),
                error = %source,
                "failed to persist language preference"
            );
            return Err(IdiomasError::Storage {
                path: self.shared.path.clone(),
                source,
            });
        }

        tracing::info!(code = %code, "language preference saved");
        self.publish(Some(code));
        Ok(())
    }

    fn publish(&self, value: Option<LanguageCode>) {
        let mut slot = self.lock_slot();
        *slot = value.clone();
        // 구독자가 없으면 Err - 무시
        let _ = self.shared.tx.send(value);
    }

    fn lock_slot(&self) -> MutexGuard<'_, Option<LanguageCode>> {
        self.shared
            .slot
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// 저장소 구독
///
/// drop하면 구독이 해제되고 더 이상 값이 전달되지 않는다.
#[derive(Debug)]
pub struct Subscription {
    replay: Option<Option<LanguageCode>>,
    rx: broadcast::Receiver<Option<LanguageCode>>,
}

impl Subscription {
    /// 다음 값 대기
    ///
    /// 바깥 `None`은 저장소가 사라져 스트림이 끝났음을 뜻한다.
    /// 안쪽 `None`은 아직 저장된 언어가 없음을 뜻한다.
    pub async fn next(&mut self) -> Option<Option<LanguageCode>> {
        if let Some(value) = self.replay.take() {
            return Some(value);
        }
        loop {
            match self.rx.recv().await {
                Ok(value) => return Some(value),
                Err(RecvError::Lagged(skipped)) => {
                    // 순서는 유지하고 놓친 중간 값만 건너뜀
                    tracing::warn!(skipped, "preference subscriber lagged behind");
                }
                Err(RecvError::Closed) => return None,
            }
        }
    }
}

fn load_language(path: &Path) -> Option<LanguageCode> {
    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no settings file yet");
            return None;
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "cannot read settings file");
            return None;
        }
    };

    let parsed: PersistedSettings = match toml::from_str(&data) {
        Ok(parsed) => parsed,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "malformed settings file");
            return None;
        }
    };
    if parsed.version != SETTINGS_VERSION {
        tracing::warn!(version = parsed.version, "unsupported settings version");
        return None;
    }
    parsed.language.filter(|code| !code.as_str().is_empty())
}

/// 임시 파일에 쓴 뒤 rename으로 교체
fn write_atomically(path: &Path, data: &str) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let tmp = path.with_extension("toml.tmp");
    fs::write(&tmp, data)?;
    fs::rename(&tmp, path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tempfile::TempDir;

    fn settings_in(temp: &TempDir) -> PathBuf {
        temp.path().join("idiomas").join("settings.toml")
    }

    async fn expect_no_emission(sub: &mut Subscription) {
        let result = tokio::time::timeout(Duration::from_millis(50), sub.next()).await;
        assert!(result.is_err(), "unexpected emission: {:?}", result);
    }

    #[tokio::test]
    async fn test_observe_replays_absent_value() {
        let temp = TempDir::new().unwrap();
        let store = PreferenceStore::open(settings_in(&temp));

        let mut sub = store.observe();
        assert_eq!(sub.next().await, Some(None));
    }

    #[tokio::test]
    async fn test_save_then_fresh_observe_for_each_language() {
        for code in ["pt", "en", "es"] {
            let temp = TempDir::new().unwrap();
            let store = PreferenceStore::open(settings_in(&temp));

            store.save(code.into()).await.unwrap();

            let mut sub = store.observe();
            assert_eq!(sub.next().await, Some(Some(LanguageCode::from(code))));
        }
    }

    #[tokio::test]
    async fn test_save_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let store = PreferenceStore::open(settings_in(&temp));
        let mut sub = store.observe();
        assert_eq!(sub.next().await, Some(None));

        store.save("en".into()).await.unwrap();
        store.save("en".into()).await.unwrap();

        assert_eq!(sub.next().await, Some(Some("en".into())));
        expect_no_emission(&mut sub).await;
        assert_eq!(store.current(), Some("en".into()));
    }

    #[tokio::test]
    async fn test_sequential_writes_observed_in_commit_order() {
        let temp = TempDir::new().unwrap();
        let store = PreferenceStore::open(settings_in(&temp));
        let mut sub = store.observe();

        store.save("pt".into()).await.unwrap();
        store.save("en".into()).await.unwrap();
        store.save("es".into()).await.unwrap();

        assert_eq!(sub.next().await, Some(None));
        assert_eq!(sub.next().await, Some(Some("pt".into())));
        assert_eq!(sub.next().await, Some(Some("en".into())));
        assert_eq!(sub.next().await, Some(Some("es".into())));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_concurrent_writes_are_serialized() {
        let temp = TempDir::new().unwrap();
        let store = PreferenceStore::open(settings_in(&temp));
        let mut sub = store.observe();
        assert_eq!(sub.next().await, Some(None));

        let handles: Vec<_> = ["pt", "en", "es", "en", "pt"]
            .into_iter()
            .map(|code| {
                let store = store.clone();
                tokio::spawn(async move { store.save(code.into()).await })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        // 마지막으로 관찰된 값 == 메모리 값 == 디스크 값
        let mut last = None;
        while let Ok(Some(value)) =
            tokio::time::timeout(Duration::from_millis(50), sub.next()).await
        {
            last = value;
        }
        assert_eq!(last, store.current());
        let reopened = PreferenceStore::open(store.path());
        assert_eq!(reopened.current(), store.current());
    }

    #[tokio::test]
    async fn test_lagging_subscriber_skips_but_keeps_order() {
        let temp = TempDir::new().unwrap();
        let store = PreferenceStore::open(settings_in(&temp));
        let mut sub = store.observe();

        let total = CHANNEL_CAPACITY + 36;
        for i in 0..total {
            store.save(format!("c{}", i).into()).await.unwrap();
        }

        assert_eq!(sub.next().await, Some(None));
        let mut received = Vec::new();
        while let Ok(Some(value)) =
            tokio::time::timeout(Duration::from_millis(50), sub.next()).await
        {
            let index: usize = value.unwrap().as_str()[1..].parse().unwrap();
            received.push(index);
        }

        // 버퍼보다 밀린 값은 건너뛰지만 순서는 유지
        assert!(received.len() < total);
        assert!(received.windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(received.last(), Some(&(total - 1)));
        assert_eq!(store.current(), Some(format!("c{}", total - 1).into()));
    }

    #[tokio::test]
    async fn test_value_survives_restart() {
        let temp = TempDir::new().unwrap();
        let path = settings_in(&temp);
        {
            let store = PreferenceStore::open(&path);
            store.save("es".into()).await.unwrap();
        }

        let reopened = PreferenceStore::open(&path);
        assert_eq!(reopened.current(), Some("es".into()));
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("language = \"es\""));
        assert!(content.contains("version = 1"));
    }

    #[tokio::test]
    async fn test_write_failure_is_reported_and_state_unchanged() {
        let temp = TempDir::new().unwrap();
        // 부모 경로가 일반 파일이라 디렉토리 생성 불가
        let blocker = temp.path().join("blocker");
        fs::write(&blocker, "not a directory").unwrap();
        let store = PreferenceStore::open(blocker.join("settings.toml"));
        let mut sub = store.observe();
        assert_eq!(sub.next().await, Some(None));

        let result = store.save("en".into()).await;

        assert!(matches!(result, Err(IdiomasError::Storage { .. })));
        assert_eq!(store.current(), None);
        expect_no_emission(&mut sub).await;
    }

    #[test]
    fn test_corrupt_file_reads_as_absent() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("settings.toml");
        fs::write(&path, "language = [not valid").unwrap();

        let store = PreferenceStore::open(&path);
        assert_eq!(store.current(), None);
    }

    #[test]
    fn test_version_mismatch_reads_as_absent() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("settings.toml");
        fs::write(&path, "version = 99\nlanguage = \"en\"\n").unwrap();

        let store = PreferenceStore::open(&path);
        assert_eq!(store.current(), None);
    }

    #[test]
    fn test_empty_language_reads_as_absent() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("settings.toml");
        fs::write(&path, "version = 1\nlanguage = \"\"\n").unwrap();

        let store = PreferenceStore::open(&path);
        assert_eq!(store.current(), None);
    }

    #[test]
    fn test_unknown_code_is_stored_verbatim() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("settings.toml");
        fs::write(&path, "version = 1\nlanguage = \"fr\"\n").unwrap();

        let store = PreferenceStore::open(&path);
        assert_eq!(store.current(), Some("fr".into()));
    }

    #[tokio::test]
    async fn test_dropped_subscription_is_released() {
        let temp = TempDir::new().unwrap();
        let store = PreferenceStore::open(settings_in(&temp));
        let sub = store.observe();
        assert_eq!(store.subscriber_count(), 1);

        drop(sub);
        assert_eq!(store.subscriber_count(), 0);
        store.save("pt".into()).await.unwrap();
        assert_eq!(store.current(), Some("pt".into()));
    }

    #[tokio::test]
    async fn test_stream_ends_when_store_dropped() {
        let temp = TempDir::new().unwrap();
        let store = PreferenceStore::open(settings_in(&temp));
        let mut sub = store.observe();
        assert_eq!(sub.next().await, Some(None));

        drop(store);
        assert_eq!(sub.next().await, None);
    }
}
