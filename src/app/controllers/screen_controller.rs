//! 화면 컨트롤러 - 저장소 상태를 로케일과 화면에 연결
//!
//! 상태 전이:
//! - `Uninitialized` → 첫 발행 → `Synced(code)`
//! - `Synced(code)` → `select(new)` → 저장소 재발행 → `Synced(new)`
//! - `teardown()` → `Detached` (이후 로케일 적용 없음)
//!
//! `Synced`로 들어갈 때마다 `LocaleManager::apply_locale`을 호출한다.

use crate::models::LanguageCode;
use crate::system::{LocaleManager, PreferenceStore};
use crate::ui::Language;
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// 화면 상태
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenState {
    Uninitialized,
    Synced(Option<LanguageCode>),
    Detached,
}

/// UI 루프에 전달되는 이벤트
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenEvent {
    /// 저장소 값과 동기화됨. 로케일 적용 실패 시 `locale_error`
    Synced {
        code: Option<LanguageCode>,
        locale_error: Option<String>,
    },
    /// 저장 실패 (상태는 바뀌지 않음)
    SaveFailed { code: LanguageCode, message: String },
}

#[derive(Debug)]
enum Update {
    Emitted(Option<LanguageCode>),
    SaveFailed { code: LanguageCode, message: String },
}

/// 화면 컨트롤러
pub struct ScreenController {
    store: PreferenceStore,
    locale: Arc<dyn LocaleManager>,
    state: ScreenState,
    updates: Option<mpsc::UnboundedReceiver<Update>>,
    /// 저장 요청 큐. 단일 writer 태스크가 요청 순서대로 저장
    save_requests: Option<mpsc::UnboundedSender<LanguageCode>>,
    subscription_task: Option<JoinHandle<()>>,
}

impl std::fmt::Debug for ScreenController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScreenController")
            .field("store", &self.store)
            .field("state", &self.state)
            .finish()
    }
}

impl ScreenController {
    /// 저장소 구독을 시작하고 컨트롤러 생성
    pub fn attach(store: PreferenceStore, locale: Arc<dyn LocaleManager>, runtime: &Handle) -> Self {
        let (update_tx, update_rx) = mpsc::unbounded_channel();

        // 구독은 즉시 등록해 attach 이후의 쓰기를 놓치지 않음
        let mut subscription = store.observe();
        let forward = update_tx.clone();
        let subscription_task = runtime.spawn(async move {
            while let Some(value) = subscription.next().await {
                if forward.send(Update::Emitted(value)).is_err() {
                    break;
                }
            }
        });

        let (save_tx, mut save_rx) = mpsc::unbounded_channel::<LanguageCode>();
        let writer_store = store.clone();
        runtime.spawn(async move {
            while let Some(code) = save_rx.recv().await {
                if let Err(e) = writer_store.save(code.clone()).await {
                    let _ = update_tx.send(Update::SaveFailed {
                        code,
                        message: e.to_string(),
                    });
                }
            }
        });

        tracing::debug!(path = %store.path().display(), "screen controller attached");
        Self {
            store,
            locale,
            state: ScreenState::Uninitialized,
            updates: Some(update_rx),
            save_requests: Some(save_tx),
            subscription_task: Some(subscription_task),
        }
    }

    pub fn state(&self) -> &ScreenState {
        &self.state
    }

    /// 동기화된 언어 코드
    pub fn current_code(&self) -> Option<&LanguageCode> {
        match &self.state {
            ScreenState::Synced(code) => code.as_ref(),
            _ => None,
        }
    }

    /// 화면에 표시할 언어 (없거나 알 수 없으면 Portuguese)
    pub fn selected_language(&self) -> Language {
        self.current_code()
            .and_then(|code| Language::from_stored_code(code.as_str()))
            .unwrap_or_default()
    }

    /// 사용자가 언어를 선택함
    ///
    /// 저장은 비동기로 진행되고, 상태는 저장소가 재발행할 때 바뀐다.
    pub fn select(&self, language: Language) {
        let Some(save_requests) = &self.save_requests else {
            return;
        };
        let code = LanguageCode::from(language.code());
        tracing::info!(code = %code, "language selected");
        if save_requests.send(code).is_err() {
            tracing::warn!("preference writer is gone, selection dropped");
        }
    }

    /// 대기 중인 갱신을 막힘 없이 처리
    pub fn poll_updates(&mut self) -> Vec<ScreenEvent> {
        let mut pending = Vec::new();
        if let Some(updates) = self.updates.as_mut() {
            while let Ok(update) = updates.try_recv() {
                pending.push(update);
            }
        }
        pending
            .into_iter()
            .map(|update| self.handle(update))
            .collect()
    }

    /// 다음 갱신을 기다려 처리
    #[cfg(test)]
    pub async fn next_update(&mut self) -> Option<ScreenEvent> {
        let update = self.updates.as_mut()?.recv().await?;
        Some(self.handle(update))
    }

    /// 구독 해제. 이후 갱신과 로케일 적용은 일어나지 않는다
    pub fn teardown(&mut self) {
        if let Some(task) = self.subscription_task.take() {
            task.abort();
        }
        self.updates = None;
        // 큐에 남은 저장 요청은 writer가 마저 처리하고 종료
        self.save_requests = None;
        if self.state != ScreenState::Detached {
            tracing::debug!("screen controller detached");
        }
        self.state = ScreenState::Detached;
    }

    fn handle(&mut self, update: Update) -> ScreenEvent {
        match update {
            Update::Emitted(code) => {
                let tag = code.as_ref().map(LanguageCode::as_str).unwrap_or("");
                let locale_error = match self.locale.apply_locale(tag) {
                    Ok(()) => None,
                    Err(e) => {
                        tracing::warn!(tag, error = %e, "failed to apply locale");
                        Some(e.to_string())
                    }
                };
                self.state = ScreenState::Synced(code.clone());
                ScreenEvent::Synced { code, locale_error }
            }
            Update::SaveFailed { code, message } => ScreenEvent::SaveFailed { code, message },
        }
    }
}

impl Drop for ScreenController {
    fn drop(&mut self) {
        self.teardown();
    }
}
