use crate::core::actions::Action;
use crate::models::LanguageCode;
use crate::system::{LocaleManager, PreferenceStore, ProcessLocale};
use crate::ui::flags::{flag_for_code, FlagAsset};
use crate::ui::{
    create_language_menu, I18n, Language, LayoutManager, Menu, MenuState, MessageKey, Theme,
};
use crate::utils::error::Result;
use std::sync::Arc;
use std::time::Instant;
use tokio::runtime::Handle;

mod controllers;
mod navigation;

pub use controllers::screen_controller::{ScreenController, ScreenEvent, ScreenState};

/// 앱 상태
pub struct App {
    /// 종료 플래그
    pub should_quit: bool,
    /// 레이아웃 매니저
    pub layout: LayoutManager,
    /// 색상 테마
    pub theme: Theme,
    /// 언어 메뉴
    pub menu: Menu,
    /// 메뉴 상태
    pub menu_state: MenuState,
    /// 토스트 메시지 (3초 후 자동 소멸)
    pub toast_message: Option<(String, Instant)>,
    /// 저장소와 로케일을 잇는 화면 컨트롤러
    controller: ScreenController,
    /// 화면 문구 언어를 결정하는 로케일
    locale: Arc<dyn LocaleManager>,
    /// 저장 완료를 기다리는 선택
    pending_selection: Option<LanguageCode>,
}

impl App {
    /// 기본 설정 파일과 프로세스 로케일로 앱 생성
    pub fn new(runtime: &Handle) -> Result<Self> {
        let store = PreferenceStore::from_env()?;
        tracing::info!(path = %store.path().display(), "preference store opened");
        Ok(Self::with_parts(store, Arc::new(ProcessLocale::new()), runtime))
    }

    /// 저장소와 로케일 구현을 지정해 앱 생성
    pub fn with_parts(
        store: PreferenceStore,
        locale: Arc<dyn LocaleManager>,
        runtime: &Handle,
    ) -> Self {
        let controller = ScreenController::attach(store, locale.clone(), runtime);
        let i18n = I18n::new(Language::resolve(locale.current_locale().as_deref()));
        let menu = create_language_menu(i18n, controller.selected_language());
        Self {
            should_quit: false,
            layout: LayoutManager::new(),
            theme: Theme::default(),
            menu,
            menu_state: MenuState::new(),
            toast_message: None,
            controller,
            locale,
            pending_selection: None,
        }
    }

    /// 화면 문구 언어 (적용된 로케일 기준)
    pub fn language(&self) -> Language {
        Language::resolve(self.locale.current_locale().as_deref())
    }

    pub fn i18n(&self) -> I18n {
        I18n::new(self.language())
    }

    /// 국기와 체크 표시에 쓰이는 저장된 언어
    pub fn selected_language(&self) -> Language {
        self.controller.selected_language()
    }

    /// 본문 국기 (저장된 코드 기준, 알 수 없는 코드는 Brasil)
    pub fn flag(&self) -> &'static FlagAsset {
        let code = self.controller.current_code().map(LanguageCode::as_str);
        flag_for_code(code.unwrap_or(""))
    }

    #[cfg(test)]
    pub fn screen_state(&self) -> &ScreenState {
        self.controller.state()
    }

    /// 언어 선택 요청 (저장소 재발행 후 화면 반영)
    pub fn select_language(&mut self, language: Language) {
        if self.controller.state() == &ScreenState::Detached {
            return;
        }
        self.pending_selection = Some(LanguageCode::from(language.code()));
        self.controller.select(language);
    }

    /// 대기 중인 화면 갱신 처리. 화면이 바뀌었으면 true
    pub fn poll_updates(&mut self) -> bool {
        let events = self.controller.poll_updates();
        let changed = !events.is_empty();
        for event in events {
            self.handle_screen_event(event);
        }
        changed
    }

    /// 다음 화면 갱신을 기다려 처리
    #[cfg(test)]
    pub async fn wait_for_update(&mut self) -> Option<ScreenEvent> {
        let event = self.controller.next_update().await?;
        self.handle_screen_event(event.clone());
        Some(event)
    }

    fn handle_screen_event(&mut self, event: ScreenEvent) {
        match event {
            ScreenEvent::Synced { code, locale_error } => {
                self.rebuild_menu();
                if let Some(error) = locale_error {
                    let text = format!("{}: {}", self.i18n().msg(MessageKey::LocaleFailed), error);
                    self.set_toast(&text);
                } else if code.is_some() && code == self.pending_selection {
                    self.pending_selection = None;
                    self.set_toast(self.i18n().msg(MessageKey::LanguageSaved));
                }
            }
            ScreenEvent::SaveFailed { code, message } => {
                tracing::error!(code = %code, error = %message, "failed to save language");
                if self.pending_selection.as_ref() == Some(&code) {
                    self.pending_selection = None;
                }
                let text = format!("{}: {}", self.i18n().msg(MessageKey::SaveFailed), message);
                self.set_toast(&text);
            }
        }
    }

    /// 현재 언어로 메뉴 레이블과 체크 표시 다시 생성
    fn rebuild_menu(&mut self) {
        self.menu = create_language_menu(self.i18n(), self.selected_language());
    }

    /// 종료 요청. 화면 컨트롤러 구독 해제
    pub fn quit(&mut self) {
        self.controller.teardown();
        self.should_quit = true;
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}
