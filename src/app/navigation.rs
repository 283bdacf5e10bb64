use super::controllers;
use super::*;

/// 토스트 표시 시간 (초)
const TOAST_SECS: u64 = 3;

impl App {
    // === 메뉴 관련 메서드 ===

    /// 메뉴 활성화 상태 확인
    pub fn is_menu_active(&self) -> bool {
        self.menu_state.is_open
    }

    /// 메뉴 열기 (저장된 언어 항목에서 시작)
    pub fn open_menu(&mut self) {
        let initial = Language::ALL
            .iter()
            .position(|&language| language == self.selected_language())
            .unwrap_or(0);
        self.menu_state.open(initial);
    }

    /// 메뉴 닫기
    pub fn close_menu(&mut self) {
        self.menu_state.close();
    }

    /// 다음 항목으로 이동
    pub fn next_menu_item(&mut self) {
        self.menu_state.next_item(self.menu.items.len());
    }

    /// 이전 항목으로 이동
    pub fn prev_menu_item(&mut self) {
        self.menu_state.prev_item(self.menu.items.len());
    }

    /// 현재 선택된 메뉴 항목의 ID 반환
    pub fn get_selected_menu_action(&self) -> Option<String> {
        self.menu
            .items
            .get(self.menu_state.selected_item)
            .map(|item| item.id.clone())
    }

    /// 선택된 메뉴 항목 실행
    pub fn select_menu_item(&mut self) {
        if let Some(id) = self.get_selected_menu_action() {
            self.execute_menu_action(&id);
        }
    }

    /// 액션 실행 (단일 진실 원천)
    pub fn execute_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.quit(),
            Action::OpenMenu => self.open_menu(),
            Action::SelectPortuguese | Action::SelectEnglish | Action::SelectSpanish => {
                controllers::language_controller::execute(self, action)
            }
        }
    }

    /// 메뉴 액션 실행
    pub fn execute_menu_action(&mut self, action_id: &str) {
        self.close_menu();
        if let Some(action) = Action::from_id(action_id) {
            self.execute_action(action);
        } else {
            tracing::debug!(action_id, "unknown menu action");
        }
    }

    // === 토스트 ===

    /// 토스트 메시지 설정
    pub fn set_toast(&mut self, message: &str) {
        self.toast_message = Some((message.to_string(), Instant::now()));
    }

    /// 만료된 토스트 정리
    pub fn clear_expired_toast(&mut self) {
        if let Some((_, created)) = &self.toast_message {
            if created.elapsed().as_secs() >= TOAST_SECS {
                self.toast_message = None;
            }
        }
    }
}
