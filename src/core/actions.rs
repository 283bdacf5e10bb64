//! 액션 시스템 - 단일 진실 원천 (Single Source of Truth)
//!
//! 키 바인딩, 메뉴 액션, 커맨드바 항목이 이 모듈의 레지스트리를 참조합니다.

use crate::ui::components::command_bar::CommandItem;
use crate::ui::{I18n, Language, TextKey};
use crossterm::event::{KeyCode, KeyModifiers};
use std::sync::LazyLock;

/// 모든 가능한 액션의 열거
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    OpenMenu,
    SelectPortuguese,
    SelectEnglish,
    SelectSpanish,
    Quit,
}

impl Action {
    /// 언어 선택 액션이면 대상 언어
    pub fn language(self) -> Option<Language> {
        match self {
            Action::SelectPortuguese => Some(Language::Portuguese),
            Action::SelectEnglish => Some(Language::English),
            Action::SelectSpanish => Some(Language::Spanish),
            _ => None,
        }
    }
}

/// 커맨드바 표시 정보
pub struct CommandBarEntry {
    pub key: &'static str,
    pub label: TextKey,
    pub priority: u8,
}

/// 액션 정의 (메타데이터)
pub struct ActionDef {
    pub action: Action,
    pub id: &'static str,
    pub shortcut_display: Option<&'static str>,
    pub command_bar: Option<CommandBarEntry>,
}

/// 키 바인딩 정의
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: Option<KeyModifiers>, // None = any modifier
    pub action: Action,
}

/// 모든 액션 메타데이터
pub static ACTION_DEFS: &[ActionDef] = &[
    ActionDef {
        action: Action::OpenMenu,
        id: "open_menu",
        shortcut_display: Some("F2"),
        command_bar: Some(CommandBarEntry {
            key: "F2",
            label: TextKey::HintMenu,
            priority: 10,
        }),
    },
    ActionDef {
        action: Action::SelectPortuguese,
        id: "language_pt",
        shortcut_display: Some("1"),
        command_bar: Some(CommandBarEntry {
            key: "1-3",
            label: TextKey::HintSelect,
            priority: 20,
        }),
    },
    ActionDef {
        action: Action::SelectEnglish,
        id: "language_en",
        shortcut_display: Some("2"),
        command_bar: None,
    },
    ActionDef {
        action: Action::SelectSpanish,
        id: "language_es",
        shortcut_display: Some("3"),
        command_bar: None,
    },
    ActionDef {
        action: Action::Quit,
        id: "quit",
        shortcut_display: Some("q"),
        command_bar: Some(CommandBarEntry {
            key: "q",
            label: TextKey::HintQuit,
            priority: 90,
        }),
    },
];

fn build_key_bindings() -> Vec<KeyBinding> {
    vec![
        // 종료
        KeyBinding {
            code: KeyCode::Char('q'),
            modifiers: Some(KeyModifiers::NONE),
            action: Action::Quit,
        },
        KeyBinding {
            code: KeyCode::Char('c'),
            modifiers: Some(KeyModifiers::CONTROL),
            action: Action::Quit,
        },
        KeyBinding {
            code: KeyCode::F(10),
            modifiers: None,
            action: Action::Quit,
        },
        // 메뉴
        KeyBinding {
            code: KeyCode::F(2),
            modifiers: None,
            action: Action::OpenMenu,
        },
        KeyBinding {
            code: KeyCode::Char('m'),
            modifiers: Some(KeyModifiers::NONE),
            action: Action::OpenMenu,
        },
        // 언어 바로 선택
        KeyBinding {
            code: KeyCode::Char('1'),
            modifiers: None,
            action: Action::SelectPortuguese,
        },
        KeyBinding {
            code: KeyCode::Char('2'),
            modifiers: None,
            action: Action::SelectEnglish,
        },
        KeyBinding {
            code: KeyCode::Char('3'),
            modifiers: None,
            action: Action::SelectSpanish,
        },
    ]
}

static KEY_BINDINGS: LazyLock<Vec<KeyBinding>> = LazyLock::new(build_key_bindings);

/// 키 바인딩 목록 조회 (1회 초기화 후 재사용)
pub fn key_bindings() -> &'static [KeyBinding] {
    KEY_BINDINGS.as_slice()
}

/// 키 입력으로 액션 조회
pub fn find_action(modifiers: KeyModifiers, code: KeyCode) -> Option<Action> {
    key_bindings()
        .iter()
        .find(|binding| {
            let mod_matches = match binding.modifiers {
                None => true,
                Some(required) => modifiers == required,
            };
            binding.code == code && mod_matches
        })
        .map(|binding| binding.action)
}

/// action_id 문자열로 Action 조회
impl Action {
    pub fn from_id(id: &str) -> Option<Action> {
        ACTION_DEFS.iter().find(|d| d.id == id).map(|d| d.action)
    }
}

/// 커맨드바용 항목 생성 (priority 순 정렬)
pub fn generate_command_bar_items(language: Language) -> Vec<CommandItem> {
    let i18n = I18n::new(language);
    let mut entries: Vec<&CommandBarEntry> = ACTION_DEFS
        .iter()
        .filter_map(|def| def.command_bar.as_ref())
        .collect();

    entries.sort_by_key(|cb| cb.priority);

    entries
        .into_iter()
        .map(|cb| CommandItem::new(cb.key, i18n.tr(cb.label)))
        .collect()
}

/// 메뉴 단축키 표시용 조회
pub fn get_shortcut_display(id: &str) -> Option<&'static str> {
    ACTION_DEFS
        .iter()
        .find(|d| d.id == id)
        .and_then(|d| d.shortcut_display)
}
