// Dropdown menu component - 드롭다운 메뉴 컴포넌트
//
// 언어 선택 메뉴: 항목마다 국기 아이콘 + 레이블 + 단축키

use crate::core::actions::get_shortcut_display;
use crate::ui::flags::{flag_for, FlagAsset};
use crate::ui::{I18n, Language, TextKey, Theme};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Clear, Widget},
};
use unicode_width::UnicodeWidthStr;

/// 아이콘 폭 (셀 3칸 + 공백)
const ICON_WIDTH: u16 = 4;

/// 메뉴 항목
#[derive(Debug, Clone)]
pub struct MenuItem {
    /// 항목 ID (액션 ID)
    pub id: String,
    /// 표시 레이블
    pub label: String,
    /// 단축키 표시
    pub shortcut: Option<String>,
    /// 앞에 그리는 국기 아이콘
    pub icon: Option<&'static FlagAsset>,
    /// 현재 선택된 값 표시
    pub checked: bool,
}

impl MenuItem {
    /// 액션 항목 생성
    pub fn action(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            shortcut: None,
            icon: None,
            checked: false,
        }
    }

    /// 단축키 설정
    pub fn shortcut(mut self, shortcut: impl Into<String>) -> Self {
        self.shortcut = Some(shortcut.into());
        self
    }

    /// 아이콘 설정
    pub fn icon(mut self, icon: &'static FlagAsset) -> Self {
        self.icon = Some(icon);
        self
    }

    /// 체크 표시 설정
    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }
}

/// 메뉴 (드롭다운 하나)
#[derive(Debug, Clone)]
pub struct Menu {
    /// 메뉴 제목
    pub title: String,
    /// 메뉴 항목들
    pub items: Vec<MenuItem>,
}

impl Menu {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            items: Vec::new(),
        }
    }

    pub fn items(mut self, items: Vec<MenuItem>) -> Self {
        self.items = items;
        self
    }

    /// 드롭다운 너비 계산
    pub fn width(&self) -> u16 {
        let max_label = self
            .items
            .iter()
            .map(|item| item.label.width())
            .max()
            .unwrap_or(0) as u16;
        let max_shortcut = self
            .items
            .iter()
            .filter_map(|item| item.shortcut.as_ref())
            .map(|s| s.width())
            .max()
            .unwrap_or(0) as u16;

        // 테두리 + 아이콘 + 레이블 + 간격 + 체크 + 단축키
        (2 + ICON_WIDTH + max_label + 2 + 2 + max_shortcut + 1).max(20)
    }

    /// 드롭다운 높이 계산 (테두리 포함)
    pub fn height(&self) -> u16 {
        self.items.len() as u16 + 2
    }
}

/// 메뉴 상태
#[derive(Debug, Clone, Default)]
pub struct MenuState {
    /// 메뉴가 열려있는지
    pub is_open: bool,
    /// 현재 선택된 항목 인덱스
    pub selected_item: usize,
}

impl MenuState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 메뉴 열기
    pub fn open(&mut self, initial_item: usize) {
        self.is_open = true;
        self.selected_item = initial_item;
    }

    /// 메뉴 닫기
    pub fn close(&mut self) {
        self.is_open = false;
    }

    /// 다음 항목으로 이동
    pub fn next_item(&mut self, item_count: usize) {
        if item_count > 0 {
            self.selected_item = (self.selected_item + 1) % item_count;
        }
    }

    /// 이전 항목으로 이동
    pub fn prev_item(&mut self, item_count: usize) {
        if item_count > 0 {
            self.selected_item = if self.selected_item == 0 {
                item_count - 1
            } else {
                self.selected_item - 1
            };
        }
    }
}

/// 드롭다운 메뉴 위젯
pub struct DropdownMenu<'a> {
    /// 메뉴 정의
    menu: &'a Menu,
    /// 메뉴 상태
    state: &'a MenuState,
    /// 배경색
    bg_color: Color,
    /// 전경색
    fg_color: Color,
    /// 선택 배경색
    selected_bg: Color,
    /// 선택 전경색
    selected_fg: Color,
    /// 테두리 색상
    border_color: Color,
}

impl<'a> DropdownMenu<'a> {
    pub fn new(menu: &'a Menu, state: &'a MenuState) -> Self {
        Self {
            menu,
            state,
            bg_color: Color::White,
            fg_color: Color::Rgb(33, 33, 33),
            selected_bg: Color::Rgb(13, 71, 161),
            selected_fg: Color::White,
            border_color: Color::Rgb(158, 158, 158),
        }
    }

    /// 테마 적용
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.bg_color = theme.menu_bg;
        self.fg_color = theme.menu_fg;
        self.selected_bg = theme.menu_selected_bg;
        self.selected_fg = theme.menu_selected_fg;
        self.border_color = theme.menu_border;
        self
    }

    /// 메뉴 항목 렌더링
    fn render_item(&self, item: &MenuItem, is_selected: bool, area: Rect, buf: &mut Buffer) {
        let (bg, fg) = if is_selected {
            (self.selected_bg, self.selected_fg)
        } else {
            (self.bg_color, self.fg_color)
        };
        let style = Style::default().fg(fg).bg(bg);
        let inner_width = area.width.saturating_sub(2);
        buf.set_style(
            Rect {
                x: area.x + 1,
                width: inner_width,
                ..area
            },
            style,
        );

        let mut x = area.x + 1;
        if let Some(icon) = item.icon {
            for span in icon.icon_spans() {
                buf.set_span(x, area.y, &span, 1);
                x += 1;
            }
            x += 1;
        }

        let label_style = if item.checked {
            style.add_modifier(Modifier::BOLD)
        } else {
            style
        };
        let label_room = (area.x + 1 + inner_width).saturating_sub(x);
        buf.set_span(
            x,
            area.y,
            &Span::styled(item.label.as_str(), label_style),
            label_room,
        );

        // 오른쪽: 체크 표시 + 단축키
        let mut right = String::new();
        if item.checked {
            right.push('✓');
        }
        if let Some(ref shortcut) = item.shortcut {
            right.push(' ');
            right.push_str(shortcut);
        }
        if !right.is_empty() {
            let right_width = right.width() as u16;
            let right_x = (area.x + area.width).saturating_sub(right_width + 1);
            buf.set_span(right_x, area.y, &Span::styled(right, style), right_width);
        }
    }
}

impl Widget for DropdownMenu<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.menu.items.is_empty() {
            return;
        }

        let dropdown_area = Rect {
            x: area.x,
            y: area.y,
            width: self.menu.width().min(area.width),
            height: self.menu.height().min(area.height),
        };

        Clear.render(dropdown_area, buf);

        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.border_color))
            .style(Style::default().bg(self.bg_color))
            .render(dropdown_area, buf);

        for (i, item) in self.menu.items.iter().enumerate() {
            if i as u16 + 2 >= dropdown_area.height {
                break;
            }
            let item_area = Rect {
                x: dropdown_area.x,
                y: dropdown_area.y + 1 + i as u16,
                width: dropdown_area.width,
                height: 1,
            };
            self.render_item(item, i == self.state.selected_item, item_area, buf);
        }
    }
}

/// 메뉴 항목 생성 헬퍼 (레지스트리에서 단축키 자동 조회)
fn menu_action(id: &str, label: &str) -> MenuItem {
    let mut item = MenuItem::action(id, label);
    if let Some(shortcut) = get_shortcut_display(id) {
        item = item.shortcut(shortcut);
    }
    item
}

/// 언어 메뉴 액션 ID
pub fn language_action_id(language: Language) -> &'static str {
    match language {
        Language::Portuguese => "language_pt",
        Language::English => "language_en",
        Language::Spanish => "language_es",
    }
}

/// 언어 선택 메뉴 생성
///
/// 레이블은 현재 표시 언어로, 체크 표시는 저장된 언어에 붙는다.
pub fn create_language_menu(i18n: I18n, selected: Language) -> Menu {
    Menu::new(i18n.tr(TextKey::MenuLanguages)).items(
        Language::ALL
            .iter()
            .map(|&language| {
                menu_action(language_action_id(language), i18n.language_label(language))
                    .icon(flag_for(language))
                    .checked(language == selected)
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_text(buf: &Buffer, y: u16, width: u16) -> String {
        (0..width)
            .filter_map(|x| buf.cell((x, y)).map(|cell| cell.symbol().to_string()))
            .collect()
    }

    #[test]
    fn test_menu_item_creation() {
        let item = MenuItem::action("language_en", "English").shortcut("2");
        assert_eq!(item.id, "language_en");
        assert_eq!(item.label, "English");
        assert_eq!(item.shortcut, Some("2".to_string()));
        assert!(!item.checked);
    }

    #[test]
    fn test_language_menu_has_three_items() {
        let menu = create_language_menu(I18n::new(Language::Portuguese), Language::English);
        assert_eq!(menu.title, "Idiomas");
        assert_eq!(menu.items.len(), 3);

        let labels: Vec<&str> = menu.items.iter().map(|i| i.label.as_str()).collect();
        assert_eq!(labels, vec!["Português", "Inglês", "Espanhol"]);

        let checked: Vec<bool> = menu.items.iter().map(|i| i.checked).collect();
        assert_eq!(checked, vec![false, true, false]);

        assert_eq!(menu.items[0].icon.map(|f| f.name), Some("Brasil"));
        assert_eq!(menu.items[2].shortcut.as_deref(), Some("3"));
    }

    #[test]
    fn test_menu_state_wraps() {
        let mut state = MenuState::new();
        state.open(2);
        assert!(state.is_open);
        state.next_item(3);
        assert_eq!(state.selected_item, 0);
        state.prev_item(3);
        assert_eq!(state.selected_item, 2);
        state.close();
        assert!(!state.is_open);
    }

    #[test]
    fn test_dropdown_renders_labels() {
        let menu = create_language_menu(I18n::new(Language::English), Language::Spanish);
        let mut state = MenuState::new();
        state.open(0);

        let area = Rect::new(0, 0, 40, 6);
        let mut buf = Buffer::empty(area);
        DropdownMenu::new(&menu, &state).render(area, &mut buf);

        assert!(row_text(&buf, 1, 40).contains("Portuguese"));
        assert!(row_text(&buf, 2, 40).contains("English"));
        let spanish_row = row_text(&buf, 3, 40);
        assert!(spanish_row.contains("Spanish"));
        assert!(spanish_row.contains('✓'));
    }
}
