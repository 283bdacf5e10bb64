// Title bar component - 상단 바 컴포넌트
//
// 앱 이름(왼쪽)과 메뉴 버튼(오른쪽)

use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

/// 메뉴 버튼 아이콘
const MENU_ICON: &str = "≡";

/// 상단 바 컴포넌트
pub struct TitleBar<'a> {
    /// 앱 이름
    app_name: &'a str,
    /// 메뉴 버튼 레이블
    menu_label: &'a str,
    /// 메뉴가 열려있는지
    menu_open: bool,
    /// 배경색
    bg_color: Color,
    /// 전경색
    fg_color: Color,
    /// 메뉴 열림 표시색
    accent_color: Color,
}

impl Default for TitleBar<'_> {
    fn default() -> Self {
        Self {
            app_name: "Idiomas",
            menu_label: "",
            menu_open: false,
            bg_color: Color::Rgb(13, 71, 161),
            fg_color: Color::White,
            accent_color: Color::Rgb(255, 223, 0),
        }
    }
}

impl<'a> TitleBar<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// 앱 이름 설정
    pub fn app_name(mut self, name: &'a str) -> Self {
        self.app_name = name;
        self
    }

    /// 메뉴 버튼 레이블 설정
    pub fn menu_label(mut self, label: &'a str) -> Self {
        self.menu_label = label;
        self
    }

    /// 메뉴 열림 상태 설정
    pub fn menu_open(mut self, open: bool) -> Self {
        self.menu_open = open;
        self
    }

    /// 테마 적용
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.bg_color = theme.title_bar_bg;
        self.fg_color = theme.title_bar_fg;
        self.accent_color = theme.accent;
        self
    }

    fn menu_button_text(&self) -> String {
        if self.menu_label.is_empty() {
            format!(" {} ", MENU_ICON)
        } else {
            format!(" {} {} ", self.menu_label, MENU_ICON)
        }
    }

    /// 메뉴 버튼의 x 위치 (드롭다운 기준점)
    pub fn menu_button_x(&self, area: Rect) -> u16 {
        let width = self.menu_button_text().width() as u16;
        area.x + area.width.saturating_sub(width)
    }
}

impl Widget for TitleBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // 배경 채우기
        buf.set_style(area, Style::default().bg(self.bg_color));

        let title = Line::from(Span::styled(
            format!(" {}", self.app_name),
            Style::default()
                .fg(self.fg_color)
                .add_modifier(Modifier::BOLD),
        ));
        Paragraph::new(title).render(area, buf);

        let button = self.menu_button_text();
        let button_style = if self.menu_open {
            Style::default().fg(self.bg_color).bg(self.accent_color)
        } else {
            Style::default().fg(self.fg_color)
        };
        let x = self.menu_button_x(area);
        buf.set_span(
            x,
            area.y,
            &Span::styled(button.clone(), button_style),
            button.width() as u16,
        );
    }
}
