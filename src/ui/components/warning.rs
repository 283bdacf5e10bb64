// Warning screen component - 경고 화면 컴포넌트
//
// 터미널이 최소 크기보다 작을 때 전체 화면에 표시.
// 부족한 쪽(너비/높이)만 빨강으로 강조한다.

use crate::ui::layout::{MIN_HEIGHT, MIN_WIDTH};
use crate::ui::{I18n, TextKey, Theme};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

/// 경고 화면 컴포넌트
pub struct WarningScreen {
    i18n: I18n,
    size: (u16, u16),
    theme: Theme,
}

impl Default for WarningScreen {
    fn default() -> Self {
        Self {
            i18n: I18n::new(Default::default()),
            size: (0, 0),
            theme: Theme::default(),
        }
    }
}

impl WarningScreen {
    pub fn new() -> Self {
        Self::default()
    }

    /// 현재 터미널 크기 설정
    pub fn current_size(mut self, width: u16, height: u16) -> Self {
        self.size = (width, height);
        self
    }

    /// 표시 언어 설정
    pub fn i18n(mut self, i18n: I18n) -> Self {
        self.i18n = i18n;
        self
    }

    pub fn theme(mut self, theme: &Theme) -> Self {
        self.theme = *theme;
        self
    }

    /// 한 축의 크기. 최소값보다 작으면 error 색
    fn dimension(&self, value: u16, min: u16) -> Span<'static> {
        let color = if value < min {
            self.theme.error
        } else {
            self.theme.success
        };
        Span::styled(
            value.to_string(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let plain = Style::default().fg(self.theme.fg_primary);
        let (width, height) = self.size;
        vec![
            Line::from(vec![
                Span::styled(self.i18n.tr(TextKey::WarnCurrent), plain),
                self.dimension(width, MIN_WIDTH),
                Span::styled("x", plain),
                self.dimension(height, MIN_HEIGHT),
            ]),
            Line::from(vec![
                Span::styled(self.i18n.tr(TextKey::WarnRequired), plain),
                Span::styled(
                    format!("{}x{}", MIN_WIDTH, MIN_HEIGHT),
                    Style::default().fg(self.theme.success),
                ),
            ]),
            Line::from(""),
            Line::from(Span::styled(
                self.i18n.tr(TextKey::WarnHint),
                plain.add_modifier(Modifier::DIM),
            )),
        ]
    }
}

impl Widget for WarningScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = Line::from(Span::styled(
            format!(" ⚠ {} ", self.i18n.tr(TextKey::WarnTitle)),
            Style::default()
                .fg(self.theme.warning)
                .add_modifier(Modifier::BOLD),
        ));
        let block = Block::default()
            .borders(Borders::ALL)
            .title(title)
            .title_alignment(Alignment::Center)
            .border_style(Style::default().fg(self.theme.warning))
            .style(Style::default().bg(self.theme.bg_primary));

        let inner = block.inner(area);
        block.render(area, buf);

        let lines = self.lines();
        // 세로 가운데 정렬
        let top = inner.height.saturating_sub(lines.len() as u16) / 2;
        let body = Rect {
            y: inner.y + top,
            height: inner.height.saturating_sub(top),
            ..inner
        };
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(body, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::Language;
    use ratatui::style::Color;

    fn render(screen: WarningScreen, area: Rect) -> Buffer {
        let mut buf = Buffer::empty(area);
        screen.render(area, &mut buf);
        buf
    }

    fn text(buf: &Buffer) -> String {
        let area = buf.area;
        (area.y..area.y + area.height)
            .flat_map(|y| (area.x..area.x + area.width).map(move |x| (x, y)))
            .filter_map(|pos| buf.cell(pos).map(|cell| cell.symbol().to_string()))
            .collect()
    }

    /// 주어진 문자열이 시작하는 셀의 전경색
    fn fg_of(buf: &Buffer, needle: &str) -> Option<Color> {
        let area = buf.area;
        for y in area.y..area.y + area.height {
            let row: String = (area.x..area.x + area.width)
                .filter_map(|x| buf.cell((x, y)).map(|cell| cell.symbol().to_string()))
                .collect();
            if let Some(col) = row.find(needle) {
                let x = area.x + row[..col].chars().count() as u16;
                return buf.cell((x, y)).map(|cell| cell.fg);
            }
        }
        None
    }

    #[test]
    fn test_warning_screen_is_localized() {
        let screen = WarningScreen::new()
            .current_size(30, 10)
            .i18n(I18n::new(Language::Spanish));
        let buf = render(screen, Rect::new(0, 0, 40, 12));

        let text = text(&buf);
        assert!(text.contains("Actual: 30x10"));
        assert!(text.contains("44x24"));
    }

    #[test]
    fn test_only_short_dimension_is_marked() {
        let theme = Theme::default();
        // 너비는 충분, 높이만 부족
        let screen = WarningScreen::new()
            .current_size(50, 10)
            .i18n(I18n::new(Language::English))
            .theme(&theme);
        let buf = render(screen, Rect::new(0, 0, 40, 12));

        assert_eq!(fg_of(&buf, "50x"), Some(theme.success));
        assert_eq!(fg_of(&buf, "10"), Some(theme.error));
    }
}
