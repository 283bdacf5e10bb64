// Home view component - 본문 컴포넌트
//
// 선택된 언어의 국기, 제목, 테두리 안의 설명을 가운데 정렬로 표시

use crate::ui::flags::{FlagAsset, FLAG_HEIGHT, FLAG_WIDTH};
use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Padding, Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

/// 설명 상자 최대 너비
const DESCRIPTION_MAX_WIDTH: u16 = 60;

/// 본문 컴포넌트
pub struct HomeView<'a> {
    flag: &'a FlagAsset,
    heading: &'a str,
    description: &'a str,
    bg_color: Color,
    fg_color: Color,
    heading_color: Color,
    border_color: Color,
}

impl<'a> HomeView<'a> {
    pub fn new(flag: &'a FlagAsset) -> Self {
        Self {
            flag,
            heading: "",
            description: "",
            bg_color: Color::White,
            fg_color: Color::Rgb(33, 33, 33),
            heading_color: Color::Rgb(33, 33, 33),
            border_color: Color::Rgb(13, 71, 161),
        }
    }

    /// 제목 설정
    pub fn heading(mut self, heading: &'a str) -> Self {
        self.heading = heading;
        self
    }

    /// 설명 설정
    pub fn description(mut self, description: &'a str) -> Self {
        self.description = description;
        self
    }

    /// 테마 적용
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.bg_color = theme.bg_primary;
        self.fg_color = theme.fg_primary;
        self.heading_color = theme.heading_fg;
        self.border_color = theme.description_border;
        self
    }
}

/// 단어 단위 줄바꿈 시 필요한 줄 수
fn wrapped_line_count(text: &str, width: u16) -> u16 {
    if width == 0 {
        return 0;
    }
    let width = width as usize;
    let mut lines = 1u16;
    let mut current = 0usize;
    for word in text.split_whitespace() {
        let word_width = word.width();
        if current == 0 {
            current = word_width;
        } else if current + 1 + word_width <= width {
            current += 1 + word_width;
        } else {
            lines += 1;
            current = word_width;
        }
        // 너비보다 긴 단어는 잘려서 여러 줄 차지
        while current > width {
            lines += 1;
            current -= width;
        }
    }
    lines
}

fn centered(area: Rect, width: u16, y: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    Rect {
        x: area.x + (area.width - width) / 2,
        y,
        width,
        height: height.min((area.y + area.height).saturating_sub(y)),
    }
}

impl Widget for HomeView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(self.bg_color));

        // 설명 상자: 테두리 2 + 좌우 여백 2
        let box_width = DESCRIPTION_MAX_WIDTH.min(area.width.saturating_sub(4));
        let text_width = box_width.saturating_sub(4);
        let box_height = wrapped_line_count(self.description, text_width) + 2;

        // 국기 | 빈 줄 | 제목 | 빈 줄 | 설명
        let total = FLAG_HEIGHT + 1 + 1 + 1 + box_height;
        let mut y = area.y + area.height.saturating_sub(total) / 2;

        let flag_area = centered(area, FLAG_WIDTH * 2, y, FLAG_HEIGHT);
        Paragraph::new(self.flag.art_lines()).render(flag_area, buf);
        y += FLAG_HEIGHT + 1;

        if y < area.y + area.height {
            let heading_area = centered(area, area.width, y, 1);
            Paragraph::new(Line::from(self.heading))
                .alignment(Alignment::Center)
                .style(
                    Style::default()
                        .fg(self.heading_color)
                        .bg(self.bg_color)
                        .add_modifier(Modifier::BOLD),
                )
                .render(heading_area, buf);
        }
        y += 2;

        if y < area.y + area.height {
            let box_area = centered(area, box_width, y, box_height);
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(self.border_color))
                .padding(Padding::horizontal(1));
            Paragraph::new(self.description)
                .block(block)
                .wrap(Wrap { trim: true })
                .style(Style::default().fg(self.fg_color).bg(self.bg_color))
                .render(box_area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::flags::flag_for;
    use crate::ui::Language;

    fn buffer_text(buf: &Buffer) -> String {
        let area = buf.area;
        let mut out = String::new();
        for y in area.y..area.y + area.height {
            for x in area.x..area.x + area.width {
                if let Some(cell) = buf.cell((x, y)) {
                    out.push_str(cell.symbol());
                }
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_wrapped_line_count() {
        assert_eq!(wrapped_line_count("one two three", 20), 1);
        assert_eq!(wrapped_line_count("one two three", 7), 2);
        assert_eq!(wrapped_line_count("abcdefghij", 4), 3);
        assert_eq!(wrapped_line_count("", 10), 1);
    }

    #[test]
    fn test_renders_heading_and_description() {
        let flag = flag_for(Language::English);
        let view = HomeView::new(flag)
            .heading("Language")
            .description("Pick a language from the menu.");
        let area = Rect::new(0, 0, 80, 21);
        let mut buf = Buffer::empty(area);
        view.render(area, &mut buf);

        let text = buffer_text(&buf);
        assert!(text.contains("Language"));
        assert!(text.contains("Pick a language from the menu."));
    }

    #[test]
    fn test_flag_cells_use_flag_colors() {
        let flag = flag_for(Language::Portuguese);
        let view = HomeView::new(flag).heading("Idioma").description("x");
        let area = Rect::new(0, 0, 80, 21);
        let mut buf = Buffer::empty(area);
        view.render(area, &mut buf);

        // total = 12 + 3 + 3 = 18 → 위쪽 여백 1, 국기 x 시작 20
        let corner = buf.cell((20, 1)).map(|cell| cell.bg);
        assert_eq!(corner, Some(Color::Rgb(0, 156, 59)));
    }
}
