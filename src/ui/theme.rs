use ratatui::style::Color;

/// 색상 테마
///
/// 상단 바는 짙은 파랑, 본문은 흰 배경에 짙은 회색 글자.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    // 배경/전경
    pub bg_primary: Color,
    pub fg_primary: Color,

    // 상단 바
    pub title_bar_bg: Color,
    pub title_bar_fg: Color,

    // 본문
    pub heading_fg: Color,
    pub description_border: Color,

    // 드롭다운 메뉴
    pub menu_bg: Color,
    pub menu_fg: Color,
    pub menu_selected_bg: Color,
    pub menu_selected_fg: Color,
    pub menu_border: Color,

    // 하단 커맨드 바
    pub command_bar_bg: Color,
    pub command_bar_fg: Color,

    // 강조
    pub accent: Color,
    pub warning: Color,
    pub error: Color,
    pub success: Color,
}

/// 0xRRGGBB → Color
const fn rgb(hex: u32) -> Color {
    Color::Rgb((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            bg_primary: rgb(0xffffff),
            fg_primary: rgb(0x212121),

            title_bar_bg: rgb(0x0d47a1),
            title_bar_fg: rgb(0xffffff),

            heading_fg: rgb(0x212121),
            description_border: rgb(0x0d47a1),

            menu_bg: rgb(0xffffff),
            menu_fg: rgb(0x212121),
            menu_selected_bg: rgb(0x0d47a1),
            menu_selected_fg: rgb(0xffffff),
            menu_border: rgb(0x9e9e9e),

            command_bar_bg: rgb(0x0d47a1),
            command_bar_fg: rgb(0xffffff),

            // 브라질 국기의 노랑
            accent: rgb(0xffdf00),
            warning: rgb(0xf9a825),
            error: rgb(0xc62828),
            success: rgb(0x2e7d32),
        }
    }
}
