// Flag assets - 언어별 국기 그림
//
// 각 문자는 셀 하나의 색상: G=초록, Y=노랑, B=파랑, R=빨강, W=흰색.
// 한 셀은 터미널 두 칸으로 그린다.

use crate::ui::i18n::Language;
use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
};

/// 국기 너비 (셀)
pub const FLAG_WIDTH: u16 = 20;
/// 국기 높이 (줄)
pub const FLAG_HEIGHT: u16 = 12;

/// 국기 그림 한 벌
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlagAsset {
    pub language: Language,
    /// 국가 이름 (대체 텍스트)
    pub name: &'static str,
    /// 본문에 그리는 큰 국기
    pub rows: &'static [&'static str],
    /// 메뉴 항목 앞의 작은 아이콘
    pub icon: &'static str,
}

static BRAZIL: FlagAsset = FlagAsset {
    language: Language::Portuguese,
    name: "Brasil",
    rows: &[
        "GGGGGGGGGGGGGGGGGGGG",
        "GGGGGGGGGYYGGGGGGGGG",
        "GGGGGGGYYYYYYGGGGGGG",
        "GGGGGYYYYYYYYYYGGGGG",
        "GGGYYYYYBBBBYYYYYGGG",
        "GYYYYYYBBBBBBYYYYYYG",
        "GYYYYYYBBBBBBYYYYYYG",
        "GGGYYYYYBBBBYYYYYGGG",
        "GGGGGYYYYYYYYYYGGGGG",
        "GGGGGGGYYYYYYGGGGGGG",
        "GGGGGGGGGYYGGGGGGGGG",
        "GGGGGGGGGGGGGGGGGGGG",
    ],
    icon: "GYG",
};

static USA: FlagAsset = FlagAsset {
    language: Language::English,
    name: "EUA",
    rows: &[
        "BWBWBWBBRRRRRRRRRRRR",
        "BBWBWBWBWWWWWWWWWWWW",
        "BWBWBWBBRRRRRRRRRRRR",
        "BBWBWBWBWWWWWWWWWWWW",
        "BWBWBWBBRRRRRRRRRRRR",
        "BBWBWBWBWWWWWWWWWWWW",
        "RRRRRRRRRRRRRRRRRRRR",
        "WWWWWWWWWWWWWWWWWWWW",
        "RRRRRRRRRRRRRRRRRRRR",
        "WWWWWWWWWWWWWWWWWWWW",
        "RRRRRRRRRRRRRRRRRRRR",
        "WWWWWWWWWWWWWWWWWWWW",
    ],
    icon: "BRW",
};

static SPAIN: FlagAsset = FlagAsset {
    language: Language::Spanish,
    name: "Espanha",
    rows: &[
        "RRRRRRRRRRRRRRRRRRRR",
        "RRRRRRRRRRRRRRRRRRRR",
        "RRRRRRRRRRRRRRRRRRRR",
        "YYYYYYYYYYYYYYYYYYYY",
        "YYYYRRYYYYYYYYYYYYYY",
        "YYYRYYRYYYYYYYYYYYYY",
        "YYYYRRYYYYYYYYYYYYYY",
        "YYYYYYYYYYYYYYYYYYYY",
        "YYYYYYYYYYYYYYYYYYYY",
        "RRRRRRRRRRRRRRRRRRRR",
        "RRRRRRRRRRRRRRRRRRRR",
        "RRRRRRRRRRRRRRRRRRRR",
    ],
    icon: "RYR",
};

/// 언어별 국기
pub fn flag_for(language: Language) -> &'static FlagAsset {
    match language {
        Language::Portuguese => &BRAZIL,
        Language::English => &USA,
        Language::Spanish => &SPAIN,
    }
}

/// 저장된 코드별 국기. "pt", "en", "es" 외의 값은 모두 브라질 국기
pub fn flag_for_code(code: &str) -> &'static FlagAsset {
    flag_for(Language::from_stored_code(code).unwrap_or_default())
}

fn cell_color(c: char) -> Color {
    match c {
        'G' => Color::Rgb(0, 156, 59),
        'Y' => Color::Rgb(255, 223, 0),
        'B' => Color::Rgb(0, 39, 118),
        'R' => Color::Rgb(198, 11, 30),
        'W' => Color::Rgb(255, 255, 255),
        _ => Color::Reset,
    }
}

impl FlagAsset {
    /// 큰 국기를 줄 단위로 변환
    pub fn art_lines(&self) -> Vec<Line<'static>> {
        self.rows
            .iter()
            .map(|row| {
                Line::from(
                    row.chars()
                        .map(|c| Span::styled("  ", Style::default().bg(cell_color(c))))
                        .collect::<Vec<_>>(),
                )
            })
            .collect()
    }

    /// 메뉴 아이콘 span
    pub fn icon_spans(&self) -> Vec<Span<'static>> {
        self.icon
            .chars()
            .map(|c| Span::styled(" ", Style::default().bg(cell_color(c))))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_are_rectangular() {
        for language in Language::ALL {
            let flag = flag_for(language);
            assert_eq!(flag.rows.len(), FLAG_HEIGHT as usize, "{}", flag.name);
            for row in flag.rows {
                assert_eq!(row.chars().count(), FLAG_WIDTH as usize, "{}", flag.name);
            }
            assert_eq!(flag.language, language);
        }
    }

    #[test]
    fn test_supported_codes_map_to_their_flag() {
        assert_eq!(flag_for_code("pt").name, "Brasil");
        assert_eq!(flag_for_code("en").name, "EUA");
        assert_eq!(flag_for_code("es").name, "Espanha");
    }

    #[test]
    fn test_unknown_code_maps_to_fallback_flag() {
        assert_eq!(flag_for_code("fr"), &BRAZIL);
        assert_eq!(flag_for_code(""), &BRAZIL);
    }

    #[test]
    fn test_regional_or_cased_codes_map_to_fallback_flag() {
        // 저장 값은 정확히 일치해야 하며 로케일 형태는 해석하지 않는다
        for code in ["en-US", "EN", "es_MX", "en.UTF-8"] {
            assert_eq!(flag_for_code(code).name, "Brasil", "{}", code);
        }
    }

    #[test]
    fn test_art_lines_use_two_columns_per_cell() {
        let lines = flag_for(Language::Spanish).art_lines();
        assert_eq!(lines.len(), FLAG_HEIGHT as usize);
        assert_eq!(lines[0].width(), FLAG_WIDTH as usize * 2);
    }
}
