// Layout system - 화면 레이아웃
//
// 상단 바 | 본문 | 상태 줄 | 커맨드 바
// 최소 크기보다 작으면 경고 화면만 표시

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// 최소 터미널 크기 상수
pub const MIN_WIDTH: u16 = 44;
pub const MIN_HEIGHT: u16 = 24;

/// 레이아웃 모드
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    /// 일반 화면
    Normal,
    /// 경고 모드 (터미널이 너무 작음)
    TooSmall,
}

/// 레이아웃 영역
#[derive(Debug, Clone, Default)]
pub struct LayoutAreas {
    /// 상단 바 영역
    pub title_bar: Rect,
    /// 본문 영역
    pub body: Rect,
    /// 상태(토스트) 줄 영역
    pub status_line: Rect,
    /// 하단 커맨드 바 영역
    pub command_bar: Rect,
}

/// 레이아웃 매니저
#[derive(Debug)]
pub struct LayoutManager {
    mode: LayoutMode,
    terminal_size: (u16, u16),
    areas: LayoutAreas,
}

impl Default for LayoutManager {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutManager {
    pub fn new() -> Self {
        Self {
            mode: LayoutMode::Normal,
            terminal_size: (80, 24),
            areas: LayoutAreas::default(),
        }
    }

    fn determine_mode(width: u16, height: u16) -> LayoutMode {
        if width < MIN_WIDTH || height < MIN_HEIGHT {
            LayoutMode::TooSmall
        } else {
            LayoutMode::Normal
        }
    }

    /// 터미널 크기 업데이트 및 레이아웃 재계산
    pub fn update(&mut self, area: Rect) {
        self.terminal_size = (area.width, area.height);
        self.mode = Self::determine_mode(area.width, area.height);
        self.areas = match self.mode {
            // 경고 화면은 전체 영역을 사용
            LayoutMode::TooSmall => LayoutAreas::default(),
            LayoutMode::Normal => Self::calculate_normal_areas(area),
        };
    }

    fn calculate_normal_areas(area: Rect) -> LayoutAreas {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // 상단 바
                Constraint::Min(3),    // 본문
                Constraint::Length(1), // 상태 줄
                Constraint::Length(1), // 커맨드 바
            ])
            .split(area);

        LayoutAreas {
            title_bar: chunks[0],
            body: chunks[1],
            status_line: chunks[2],
            command_bar: chunks[3],
        }
    }

    pub fn mode(&self) -> LayoutMode {
        self.mode
    }

    pub fn areas(&self) -> &LayoutAreas {
        &self.areas
    }

    pub fn terminal_size(&self) -> (u16, u16) {
        self.terminal_size
    }
}
