mod app;
mod core;
mod models;
mod system;
mod ui;
mod utils;

use anyhow::Context;
use app::App;
use core::actions::{find_action, generate_command_bar_items};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::Rect,
    style::Style,
    text::Line,
    widgets::Paragraph,
    Terminal,
};
use std::io;
use std::time::Duration;
use ui::{CommandBar, DropdownMenu, HomeView, LayoutMode, TextKey, TitleBar, WarningScreen};
use utils::error::Result;

/// 이벤트 대기 시간
const POLL_TIMEOUT: Duration = Duration::from_millis(100);

fn main() -> anyhow::Result<()> {
    let _log_guard = utils::logging::init();
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "idiomas starting");

    let runtime = tokio::runtime::Runtime::new().context("failed to start async runtime")?;
    let mut app = App::new(runtime.handle()).context("failed to open preference store")?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    app.quit();
    if let Err(err) = res {
        tracing::error!(error = %err, "terminal loop failed");
        eprintln!("Error: {:?}", err);
    }
    tracing::info!("idiomas stopped");

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        // 저장소 발행 반영
        app.poll_updates();
        app.clear_expired_toast();

        terminal.draw(|f| {
            let size = f.area();

            // 레이아웃 업데이트
            app.layout.update(size);

            match app.layout.mode() {
                LayoutMode::TooSmall => {
                    // 경고 화면 표시
                    let (width, height) = app.layout.terminal_size();
                    let warning = WarningScreen::new()
                        .current_size(width, height)
                        .i18n(app.i18n())
                        .theme(&app.theme);
                    f.render_widget(warning, size);
                }
                LayoutMode::Normal => {
                    render_main_ui(f, app);
                }
            }
        })?;

        if event::poll(POLL_TIMEOUT)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if app.is_menu_active() {
                    // 메뉴 모드에서의 키 처리
                    handle_menu_keys(app, key.modifiers, key.code);
                } else {
                    // 일반 모드에서의 키 처리
                    handle_normal_keys(app, key.modifiers, key.code);
                }
            }
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}

/// 일반 모드 키 처리 (액션 레지스트리 기반)
fn handle_normal_keys(app: &mut App, modifiers: KeyModifiers, code: KeyCode) {
    if let Some(action) = find_action(modifiers, code) {
        app.execute_action(action);
    }
}

/// 메뉴 모드 키 처리
fn handle_menu_keys(app: &mut App, modifiers: KeyModifiers, code: KeyCode) {
    match (modifiers, code) {
        // 메뉴 닫기: Esc, F2
        (_, KeyCode::Esc) | (_, KeyCode::F(2)) => app.close_menu(),
        // 항목 이동: Up/Down
        (_, KeyCode::Up) | (_, KeyCode::Char('k')) => app.prev_menu_item(),
        (_, KeyCode::Down) | (_, KeyCode::Char('j')) => app.next_menu_item(),
        // 항목 선택: Enter
        (_, KeyCode::Enter) => app.select_menu_item(),
        // 종료 단축키는 메뉴에서도 동작
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => app.quit(),
        (_, KeyCode::F(10)) => app.quit(),
        // 숫자 단축키로 바로 선택
        _ => {
            if let Some(action) = find_action(modifiers, code) {
                if action.language().is_some() {
                    app.execute_action(action);
                }
            }
        }
    }
}

/// 상태 줄 (토스트)
fn render_status_line(f: &mut ratatui::Frame<'_>, app: &App, area: Rect) {
    let text = app
        .toast_message
        .as_ref()
        .map(|(message, _)| format!(" {}", message))
        .unwrap_or_default();
    let style = Style::default()
        .fg(app.theme.title_bar_bg)
        .bg(app.theme.bg_primary);
    f.render_widget(Paragraph::new(Line::from(text)).style(style), area);
}

/// 메뉴 드롭다운 조건부 렌더링
fn render_dropdown_if_active(
    f: &mut ratatui::Frame<'_>,
    app: &App,
    button_x: u16,
    title_area: Rect,
) {
    if !app.is_menu_active() {
        return;
    }
    let screen = f.area();
    let width = app.menu.width().min(screen.width);
    // 메뉴 버튼 아래, 화면 오른쪽을 넘지 않도록
    let menu_x = button_x.min(screen.width.saturating_sub(width));

    let dropdown_area = Rect {
        x: menu_x,
        y: title_area.y + 1,
        width,
        height: screen.height.saturating_sub(title_area.y + 1),
    };

    let dropdown = DropdownMenu::new(&app.menu, &app.menu_state).theme(&app.theme);
    f.render_widget(dropdown, dropdown_area);
}

/// 메인 UI 렌더링
fn render_main_ui(f: &mut ratatui::Frame<'_>, app: &App) {
    let areas = app.layout.areas();
    let theme = &app.theme;
    let i18n = app.i18n();

    let title_bar = TitleBar::new()
        .app_name(i18n.tr(TextKey::AppName))
        .menu_label(&app.menu.title)
        .menu_open(app.is_menu_active())
        .theme(theme);
    let title_area = areas.title_bar;
    let button_x = title_bar.menu_button_x(title_area);
    f.render_widget(title_bar, title_area);

    // 국기는 저장된 언어, 문구는 적용된 로케일을 따른다
    let home = HomeView::new(app.flag())
        .heading(i18n.tr(TextKey::Heading))
        .description(i18n.tr(TextKey::Description))
        .theme(theme);
    f.render_widget(home, areas.body);

    render_status_line(f, app, areas.status_line);

    let command_bar = CommandBar::new()
        .commands(generate_command_bar_items(app.language()))
        .theme(theme);
    f.render_widget(command_bar, areas.command_bar);

    render_dropdown_if_active(f, app, button_x, title_area);
}
