//! 视图层模块
//!
//! 包含主渲染入口和各种视图组件

pub mod components;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Margin, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use super::state::{App, Focus};
use components::{render_button, render_input_widget};

const BUTTON_LABEL: &str = "Add";
const BUTTON_WIDTH: u16 = 9;

/// 渲染 UI，同时记录输入框和按钮的位置
pub fn render(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // 标题
            Constraint::Length(3), // 输入行
            Constraint::Min(3),    // 列表
            Constraint::Length(3), // 帮助
        ])
        .split(frame.area());

    render_title(frame, app, chunks[0]);
    render_input_row(frame, app, chunks[1]);
    render_list(frame, app, chunks[2]);
    render_help(frame, app, chunks[3]);
}

fn render_title(frame: &mut Frame, app: &App, area: Rect) {
    let title = Paragraph::new(app.labels.title.as_str())
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, area);
}

fn render_input_row(frame: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(BUTTON_WIDTH)])
        .split(area);

    app.input_area = chunks[0];
    app.button_area = chunks[1];

    // 保持末尾可见，并给光标留一列
    let inner = chunks[0].inner(Margin::new(1, 1));
    let width = u16::try_from(Line::raw(app.field.value.as_str()).width()).unwrap_or(u16::MAX);
    let scroll = width.saturating_sub(inner.width.saturating_sub(1));

    let input_focused = app.focus == Focus::Input;
    render_input_widget(
        frame,
        chunks[0],
        &app.labels.input,
        &app.field.value,
        scroll,
        input_focused,
        Color::Yellow,
    );
    render_button(frame, chunks[1], BUTTON_LABEL, app.focus == Focus::Button);

    if input_focused {
        let x = inner
            .x
            .saturating_add(width - scroll)
            .min(inner.right().saturating_sub(1));
        frame.set_cursor_position(Position::new(x, inner.y));
    }
}

fn render_list(frame: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .list
        .iter()
        // 原样显示，不做任何标记解析
        .map(|entry| ListItem::new(Line::from(Span::raw(entry.text.as_str()))))
        .collect();

    let border_style = if app.focus == Focus::List {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };

    let list_widget = List::new(items)
        .block(
            Block::default()
                .title(format!("{} ({})", app.labels.list, app.list.len()))
                .borders(Borders::ALL)
                .border_style(border_style),
        )
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::REVERSED),
        );

    let mut state = ListState::default();
    if app.focus == Focus::List && !app.list.is_empty() {
        state.select(Some(app.selected_index));
    } else if !app.list.is_empty() {
        // 未聚焦时仍滚动到最新条目
        *state.offset_mut() = app.list.len().saturating_sub(area.height.saturating_sub(2) as usize);
    }

    frame.render_stateful_widget(list_widget, area, &mut state);
}

fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = match app.focus {
        Focus::Input => "[Enter] 添加  [Tab] 切换焦点  [Esc] 退出",
        Focus::Button => "[Enter/Space] 添加  [Tab] 切换焦点  [Esc] 退出",
        Focus::List => "[j/k] 浏览  [Tab] 切换焦点  [Esc] 退出",
    };

    let message = app.message.as_deref().unwrap_or("");
    let text = if message.is_empty() {
        help_text.to_string()
    } else {
        format!("{}  |  {}", help_text, message)
    };

    let help = Paragraph::new(text)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(help, area);
}
