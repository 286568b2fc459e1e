mod config;
mod error;
mod models;
mod ui;

use std::fs;
use std::io::{self, Write};

use crossterm::{
    cursor::Show,
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{Config, config_path, load_config};
use crate::error::AppResult;
use crate::models::{EntryList, InputField};
use crate::ui::{App, Labels, render};

/// 日志写入文件，stdout 留给终端界面
fn init_logging(config: &Config) -> AppResult<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));

    let log_path = config.effective_log_path()?;
    if let Some(parent) = log_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)?;

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();

    info!(path = %log_path.display(), "logging initialized");
    Ok(())
}

fn main() -> AppResult<()> {
    // 配置文件路径 (~/.config/jotter/config.toml)
    let path = config_path()?;
    let config = load_config(&path)?;

    init_logging(&config)?;
    info!(config = %path.display(), mouse = config.mouse, "starting jotter");

    // 输入框与列表在这里创建并注入
    let mut app = App::new(InputField::new(), EntryList::new(), Labels::from(&config));

    // 设置终端，中途失败也要恢复
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    enter_terminal(&mut stdout, config.mouse)?;
    let mut terminal = match Terminal::new(CrosstermBackend::new(stdout)) {
        Ok(terminal) => terminal,
        Err(err) => {
            let _ = restore_terminal(&mut io::stdout(), config.mouse);
            return Err(err.into());
        }
    };

    // 主循环
    let result = run_app(&mut terminal, &mut app);

    // 恢复终端
    restore_terminal(terminal.backend_mut(), config.mouse)?;

    info!(entries = app.list.len(), "exiting");
    result
}

/// 进入备用屏幕（可选鼠标捕获），失败时先恢复再返回错误
fn enter_terminal<W: Write>(out: &mut W, mouse: bool) -> io::Result<()> {
    let entered = execute!(out, EnterAlternateScreen).and_then(|()| {
        if mouse {
            execute!(out, EnableMouseCapture)?;
        }
        Ok(())
    });

    if let Err(err) = entered {
        let _ = restore_terminal(out, mouse);
        return Err(err);
    }
    Ok(())
}

fn restore_terminal<W: Write>(out: &mut W, mouse: bool) -> io::Result<()> {
    disable_raw_mode()?;
    if mouse {
        execute!(out, DisableMouseCapture)?;
    }
    execute!(out, LeaveAlternateScreen, Show)?;
    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> AppResult<()> {
    loop {
        terminal.draw(|f| render(f, app))?;

        let quit = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => ui::handle_key_event(app, key),
            Event::Mouse(mouse) => ui::handle_mouse_event(app, mouse),
            _ => false,
        };

        if quit {
            break;
        }
    }
    Ok(())
}
