mod config;
mod form;
mod models;
mod store;
mod ui;

use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{AppConfig, default_config_path};
use crate::ui::{App, render};

/// 终端里的饮食/运动卡路里记录表单
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// 配置文件路径 (默认 ~/.config/calorie-form/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// 日志文件路径 (默认 ~/.local/share/calorie-form/calorie-form.log)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

/// 获取数据目录路径 (~/.local/share/calorie-form/)
fn get_data_dir() -> io::Result<PathBuf> {
    let data_dir = dirs::data_dir()
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "cannot locate user data directory"))?
        .join("calorie-form");

    fs::create_dir_all(&data_dir)?;

    Ok(data_dir)
}

/// 日志写入文件，终端由 TUI 占用
fn init_tracing(log_path: &Path) -> Result<()> {
    if let Some(parent) = log_path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating log directory {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)
        .with_context(|| format!("opening log file {}", log_path.display()))?;

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("calorie_form=info")),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .init();

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_path = match cli.log_file {
        Some(path) => path,
        None => get_data_dir()?.join("calorie-form.log"),
    };
    init_tracing(&log_path)?;

    // 加载配置
    let config = match cli.config.or_else(default_config_path) {
        Some(path) => AppConfig::load(&path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => AppConfig::default(),
    };
    tracing::info!(
        categories = config.categories.len(),
        reset_after_submit = config.reset_after_submit,
        "starting calorie-form v{}",
        env!("CARGO_PKG_VERSION")
    );

    // 创建应用状态
    let mut app = App::new(&config);

    // 设置终端
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // 主循环
    let result = run_app(&mut terminal, &mut app);

    // 恢复终端
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    println!("{} activities logged this session", app.store.len());
    tracing::info!(logged = app.store.len(), "session finished");

    result.context("terminal loop failed")
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| render(f, app))?;

        if let crossterm::event::Event::Key(key) = crossterm::event::read()? {
            if key.kind == crossterm::event::KeyEventKind::Press
                && ui::handle_key_event(app, key.code)?
            {
                break;
            }
        }
    }
    Ok(())
}
