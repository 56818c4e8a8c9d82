//! 视图层模块
//!
//! 包含主渲染入口和表单视图

pub mod components;
pub mod layouts;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

use super::state::{App, Focus};
use components::{
    render_button_widget, render_input_widget, render_panel_framework, render_selector_widget,
};
use layouts::centered_rect;

const NAME_PLACEHOLDER: &str = "Food, Orange Juice, Salad, Exercise, Training, Bicycle";
const CALORIES_PLACEHOLDER: &str = "250, 300 or 500";

/// 渲染 UI
pub fn render(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // 标题
            Constraint::Min(17),   // 表单
            Constraint::Length(3), // 帮助
        ])
        .split(frame.area());

    render_title(frame, app, chunks[0]);
    render_form(frame, app, chunks[1]);
    render_help(frame, app, chunks[2]);
}

fn render_title(frame: &mut Frame, app: &App, area: Rect) {
    let title = Paragraph::new(format!("Calorie Tracker  -  {} logged", app.store.len()))
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, area);
}

/// 提交按钮文字
fn submit_label(app: &App) -> String {
    match app.form.selected_category() {
        Some(category) => format!("Save {}", category.name),
        None => "Save Food or Exercise".to_string(),
    }
}

fn render_form(frame: &mut Frame, app: &App, area: Rect) {
    let area = centered_rect(70, 100, area);
    let inner = render_panel_framework(frame, area, "New Activity");

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // 分类
            Constraint::Length(3), // 名称
            Constraint::Length(3), // 卡路里
            Constraint::Length(3), // 提交
            Constraint::Min(0),
        ])
        .split(inner);

    let options: Vec<&str> = app
        .form
        .categories()
        .iter()
        .map(|c| c.name.as_str())
        .collect();
    render_selector_widget(
        frame,
        chunks[0],
        "Category",
        &options,
        app.selected_category_index(),
        app.focus == Focus::Category,
        Color::Yellow,
    );

    render_input_widget(
        frame,
        chunks[1],
        "Activity",
        &app.name_input,
        NAME_PLACEHOLDER,
        app.focus == Focus::Name,
        Color::Yellow,
    );

    render_input_widget(
        frame,
        chunks[2],
        "Calories",
        &app.calories_input,
        CALORIES_PLACEHOLDER,
        app.focus == Focus::Calories,
        Color::Yellow,
    );

    render_button_widget(
        frame,
        chunks[3],
        &submit_label(app),
        app.focus == Focus::Submit,
        app.form.is_valid(),
    );
}

fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = match app.focus {
        Focus::Category => "[</>] Category  [Tab] Next  [Enter] Save  [Esc] Quit",
        Focus::Name | Focus::Calories => "Type to edit  [Tab] Next  [Enter] Save  [Esc] Quit",
        Focus::Submit => "[Enter] Save  [Tab] Next  [Esc] Quit",
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

#[cfg(test)]
mod tests {
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

    use super::*;
    use crate::config::AppConfig;
    use crate::ui::actions::Action;

    fn draw(app: &mut App) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();
        terminal.backend().buffer().clone()
    }

    /// 查找文本所在的位置 (x, y)
    fn find(buffer: &Buffer, needle: &str) -> Option<(u16, u16)> {
        let area = buffer.area;
        for y in 0..area.height {
            let row: String = (0..area.width)
                .map(|x| buffer[(x, y)].symbol().to_string())
                .collect();
            // 边框字符是多字节的，按字符数换算列号
            if let Some(idx) = row.find(needle) {
                return Some((row[..idx].chars().count() as u16, y));
            }
        }
        None
    }

    #[test]
    fn test_render_initial_form() {
        let mut app = App::new(&AppConfig::default());
        let buffer = draw(&mut app);

        assert!(find(&buffer, "< Food >").is_some());
        assert!(find(&buffer, "(1/2)").is_some());
        assert!(find(&buffer, "250, 300 or 500").is_some());
        assert!(find(&buffer, "0 logged").is_some());

        let (x, y) = find(&buffer, "SAVE FOOD").unwrap();
        assert_eq!(buffer[(x, y)].fg, Color::DarkGray);
    }

    #[test]
    fn test_render_enabled_submit() {
        let mut app = App::new(&AppConfig::default());
        app.dispatch(Action::NextCategory);
        app.dispatch(Action::FocusNext);
        for c in "Run".chars() {
            app.dispatch(Action::Input(c));
        }
        app.dispatch(Action::FocusNext);
        for c in "300".chars() {
            app.dispatch(Action::Input(c));
        }

        let buffer = draw(&mut app);
        assert!(find(&buffer, "< Exercise >").is_some());
        assert!(find(&buffer, "Run").is_some());

        let (x, y) = find(&buffer, "SAVE EXERCISE").unwrap();
        assert_eq!(buffer[(x, y)].fg, Color::White);
    }
}
