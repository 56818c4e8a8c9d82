//! 通用 UI 组件
//!
//! 面板、输入框、选择器、按钮等通用组件

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

/// [组件] 面板基础框架
pub fn render_panel_framework(frame: &mut Frame, area: Rect, title: &str) -> Rect {
    frame.render_widget(Clear, area);
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

fn field_style(is_focused: bool, active_color: Color) -> Style {
    if is_focused {
        Style::default()
            .fg(active_color)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    }
}

/// [组件] 带有标题、占位文本和样式的输入框
pub fn render_input_widget(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    value: &str,
    placeholder: &str,
    is_focused: bool,
    active_color: Color,
) {
    let text = if value.is_empty() {
        Span::styled(placeholder, Style::default().fg(Color::DarkGray))
    } else {
        Span::styled(value, field_style(is_focused, active_color))
    };

    let input = Paragraph::new(Line::from(text))
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(field_style(is_focused, active_color)),
        );
    frame.render_widget(input, area);
}

/// [组件] 单选选择器：`< 当前项 >  (序号/总数)`
pub fn render_selector_widget(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    options: &[&str],
    selected: Option<usize>,
    is_focused: bool,
    active_color: Color,
) {
    let style = field_style(is_focused, active_color);
    let line = match selected.and_then(|i| options.get(i).map(|name| (i, name))) {
        Some((i, name)) => Line::from(vec![
            Span::styled(format!("< {} >", name), style),
            Span::styled(
                format!("  ({}/{})", i + 1, options.len()),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        None => Line::from(Span::styled("< ? >", style)),
    };

    let selector = Paragraph::new(line).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(style),
    );
    frame.render_widget(selector, area);
}

/// [组件] 按钮，禁用时显示为灰色
pub fn render_button_widget(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    is_focused: bool,
    is_enabled: bool,
) {
    let style = if !is_enabled {
        Style::default().fg(Color::DarkGray)
    } else if is_focused {
        Style::default()
            .fg(Color::White)
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    };

    let button = Paragraph::new(format!("[ {} ]", label.to_uppercase()))
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(style));
    frame.render_widget(button, area);
}
