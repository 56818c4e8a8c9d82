//! 键盘事件映射 (Input -> Action)
//!
//! 将按键事件转换为 Action

use std::io;

use crossterm::event::KeyCode;

use super::actions::Action;
use super::state::{App, Focus};

/// 根据当前焦点和按键获取对应的 Action
///
/// 表单无效时提交按钮处于禁用状态，Enter 不产生任何 Action。
pub fn get_action(focus: Focus, can_submit: bool, key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::Esc => return Some(Action::Quit),
        KeyCode::Tab | KeyCode::Down => return Some(Action::FocusNext),
        KeyCode::BackTab | KeyCode::Up => return Some(Action::FocusPrev),
        KeyCode::Enter => return can_submit.then_some(Action::Submit),
        _ => {}
    }

    match focus {
        Focus::Category => match key {
            KeyCode::Left | KeyCode::Char('h') => Some(Action::PrevCategory),
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Char(' ') => {
                Some(Action::NextCategory)
            }
            _ => None,
        },
        Focus::Name | Focus::Calories => match key {
            KeyCode::Backspace => Some(Action::DeleteChar),
            KeyCode::Char(c) => Some(Action::Input(c)),
            _ => None,
        },
        Focus::Submit => None,
    }
}

/// 处理按键事件
pub fn handle_key_event(app: &mut App, key: KeyCode) -> io::Result<bool> {
    if let Some(action) = get_action(app.focus, app.form.is_valid(), key) {
        Ok(app.dispatch(action))
    } else {
        Ok(false)
    }
}
