//! 业务逻辑处理 (Update/Dispatch)
//!
//! 包含核心的 dispatch 逻辑，把 Action 转化为表单事件

use super::actions::Action;
use super::state::App;
use crate::form::SubmitEvent;
use crate::models::FieldId;

impl App {
    /// 核心逻辑分发，返回 true 表示退出
    pub fn dispatch(&mut self, action: Action) -> bool {
        match action {
            Action::Quit => return true,
            Action::FocusNext => self.focus = self.focus.next(),
            Action::FocusPrev => self.focus = self.focus.prev(),

            Action::PrevCategory => self.cycle_category(-1),
            Action::NextCategory => self.cycle_category(1),

            Action::Input(c) => self.edit_focused(|buffer| buffer.push(c)),
            Action::DeleteChar => self.edit_focused(|buffer| {
                buffer.pop();
            }),

            Action::Submit => self.submit(),
        }
        false
    }

    // ============ 分类选择 ============

    /// 在分类列表中循环移动，并作为一次 category 字段变更提交给表单
    pub fn cycle_category(&mut self, step: isize) {
        let categories = self.form.categories();
        if categories.is_empty() {
            return;
        }

        let len = categories.len() as isize;
        let next = match self.selected_category_index() {
            Some(current) => (current as isize + step).rem_euclid(len) as usize,
            None => 0,
        };
        let raw = categories[next].id.to_string();
        self.form.handle_change(FieldId::Category, &raw);
    }

    // ============ 文本输入 ============

    /// 修改焦点字段的输入缓冲，并把完整缓冲作为原始值提交给表单
    fn edit_focused(&mut self, edit: impl FnOnce(&mut String)) {
        let Some(field) = self.focus.field() else {
            return;
        };
        let Some(buffer) = self.input_buffer_mut(field) else {
            return;
        };

        edit(buffer);
        let raw = buffer.clone();
        self.form.handle_change(field, &raw);
    }

    // ============ 提交 ============

    pub fn submit(&mut self) {
        let mut event = SubmitEvent::new();
        if !self.form.handle_submit(&mut event) {
            self.message = Some("Enter an activity name and calories above 0".to_string());
            return;
        }

        self.drain_commands();

        if self.form.resets_after_submit() {
            self.name_input.clear();
            self.calories_input.clear();
        }
        if let Some(saved) = self.store.activities().last() {
            self.message = Some(format!(
                "Saved \"{}\" ({} logged)",
                saved.name,
                self.store.len()
            ));
        }
    }

    /// 把表单发出的命令交给状态容器处理
    pub fn drain_commands(&mut self) {
        while let Ok(command) = self.commands.try_recv() {
            self.store.reduce(command);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::models::{Activity, Category};
    use crate::ui::state::Focus;

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.dispatch(Action::Input(c));
        }
    }

    #[test]
    fn test_cycle_category_wraps() {
        let mut app = App::new(&AppConfig::default());
        app.dispatch(Action::NextCategory);
        assert_eq!(app.form.activity().category, 2);
        app.dispatch(Action::NextCategory);
        assert_eq!(app.form.activity().category, 1);
        app.dispatch(Action::PrevCategory);
        assert_eq!(app.form.activity().category, 2);
    }

    #[test]
    fn test_input_goes_to_focused_field() {
        let mut app = App::new(&AppConfig::default());

        // 分类选择器不接受文本
        app.dispatch(Action::Input('x'));
        assert_eq!(app.form.activity(), &Activity::default());

        app.dispatch(Action::FocusNext);
        type_text(&mut app, "Salad");
        app.dispatch(Action::DeleteChar);
        assert_eq!(app.name_input, "Sala");
        assert_eq!(app.form.activity().name, "Sala");

        app.dispatch(Action::FocusNext);
        type_text(&mut app, "25x");
        assert!(app.form.activity().calories.is_nan());
        app.dispatch(Action::DeleteChar);
        assert_eq!(app.form.activity().calories, 25.0);
        assert!(app.form.is_valid());
    }

    #[test]
    fn test_submit_resets_inputs() {
        let mut app = App::new(&AppConfig::default());
        app.focus = Focus::Name;
        type_text(&mut app, "Bicycle");
        app.focus = Focus::Calories;
        type_text(&mut app, "500");

        app.dispatch(Action::Submit);
        assert_eq!(app.store.len(), 1);
        assert!(app.name_input.is_empty());
        assert!(app.calories_input.is_empty());
        assert_eq!(app.form.activity(), &Activity::default());
        assert_eq!(app.message.as_deref(), Some("Saved \"Bicycle\" (1 logged)"));
    }

    #[test]
    fn test_submit_keeps_inputs_when_reset_disabled() {
        let config = AppConfig {
            categories: vec![Category::new(1, "Food")],
            reset_after_submit: false,
        };
        let mut app = App::new(&config);
        app.focus = Focus::Name;
        type_text(&mut app, "Toast");
        app.focus = Focus::Calories;
        type_text(&mut app, "90");

        app.dispatch(Action::Submit);
        app.dispatch(Action::Submit);
        assert_eq!(app.store.len(), 2);
        assert_eq!(app.name_input, "Toast");
        assert_eq!(app.form.activity().calories, 90.0);
    }

    #[test]
    fn test_invalid_submit_does_not_reach_store() {
        let mut app = App::new(&AppConfig::default());
        app.focus = Focus::Name;
        type_text(&mut app, "   ");
        app.focus = Focus::Calories;
        type_text(&mut app, "100");

        app.dispatch(Action::Submit);
        assert!(app.store.is_empty());
        assert!(app.message.is_some());
    }
}
